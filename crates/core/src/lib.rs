//! Fetch one web page and sift out its headings, links, paragraphs and
//! images, optionally filtered by a keyword and packaged as text, CSV or a
//! zip of images.
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod normalize;
pub mod parse;
pub mod scrape;
pub mod wordfreq;

pub use error::{Result, SiftError};
pub use export::{
    ArchiveReport, Artifact, ImageWarning, archive_entry_name, export_images, export_lines, export_links,
    text_artifacts,
};
pub use extract::{Categories, Category, ExtractionResult, Link, extract};
pub use fetch::{FetchConfig, build_client, decode_html, fetch_bytes, fetch_document, fetch_url, validate_url};
pub use filter::{FilteredResults, FilteredSection, KeywordFilter, filter_results};
pub use normalize::{PageOrigin, UrlResolution, normalize_image_url, normalize_images, resolve_image_url};
pub use parse::{Document, Element};
pub use scrape::{DEFAULT_TITLE, ScrapeOptions, ScrapeOptionsBuilder, ScrapeReport, Scraper, scrape_page};
pub use wordfreq::{WordCount, word_frequencies};
