//! The scrape pipeline.
//!
//! One call to [`Scraper::scrape`] is one user-triggered action:
//! validate → fetch → parse → extract → normalize images → keyword filter
//! → word frequencies. Everything it builds lives in the returned
//! [`ScrapeReport`]; nothing is shared between calls.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagesift_core::{FetchConfig, ScrapeOptions, Scraper};
//!
//! # #[tokio::main]
//! # async fn main() -> pagesift_core::Result<()> {
//! let options = ScrapeOptions::builder().headings(true).keyword("rust").build();
//! let report = Scraper::new(FetchConfig::default()).scrape("https://example.com", &options).await?;
//! println!("{}", report.title_or_default());
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use url::Url;

use crate::export::{ArchiveReport, Artifact, export_images, text_artifacts};
use crate::fetch::{FetchConfig, build_client, fetch_page, validate_url};
use crate::filter::{FilteredResults, KeywordFilter, filter_results};
use crate::normalize::{UrlResolution, invalid_image_urls, normalize_images};
use crate::wordfreq::{WordCount, word_frequencies};
use crate::{Categories, Document, ExtractionResult, Result, extract};

/// Title shown when the page has none.
pub const DEFAULT_TITLE: &str = "No Title Found";

/// Per-request settings. Every category starts disabled and there is no
/// keyword.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeOptions {
    pub categories: Categories,
    /// Keyword for the filter step. `None` or an empty string skips it.
    pub keyword: Option<String>,
    pub url_resolution: UrlResolution,
    /// Maximum number of words in the frequency summary (0 = all).
    pub top_words: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { categories: Categories::none(), keyword: None, url_resolution: UrlResolution::default(), top_words: 20 }
    }
}

impl ScrapeOptions {
    /// Creates a new builder for ScrapeOptions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagesift_core::ScrapeOptions;
    ///
    /// let options = ScrapeOptions::builder().links(true).keyword("docs").build();
    /// assert!(options.categories.links);
    /// assert!(!options.categories.images);
    /// ```
    pub fn builder() -> ScrapeOptionsBuilder {
        ScrapeOptionsBuilder::new()
    }

    /// The keyword filter, if a non-empty keyword was given.
    pub fn keyword_filter(&self) -> Option<KeywordFilter> {
        self.keyword.as_deref().and_then(KeywordFilter::new)
    }
}

/// Builder for ScrapeOptions.
pub struct ScrapeOptionsBuilder {
    options: ScrapeOptions,
}

impl ScrapeOptionsBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { options: ScrapeOptions::default() }
    }

    pub fn headings(mut self, value: bool) -> Self {
        self.options.categories.headings = value;
        self
    }

    pub fn links(mut self, value: bool) -> Self {
        self.options.categories.links = value;
        self
    }

    pub fn paragraphs(mut self, value: bool) -> Self {
        self.options.categories.paragraphs = value;
        self
    }

    pub fn images(mut self, value: bool) -> Self {
        self.options.categories.images = value;
        self
    }

    /// Replaces all four category flags at once.
    pub fn categories(mut self, value: Categories) -> Self {
        self.options.categories = value;
        self
    }

    pub fn keyword(mut self, value: impl Into<String>) -> Self {
        self.options.keyword = Some(value.into());
        self
    }

    pub fn url_resolution(mut self, value: UrlResolution) -> Self {
        self.options.url_resolution = value;
        self
    }

    pub fn top_words(mut self, value: usize) -> Self {
        self.options.top_words = value;
        self
    }

    /// Builds the options.
    pub fn build(self) -> ScrapeOptions {
        self.options
    }
}

impl Default for ScrapeOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one scrape produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    pub source_url: String,
    pub title: Option<String>,
    /// Extracted categories, with images already normalized.
    pub results: ExtractionResult,
    /// Normalized image URLs that are still not absolute.
    pub invalid_images: Vec<String>,
    /// Present only when a non-empty keyword was given.
    pub keyword_matches: Option<FilteredResults>,
    /// Empty unless paragraphs were enabled and found.
    pub word_frequencies: Vec<WordCount>,
}

impl ScrapeReport {
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Text and CSV artifacts for the non-empty categories.
    pub fn artifacts(&self) -> Vec<Artifact> {
        text_artifacts(&self.results)
    }

    /// The report as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Runs scrapes with one fetch configuration.
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    fetch_config: FetchConfig,
}

impl Scraper {
    pub fn new(fetch_config: FetchConfig) -> Self {
        Self { fetch_config }
    }

    /// Fetches `url` and runs the full pipeline over it.
    ///
    /// # Errors
    ///
    /// - [`SiftError::InvalidUrl`](crate::SiftError::InvalidUrl) before any request when
    ///   the URL lacks a scheme or host
    /// - [`SiftError::HttpStatus`](crate::SiftError::HttpStatus) for any status other than 200
    /// - [`SiftError::HttpError`](crate::SiftError::HttpError) or
    ///   [`SiftError::Timeout`](crate::SiftError::Timeout) on transport failure
    pub async fn scrape(&self, url: &str, options: &ScrapeOptions) -> Result<ScrapeReport> {
        let page_url = validate_url(url)?;
        let client = build_client(&self.fetch_config)?;
        let html = fetch_page(&client, page_url.clone(), self.fetch_config.timeout).await?;

        scrape_document(&html, &page_url, options)
    }

    /// Downloads the report's images into `images.zip`.
    ///
    /// Returns `None` when the scrape found no images.
    pub async fn package_images(&self, report: &ScrapeReport) -> Result<Option<ArchiveReport>> {
        if report.results.images.is_empty() {
            return Ok(None);
        }

        let client = build_client(&self.fetch_config)?;
        export_images(&client, &report.results.images).await.map(Some)
    }
}

/// Runs the pipeline over HTML that has already been fetched from `url`.
///
/// # Example
///
/// ```rust
/// use pagesift_core::{ScrapeOptions, scrape_page};
///
/// let html = "<title>Example</title><h1>Hello</h1>";
/// let options = ScrapeOptions::builder().headings(true).keyword("hell").build();
/// let report = scrape_page(html, "https://example.com", &options).unwrap();
///
/// assert_eq!(report.results.headings, vec!["Hello"]);
/// assert_eq!(report.keyword_matches.unwrap().headings, vec!["Hello"]);
/// ```
pub fn scrape_page(html: &str, url: &str, options: &ScrapeOptions) -> Result<ScrapeReport> {
    let page_url = validate_url(url)?;
    scrape_document(html, &page_url, options)
}

fn scrape_document(html: &str, page_url: &Url, options: &ScrapeOptions) -> Result<ScrapeReport> {
    let doc = Document::parse(html)?;
    let title = doc.title();

    let mut results = extract(&doc, &options.categories)?;
    results.images = normalize_images(&results.images, page_url, options.url_resolution);

    let invalid_images = invalid_image_urls(&results.images);
    for url in &invalid_images {
        tracing::warn!(%url, "invalid image URL");
    }

    let keyword_matches = options.keyword_filter().map(|filter| filter_results(&results, &filter));

    let word_frequencies = if options.categories.paragraphs && !results.paragraphs.is_empty() {
        word_frequencies(&results.paragraphs, options.top_words)
    } else {
        Vec::new()
    };

    Ok(ScrapeReport {
        source_url: page_url.to_string(),
        title,
        results,
        invalid_images,
        keyword_matches,
        word_frequencies,
    })
}
