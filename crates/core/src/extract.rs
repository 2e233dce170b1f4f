//! Category extraction.
//!
//! Pulls headings, links, paragraphs and image sources out of a
//! [`Document`]. Only enabled categories are queried; the rest stay empty.

use serde::Serialize;

use crate::{Document, Result};

/// One of the four extractable content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Headings,
    Links,
    Paragraphs,
    Images,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Headings, Category::Links, Category::Paragraphs, Category::Images];

    /// CSS selector picking this category's elements.
    pub fn selector(self) -> &'static str {
        match self {
            Category::Headings => "h1, h2, h3",
            Category::Links => "a[href]",
            Category::Paragraphs => "p",
            Category::Images => "img[src]",
        }
    }

    /// Human readable section name.
    pub fn label(self) -> &'static str {
        match self {
            Category::Headings => "Headings",
            Category::Links => "Links",
            Category::Paragraphs => "Paragraphs",
            Category::Images => "Images",
        }
    }
}

/// The set of categories a scrape should extract. Everything defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Categories {
    pub headings: bool,
    pub links: bool,
    pub paragraphs: bool,
    pub images: bool,
}

impl Categories {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self { headings: true, links: true, paragraphs: true, images: true }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Headings => self.headings,
            Category::Links => self.links,
            Category::Paragraphs => self.paragraphs,
            Category::Images => self.images,
        }
    }

    pub fn enable(&mut self, category: Category) {
        match category {
            Category::Headings => self.headings = true,
            Category::Links => self.links = true,
            Category::Paragraphs => self.paragraphs = true,
            Category::Images => self.images = true,
        }
    }

    /// True when no category is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.headings || self.links || self.paragraphs || self.images)
    }

    /// Enabled categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }
}

/// An anchor's visible text paired with its raw `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self { text: text.into(), href: href.into() }
    }
}

/// Everything extracted from one document.
///
/// All four sequences are always present; a disabled category, or one with
/// no matching elements, is an empty `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub headings: Vec<String>,
    pub links: Vec<Link>,
    pub paragraphs: Vec<String>,
    /// Image sources. Raw `src` values straight out of [`extract`]; the
    /// scrape pipeline replaces them with normalized URLs.
    pub images: Vec<String>,
}

impl ExtractionResult {
    /// True when every sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.links.is_empty() && self.paragraphs.is_empty() && self.images.is_empty()
    }

    /// Number of entries extracted for a category.
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Headings => self.headings.len(),
            Category::Links => self.links.len(),
            Category::Paragraphs => self.paragraphs.len(),
            Category::Images => self.images.len(),
        }
    }
}

/// Extracts the enabled categories from a document.
///
/// Selection rules:
/// - headings: `h1`, `h2`, `h3` in document order, text trimmed
/// - links: `a` elements with an `href`, as (trimmed text, raw href)
/// - paragraphs: `p` elements, text trimmed
/// - images: `img` elements with a `src`, raw value
///
/// # Example
///
/// ```rust
/// use pagesift_core::{Categories, Document, extract};
///
/// let doc = Document::parse("<h1> Hello </h1><p>World</p>").unwrap();
/// let categories = Categories { headings: true, ..Categories::none() };
/// let result = extract(&doc, &categories).unwrap();
///
/// assert_eq!(result.headings, vec!["Hello".to_string()]);
/// assert!(result.paragraphs.is_empty());
/// ```
pub fn extract(doc: &Document, categories: &Categories) -> Result<ExtractionResult> {
    let mut result = ExtractionResult::default();

    for category in categories.iter() {
        let elements = doc.select(category.selector())?;
        match category {
            Category::Headings => result.headings = elements.iter().map(|el| el.trimmed_text()).collect(),
            Category::Links => {
                result.links = elements
                    .iter()
                    .filter_map(|el| el.attr("href").map(|href| Link::new(el.trimmed_text(), href)))
                    .collect()
            }
            Category::Paragraphs => result.paragraphs = elements.iter().map(|el| el.trimmed_text()).collect(),
            Category::Images => {
                result.images = elements.iter().filter_map(|el| el.attr("src")).map(str::to_string).collect()
            }
        }
        tracing::debug!(category = category.label(), count = result.count(category), "extracted");
    }

    Ok(result)
}
