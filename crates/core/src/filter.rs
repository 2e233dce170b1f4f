//! Keyword filtering over extracted text.
//!
//! Matching is a case-insensitive substring test. An empty keyword does not
//! match everything; it means the filter step does not run at all, which is
//! why [`KeywordFilter::new`] returns an `Option`.

use serde::Serialize;

use crate::{ExtractionResult, Link};

/// Case-insensitive substring matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    keyword: String,
    needle: String,
}

impl KeywordFilter {
    /// Creates a filter, or `None` when `keyword` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagesift_core::KeywordFilter;
    ///
    /// assert!(KeywordFilter::new("").is_none());
    /// let filter = KeywordFilter::new("HELL").unwrap();
    /// assert!(filter.matches("Hello"));
    /// ```
    pub fn new(keyword: &str) -> Option<Self> {
        if keyword.is_empty() {
            None
        } else {
            Some(Self { keyword: keyword.to_string(), needle: keyword.to_lowercase() })
        }
    }

    /// The keyword as given.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }

    /// Retained strings, order preserved.
    pub fn filter_strings(&self, items: &[String]) -> Vec<String> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }

    /// Retained links. Only the visible text is matched, never the URL.
    pub fn filter_links(&self, links: &[Link]) -> Vec<Link> {
        links.iter().filter(|link| self.matches(&link.text)).cloned().collect()
    }
}

/// Keyword matches per textual category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredResults {
    pub keyword: String,
    pub headings: Vec<String>,
    pub paragraphs: Vec<String>,
    pub links: Vec<Link>,
}

/// One non-empty section of [`FilteredResults`].
#[derive(Debug, Clone, Copy)]
pub enum FilteredSection<'a> {
    Headings(&'a [String]),
    Paragraphs(&'a [String]),
    Links(&'a [Link]),
}

impl FilteredSection<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            FilteredSection::Headings(_) => "Headings",
            FilteredSection::Paragraphs(_) => "Paragraphs",
            FilteredSection::Links(_) => "Links",
        }
    }
}

impl FilteredResults {
    /// True when nothing matched in any category.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.paragraphs.is_empty() && self.links.is_empty()
    }

    /// Sections with at least one match, in headings, paragraphs, links order.
    pub fn sections(&self) -> Vec<FilteredSection<'_>> {
        let mut sections = Vec::new();
        if !self.headings.is_empty() {
            sections.push(FilteredSection::Headings(&self.headings));
        }
        if !self.paragraphs.is_empty() {
            sections.push(FilteredSection::Paragraphs(&self.paragraphs));
        }
        if !self.links.is_empty() {
            sections.push(FilteredSection::Links(&self.links));
        }
        sections
    }
}

/// Applies a filter to the headings, paragraphs and links of a result.
///
/// Images are never filtered.
pub fn filter_results(result: &ExtractionResult, filter: &KeywordFilter) -> FilteredResults {
    FilteredResults {
        keyword: filter.keyword().to_string(),
        headings: filter.filter_strings(&result.headings),
        paragraphs: filter.filter_strings(&result.paragraphs),
        links: filter.filter_links(&result.links),
    }
}
