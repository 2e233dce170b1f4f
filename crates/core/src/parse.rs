//! HTML parsing and element selection.
//!
//! This module provides the [`Document`] and [`Element`] types, thin
//! wrappers over `scraper` that the extractor queries with CSS selectors.
//! Malformed markup is tolerated exactly as far as `scraper`'s html5ever
//! parser tolerates it.
//!
//! # Example
//!
//! ```rust
//! use pagesift_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Example</title></head>
//!         <body><h1>  Hello </h1></body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.title(), Some("Example".to_string()));
//! assert_eq!(doc.select("h1").unwrap()[0].trimmed_text(), "Hello");
//! ```

use scraper::{Html, Selector};

use crate::{Result, SiftError};

/// A parsed HTML page.
///
/// Produced once per fetch and dropped when the scrape that created it
/// finishes.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing itself never fails; the `Result` keeps the signature in line
    /// with the rest of the pipeline.
    pub fn parse(html: &str) -> Result<Self> {
        Ok(Self { html: Html::parse_document(html) })
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagesift_core::parse::Document;
    ///
    /// let doc = Document::parse(r#"<a href="/a">A</a><a>no href</a>"#).unwrap();
    /// assert_eq!(doc.select("a[href]").unwrap().len(), 1);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the trimmed text of the `<title>` element.
    ///
    /// Returns `None` if there is no title or it is blank.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty())
    }
}

/// A single element of a [`Document`].
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Text content with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    /// Gets the value of an attribute, or `None` if it is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Lowercase tag name (e.g. "h1", "a").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| SiftError::HtmlParseError(format!("Invalid selector: {}", e)))
}
