//! Image URL normalization.
//!
//! Raw `src` values are turned into absolute URLs using the page's scheme
//! and host. The default [`UrlResolution::Concatenate`] glues `scheme://host`
//! directly onto the raw value, so `img/a.png` becomes
//! `https://example.comimg/a.png`. [`UrlResolution::Join`] resolves against
//! the full page URL instead.

use serde::Serialize;
use url::Url;

/// Prefix that marks a source as already absolute.
pub const ABSOLUTE_PREFIX: &str = "http";

/// How relative image sources become absolute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlResolution {
    /// `scheme://host` + raw value, with no path joining.
    #[default]
    Concatenate,
    /// Standard relative reference resolution against the page URL.
    Join,
}

/// Scheme and network location of the scraped page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrigin {
    pub scheme: String,
    /// Host, plus the port when it is not the scheme's default.
    pub host: String,
}

impl PageOrigin {
    pub fn from_url(url: &Url) -> Self {
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        Self { scheme: url.scheme().to_string(), host }
    }

    /// `scheme://host`
    pub fn base(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

/// True when `src` already carries the accepted absolute prefix.
pub fn is_absolute(src: &str) -> bool {
    src.starts_with(ABSOLUTE_PREFIX)
}

/// Normalizes one image source by concatenation.
///
/// # Example
///
/// ```rust
/// use pagesift_core::normalize::{PageOrigin, normalize_image_url};
///
/// let origin = PageOrigin { scheme: "https".into(), host: "x.com".into() };
/// assert_eq!(normalize_image_url("http://x/a.png", &origin), "http://x/a.png");
/// assert_eq!(normalize_image_url("/img/a.png", &origin), "https://x.com/img/a.png");
/// ```
pub fn normalize_image_url(src: &str, origin: &PageOrigin) -> String {
    if is_absolute(src) { src.to_string() } else { format!("{}{}", origin.base(), src) }
}

/// Resolves one image source against the page URL using `mode`.
///
/// With [`UrlResolution::Join`], a source that cannot be joined falls back
/// to concatenation.
pub fn resolve_image_url(src: &str, page: &Url, mode: UrlResolution) -> String {
    if is_absolute(src) {
        return src.to_string();
    }

    match mode {
        UrlResolution::Concatenate => normalize_image_url(src, &PageOrigin::from_url(page)),
        UrlResolution::Join => page
            .join(src)
            .map(String::from)
            .unwrap_or_else(|_| normalize_image_url(src, &PageOrigin::from_url(page))),
    }
}

/// Normalizes every image source, keeping length and order.
pub fn normalize_images(sources: &[String], page: &Url, mode: UrlResolution) -> Vec<String> {
    sources.iter().map(|src| resolve_image_url(src, page, mode)).collect()
}

/// Normalized URLs that still lack the absolute prefix.
pub fn invalid_image_urls(urls: &[String]) -> Vec<String> {
    urls.iter().filter(|url| !is_absolute(url)).cloned().collect()
}
