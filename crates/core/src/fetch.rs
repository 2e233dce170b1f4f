//! Page and image fetching over HTTP.
//!
//! Every function here issues at most one request and never retries.
//! URL validation happens up front in [`validate_url`], so an unusable URL
//! never reaches the network.

use std::sync::LazyLock;
use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::{Document, Result, SiftError};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; pagesift/0.1)".to_string() }
    }
}

/// How far into the body a `<meta>` charset declaration is looked for.
const META_SNIFF_LIMIT: usize = 1024;

static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#).unwrap()
});

/// Checks that a string is an absolute URL with both a scheme and a host.
///
/// The host must come from an authority component (`scheme://host`);
/// inputs like `http:example.com` are rejected even though a WHATWG parser
/// would invent a host for them.
///
/// # Errors
///
/// Returns [`SiftError::InvalidUrl`] when the string does not parse or is
/// missing either component.
///
/// # Example
///
/// ```rust
/// use pagesift_core::validate_url;
///
/// assert!(validate_url("https://example.com/page").is_ok());
/// assert!(validate_url("example.com").is_err());
/// assert!(validate_url("mailto:someone@example.com").is_err());
/// assert!(validate_url("http:example.com").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<Url> {
    let trimmed = url.trim();
    let parsed = Url::parse(trimmed).map_err(|e| SiftError::InvalidUrl(format!("{}: {}", url, e)))?;

    if parsed.scheme().is_empty() {
        return Err(SiftError::InvalidUrl(format!("{} has no scheme", url)));
    }

    match trimmed.split_once(':') {
        Some((_, rest)) if rest.starts_with("//") => {}
        _ => return Err(SiftError::InvalidUrl(format!("{} has no host", url))),
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(SiftError::InvalidUrl(format!("{} has no host", url))),
    }
}

/// Builds the HTTP client shared by page and image fetches.
pub fn build_client(config: &FetchConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(SiftError::HttpError)
}

/// Fetches HTML content from a URL.
///
/// Performs a single GET request. Only `200 OK` yields a body; any other
/// status becomes [`SiftError::HttpStatus`].
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = validate_url(url)?;
    let client = build_client(config)?;

    fetch_page(&client, parsed_url, config.timeout).await
}

/// Fetches a page and parses it into a [`Document`].
pub async fn fetch_document(url: &str, config: &FetchConfig) -> Result<Document> {
    let html = fetch_url(url, config).await?;
    Document::parse(&html)
}

pub(crate) async fn fetch_page(client: &Client, url: Url, timeout: u64) -> Result<String> {
    tracing::debug!(%url, "fetching page");

    let response = client
        .get(url)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| transport_error(e, timeout))?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::debug!(status = status.as_u16(), "page fetch rejected");
        return Err(SiftError::HttpStatus { status: status.as_u16() });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await.map_err(|e| transport_error(e, timeout))?;
    tracing::debug!(bytes = body.len(), "page fetched");

    Ok(decode_html(&body, content_type.as_deref()))
}

/// Decodes an HTML body to text.
///
/// The charset comes from the `Content-Type` header, then from a `<meta>`
/// declaration near the top of the document, then defaults to UTF-8. A
/// byte order mark overrides all of them.
pub fn decode_html(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(header_charset)
        .or_else(|| meta_charset(body))
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = used.name(), "page contained undecodable bytes");
    }

    text.into_owned()
}

fn header_charset(content_type: &str) -> Option<&'static Encoding> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .and_then(|(_, value)| Encoding::for_label(value.trim().trim_matches('"').as_bytes()))
}

fn meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SNIFF_LIMIT)];
    let label = META_CHARSET_RE.captures(head)?.get(1)?;
    Encoding::for_label(label.as_bytes())
}

/// Fetches the raw body of a URL, typically an image.
///
/// Any non-success status is reported as [`SiftError::HttpStatus`].
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SiftError::HttpStatus { status: status.as_u16() });
    }

    Ok(response.bytes().await?.to_vec())
}

fn transport_error(err: reqwest::Error, timeout: u64) -> SiftError {
    if err.is_timeout() { SiftError::Timeout { timeout } } else { SiftError::HttpError(err) }
}
