//! Error types for pagesift operations.
//!
//! This module defines the main error type [`SiftError`] which represents
//! every failure that halts a scrape: URL validation, HTTP fetching,
//! selector parsing and packaging.
//!
//! Failures to download a single image while building an archive are not
//! errors; they are collected as [`ImageWarning`](crate::ImageWarning)s so
//! the remaining images are still packaged.
//!
//! # Example
//!
//! ```rust
//! use pagesift_core::{SiftError, validate_url};
//!
//! match validate_url("example.com") {
//!     Err(SiftError::InvalidUrl(reason)) => println!("rejected: {}", reason),
//!     other => println!("{:?}", other),
//! }
//! ```

use thiserror::Error;

/// Main error type for scraping operations.
#[derive(Error, Debug)]
pub enum SiftError {
    /// Transport-level failures from reqwest.
    ///
    /// DNS failures, refused connections and other problems that prevent a
    /// response from arriving at all.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with something other than `200 OK`.
    #[error("Failed to fetch the URL. Status code: {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The URL is malformed or lacks a scheme or host.
    ///
    /// Always raised before any network call is made.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML querying errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The zip writer failed while assembling an image archive.
    #[error("Failed to build archive: {0}")]
    ArchiveError(String),

    /// File write errors.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),

    /// A report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    SerializeError(String),
}

impl From<zip::result::ZipError> for SiftError {
    fn from(err: zip::result::ZipError) -> Self {
        SiftError::ArchiveError(err.to_string())
    }
}

impl From<serde_json::Error> for SiftError {
    fn from(err: serde_json::Error) -> Self {
        SiftError::SerializeError(err.to_string())
    }
}

/// Result type alias for SiftError.
pub type Result<T> = std::result::Result<T, SiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiftError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_status_error_carries_code() {
        let err = SiftError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "Failed to fetch the URL. Status code: 404");
    }

    #[test]
    fn test_timeout_error() {
        let err = SiftError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: SiftError = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, SiftError::ArchiveError(_)));
    }
}
