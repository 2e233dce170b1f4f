//! Packaging of extracted data into downloadable byte buffers.
//!
//! Each export is independent and produces an in-memory [`Artifact`]
//! carrying its fixed file name and MIME type.

pub mod archive;
pub mod csv;
pub mod text;

use std::fs;
use std::path::{Path, PathBuf};

pub use archive::{ARCHIVE_ENTRY_EXTENSION, ArchiveReport, ImageWarning, archive_entry_name, export_images};
pub use csv::export_links;
pub use text::export_lines;

use crate::{ExtractionResult, Result};

pub const HEADINGS_FILE: &str = "headings.txt";
pub const LINKS_FILE: &str = "links.csv";
pub const PARAGRAPHS_FILE: &str = "paragraphs.txt";
pub const IMAGES_FILE: &str = "images.zip";

pub const MIME_TEXT: &str = "text/plain";
pub const MIME_CSV: &str = "text/csv";
pub const MIME_ZIP: &str = "application/zip";

/// A packaged export ready to hand to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Writes the artifact into `dir` under its file name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Text and CSV artifacts for every non-empty textual category.
///
/// Order is headings, links, paragraphs.
pub fn text_artifacts(result: &ExtractionResult) -> Vec<Artifact> {
    let mut artifacts = Vec::new();

    if !result.headings.is_empty() {
        artifacts.push(Artifact { file_name: HEADINGS_FILE, mime: MIME_TEXT, bytes: export_lines(&result.headings) });
    }
    if !result.links.is_empty() {
        artifacts.push(Artifact { file_name: LINKS_FILE, mime: MIME_CSV, bytes: export_links(&result.links) });
    }
    if !result.paragraphs.is_empty() {
        artifacts.push(Artifact {
            file_name: PARAGRAPHS_FILE,
            mime: MIME_TEXT,
            bytes: export_lines(&result.paragraphs),
        });
    }

    artifacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Link;

    #[test]
    fn test_only_non_empty_categories_produce_artifacts() {
        let result = ExtractionResult {
            headings: vec!["One".into()],
            links: Vec::new(),
            paragraphs: vec!["p1".into(), "p2".into()],
            images: vec!["https://x/a.png".into()],
        };

        let artifacts = text_artifacts(&result);
        let names: Vec<_> = artifacts.iter().map(|a| a.file_name).collect();
        assert_eq!(names, vec![HEADINGS_FILE, PARAGRAPHS_FILE]);
        assert_eq!(artifacts[1].bytes, b"p1\np2");
        assert_eq!(artifacts[1].mime, MIME_TEXT);
    }

    #[test]
    fn test_links_artifact_is_csv() {
        let result = ExtractionResult { links: vec![Link::new("Home", "/home")], ..Default::default() };
        let artifacts = text_artifacts(&result);
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].file_name, LINKS_FILE);
        assert_eq!(artifacts[0].mime, MIME_CSV);
    }

    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = Artifact { file_name: HEADINGS_FILE, mime: MIME_TEXT, bytes: b"a\nb".to_vec() };

        let path = artifact.write_to(dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a\nb");
    }
}
