//! Zip archive of downloaded images.
//!
//! Images are fetched one after another. An image that cannot be downloaded
//! is recorded as an [`ImageWarning`] and skipped; the archive is still
//! built from the others.

use std::io::{Cursor, Seek, Write};

use reqwest::Client;
use serde::Serialize;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::{Result, SiftError};
use crate::fetch::fetch_bytes;

/// Extension given to every entry, whatever the image format really is.
pub const ARCHIVE_ENTRY_EXTENSION: &str = "jpg";

/// A single image that could not be added to the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageWarning {
    /// 1-based position of the image in the input list.
    pub index: usize,
    pub url: String,
    pub reason: String,
}

impl std::fmt::Display for ImageWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error downloading image {}: {}", self.url, self.reason)
    }
}

/// Outcome of building an image archive.
#[derive(Debug, Clone)]
pub struct ArchiveReport {
    /// The finished zip file.
    pub bytes: Vec<u8>,
    /// Entry names in the order they were written.
    pub entries: Vec<String>,
    pub warnings: Vec<ImageWarning>,
}

/// Entry name for the image at 1-based position `index`.
pub fn archive_entry_name(index: usize) -> String {
    format!("image_{}.{}", index, ARCHIVE_ENTRY_EXTENSION)
}

/// Downloads every URL and packs the bodies into a deflated zip.
///
/// Entries are named after their position in `urls`, so a failed download
/// leaves a gap in the numbering rather than shifting later entries.
///
/// # Errors
///
/// Only zip writer failures are errors. Download failures end up in
/// [`ArchiveReport::warnings`].
pub async fn export_images(client: &Client, urls: &[String]) -> Result<ArchiveReport> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for (idx, url) in urls.iter().enumerate() {
        let index = idx + 1;
        match fetch_bytes(client, url).await {
            Ok(data) => {
                let name = archive_entry_name(index);
                append_entry(&mut zip, &name, &data, options)?;
                tracing::debug!(%url, entry = %name, bytes = data.len(), "archived image");
                entries.push(name);
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "skipping image");
                warnings.push(ImageWarning { index, url: url.clone(), reason: err.to_string() });
            }
        }
    }

    let bytes = zip.finish()?.into_inner();

    Ok(ArchiveReport { bytes, entries, warnings })
}

fn append_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>, name: &str, data: &[u8], options: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(name, options)?;
    zip.write_all(data).map_err(|e| SiftError::ArchiveError(format!("{}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchConfig, build_client};
    use std::io::Read;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn read_entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut data = Vec::new();
                file.read_to_end(&mut data).unwrap();
                (file.name().to_string(), data)
            })
            .collect()
    }

    async fn image_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/a.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PNGDATA".to_vec()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/b.gif"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"GIFDATA".to_vec()))
            .mount(&server)
            .await;
        server
    }

    /// Cursor that refuses to grow past `cap` bytes.
    struct CappedWriter {
        inner: Cursor<Vec<u8>>,
        cap: u64,
    }

    impl Write for CappedWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.inner.position() + buf.len() as u64 > self.cap {
                return Err(std::io::Error::other("disk full"));
            }
            self.inner.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.inner.flush()
        }
    }

    impl Seek for CappedWriter {
        fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
            self.inner.seek(pos)
        }
    }

    #[test]
    fn test_entry_write_failure_is_archive_error() {
        let mut zip = ZipWriter::new(CappedWriter { inner: Cursor::new(Vec::new()), cap: 48 });
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

        let err = append_entry(&mut zip, "image_1.jpg", &[7u8; 1024], options).unwrap_err();
        assert!(matches!(err, SiftError::ArchiveError(_)), "got {:?}", err);
    }

    #[test]
    fn test_entry_names() {
        assert_eq!(archive_entry_name(1), "image_1.jpg");
        assert_eq!(archive_entry_name(12), "image_12.jpg");
    }

    #[tokio::test]
    async fn test_all_images_archived_in_order() {
        let server = image_server().await;
        let client = build_client(&FetchConfig::default()).unwrap();
        let urls = vec![format!("{}/a.png", server.uri()), format!("{}/b.gif", server.uri())];

        let report = export_images(&client, &urls).await.unwrap();

        assert!(report.warnings.is_empty());
        assert_eq!(report.entries, vec!["image_1.jpg", "image_2.jpg"]);
        assert_eq!(
            read_entries(&report.bytes),
            vec![
                ("image_1.jpg".to_string(), b"PNGDATA".to_vec()),
                ("image_2.jpg".to_string(), b"GIFDATA".to_vec()),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_image_is_reported_and_skipped() {
        let server = image_server().await;
        let client = build_client(&FetchConfig { timeout: 5, ..Default::default() }).unwrap();
        let urls = vec![format!("{}/a.png", server.uri()), "http://127.0.0.1:1/gone.png".to_string()];

        let report = export_images(&client, &urls).await.unwrap();

        assert_eq!(report.entries, vec!["image_1.jpg"]);
        assert_eq!(read_entries(&report.bytes).len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].index, 2);
        assert_eq!(report.warnings[0].url, "http://127.0.0.1:1/gone.png");
        assert!(report.warnings[0].to_string().starts_with("Error downloading image"));
    }

    #[tokio::test]
    async fn test_failure_keeps_numbering_of_later_images() {
        let server = image_server().await;
        let client = build_client(&FetchConfig::default()).unwrap();
        let urls = vec![
            format!("{}/missing.png", server.uri()),
            format!("{}/b.gif", server.uri()),
        ];

        let report = export_images(&client, &urls).await.unwrap();

        assert_eq!(report.entries, vec!["image_2.jpg"]);
        assert_eq!(report.warnings[0].index, 1);
        assert!(report.warnings[0].reason.contains("404"));
    }

    #[tokio::test]
    async fn test_no_urls_gives_empty_archive() {
        let client = build_client(&FetchConfig::default()).unwrap();
        let report = export_images(&client, &[]).await.unwrap();

        assert!(report.entries.is_empty());
        assert!(read_entries(&report.bytes).is_empty());
    }
}
