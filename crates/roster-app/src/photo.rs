//! Photo ingestion: remote URLs or local images embedded as data URLs.

use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::{RosterError, RosterResult};

/// Where a record's photo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    /// Stored as given.
    Url(String),
    /// Read from disk and embedded inline.
    File(PathBuf),
}

impl PhotoSource {
    /// Produce the string stored on the record.
    ///
    /// # Errors
    /// Returns [`RosterError::Io`] when the image file cannot be read.
    pub fn resolve(&self) -> RosterResult<String> {
        match self {
            Self::Url(url) => Ok(url.trim().to_owned()),
            Self::File(path) => {
                let bytes = fs::read(path).map_err(|source| RosterError::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = bytes.len(), "Embedding photo as data URL");
                Ok(data_url(mime_for(path), &bytes))
            }
        }
    }
}

/// Encode `bytes` as a `data:` URL.
#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Guess an image MIME type from the file extension.
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_pass_through_trimmed() {
        let source = PhotoSource::Url(" https://i.pravatar.cc/120?img=5 ".into());
        assert_eq!(
            source.resolve().unwrap_or_else(|err| panic!("resolve: {err}")),
            "https://i.pravatar.cc/120?img=5"
        );
    }

    #[test]
    fn files_are_embedded_as_data_urls() {
        let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let path = dir.path().join("avatar.PNG");
        fs::write(&path, b"abc").unwrap_or_else(|err| panic!("write: {err}"));
        let resolved = PhotoSource::File(path)
            .resolve()
            .unwrap_or_else(|err| panic!("resolve: {err}"));
        assert_eq!(resolved, "data:image/png;base64,YWJj");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(mime_for(Path::new("photo")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = PhotoSource::File(PathBuf::from("/definitely/not/here.png")).resolve();
        assert!(matches!(result, Err(RosterError::Io { .. })));
    }
}
