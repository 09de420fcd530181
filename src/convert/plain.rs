//! Plain-text adapter with legacy codepage fallback.

use std::fs;
use std::path::Path;

use encoding_rs::{WINDOWS_1251, WINDOWS_1252};
use log::debug;

use crate::convert::{DocumentAdapter, DocumentFormat};
use crate::error::Result;

/// Reads txt/rtf/xml files, falling back from UTF-8 through the Cyrillic
/// and Western legacy codepages the documents actually arrive in.
pub struct PlainTextAdapter;

impl PlainTextAdapter {
    /// Create the adapter.
    pub fn new() -> Self {
        Self
    }

    fn decode(bytes: &[u8]) -> String {
        if let Ok(text) = std::str::from_utf8(bytes) {
            return text.to_string();
        }
        for encoding in [WINDOWS_1251, WINDOWS_1252] {
            let (text, _, had_errors) = encoding.decode(bytes);
            if !had_errors {
                debug!("decoded with {}", encoding.name());
                return text.into_owned();
            }
        }
        String::from_utf8_lossy(bytes).into_owned()
    }
}

impl Default for PlainTextAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAdapter for PlainTextAdapter {
    fn name(&self) -> &str {
        "plain-text"
    }

    fn formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Txt, DocumentFormat::Rtf, DocumentFormat::Xml]
    }

    fn extract_text(&self, path: &Path) -> Result<Option<String>> {
        let bytes = fs::read(path)?;
        let text = Self::decode(&bytes);
        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Здравей, свят").unwrap();
        let adapter = PlainTextAdapter::new();
        let text = adapter.extract_text(file.path()).unwrap().unwrap();
        assert_eq!(text, "Здравей, свят");
    }

    #[test]
    fn test_falls_back_to_cp1251() {
        // "Превод" in windows-1251.
        let bytes: &[u8] = &[0xCF, 0xF0, 0xE5, 0xE2, 0xEE, 0xE4];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        let adapter = PlainTextAdapter::new();
        let text = adapter.extract_text(file.path()).unwrap().unwrap();
        assert_eq!(text, "Превод");
    }

    #[test]
    fn test_empty_file_is_no_text() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let adapter = PlainTextAdapter::new();
        assert!(adapter.extract_text(file.path()).unwrap().is_none());
    }
}
