//! # undoc
//!
//! Structured content extraction from heterogeneous business documents.
//!
//! Raw per-format extraction is delegated to adapters; this library owns
//! the decisions that follow: whether a paragraph-structured document is a
//! meeting transcript (and parsing it into speaker-attributed messages),
//! and whether extracted PDF text is usable at all, with a fallback to
//! page-image rendering when it is not.
//!
//! ## Quick start
//!
//! ```no_run
//! use undoc::{PdfExtractOptions, PdfExtractor, PopplerPdf};
//! use std::path::Path;
//!
//! fn main() -> undoc::Result<()> {
//!     let source = PopplerPdf::open("invoice.pdf")?;
//!     let extractor = PdfExtractor::new(PdfExtractOptions::default());
//!     let outcome = extractor.extract(&source, "invoice.pdf", Path::new("./out"));
//!     println!("usable text: {}", outcome.full_text.is_some());
//!     Ok(())
//! }
//! ```
//!
//! Transcript handling works directly on paragraph sequences:
//!
//! ```
//! use undoc::{Paragraph, TranscriptClassifier, TranscriptParser};
//!
//! let paragraphs = vec![
//!     Paragraph::new(0, "Weekly Sync-20260205-Recording"),
//!     Paragraph::new(1, "5 February 2026, 12:00PM"),
//!     Paragraph::new(2, "55min 28sec"),
//!     Paragraph::new(3, "Alice started transcription"),
//!     Paragraph::new(4, "Bob   0:45\nHello there"),
//! ];
//!
//! let classifier = TranscriptClassifier::new();
//! if classifier.is_transcript(&paragraphs) {
//!     let doc = TranscriptParser::new().parse(&paragraphs);
//!     assert_eq!(doc.messages[0].speaker, "Bob");
//! }
//! ```

pub mod convert;
pub mod error;
pub mod model;
pub mod pdf;
pub mod quality;
pub mod transcript;

// Re-export commonly used types
pub use convert::{
    AdapterRegistry, DocumentAdapter, DocumentFormat, DocumentProcessor, PlainTextAdapter,
};
pub use error::{Error, Result};
pub use model::{
    ExtractedDocument, ExtractionMode, ExtractionOutcome, PageRecord, PageTextResult, Paragraph,
    TranscriptDocument, TranscriptMessage, TranscriptSummary,
};
pub use pdf::{PageSource, PdfExtractOptions, PdfExtractor, PopplerPdf};
pub use quality::{
    is_only_page_numbers, is_usable_document_text, looks_like_ocr_garbage, valid_char_ratio,
    TextCleaner,
};
pub use transcript::{TranscriptClassifier, TranscriptParser};

use std::path::Path;

/// Process one office document with the default adapters.
///
/// Returns `Ok(None)` for unknown or unregistered formats.
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<Option<ExtractedDocument>> {
    DocumentProcessor::with_defaults().process_file(path.as_ref())
}

/// Extract one PDF through the Poppler tools with the given options.
///
/// Failures are folded into the returned outcome; this never errors.
pub fn extract_pdf<P: AsRef<Path>>(
    path: P,
    output_dir: &Path,
    options: PdfExtractOptions,
) -> ExtractionOutcome {
    let path = path.as_ref();
    let source_file = path.to_string_lossy();
    match PopplerPdf::open(path) {
        Ok(source) => PdfExtractor::new(options).extract(&source, &source_file, output_dir),
        Err(e) => ExtractionOutcome::failure(source_file.into_owned(), options.mode, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_pdf_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = extract_pdf(
            "/no/such/document.pdf",
            dir.path(),
            PdfExtractOptions::default(),
        );
        assert!(!outcome.success);
        assert!(outcome.error.is_some());
    }

    #[test]
    fn test_process_file_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.bmp");
        std::fs::write(&path, b"BM").unwrap();
        assert!(process_file(&path).unwrap().is_none());
    }
}
