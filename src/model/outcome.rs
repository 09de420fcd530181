//! Extraction result records.

use serde::{Deserialize, Serialize};

use crate::model::TranscriptDocument;

/// Requested extraction mode for a PDF document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Text only; falls back to images when the text is unusable.
    #[default]
    Text,
    /// Page images only.
    Images,
    /// Text and page images.
    Both,
}

impl ExtractionMode {
    /// Stable lowercase tag, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Text => "text",
            ExtractionMode::Images => "images",
            ExtractionMode::Both => "both",
        }
    }
}

impl std::fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-page text extraction diagnostics. Produced by the page text
/// collaborator, consumed by the quality gates and the fallback engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTextResult {
    /// 1-based page number.
    pub page_number: u32,

    /// Raw extracted text length, before cleanup.
    pub raw_length: usize,

    /// Text length after cleanup.
    pub clean_length: usize,

    /// Valid-character ratio of the cleaned text, 0.0..=1.0.
    pub valid_ratio: f64,

    /// Cleaned page text.
    pub text: String,
}

/// Final per-page entry in an [`ExtractionOutcome`]: text-bearing,
/// image-bearing, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// 1-based page number, unique within the outcome.
    pub page_number: u32,

    /// Total pages in the source document.
    pub total_pages: u32,

    /// Whether usable text was kept for this page.
    pub has_text: bool,

    /// Cleaned page text, when text was kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Length of the kept text, 0 when absent.
    pub text_length: usize,

    /// Valid-character ratio of the page text.
    pub valid_text_ratio: f64,

    /// Path of the rendered page image, when one was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    /// How this page's content was produced.
    pub extraction_method: String,
}

impl PageRecord {
    /// Build a text-bearing record from per-page diagnostics.
    pub fn from_text(info: &PageTextResult, total_pages: u32) -> Self {
        Self {
            page_number: info.page_number,
            total_pages,
            has_text: true,
            text: Some(info.text.clone()),
            text_length: info.clean_length,
            valid_text_ratio: info.valid_ratio,
            image_path: None,
            extraction_method: "Direct PDF Extraction".to_string(),
        }
    }

    /// Build an image-only record.
    pub fn from_image(page_number: u32, total_pages: u32, image_path: String) -> Self {
        Self {
            page_number,
            total_pages,
            has_text: false,
            text: None,
            text_length: 0,
            valid_text_ratio: 0.0,
            image_path: Some(image_path),
            extraction_method: "Image Conversion".to_string(),
        }
    }
}

/// Aggregate result of processing one PDF document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// Source file path or name.
    pub source_file: String,

    /// Total pages in the document.
    pub total_pages: u32,

    /// Mode the extraction ran under.
    pub mode: ExtractionMode,

    /// RFC 3339 timestamp of the run.
    pub timestamp: String,

    /// Per-page entries, ordered by page number, page numbers unique.
    pub pages: Vec<PageRecord>,

    /// Whole-document text when it passed the usability gates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,

    /// Length of `full_text`, 0 when absent.
    pub full_text_length: usize,

    /// Path the full text was written to, when persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_file: Option<String>,

    /// Directory page images were written to, when generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_dir: Option<String>,

    /// False when the document failed as a whole or partially.
    pub success: bool,

    /// Human-readable failure description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionOutcome {
    /// Create an empty successful outcome shell.
    pub fn new(source_file: impl Into<String>, total_pages: u32, mode: ExtractionMode) -> Self {
        Self {
            source_file: source_file.into(),
            total_pages,
            mode,
            timestamp: chrono::Local::now().to_rfc3339(),
            pages: Vec::new(),
            full_text: None,
            full_text_length: 0,
            text_file: None,
            images_dir: None,
            success: true,
            error: None,
        }
    }

    /// Create a document-level failure outcome.
    pub fn failure(
        source_file: impl Into<String>,
        mode: ExtractionMode,
        error: impl Into<String>,
    ) -> Self {
        let mut outcome = Self::new(source_file, 0, mode);
        outcome.success = false;
        outcome.error = Some(error.into());
        outcome
    }

    /// Attach an image path to the entry for `page_number`, creating an
    /// image-only record when no text entry exists. Keeps page numbers
    /// unique: text and image for the same page merge into one entry.
    pub fn attach_image(&mut self, page_number: u32, image_path: String) {
        if let Some(existing) = self.pages.iter_mut().find(|p| p.page_number == page_number) {
            existing.image_path = Some(image_path);
        } else {
            self.pages
                .push(PageRecord::from_image(page_number, self.total_pages, image_path));
        }
    }

    /// Sort page entries ascending by page number.
    pub fn sort_pages(&mut self) {
        self.pages.sort_by_key(|p| p.page_number);
    }

    /// Number of pages with a generated image.
    pub fn image_count(&self) -> usize {
        self.pages.iter().filter(|p| p.image_path.is_some()).count()
    }
}

/// Aggregate result of processing one office document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Source file name.
    pub source_file: String,

    /// Format tag (lowercase extension, e.g. "docx").
    pub format: String,

    /// Source file size in kilobytes.
    pub file_size_kb: f64,

    /// RFC 3339 timestamp of the run.
    pub timestamp: String,

    /// Extracted text body (transcript rendering for transcripts).
    pub extracted_text: String,

    /// Whether the document was classified as a meeting transcript.
    pub is_transcript: bool,

    /// Parsed transcript, present iff `is_transcript`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<TranscriptDocument>,
}
