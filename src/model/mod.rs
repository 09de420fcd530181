//! Data model for extracted document content.

mod outcome;
mod paragraph;
mod transcript;

pub use outcome::{
    ExtractedDocument, ExtractionMode, ExtractionOutcome, PageRecord, PageTextResult,
};
pub use paragraph::Paragraph;
pub use transcript::{TranscriptDocument, TranscriptMessage, TranscriptSummary};
