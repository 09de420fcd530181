//! Meeting transcript detection and parsing.
//!
//! Word-processor exports of recorded meetings carry a recognizable shape:
//! a four-paragraph header (title, date, duration, who started the
//! transcription) followed by one paragraph per utterance, each opening with
//! a speaker line of the form `Name   M:SS`. The classifier decides whether
//! a paragraph sequence is such a transcript; the parser turns it into a
//! structured [`TranscriptDocument`](crate::model::TranscriptDocument).

mod classifier;
mod parser;

pub use classifier::TranscriptClassifier;
pub use parser::TranscriptParser;

/// Speaker-line pattern: a line entirely consumed by a non-greedy name, two
/// or more spaces, and an `M:SS` or `H:MM:SS` timestamp, with optional
/// trailing spaces. Anchored at both ends; this shape is a wire contract.
pub(crate) const SPEAKER_LINE_PATTERN: &str = r"^(.+?)\s{2,}(\d+:\d{2}(?::\d{2})?)\s*$";
