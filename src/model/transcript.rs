//! Meeting transcript records.

use serde::{Deserialize, Serialize};

/// One speaker-attributed message in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    /// Speaker name captured from the speaker line.
    pub speaker: String,

    /// Verbatim timestamp string (`M:SS` or `H:MM:SS`), possibly empty.
    pub time: String,

    /// Message body: one or more lines joined by newlines, non-empty.
    pub text: String,
}

/// Derived statistics over a transcript. Computed at finalization, never
/// independently mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSummary {
    /// Number of emitted messages.
    pub total_messages: usize,

    /// Number of distinct participants.
    pub participants_count: usize,

    /// Participant names, lexicographically sorted.
    pub participants: Vec<String>,

    /// Duration copied verbatim from the transcript header.
    pub duration: String,
}

/// A parsed meeting transcript.
///
/// Header fields are captured verbatim from the document's first paragraphs;
/// messages keep paragraph order, not speaker order; `participants` is a
/// lexicographically sorted list of distinct speaker names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptDocument {
    /// Meeting title.
    pub title: String,

    /// Verbatim date string; not parsed to a calendar type.
    pub date: String,

    /// Verbatim duration string (e.g. "55min 28sec").
    pub duration: String,

    /// Who started the transcription, verbatim.
    pub started_by: String,

    /// Distinct speaker names, sorted ascending.
    pub participants: Vec<String>,

    /// Messages in paragraph order.
    pub messages: Vec<TranscriptMessage>,

    /// Derived summary block.
    pub summary: TranscriptSummary,
}

impl TranscriptDocument {
    /// Render the transcript as readable text: a header block followed by
    /// one `**speaker** [time]:` section per message.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("# {}", self.title));
        lines.push(format!("Date: {}", self.date));
        lines.push(format!("Duration: {}", self.duration));
        lines.push(format!("Participants: {}", self.participants.join(", ")));
        lines.push(self.started_by.clone());
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());

        for msg in &self.messages {
            lines.push(format!("**{}** [{}]:", msg.speaker, msg.time));
            lines.push(msg.text.clone());
            lines.push(String::new());
        }

        lines.join("\n")
    }
}
