//! Transcript parsing.

use std::collections::BTreeSet;

use regex::Regex;

use crate::model::{Paragraph, TranscriptDocument, TranscriptMessage, TranscriptSummary};
use crate::transcript::SPEAKER_LINE_PATTERN;

/// Per-paragraph scan state.
enum LineState {
    /// Looking for the speaker line; non-matching lines are noise.
    SeekingSpeaker,
    /// Speaker found; non-blank lines are message body.
    CollectingText,
}

/// Parses a classified transcript into a structured record.
///
/// Never errors: malformed paragraphs contribute nothing, short documents
/// leave the corresponding header fields empty.
pub struct TranscriptParser {
    speaker_line: Regex,
}

impl TranscriptParser {
    /// Create a parser, compiling the speaker-line pattern once.
    pub fn new() -> Self {
        Self {
            speaker_line: Regex::new(SPEAKER_LINE_PATTERN).unwrap(),
        }
    }

    /// Parse a paragraph sequence into a transcript record.
    ///
    /// Header fields come from paragraph positions 0..4 (title, date,
    /// duration, started_by), best-effort. Every later paragraph is scanned
    /// by a two-state machine in a single forward pass: the first line
    /// matching the speaker pattern starts a message, subsequent non-blank
    /// lines become its body. A speaker with no body still counts as a
    /// participant but yields no message.
    pub fn parse(&self, paragraphs: &[Paragraph]) -> TranscriptDocument {
        let header = |i: usize| {
            paragraphs
                .get(i)
                .map(|p| p.text.trim().to_string())
                .unwrap_or_default()
        };
        let title = header(0);
        let date = header(1);
        let duration = header(2);
        let started_by = header(3);

        let mut participants: BTreeSet<String> = BTreeSet::new();
        let mut messages = Vec::new();

        for p in paragraphs.iter().skip(4) {
            if let Some((speaker, time, text_lines)) = self.scan_paragraph(&p.text) {
                if text_lines.is_empty() {
                    // Administrative line ("transcription stopped" and the
                    // like): the speaker counts, the paragraph does not.
                    participants.insert(speaker);
                } else {
                    participants.insert(speaker.clone());
                    messages.push(TranscriptMessage {
                        speaker,
                        time,
                        text: text_lines.join("\n"),
                    });
                }
            }
        }

        let participants: Vec<String> = participants.into_iter().collect();
        let summary = TranscriptSummary {
            total_messages: messages.len(),
            participants_count: participants.len(),
            participants: participants.clone(),
            duration: duration.clone(),
        };

        TranscriptDocument {
            title,
            date,
            duration,
            started_by,
            participants,
            messages,
            summary,
        }
    }

    /// Single forward pass over a paragraph's lines. Returns the captured
    /// speaker, timestamp, and body lines, or `None` when no speaker line
    /// was found anywhere in the paragraph.
    fn scan_paragraph(&self, raw_text: &str) -> Option<(String, String, Vec<String>)> {
        let mut state = LineState::SeekingSpeaker;
        let mut speaker = String::new();
        let mut time = String::new();
        let mut text_lines = Vec::new();

        for line in raw_text.split('\n') {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match state {
                LineState::SeekingSpeaker => {
                    if let Some(caps) = self.speaker_line.captures(trimmed) {
                        speaker = caps[1].trim().to_string();
                        time = caps[2].trim().to_string();
                        state = LineState::CollectingText;
                    }
                    // Non-matching lines before the speaker are noise.
                }
                LineState::CollectingText => {
                    text_lines.push(trimmed.to_string());
                }
            }
        }

        match state {
            LineState::SeekingSpeaker => None,
            LineState::CollectingText => Some((speaker, time, text_lines)),
        }
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(texts: &[&str]) -> Vec<Paragraph> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Paragraph::new(i, *t))
            .collect()
    }

    #[test]
    fn test_header_extraction() {
        let parser = TranscriptParser::new();
        let doc = parser.parse(&paragraphs(&[
            "Weekly Sync-20260205_120000-Recording",
            "5 February 2026, 12:00PM",
            "55min 28sec",
            "Alice started transcription",
        ]));
        assert_eq!(doc.title, "Weekly Sync-20260205_120000-Recording");
        assert_eq!(doc.date, "5 February 2026, 12:00PM");
        assert_eq!(doc.duration, "55min 28sec");
        assert_eq!(doc.started_by, "Alice started transcription");
        assert!(doc.messages.is_empty());
    }

    #[test]
    fn test_short_document_leaves_header_empty() {
        let parser = TranscriptParser::new();
        let doc = parser.parse(&paragraphs(&["Only a title"]));
        assert_eq!(doc.title, "Only a title");
        assert_eq!(doc.date, "");
        assert_eq!(doc.duration, "");
        assert_eq!(doc.started_by, "");
    }

    #[test]
    fn test_message_extraction() {
        let parser = TranscriptParser::new();
        let doc = parser.parse(&paragraphs(&[
            "Title",
            "Date",
            "Duration",
            "Started",
            "Bob   0:45\nHello there",
        ]));
        assert_eq!(doc.messages.len(), 1);
        let msg = &doc.messages[0];
        assert_eq!(msg.speaker, "Bob");
        assert_eq!(msg.time, "0:45");
        assert_eq!(msg.text, "Hello there");
        assert_eq!(doc.participants, vec!["Bob".to_string()]);
    }

    #[test]
    fn test_multiline_body_skips_blanks() {
        let parser = TranscriptParser::new();
        let doc = parser.parse(&paragraphs(&[
            "T",
            "D",
            "Du",
            "S",
            "Alice   1:02:03\nFirst line\n\nSecond line",
        ]));
        assert_eq!(doc.messages[0].time, "1:02:03");
        assert_eq!(doc.messages[0].text, "First line\nSecond line");
    }

    #[test]
    fn test_speaker_without_body_joins_participants() {
        let parser = TranscriptParser::new();
        let doc = parser.parse(&paragraphs(&["T", "D", "Du", "S", "Carol   2:10\n"]));
        assert!(doc.messages.is_empty());
        assert_eq!(doc.participants, vec!["Carol".to_string()]);
        assert_eq!(doc.summary.total_messages, 0);
        assert_eq!(doc.summary.participants_count, 1);
    }

    #[test]
    fn test_noise_before_speaker_is_discarded() {
        let parser = TranscriptParser::new();
        let doc = parser.parse(&paragraphs(&[
            "T",
            "D",
            "Du",
            "S",
            "stray continuation\nBob   0:10\nActual body",
        ]));
        assert_eq!(doc.messages.len(), 1);
        assert_eq!(doc.messages[0].text, "Actual body");
    }

    #[test]
    fn test_paragraph_without_speaker_yields_nothing() {
        let parser = TranscriptParser::new();
        let doc = parser.parse(&paragraphs(&["T", "D", "Du", "S", "no speaker here\nat all"]));
        assert!(doc.messages.is_empty());
        assert!(doc.participants.is_empty());
    }

    #[test]
    fn test_participants_sorted_regardless_of_order() {
        let parser = TranscriptParser::new();
        let doc = parser.parse(&paragraphs(&[
            "T",
            "D",
            "Du",
            "S",
            "Zoe   0:01\nhi",
            "Anna   0:02\nhello",
            "Mia   0:03\nhey",
        ]));
        assert_eq!(
            doc.participants,
            vec!["Anna".to_string(), "Mia".to_string(), "Zoe".to_string()]
        );
        assert_eq!(doc.summary.participants, doc.participants);
        // Messages keep paragraph order, not speaker order.
        assert_eq!(doc.messages[0].speaker, "Zoe");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = TranscriptParser::new();
        let paras = paragraphs(&["T", "D", "Du", "S", "Bob   0:45\nHello", "Ana   0:50\nHi"]);
        let first = parser.parse(&paras);
        let second = parser.parse(&paras);
        assert_eq!(first, second);
    }

    #[test]
    fn test_speaker_pattern_rejects_trailing_garbage() {
        let parser = TranscriptParser::new();
        // Trailing characters after the timestamp break the anchor.
        let doc = parser.parse(&paragraphs(&["T", "D", "Du", "S", "Bob   0:45 ok\nBody"]));
        assert!(doc.messages.is_empty());
    }
}
