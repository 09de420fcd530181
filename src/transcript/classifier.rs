//! Transcript classification heuristic.

use regex::Regex;

use crate::model::Paragraph;
use crate::transcript::SPEAKER_LINE_PATTERN;

/// Keywords that mark a recording/transcription header, in the languages the
/// documents actually arrive in (English, French, Bulgarian). Matched
/// case-insensitively as substrings.
const RECORDING_KEYWORDS: &[&str] = &[
    "recording",
    "enregistrement",
    "запис",
    "transcription",
    "транскрипция",
    "commencé la transcription",
    "started transcription",
];

/// Minimum paragraph count for a document to be considered at all.
const MIN_PARAGRAPHS: usize = 5;

/// Header window inspected for recording indicators.
const HEADER_WINDOW: usize = 5;

/// End of the window (by array position) scanned for speaker lines.
const SPEAKER_SCAN_END: usize = 15;

/// Indicator count at which the header alone decides.
const INDICATOR_THRESHOLD: usize = 2;

/// Distinct speaker-bearing paragraphs at which the body alone decides.
const SPEAKER_THRESHOLD: usize = 3;

/// Decides whether a paragraph sequence is a meeting transcript.
///
/// This is a heuristic: false positives and negatives are acceptable, the
/// downstream parser degrades gracefully on misclassified input.
pub struct TranscriptClassifier {
    speaker_line: Regex,
    duration_token: Regex,
}

impl TranscriptClassifier {
    /// Create a classifier, compiling its patterns once.
    pub fn new() -> Self {
        Self {
            speaker_line: Regex::new(SPEAKER_LINE_PATTERN).unwrap(),
            duration_token: Regex::new(r"\d+min|\d+мин|\d+sec|\d+сек").unwrap(),
        }
    }

    /// True when the paragraphs look like a transcript.
    ///
    /// Two independent signals, either of which suffices:
    /// - at least two recording/duration indicators in the first five
    ///   paragraphs (one paragraph can contribute one of each);
    /// - at least three paragraphs among positions 4..15 containing a
    ///   speaker line (each paragraph counts at most once).
    pub fn is_transcript(&self, paragraphs: &[Paragraph]) -> bool {
        if paragraphs.len() < MIN_PARAGRAPHS {
            return false;
        }

        let mut indicators = 0usize;
        for p in &paragraphs[..HEADER_WINDOW.min(paragraphs.len())] {
            let lowered = p.text.to_lowercase();
            if RECORDING_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
                indicators += 1;
            }
            if self.duration_token.is_match(&p.text) {
                indicators += 1;
            }
        }

        let scan_end = SPEAKER_SCAN_END.min(paragraphs.len());
        let mut speaker_count = 0usize;
        for p in &paragraphs[4..scan_end] {
            let has_speaker_line = p
                .text
                .trim()
                .split('\n')
                .any(|line| self.speaker_line.is_match(line.trim()));
            if has_speaker_line {
                speaker_count += 1;
            }
        }

        indicators >= INDICATOR_THRESHOLD || speaker_count >= SPEAKER_THRESHOLD
    }
}

impl Default for TranscriptClassifier {
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
    fn test_too_short_is_not_transcript() {
        let classifier = TranscriptClassifier::new();
        let paras = paragraphs(&["a", "b", "c", "d"]);
        assert!(!classifier.is_transcript(&paras));
    }

    #[test]
    fn test_header_indicators_alone_suffice() {
        let classifier = TranscriptClassifier::new();
        // No speaker lines at all; indicators come from the header.
        let paras = paragraphs(&[
            "Weekly Sync: someone started transcription",
            "55min 28sec",
            "Agenda",
            "Notes",
            "More notes",
        ]);
        assert!(classifier.is_transcript(&paras));
    }

    #[test]
    fn test_one_paragraph_can_contribute_twice() {
        let classifier = TranscriptClassifier::new();
        // Single header paragraph with keyword and duration token: 2 indicators.
        let paras = paragraphs(&[
            "Recording lasted 55min 28sec",
            "Agenda",
            "Notes",
            "More notes",
            "Closing",
        ]);
        assert!(classifier.is_transcript(&paras));
    }

    #[test]
    fn test_speaker_lines_alone_suffice() {
        let classifier = TranscriptClassifier::new();
        let paras = paragraphs(&[
            "Some title",
            "Some date",
            "Some text",
            "More text",
            "Alice   1:23\nHello everyone",
            "Bob   2:05\nHi Alice",
            "Carol   3:40\nGood morning",
        ]);
        assert!(classifier.is_transcript(&paras));
    }

    #[test]
    fn test_bulgarian_header() {
        let classifier = TranscriptClassifier::new();
        let paras = paragraphs(&[
            "Седмична среща — запис",
            "Продължителност: 42мин 10сек",
            "Дневен ред",
            "Бележки",
            "Край",
        ]);
        assert!(classifier.is_transcript(&paras));
    }

    #[test]
    fn test_plain_document_is_not_transcript() {
        let classifier = TranscriptClassifier::new();
        let paras = paragraphs(&[
            "Quarterly report",
            "Revenue grew by 4%.",
            "Costs were flat.",
            "Outlook remains stable.",
            "Appendix follows.",
            "Table of figures.",
        ]);
        assert!(!classifier.is_transcript(&paras));
    }

    #[test]
    fn test_two_speakers_not_enough() {
        let classifier = TranscriptClassifier::new();
        let paras = paragraphs(&[
            "Title",
            "Date",
            "Body",
            "Body",
            "Alice   1:23\nHello",
            "Bob   2:05\nHi",
            "Closing remarks without a speaker line",
        ]);
        assert!(!classifier.is_transcript(&paras));
    }
}
