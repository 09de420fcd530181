//! Text quality analysis.
//!
//! Scores how "real" a block of extracted text is and decides whether it is
//! usable, or garbled enough that the caller should fall back to page images.
//! The validity signal is the fraction of characters in the Cyrillic block or
//! printable ASCII, which catches the mojibake produced by broken PDF text
//! layers and damaged encodings.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Coarse garbage threshold applied per cleanup pass and at the page level.
pub const GARBAGE_RATIO_THRESHOLD: f64 = 0.5;

/// Strict validity threshold applied to whole-document text.
///
/// Intentionally stricter than [`GARBAGE_RATIO_THRESHOLD`]: page-level
/// pre-filtering is lenient, final usability is not. Both values are kept
/// as-is; do not unify them.
pub const DOCUMENT_RATIO_THRESHOLD: f64 = 0.8;

/// Default minimum character count for usable document text.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 200;

/// Ratio of valid characters (Cyrillic U+0400..U+04FF or printable ASCII
/// U+0020..U+007F) to total characters. Returns 0.0 for empty input.
pub fn valid_char_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut valid = 0usize;
    for c in text.chars() {
        total += 1;
        if matches!(c, '\u{0400}'..='\u{04FF}' | '\u{0020}'..='\u{007F}') {
            valid += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        valid as f64 / total as f64
    }
}

/// True when the text is too garbled to trust, at the default 0.5 threshold.
///
/// Empty input counts as garbage: unknown is treated as unusable.
pub fn looks_like_ocr_garbage(text: &str) -> bool {
    looks_like_ocr_garbage_with_threshold(text, GARBAGE_RATIO_THRESHOLD)
}

/// True when the valid-character ratio falls below `threshold`, or the text
/// is empty.
pub fn looks_like_ocr_garbage_with_threshold(text: &str, threshold: f64) -> bool {
    if text.is_empty() {
        return true;
    }
    valid_char_ratio(text) < threshold
}

/// True iff the trimmed text is one or more runs of digits separated only by
/// whitespace, with nothing else present.
pub fn is_only_page_numbers(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace())
}

/// Whether whole-document text qualifies to skip the image fallback.
///
/// Five independent gates, any one of which disqualifies: empty input,
/// shorter than `min_chars` after trimming, page numbers only, garbage at the
/// lenient threshold, or a valid-character ratio below the strict document
/// threshold.
pub fn is_usable_document_text(text: &str, min_chars: usize) -> bool {
    if text.is_empty() {
        return false;
    }
    if text.trim().chars().count() < min_chars {
        return false;
    }
    if is_only_page_numbers(text) {
        return false;
    }
    if looks_like_ocr_garbage(text) {
        return false;
    }
    if valid_char_ratio(text) < DOCUMENT_RATIO_THRESHOLD {
        return false;
    }
    true
}

/// Text normalization pipeline for extracted content.
///
/// Compiles its patterns once; reuse one instance across documents.
pub struct TextCleaner {
    control_chars: Regex,
    control_chars_all: Regex,
    blank_runs: Regex,
    blank_lines: Regex,
    whitespace_runs: Regex,
}

impl TextCleaner {
    /// Create a new cleaner.
    pub fn new() -> Self {
        Self {
            // Control characters except newline and tab.
            control_chars: Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap(),
            control_chars_all: Regex::new(r"[\x00-\x1F\x7F]").unwrap(),
            blank_runs: Regex::new(r"\n\s*\n\s*\n").unwrap(),
            blank_lines: Regex::new(r"\n\s*\n").unwrap(),
            whitespace_runs: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Clean extracted text while keeping line structure: NFC-normalize,
    /// strip control characters, cap blank-line runs at one blank line.
    pub fn clean(&self, text: &str) -> String {
        let normalized: String = text.nfc().collect();
        let stripped = self.control_chars.replace_all(&normalized, "");
        let collapsed = self.blank_runs.replace_all(&stripped, "\n\n");
        collapsed.trim().to_string()
    }

    /// Aggressive cleanup for unstructured content: strips all control
    /// characters, drops blank lines, and collapses whitespace runs into
    /// single spaces.
    pub fn clean_aggressive(&self, text: &str) -> String {
        let normalized: String = text.nfc().collect();
        let stripped = self.control_chars_all.replace_all(&normalized, "");
        let no_blanks = self.blank_lines.replace_all(&stripped, "\n");
        let collapsed = self.whitespace_runs.replace_all(&no_blanks, " ");
        collapsed.trim().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_char_ratio_empty() {
        assert_eq!(valid_char_ratio(""), 0.0);
    }

    #[test]
    fn test_valid_char_ratio_ascii() {
        assert_eq!(valid_char_ratio("abc"), 1.0);
    }

    #[test]
    fn test_valid_char_ratio_cyrillic() {
        assert_eq!(valid_char_ratio("Здравей, свят"), 1.0);
    }

    #[test]
    fn test_valid_char_ratio_invalid() {
        assert_eq!(valid_char_ratio("①②③"), 0.0);
    }

    #[test]
    fn test_valid_char_ratio_mixed() {
        // 2 of 4 characters valid
        let ratio = valid_char_ratio("ab①②");
        assert!((ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_garbage_empty_is_garbage() {
        assert!(looks_like_ocr_garbage(""));
    }

    #[test]
    fn test_garbage_threshold() {
        assert!(!looks_like_ocr_garbage("clean ascii text"));
        assert!(looks_like_ocr_garbage("①②③④⑤⑥⑦ab"));
        // Custom threshold flips the verdict for half-valid text.
        assert!(!looks_like_ocr_garbage_with_threshold("ab①②", 0.5));
        assert!(looks_like_ocr_garbage_with_threshold("ab①②", 0.9));
    }

    #[test]
    fn test_only_page_numbers() {
        assert!(is_only_page_numbers("12 34  56"));
        assert!(is_only_page_numbers("  7\n8\t9  "));
        assert!(!is_only_page_numbers("Page 12"));
        assert!(!is_only_page_numbers(""));
        assert!(!is_only_page_numbers("   "));
    }

    #[test]
    fn test_usable_rejects_short_text() {
        // Perfect ratio but below the length gate.
        let short = "a".repeat(DEFAULT_MIN_TEXT_CHARS - 1);
        assert!(!is_usable_document_text(&short, DEFAULT_MIN_TEXT_CHARS));
    }

    #[test]
    fn test_usable_length_boundary() {
        let at_boundary = "a".repeat(DEFAULT_MIN_TEXT_CHARS);
        assert!(is_usable_document_text(&at_boundary, DEFAULT_MIN_TEXT_CHARS));
    }

    #[test]
    fn test_usable_accepts_long_ascii() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(6);
        assert!(text.len() >= 250);
        assert!(is_usable_document_text(&text, DEFAULT_MIN_TEXT_CHARS));
    }

    #[test]
    fn test_usable_rejects_page_numbers() {
        let numbers = "1 2 3 4 5 6 7 8 9 10 ".repeat(15);
        assert!(numbers.trim().len() > DEFAULT_MIN_TEXT_CHARS);
        assert!(!is_usable_document_text(&numbers, DEFAULT_MIN_TEXT_CHARS));
    }

    #[test]
    fn test_usable_rejects_low_ratio() {
        // Long enough, passes the 0.5 garbage gate, fails the 0.8 one.
        let mut text = String::new();
        for _ in 0..100 {
            text.push_str("ab①");
        }
        let ratio = valid_char_ratio(&text);
        assert!(ratio > GARBAGE_RATIO_THRESHOLD && ratio < DOCUMENT_RATIO_THRESHOLD);
        assert!(!is_usable_document_text(&text, DEFAULT_MIN_TEXT_CHARS));
    }

    #[test]
    fn test_clean_keeps_lines() {
        let cleaner = TextCleaner::new();
        let cleaned = cleaner.clean("a\u{0000}b\n\n\n\nc\td");
        assert_eq!(cleaned, "ab\n\nc\td");
    }

    #[test]
    fn test_clean_aggressive_flattens() {
        let cleaner = TextCleaner::new();
        let cleaned = cleaner.clean_aggressive("  one\n\ntwo   three\u{0007} ");
        assert_eq!(cleaned, "one two three");
    }
}
