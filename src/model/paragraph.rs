//! Structured paragraph content produced by extraction adapters.

use serde::{Deserialize, Serialize};

fn default_style() -> String {
    "Normal".to_string()
}

/// One unit of structured document content.
///
/// Produced once by an extraction adapter and immutable thereafter. `index`
/// is the paragraph's ordinal position in the source document; `text` is
/// trimmed and non-empty by contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Ordinal position in the document (unique, increasing).
    pub index: usize,

    /// Trimmed, non-empty paragraph text.
    pub text: String,

    /// Free-form style label from the source document.
    #[serde(default = "default_style")]
    pub style: String,
}

impl Paragraph {
    /// Create a paragraph with the default style.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            style: default_style(),
        }
    }

    /// Create a paragraph with an explicit style label.
    pub fn with_style(index: usize, text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            style: style.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let p = Paragraph::new(0, "Hello");
        assert_eq!(p.style, "Normal");
    }

    #[test]
    fn test_style_defaults_on_deserialize() {
        let p: Paragraph = serde_json::from_str(r#"{"index": 3, "text": "Body"}"#).unwrap();
        assert_eq!(p.index, 3);
        assert_eq!(p.style, "Normal");

        let p: Paragraph =
            serde_json::from_str(r#"{"index": 0, "text": "Title", "style": "Heading 1"}"#).unwrap();
        assert_eq!(p.style, "Heading 1");
    }
}
