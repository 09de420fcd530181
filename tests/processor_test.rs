//! Dispatcher tests with a mock structured adapter.

use std::path::Path;
use std::sync::Arc;

use undoc::{
    AdapterRegistry, DocumentAdapter, DocumentFormat, DocumentProcessor, Paragraph, Result,
};

/// Pretends to be a word-processor adapter; returns canned paragraphs.
struct MockDocxAdapter {
    paragraphs: Vec<Paragraph>,
}

impl MockDocxAdapter {
    fn new(texts: &[&str]) -> Self {
        Self {
            paragraphs: texts
                .iter()
                .enumerate()
                .map(|(i, t)| Paragraph::new(i, *t))
                .collect(),
        }
    }
}

impl DocumentAdapter for MockDocxAdapter {
    fn name(&self) -> &str {
        "mock-docx"
    }

    fn formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Docx]
    }

    fn extract_text(&self, _path: &Path) -> Result<Option<String>> {
        let joined = self
            .paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Some(joined))
    }

    fn extract_paragraphs(&self, _path: &Path) -> Result<Option<Vec<Paragraph>>> {
        Ok(Some(self.paragraphs.clone()))
    }
}

fn transcript_texts() -> Vec<&'static str> {
    vec![
        "Weekly sync-20260210_090000-Meeting Recording",
        "10 February 2026, 9:00AM",
        "30min 12sec",
        "Ana Georgieva started transcription",
        "Ana Georgieva   0:08\nGood morning everyone.",
        "Peter Stoyanov   0:31\nMorning. Shall we start with the release?",
        "Ana Georgieva   1:02\nYes, the release is on track.",
    ]
}

fn processor_with_mock(texts: &[&str]) -> DocumentProcessor {
    let mut registry = AdapterRegistry::with_defaults();
    registry.register(Arc::new(MockDocxAdapter::new(texts)));
    DocumentProcessor::new(registry)
}

#[test]
fn transcript_docx_is_parsed_into_messages() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weekly_sync.docx");
    std::fs::write(&path, b"stub").unwrap();

    let processor = processor_with_mock(&transcript_texts());
    let doc = processor.process_file(&path).unwrap().unwrap();

    assert_eq!(doc.format, "docx");
    assert!(doc.is_transcript);
    let transcript = doc.transcript.as_ref().unwrap();
    assert_eq!(transcript.summary.total_messages, 3);
    assert_eq!(
        transcript.participants,
        vec!["Ana Georgieva", "Peter Stoyanov"]
    );
    assert!(doc.extracted_text.contains("**Ana Georgieva** [0:08]:"));
}

#[test]
fn plain_docx_takes_the_text_route() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.docx");
    std::fs::write(&path, b"stub").unwrap();

    let texts = vec![
        "Project notes",
        "Scope and timeline",
        "The first milestone covers data import.",
        "The second milestone covers reporting.",
        "Open items are tracked separately.",
        "Next review is scheduled for March.",
    ];
    let processor = processor_with_mock(&texts);
    let doc = processor.process_file(&path).unwrap().unwrap();

    assert!(!doc.is_transcript);
    assert!(doc.transcript.is_none());
    assert!(doc.extracted_text.contains("Project notes"));
    assert!(doc.extracted_text.contains("tracked separately"));
}

#[test]
fn unregistered_format_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.xlsx");
    std::fs::write(&path, b"stub").unwrap();

    let processor = processor_with_mock(&transcript_texts());
    assert!(processor.process_file(&path).unwrap().is_none());
}

#[test]
fn default_registry_still_handles_plain_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readme.txt");
    std::fs::write(&path, "Just a paragraph of ordinary text.\n").unwrap();

    let processor = processor_with_mock(&transcript_texts());
    let doc = processor.process_file(&path).unwrap().unwrap();
    assert_eq!(doc.format, "txt");
    assert!(!doc.is_transcript);
    assert!(doc.extracted_text.contains("ordinary text"));
}
