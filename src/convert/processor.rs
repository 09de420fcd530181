//! Office document processing pipeline.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::convert::{AdapterRegistry, DocumentFormat};
use crate::error::Result;
use crate::model::{ExtractedDocument, Paragraph};
use crate::quality::TextCleaner;
use crate::transcript::{TranscriptClassifier, TranscriptParser};

/// Dispatch-and-extract pipeline for office documents.
///
/// Resolves the format once, prefers structured paragraph extraction so
/// paragraph-shaped documents can run through the transcript classifier,
/// and falls back to plain extraction otherwise. Adapter failures are
/// caught here and surface as documents with no text, not as errors.
pub struct DocumentProcessor {
    registry: AdapterRegistry,
    classifier: TranscriptClassifier,
    parser: TranscriptParser,
    cleaner: TextCleaner,
}

impl DocumentProcessor {
    /// Create a processor over the given adapter registry.
    pub fn new(registry: AdapterRegistry) -> Self {
        Self {
            registry,
            classifier: TranscriptClassifier::new(),
            parser: TranscriptParser::new(),
            cleaner: TextCleaner::new(),
        }
    }

    /// Create a processor with the built-in adapters.
    pub fn with_defaults() -> Self {
        Self::new(AdapterRegistry::with_defaults())
    }

    /// The underlying registry.
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Process one file. Returns `Ok(None)` for unknown or unregistered
    /// formats so a batch caller can skip and continue; errors only for
    /// truly exceptional conditions (missing input file).
    pub fn process_file(&self, path: &Path) -> Result<Option<ExtractedDocument>> {
        let Some(format) = DocumentFormat::from_path(path) else {
            warn!("unsupported file type: {}", path.display());
            return Ok(None);
        };
        let Some(adapter) = self.registry.get(format) else {
            warn!("no adapter registered for {}: {}", format, path.display());
            return Ok(None);
        };

        info!("processing {} ({})", path.display(), format);
        let file_size_kb = fs::metadata(path)?.len() as f64 / 1024.0;

        let mut document = ExtractedDocument {
            source_file: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            format: format.extension().to_string(),
            file_size_kb,
            timestamp: chrono::Local::now().to_rfc3339(),
            extracted_text: String::new(),
            is_transcript: false,
            transcript: None,
        };

        // Structured extraction first: paragraph-shaped documents feed the
        // transcript classifier before any plain-text fallback.
        if let Some(paragraphs) = self.paragraphs_for(&*adapter, path) {
            if self.classifier.is_transcript(&paragraphs) {
                info!("transcript detected: {}", path.display());
                let transcript = self.parser.parse(&paragraphs);
                document.extracted_text = transcript.render_text();
                document.is_transcript = true;
                document.transcript = Some(transcript);
                return Ok(Some(document));
            }
        }

        match adapter.extract_text(path) {
            Ok(Some(text)) => document.extracted_text = self.cleaner.clean(&text),
            Ok(None) => warn!("no text extracted from {}", path.display()),
            Err(e) => warn!("adapter failed on {}: {}", path.display(), e),
        }
        Ok(Some(document))
    }

    fn paragraphs_for(
        &self,
        adapter: &dyn crate::convert::DocumentAdapter,
        path: &Path,
    ) -> Option<Vec<Paragraph>> {
        match adapter.extract_paragraphs(path) {
            Ok(paragraphs) => paragraphs,
            Err(e) => {
                warn!("structured extraction failed on {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::with_defaults()
    }
}
