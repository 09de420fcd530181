//! Format dispatch for document extraction adapters.
//!
//! A closed format enumeration is resolved once from the file extension at
//! this boundary; adapters and core components never inspect format tags
//! themselves. Unknown formats give "no result", not an error, so batch
//! callers skip and continue.

mod plain;
mod processor;

pub use plain::PlainTextAdapter;
pub use processor::DocumentProcessor;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Paragraph;

/// Supported document formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Word document (also carries Teams meeting transcripts).
    Docx,
    /// Legacy Word document.
    Doc,
    /// Excel workbook.
    Xlsx,
    /// Legacy Excel workbook.
    Xls,
    /// Rich text.
    Rtf,
    /// Plain text.
    Txt,
    /// XML document.
    Xml,
    /// OpenDocument text.
    Odt,
    /// PDF document.
    Pdf,
    /// Email message container.
    Eml,
}

impl DocumentFormat {
    /// All supported formats.
    pub const ALL: &'static [DocumentFormat] = &[
        DocumentFormat::Docx,
        DocumentFormat::Doc,
        DocumentFormat::Xlsx,
        DocumentFormat::Xls,
        DocumentFormat::Rtf,
        DocumentFormat::Txt,
        DocumentFormat::Xml,
        DocumentFormat::Odt,
        DocumentFormat::Pdf,
        DocumentFormat::Eml,
    ];

    /// Resolve a format from a bare extension (case-insensitive, no dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "docx" => Some(DocumentFormat::Docx),
            "doc" => Some(DocumentFormat::Doc),
            "xlsx" => Some(DocumentFormat::Xlsx),
            "xls" => Some(DocumentFormat::Xls),
            "rtf" => Some(DocumentFormat::Rtf),
            "txt" => Some(DocumentFormat::Txt),
            "xml" => Some(DocumentFormat::Xml),
            "odt" => Some(DocumentFormat::Odt),
            "pdf" => Some(DocumentFormat::Pdf),
            "eml" => Some(DocumentFormat::Eml),
            _ => None,
        }
    }

    /// Resolve a format from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Lowercase extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Doc => "doc",
            DocumentFormat::Xlsx => "xlsx",
            DocumentFormat::Xls => "xls",
            DocumentFormat::Rtf => "rtf",
            DocumentFormat::Txt => "txt",
            DocumentFormat::Xml => "xml",
            DocumentFormat::Odt => "odt",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Eml => "eml",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Trait for per-format extraction adapters.
///
/// Implement this to plug a new format into the dispatcher. Adapters may
/// support structured paragraph extraction; the default says they do not.
pub trait DocumentAdapter: Send + Sync {
    /// Name of this adapter.
    fn name(&self) -> &str;

    /// Formats this adapter handles.
    fn formats(&self) -> &[DocumentFormat];

    /// Extract plain text. `Ok(None)` means the adapter ran but found no
    /// text; errors are caught at the dispatcher boundary.
    fn extract_text(&self, path: &Path) -> Result<Option<String>>;

    /// Extract structured paragraphs, when the format supports it.
    fn extract_paragraphs(&self, path: &Path) -> Result<Option<Vec<Paragraph>>> {
        let _ = path;
        Ok(None)
    }
}

/// Registry mapping document formats to adapters.
pub struct AdapterRegistry {
    adapters: HashMap<DocumentFormat, Arc<dyn DocumentAdapter>>,
}

impl AdapterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Create a registry with the built-in adapters (plain text).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextAdapter::new()));
        registry
    }

    /// Register an adapter for all of its formats.
    pub fn register(&mut self, adapter: Arc<dyn DocumentAdapter>) {
        for format in adapter.formats() {
            self.adapters.insert(*format, adapter.clone());
        }
    }

    /// Look up the adapter for a format.
    pub fn get(&self, format: DocumentFormat) -> Option<Arc<dyn DocumentAdapter>> {
        self.adapters.get(&format).cloned()
    }

    /// Whether a format has a registered adapter.
    pub fn supports(&self, format: DocumentFormat) -> bool {
        self.adapters.contains_key(&format)
    }

    /// Registered formats, in no particular order.
    pub fn registered_formats(&self) -> Vec<DocumentFormat> {
        self.adapters.keys().copied().collect()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
