//! Options for PDF extraction.

use crate::model::ExtractionMode;
use crate::quality::DEFAULT_MIN_TEXT_CHARS;

/// Default target size for re-encoded grayscale page images, in KB.
pub const DEFAULT_TARGET_IMAGE_KB: u32 = 1000;

/// Default rasterization resolution.
pub const DEFAULT_DPI: u32 = 200;

/// Options controlling the extraction engine.
#[derive(Debug, Clone)]
pub struct PdfExtractOptions {
    /// Requested extraction mode.
    pub mode: ExtractionMode,

    /// Generate page images even when the text is usable.
    pub force_images: bool,

    /// Minimum character count for usable whole-document text.
    pub min_text_chars: usize,

    /// Convert page images to size-constrained grayscale.
    pub grayscale: bool,

    /// Target size for grayscale re-encoding, in KB.
    pub target_image_kb: u32,

    /// Rasterization resolution for the preferred rasterizer path.
    pub dpi: u32,
}

impl PdfExtractOptions {
    /// Create options with defaults: text mode, grayscale images, 200
    /// minimum characters, 1000 KB image target, 200 DPI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extraction mode.
    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Generate page images even when text is accepted.
    pub fn force_images(mut self, force: bool) -> Self {
        self.force_images = force;
        self
    }

    /// Set the minimum character count for usable text.
    pub fn with_min_text_chars(mut self, min_chars: usize) -> Self {
        self.min_text_chars = min_chars;
        self
    }

    /// Enable or disable grayscale image conversion.
    pub fn with_grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    /// Set the grayscale re-encoding size target in KB.
    pub fn with_target_image_kb(mut self, target_kb: u32) -> Self {
        self.target_image_kb = target_kb;
        self
    }

    /// Set the rasterization resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }
}

impl Default for PdfExtractOptions {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::Text,
            force_images: false,
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            grayscale: true,
            target_image_kb: DEFAULT_TARGET_IMAGE_KB,
            dpi: DEFAULT_DPI,
        }
    }
}
