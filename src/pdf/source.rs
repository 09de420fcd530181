//! The page-level collaborator contract for PDF extraction.

use image::DynamicImage;

use crate::error::{Error, Result};

/// Provides per-page text and bitmaps for one PDF document.
///
/// The engine calls `page_text` once per page in ascending order and only
/// asks for bitmaps when it has decided images are needed. Rendering
/// capabilities carry defaults that report typed unavailability, so a
/// text-only source works out of the box and the engine can pick the next
/// path instead of crashing.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<u32>;

    /// Raw text of the given 1-based page.
    fn page_text(&self, page_number: u32) -> Result<String>;

    /// Render one 1-based page to a bitmap at the given resolution.
    fn render_page(&self, page_number: u32, dpi: u32) -> Result<DynamicImage> {
        let _ = (page_number, dpi);
        Err(Error::CapabilityUnavailable("page renderer"))
    }

    /// Render every page in one pass, in page order. Preferred over
    /// [`PageSource::render_page`] when a dedicated rasterizer exists.
    fn rasterize_all(&self, dpi: u32) -> Result<Vec<DynamicImage>> {
        let _ = dpi;
        Err(Error::CapabilityUnavailable("document rasterizer"))
    }
}
