//! Quality-driven PDF extraction with image fallback.
//!
//! Text is pulled per page from a [`PageSource`], scored by the quality
//! gates, and accepted or rejected once for the whole document. Rejected
//! documents (and explicit image requests) are rendered page by page,
//! preferring the source's batch rasterizer and falling back to per-page
//! bitmap rendering, with an optional size-constrained grayscale
//! re-encoding pass.

mod engine;
mod images;
mod options;
mod poppler;
mod source;

pub use engine::PdfExtractor;
pub use images::encode_grayscale_bounded;
pub use options::PdfExtractOptions;
pub use poppler::PopplerPdf;
pub use source::PageSource;
