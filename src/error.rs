//! Error types for the undoc library.

use std::io;
use thiserror::Error;

/// Result type alias for undoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file extension does not map to any known document format.
    ///
    /// Batch callers treat this as "skip and continue", not as fatal.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// An extraction adapter failed. Caught at the adapter boundary and
    /// surfaced as "no text" by the processor rather than propagated.
    #[error("Adapter error: {0}")]
    Adapter(String),

    /// An injected capability (rasterizer, renderer, ...) is not available.
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(&'static str),

    /// Page image generation failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Image encoding failed.
    #[error("Image encoding error: {0}")]
    ImageEncode(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::ImageEncode(err.to_string())
    }
}
