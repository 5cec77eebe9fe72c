//! Error types for the thumbnail generator.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Main error type for the thumbnail generator.
///
/// Directory-level failures (`Filesystem`) end a run; everything else is
/// caught at the per-file boundary and only costs that file its output.
#[derive(Error, Debug)]
pub enum ThumbError {
    /// Input directory listing or output directory creation failed
    #[error("Filesystem error: {0}")]
    Filesystem(String),

    /// Decode, resize or encode through the image library failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// libheif failed to open or decode a HEIC/HEIF container
    #[error("HEIF error: {0}")]
    Heif(#[from] libheif_rs::HeifError),

    /// Decoded data could not be turned into pixel data
    #[error("Decode error: {0}")]
    Decode(String),

    /// Worker pool failure
    #[error("Worker error: {0}")]
    Worker(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(String),
}

/// Convenience result type for thumbnail operations.
pub type ThumbResult<T> = Result<T, ThumbError>;

// Helper methods for error creation
impl ThumbError {
    pub fn filesystem<T: Into<String>>(msg: T) -> Self {
        Self::Filesystem(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn worker<T: Into<String>>(msg: T) -> Self {
        Self::Worker(msg.into())
    }
}

// Convert std::io::Error to ThumbError
impl From<io::Error> for ThumbError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
