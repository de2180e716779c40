//! Error types for decode operations.

use std::io;
use thiserror::Error;

/// Decode error.
///
/// The top-level [`crate::read`] and [`crate::decode`] fold every variant
/// into `None`; the `try_*` functions return it for diagnostics.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported or unrecognized format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error (corrupt or truncated data).
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Pixel layout the decoder cannot convert to RGBA8.
    #[error("unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    /// Decoded data did not form a valid pixel buffer.
    #[error(transparent)]
    Core(#[from] raster_core::Error),
}

/// Result type for decode operations.
pub type IoResult<T> = Result<T, IoError>;
