//! Error types for raster-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the two failure modes a pixel buffer can hit:
//! - malformed input (zero-sized buffers, raw data of the wrong length)
//! - pixel coordinates outside the buffer
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Error, Result};
//!
//! fn check(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_range(x, y, width, height));
//!     }
//!     Ok(())
//! }
//! assert!(check(3, 0, 2, 2).is_err());
//! ```
//!
//! # Used By
//!
//! - [`crate::buffer::PixelBuffer`] - construction and bounds checking
//! - `raster-ops` - wrapped in `OpsError::Core`
//! - `raster-io` - wrapped in `IoError::Core`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input to a pure function.
    ///
    /// Returned for non-positive buffer dimensions, raw data whose length
    /// does not match `width * height * 4`, and similar contract violations.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Pixel coordinates are outside buffer bounds.
    ///
    /// Returned when accessing a pixel at (x, y) where
    /// `x >= width` or `y >= height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raster_core::Error;
    ///
    /// let err = Error::out_of_range(100, 50, 80, 60);
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel ({x}, {y}) out of range for buffer {width}x{height}")]
    IndexOutOfRange {
        /// X coordinate that was out of range
        x: u32,
        /// Y coordinate that was out of range
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn out_of_range(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::IndexOutOfRange {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if this is an invalid-argument error.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
