//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Invalid parameter value (threshold, alpha, crop, resize target).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Error raised by a pixel buffer.
    #[error(transparent)]
    Core(#[from] raster_core::Error),
}

impl OpsError {
    /// Creates an [`OpsError::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns `true` for invalid-argument failures from either this crate
    /// or `raster-core`.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::InvalidArgument(_) => true,
            Self::Core(e) => e.is_invalid_argument(),
        }
    }

    /// Returns `true` for pixel coordinate bounds failures.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_out_of_range())
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
