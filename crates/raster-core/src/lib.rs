//! # raster-core
//!
//! Core types for raster image manipulation.
//!
//! This crate provides the foundational types used throughout the raster-rs
//! workspace:
//!
//! - [`Color`] - Immutable 8-bit RGBA color value
//! - [`PixelBuffer`] - Owned, bounds-checked RGBA pixel grid
//! - [`Error`] - Invalid-argument and out-of-range failures
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other crates build on it:
//!
//! ```text
//! raster-core (this crate)
//!    ^
//!    |
//!    +-- raster-ops (color, geometry, resize, recolor)
//!    +-- raster-io  (PNG / JPEG decode)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for [`Color`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::{Color, CHANNELS};

/// Prelude module for convenient imports.
///
/// ```
/// use raster_core::prelude::*;
///
/// let buf = PixelBuffer::filled(2, 2, Color::RED).unwrap();
/// assert_eq!(buf.width(), 2);
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::pixel::Color;
}
