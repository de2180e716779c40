//! # raster-ops
//!
//! Pixel-level operations over [`raster_core::PixelBuffer`].
//!
//! Every operation reads its input through a shared reference and either
//! returns a freshly allocated buffer or, for detected no-ops, the input
//! itself as `Cow::Borrowed`. Nothing mutates its input.
//!
//! # Modules
//!
//! - [`color`] - Single-color tolerance, inversion, grayscale, alpha
//! - [`transform`] - Crop, flip, rotate
//! - [`resize`] - Nearest and progressive bilinear scaling
//! - [`recolor`] - Whole-image invert, grayscale, color replacement
//! - `parallel` - Rayon versions of [`recolor`] (feature `parallel`)
//!
//! # Common Operations
//!
//! ## Resize
//!
//! ```rust
//! use raster_core::{Color, PixelBuffer};
//! use raster_ops::{resize, ResizeQuality};
//!
//! let icon = PixelBuffer::filled(64, 48, Color::WHITE).unwrap();
//! let small = resize(&icon, 16, 0, ResizeQuality::High).unwrap();
//! assert_eq!(small.dimensions(), (16, 12));
//! ```
//!
//! ## Recolor
//!
//! ```rust
//! use raster_core::{Color, PixelBuffer};
//! use raster_ops::replace_color;
//!
//! let icon = PixelBuffer::filled(8, 8, Color::BLACK).unwrap();
//! let highlighted = replace_color(&icon, Color::BLACK, Color::CYAN, 10).unwrap();
//! assert_eq!(highlighted.pixel(0, 0), Color::CYAN);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
mod error;
pub mod recolor;
pub mod resize;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use recolor::{invert_colors, replace_color, set_transparency, to_grayscale};
pub use resize::{
    progressive_scale, resize, resize_with_code, scale, Filter, ResizeQuality, Sampler,
};
pub use transform::{
    crop, crop_by_percentage, flip, flip_horizontal, flip_vertical, rotate, rotate_180,
    rotate_270, rotate_90, Rotation,
};
