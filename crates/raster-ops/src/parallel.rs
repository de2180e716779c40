//! Parallel whole-image color operations using Rayon.
//!
//! Row-parallel versions of the [`crate::recolor`] functions. Results are
//! pixel-identical to the sequential versions; only the work is split
//! across threads. Each call still reads its input through a shared
//! reference and writes only to its own fresh copy.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Color, PixelBuffer};
//! use raster_ops::parallel;
//!
//! let src = PixelBuffer::filled(256, 256, Color::BLUE).unwrap();
//! let inverted = parallel::invert_colors(&src);
//! assert_eq!(inverted.pixel(0, 0), Color::rgb(255, 255, 0));
//! ```

use raster_core::{Color, PixelBuffer, CHANNELS};
use rayon::prelude::*;
use tracing::trace;

use crate::color::{self, validate_alpha, validate_threshold};
use crate::recolor::replace_one;
use crate::OpsResult;

/// Copies `src` and applies `f` to every pixel, one row per task.
fn par_map<F>(src: &PixelBuffer, f: F) -> PixelBuffer
where
    F: Fn(Color) -> Color + Sync,
{
    let mut dst = src.deep_copy();
    let row_len = dst.row_len();
    dst.as_raw_mut().par_chunks_mut(row_len).for_each(|row| {
        for px in row.chunks_exact_mut(CHANNELS) {
            f(Color::from_slice(px)).write_to(px);
        }
    });
    dst
}

/// Parallel [`crate::recolor::invert_colors`].
pub fn invert_colors(src: &PixelBuffer) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), "par invert_colors");
    par_map(src, color::invert)
}

/// Parallel [`crate::recolor::to_grayscale`].
pub fn to_grayscale(src: &PixelBuffer) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), "par to_grayscale");
    par_map(src, color::grayscale)
}

/// Parallel [`crate::recolor::replace_color`].
pub fn replace_color(
    src: &PixelBuffer,
    target: Color,
    replacement: Color,
    threshold: i32,
) -> OpsResult<PixelBuffer> {
    let threshold = validate_threshold(threshold)?;
    trace!(width = src.width(), height = src.height(), threshold, "par replace_color");
    Ok(par_map(src, |px| replace_one(px, target, replacement, threshold)))
}

/// Parallel [`crate::recolor::set_transparency`].
pub fn set_transparency(src: &PixelBuffer, alpha: i32) -> OpsResult<PixelBuffer> {
    let alpha = validate_alpha(alpha)?;
    trace!(width = src.width(), height = src.height(), alpha, "par set_transparency");
    Ok(par_map(src, |px| Color::rgba(px.red(), px.green(), px.blue(), alpha)))
}
