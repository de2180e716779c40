//! Whole-image color operations.
//!
//! Every function here deep-copies its input and rewrites pixels on the
//! copy; the caller's buffer is never touched. Arguments are validated
//! before the copy is made.
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Color, PixelBuffer};
//! use raster_ops::recolor::replace_color;
//!
//! // Recolor a black icon glyph to cyan, keeping its anti-aliased alpha.
//! let icon = PixelBuffer::filled(16, 16, Color::rgba(0, 0, 0, 128)).unwrap();
//! let tinted = replace_color(&icon, Color::BLACK, Color::CYAN, 0).unwrap();
//! assert_eq!(tinted.pixel(3, 3), Color::rgba(0, 255, 255, 128));
//! ```

use raster_core::{Color, PixelBuffer};
use tracing::trace;

use crate::color::{self, rgb_within, validate_alpha, validate_threshold};
use crate::OpsResult;

/// Inverts RGB of every pixel, keeping alpha.
pub fn invert_colors(src: &PixelBuffer) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), "invert_colors");
    let mut dst = src.deep_copy();
    dst.map_in_place(color::invert);
    dst
}

/// Reduces every pixel to the truncated mean of its RGB, keeping alpha.
pub fn to_grayscale(src: &PixelBuffer) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), "to_grayscale");
    let mut dst = src.deep_copy();
    dst.map_in_place(color::grayscale);
    dst
}

/// Replaces the RGB of pixels near `target` with the RGB of `replacement`.
///
/// A pixel matches when [`color::within_tolerance`] holds for it and
/// `target` at `threshold`. Matching pixels keep their own alpha; the alpha
/// of `replacement` is ignored. Other pixels are left unchanged.
///
/// # Errors
///
/// [`OpsError::InvalidArgument`](crate::OpsError::InvalidArgument) if
/// `threshold` is outside `0..=255`.
pub fn replace_color(
    src: &PixelBuffer,
    target: Color,
    replacement: Color,
    threshold: i32,
) -> OpsResult<PixelBuffer> {
    let threshold = validate_threshold(threshold)?;
    trace!(
        width = src.width(),
        height = src.height(),
        %target,
        %replacement,
        threshold,
        "replace_color"
    );

    let mut dst = src.deep_copy();
    dst.map_in_place(|px| replace_one(px, target, replacement, threshold));
    Ok(dst)
}

#[inline]
pub(crate) fn replace_one(px: Color, target: Color, replacement: Color, threshold: u8) -> Color {
    if rgb_within(px, target, threshold) {
        Color::rgba(
            replacement.red(),
            replacement.green(),
            replacement.blue(),
            px.alpha(),
        )
    } else {
        px
    }
}

/// Sets the alpha of every pixel to `alpha`.
///
/// # Errors
///
/// [`OpsError::InvalidArgument`](crate::OpsError::InvalidArgument) if
/// `alpha` is outside `0..=255`.
pub fn set_transparency(src: &PixelBuffer, alpha: i32) -> OpsResult<PixelBuffer> {
    let alpha = validate_alpha(alpha)?;
    trace!(width = src.width(), height = src.height(), alpha, "set_transparency");

    let mut dst = src.deep_copy();
    dst.map_in_place(|px| Color::rgba(px.red(), px.green(), px.blue(), alpha));
    Ok(dst)
}
