//! Geometric transformation operations.
//!
//! Provides crop, flip and fixed-angle rotate. Every operation reads its
//! input through `&PixelBuffer`; operations that can detect a no-op hand the
//! input back as [`Cow::Borrowed`] instead of copying.
//!
//! # Operations
//!
//! - [`flip`] - Horizontal and/or vertical mirror
//! - [`rotate_90`], [`rotate_180`], [`rotate_270`] - Clockwise rotations
//! - [`crop`] - Remove pixel rows/columns from each edge
//! - [`crop_by_percentage`] - Same, with edges given as percentages
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Color, PixelBuffer};
//! use raster_ops::transform::{crop_by_percentage, flip, rotate_90};
//!
//! let src = PixelBuffer::filled(400, 300, Color::RED).unwrap();
//!
//! let mirrored = flip(&src, true, false);
//! let rotated = rotate_90(&src);
//! assert_eq!(rotated.dimensions(), (300, 400));
//!
//! let cropped = crop_by_percentage(&src, 30, 20, 30, 20).unwrap();
//! assert_eq!(cropped.dimensions(), (240, 120));
//! ```

use std::borrow::Cow;

use raster_core::{PixelBuffer, CHANNELS};
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Fixed clockwise rotation angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// 90 degrees clockwise.
    Deg90,
    /// 180 degrees.
    Deg180,
    /// 270 degrees clockwise (90 counter-clockwise).
    Deg270,
}

/// Mirrors the image.
///
/// Source pixel (x, y) lands at
/// `(width-1-x if horizontal else x, height-1-y if vertical else y)`.
/// With both flags `false` the input is returned borrowed.
///
/// ```rust
/// use raster_core::{Color, PixelBuffer};
/// use raster_ops::transform::flip;
///
/// let mut src = PixelBuffer::filled(2, 1, Color::GREEN).unwrap();
/// src.set(0, 0, Color::RED).unwrap();
/// let flipped = flip(&src, true, false);
/// assert_eq!(flipped.pixel(1, 0), Color::RED);
/// ```
pub fn flip(src: &PixelBuffer, horizontal: bool, vertical: bool) -> Cow<'_, PixelBuffer> {
    if !horizontal && !vertical {
        debug!("flip: no flags set, returning input");
        return Cow::Borrowed(src);
    }

    let (width, height) = src.dimensions();
    trace!(width, height, horizontal, vertical, "flip");

    let mut dst = src.blank_like();
    let row_len = src.row_len();
    let data = dst.as_raw_mut();

    for y in 0..height {
        let dst_y = if vertical { height - 1 - y } else { y };
        let src_row = src.row(y);
        let dst_row = &mut data[dst_y as usize * row_len..(dst_y as usize + 1) * row_len];

        if horizontal {
            for (x, px) in src_row.chunks_exact(CHANNELS).enumerate() {
                let dst_x = width as usize - 1 - x;
                dst_row[dst_x * CHANNELS..(dst_x + 1) * CHANNELS].copy_from_slice(px);
            }
        } else {
            dst_row.copy_from_slice(src_row);
        }
    }

    Cow::Owned(dst)
}

/// Mirrors the image left-right.
pub fn flip_horizontal(src: &PixelBuffer) -> PixelBuffer {
    flip(src, true, false).into_owned()
}

/// Mirrors the image top-bottom.
pub fn flip_vertical(src: &PixelBuffer) -> PixelBuffer {
    flip(src, false, true).into_owned()
}

/// Rotates the image 90 degrees clockwise.
///
/// Input (x, y) maps to output `(height-1-y, x)`; the output is
/// `height x width`.
pub fn rotate_90(src: &PixelBuffer) -> PixelBuffer {
    let (width, height) = src.dimensions();
    trace!(width, height, "rotate_90");

    let mut dst = src.blank_transposed();
    for (x, y, px) in src.pixels() {
        dst.put_pixel(height - 1 - y, x, px);
    }
    dst
}

/// Rotates the image 180 degrees.
pub fn rotate_180(src: &PixelBuffer) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), "rotate_180");
    flip(src, true, true).into_owned()
}

/// Rotates the image 270 degrees clockwise.
///
/// Input (x, y) maps to output `(y, width-1-x)`; the output is
/// `height x width`.
pub fn rotate_270(src: &PixelBuffer) -> PixelBuffer {
    let (width, height) = src.dimensions();
    trace!(width, height, "rotate_270");

    let mut dst = src.blank_transposed();
    for (x, y, px) in src.pixels() {
        dst.put_pixel(y, width - 1 - x, px);
    }
    dst
}

/// Rotates by one of the fixed [`Rotation`] angles.
pub fn rotate(src: &PixelBuffer, rotation: Rotation) -> PixelBuffer {
    match rotation {
        Rotation::Deg90 => rotate_90(src),
        Rotation::Deg180 => rotate_180(src),
        Rotation::Deg270 => rotate_270(src),
    }
}

/// Removes `top`, `right`, `bottom` and `left` pixels from the edges.
///
/// Cropping nothing returns the input borrowed.
///
/// # Errors
///
/// [`OpsError::InvalidArgument`] if `top + bottom >= height` or
/// `left + right >= width`: the output must keep at least one pixel in each
/// dimension.
///
/// ```rust
/// use raster_core::{Color, PixelBuffer};
/// use raster_ops::transform::crop;
///
/// let src = PixelBuffer::filled(64, 100, Color::BLUE).unwrap();
/// assert_eq!(crop(&src, 10, 5, 20, 5).unwrap().dimensions(), (54, 70));
/// assert!(crop(&src, 100, 5, 5, 5).is_err());
/// ```
pub fn crop(
    src: &PixelBuffer,
    top: u32,
    right: u32,
    bottom: u32,
    left: u32,
) -> OpsResult<Cow<'_, PixelBuffer>> {
    let (width, height) = src.dimensions();

    let new_h = remaining(height, top, bottom).ok_or_else(|| {
        OpsError::invalid_argument(format!(
            "cannot crop {} (top) + {} (bottom) rows from height {}",
            top, bottom, height
        ))
    })?;
    let new_w = remaining(width, left, right).ok_or_else(|| {
        OpsError::invalid_argument(format!(
            "cannot crop {} (left) + {} (right) columns from width {}",
            left, right, width
        ))
    })?;

    if new_w == width && new_h == height {
        debug!("crop: nothing to remove, returning input");
        return Ok(Cow::Borrowed(src));
    }

    trace!(width, height, top, right, bottom, left, new_w, new_h, "crop");

    let start = left as usize * CHANNELS;
    let end = start + new_w as usize * CHANNELS;
    let mut data = Vec::with_capacity(new_w as usize * new_h as usize * CHANNELS);
    for y in top..top + new_h {
        data.extend_from_slice(&src.row(y)[start..end]);
    }

    Ok(Cow::Owned(PixelBuffer::from_raw(new_w, new_h, data)?))
}

/// Pixels left after removing `a + b` from `dim`, if strictly positive.
fn remaining(dim: u32, a: u32, b: u32) -> Option<u32> {
    a.checked_add(b)
        .and_then(|sum| dim.checked_sub(sum))
        .filter(|&left| left > 0)
}

/// Crops each edge by a percentage of the matching dimension.
///
/// `top`/`bottom` are relative to height, `left`/`right` to width. Offsets
/// are `round(dimension * percent / 100)` with halves rounded away from
/// zero, then handed to [`crop`].
///
/// # Errors
///
/// [`OpsError::InvalidArgument`] if any value is outside `0..=100`, if
/// `top + bottom > 100` or `right + left > 100`. A pair summing to exactly
/// 100 passes this check and is then rejected by [`crop`] because it leaves
/// no pixels.
pub fn crop_by_percentage(
    src: &PixelBuffer,
    top: i32,
    right: i32,
    bottom: i32,
    left: i32,
) -> OpsResult<Cow<'_, PixelBuffer>> {
    for (name, value) in [("top", top), ("right", right), ("bottom", bottom), ("left", left)] {
        if !(0..=100).contains(&value) {
            return Err(OpsError::invalid_argument(format!(
                "crop {} must be between 0 and 100, got {}",
                name, value
            )));
        }
    }
    if top + bottom > 100 {
        return Err(OpsError::invalid_argument(format!(
            "cannot crop by more than 100%: top {} + bottom {}",
            top, bottom
        )));
    }
    if right + left > 100 {
        return Err(OpsError::invalid_argument(format!(
            "cannot crop by more than 100%: right {} + left {}",
            right, left
        )));
    }

    let (width, height) = src.dimensions();
    crop(
        src,
        percent_of(height, top),
        percent_of(width, right),
        percent_of(height, bottom),
        percent_of(width, left),
    )
}

/// `round(dim * pct / 100)`, halves away from zero. `pct` is in `0..=100`.
fn percent_of(dim: u32, pct: i32) -> u32 {
    let scaled = dim as u64 * pct as u64;
    ((scaled * 2 + 100) / 200) as u32
}
