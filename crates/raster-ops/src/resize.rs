//! Image resize and resampling operations.
//!
//! [`resize`] is the single entry point. It resolves the target size
//! (inferring a missing dimension from the aspect ratio), short-circuits
//! when nothing changes, and dispatches on [`ResizeQuality`]:
//!
//! - [`ResizeQuality::Low`] - one nearest-neighbor pass
//! - [`ResizeQuality::High`] - progressive bilinear: halve (or double) each
//!   dimension per step until the target is reached
//!
//! A single large bilinear jump only ever blends the 2x2 source pixels
//! around each sample point, so most of the source is skipped on big
//! downscales and the result aliases. Stepping by at most a factor of two
//! keeps every source pixel contributing.
//!
//! # Samplers
//!
//! Per-step resampling goes through the [`Sampler`] trait. [`Filter`]
//! provides the two built-in kernels; callers may plug in their own with
//! [`scale`] and [`progressive_scale`].
//!
//! # Example
//!
//! ```rust
//! use raster_core::{Color, PixelBuffer};
//! use raster_ops::resize::{resize, ResizeQuality};
//!
//! let src = PixelBuffer::filled(300, 200, Color::RED).unwrap();
//! let dst = resize(&src, 150, 0, ResizeQuality::High).unwrap();
//! assert_eq!(dst.dimensions(), (150, 100));
//! ```

use std::borrow::Cow;

use raster_core::{PixelBuffer, CHANNELS};
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Resize quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeQuality {
    /// Single nearest-neighbor pass. Fast, blocky.
    #[default]
    Low,
    /// Progressive multi-step bilinear scaling.
    High,
}

impl ResizeQuality {
    /// Integer code of [`ResizeQuality::Low`].
    pub const LOW_CODE: i32 = 0;
    /// Integer code of [`ResizeQuality::High`].
    pub const HIGH_CODE: i32 = 1;

    /// Kernel used by each resampling pass at this quality.
    #[inline]
    pub const fn filter(self) -> Filter {
        match self {
            ResizeQuality::Low => Filter::Nearest,
            ResizeQuality::High => Filter::Bilinear,
        }
    }

    /// Whether this quality scales progressively.
    #[inline]
    pub const fn is_progressive(self) -> bool {
        matches!(self, ResizeQuality::High)
    }
}

impl TryFrom<i32> for ResizeQuality {
    type Error = OpsError;

    /// Accepts the integer codes 0 (low) and 1 (high).
    fn try_from(code: i32) -> OpsResult<Self> {
        match code {
            Self::LOW_CODE => Ok(ResizeQuality::Low),
            Self::HIGH_CODE => Ok(ResizeQuality::High),
            other => Err(OpsError::invalid_argument(format!(
                "quality parameter out of range: {}",
                other
            ))),
        }
    }
}

/// Produces a resampled copy of a buffer at a new size in one pass.
pub trait Sampler {
    /// Resamples `src` to exactly `width x height`.
    fn resample(&self, src: &PixelBuffer, width: u32, height: u32) -> OpsResult<PixelBuffer>;
}

/// Built-in resampling kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, no interpolation).
    #[default]
    Nearest,
    /// Bilinear interpolation over the 2x2 neighborhood.
    Bilinear,
}

impl Sampler for Filter {
    fn resample(&self, src: &PixelBuffer, width: u32, height: u32) -> OpsResult<PixelBuffer> {
        let mut dst = PixelBuffer::new(width, height)?;
        match self {
            Filter::Nearest => resample_nearest(src, &mut dst),
            Filter::Bilinear => resample_bilinear(src, &mut dst),
        }
        Ok(dst)
    }
}

/// Output pixel (x, y) copies source pixel
/// `(x * src_w / dst_w, y * src_h / dst_h)`, truncated.
fn resample_nearest(src: &PixelBuffer, dst: &mut PixelBuffer) {
    let (src_w, src_h) = src.dimensions();
    let (dst_w, dst_h) = dst.dimensions();

    let columns: Vec<usize> = (0..dst_w as u64)
        .map(|x| (x * src_w as u64 / dst_w as u64) as usize * CHANNELS)
        .collect();

    let row_len = dst.row_len();
    for (y, dst_row) in dst.as_raw_mut().chunks_exact_mut(row_len).enumerate() {
        let sy = (y as u64 * src_h as u64 / dst_h as u64) as u32;
        let src_row = src.row(sy);
        for (px, &sx) in dst_row.chunks_exact_mut(CHANNELS).zip(&columns) {
            px.copy_from_slice(&src_row[sx..sx + CHANNELS]);
        }
    }
}

/// Source sample position along one axis: the two neighbors and the
/// weight of the second.
#[derive(Debug, Clone, Copy)]
struct Tap {
    lo: usize,
    hi: usize,
    frac: f32,
}

/// Maps destination pixel centers onto the source axis.
///
/// Positions are computed in `f64`: an `f32` cannot address every pixel of
/// an axis longer than 2^24.
fn taps(src_len: u32, dst_len: u32) -> Vec<Tap> {
    let last = src_len as usize - 1;
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|i| {
            let center = ((i as f64 + 0.5) * scale - 0.5).clamp(0.0, last as f64);
            let lo = (center.floor() as usize).min(last);
            Tap {
                lo,
                hi: (lo + 1).min(last),
                frac: (center - lo as f64) as f32,
            }
        })
        .collect()
}

/// Bilinear resampling with alpha-weighted color.
///
/// Color channels are averaged with each neighbor weighted by its alpha,
/// so fully transparent pixels do not darken the edges of opaque ones.
fn resample_bilinear(src: &PixelBuffer, dst: &mut PixelBuffer) {
    let (src_w, src_h) = src.dimensions();
    let (dst_w, dst_h) = dst.dimensions();
    let xs = taps(src_w, dst_w);
    let ys = taps(src_h, dst_h);

    let row_len = dst.row_len();
    for (dst_row, ty) in dst.as_raw_mut().chunks_exact_mut(row_len).zip(&ys) {
        let top = src.row(ty.lo as u32);
        let bottom = src.row(ty.hi as u32);
        for (px, tx) in dst_row.chunks_exact_mut(CHANNELS).zip(&xs) {
            let neighbors = [
                (&top[tx.lo * CHANNELS..], (1.0 - tx.frac) * (1.0 - ty.frac)),
                (&top[tx.hi * CHANNELS..], tx.frac * (1.0 - ty.frac)),
                (&bottom[tx.lo * CHANNELS..], (1.0 - tx.frac) * ty.frac),
                (&bottom[tx.hi * CHANNELS..], tx.frac * ty.frac),
            ];

            let mut rgb = [0.0f32; 3];
            let mut alpha = 0.0f32;
            for (n, w) in neighbors {
                let wa = w * n[3] as f32;
                alpha += wa;
                for (acc, &v) in rgb.iter_mut().zip(&n[..3]) {
                    *acc += wa * v as f32;
                }
            }

            if alpha > 0.0 {
                for (out, acc) in px[..3].iter_mut().zip(rgb) {
                    *out = to_u8(acc / alpha);
                }
            } else {
                px[..3].fill(0);
            }
            px[3] = to_u8(alpha);
        }
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Resolves requested target dimensions against a source size.
///
/// A non-positive target is inferred from the other one, preserving the
/// aspect ratio: `width = src_w * target_h / src_h` (truncated), and
/// symmetrically for height.
///
/// # Errors
///
/// [`OpsError::InvalidArgument`] if both targets are non-positive, or if
/// the inferred dimension truncates to zero or exceeds `u32::MAX`.
///
/// ```rust
/// use raster_ops::resize::resolve_dimensions;
///
/// assert_eq!(resolve_dimensions(300, 200, 150, 0).unwrap(), (150, 100));
/// assert_eq!(resolve_dimensions(750, 1000, -1, 250).unwrap(), (187, 250));
/// assert!(resolve_dimensions(300, 200, 0, 0).is_err());
/// ```
pub fn resolve_dimensions(
    src_w: u32,
    src_h: u32,
    target_w: i32,
    target_h: i32,
) -> OpsResult<(u32, u32)> {
    if target_w <= 0 && target_h <= 0 {
        return Err(OpsError::invalid_argument(format!(
            "at least one target dimension must be positive, got {}x{}",
            target_w, target_h
        )));
    }

    let infer = |src_len: u32, known: i32, src_known: u32| -> OpsResult<u32> {
        let inferred = src_len as u64 * known as u64 / src_known as u64;
        match u32::try_from(inferred) {
            Ok(0) | Err(_) => Err(OpsError::invalid_argument(format!(
                "inferred dimension {} is not a usable size",
                inferred
            ))),
            Ok(v) => Ok(v),
        }
    };

    let width = if target_w <= 0 {
        infer(src_w, target_h, src_h)?
    } else {
        target_w as u32
    };
    let height = if target_h <= 0 {
        infer(src_h, target_w, src_w)?
    } else {
        target_h as u32
    };

    Ok((width, height))
}

/// Resizes an image.
///
/// See the [module docs](self) for dimension inference and quality.
/// When the resolved size equals the source size the input is returned
/// borrowed, for both qualities.
///
/// # Errors
///
/// [`OpsError::InvalidArgument`] if the target cannot be resolved; see
/// [`resolve_dimensions`].
pub fn resize(
    src: &PixelBuffer,
    target_w: i32,
    target_h: i32,
    quality: ResizeQuality,
) -> OpsResult<Cow<'_, PixelBuffer>> {
    let (width, height) = resolve_dimensions(src.width(), src.height(), target_w, target_h)?;
    trace!(
        src_w = src.width(),
        src_h = src.height(),
        width,
        height,
        ?quality,
        "resize"
    );

    if (width, height) == src.dimensions() {
        debug!(width, height, "resize: target equals source, returning input");
        return Ok(Cow::Borrowed(src));
    }

    let filter = quality.filter();
    if quality.is_progressive() {
        progressive_scale(src, width, height, &filter)
    } else {
        Ok(Cow::Owned(scale(src, width, height, &filter)?))
    }
}

/// Resizes with an integer quality code (0 = low, 1 = high).
///
/// # Errors
///
/// [`OpsError::InvalidArgument`] for any other code, or as [`resize`].
pub fn resize_with_code(
    src: &PixelBuffer,
    target_w: i32,
    target_h: i32,
    quality: i32,
) -> OpsResult<Cow<'_, PixelBuffer>> {
    resize(src, target_w, target_h, ResizeQuality::try_from(quality)?)
}

/// Scales directly to `width x height` in a single pass.
///
/// # Errors
///
/// [`OpsError::Core`] if either dimension is zero.
pub fn scale<S: Sampler + ?Sized>(
    src: &PixelBuffer,
    width: u32,
    height: u32,
    sampler: &S,
) -> OpsResult<PixelBuffer> {
    sampler.resample(src, width, height)
}

/// One progressive step along a single axis.
///
/// Halves when above the target, doubles when below, never passing it.
#[inline]
fn step_toward(current: u32, target: u32) -> u32 {
    if current > target {
        (current / 2).max(target)
    } else if current < target {
        current.saturating_mul(2).min(target)
    } else {
        current
    }
}

/// Lists the intermediate sizes progressive scaling visits, ending with
/// the target. Empty when the source already has the target size.
///
/// ```rust
/// use raster_ops::resize::progressive_steps;
///
/// assert_eq!(
///     progressive_steps((1000, 100), (100, 400)),
///     vec![(500, 200), (250, 400), (125, 400), (100, 400)]
/// );
/// ```
pub fn progressive_steps(from: (u32, u32), to: (u32, u32)) -> Vec<(u32, u32)> {
    let (mut w, mut h) = from;
    let mut steps = Vec::new();
    while (w, h) != to {
        w = step_toward(w, to.0);
        h = step_toward(h, to.1);
        steps.push((w, h));
    }
    steps
}

/// Scales toward `width x height` in steps of at most a factor of two per
/// axis, resampling with `sampler` at each step.
///
/// Each intermediate buffer is dropped as soon as the next one exists.
/// Returns the input borrowed when no step is needed.
///
/// # Errors
///
/// [`OpsError::Core`] if either dimension is zero.
pub fn progressive_scale<'a, S: Sampler + ?Sized>(
    src: &'a PixelBuffer,
    width: u32,
    height: u32,
    sampler: &S,
) -> OpsResult<Cow<'a, PixelBuffer>> {
    if width == 0 || height == 0 {
        return Err(raster_core::Error::invalid_argument(format!(
            "scale target must be > 0, got {}x{}",
            width, height
        ))
        .into());
    }

    let mut current = Cow::Borrowed(src);
    for (step, (w, h)) in progressive_steps(src.dimensions(), (width, height))
        .into_iter()
        .enumerate()
    {
        debug!(step, width = w, height = h, "progressive resize step");
        current = Cow::Owned(sampler.resample(&current, w, h)?);
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_core::Color;

    fn checker(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Color::WHITE
            } else {
                Color::BLACK
            }
        })
        .unwrap()
    }

    #[test]
    fn test_quality_codes() {
        assert_eq!(ResizeQuality::try_from(0).unwrap(), ResizeQuality::Low);
        assert_eq!(ResizeQuality::try_from(1).unwrap(), ResizeQuality::High);
        assert!(ResizeQuality::try_from(2).unwrap_err().is_invalid_argument());
        assert!(ResizeQuality::try_from(-1).is_err());

        let src = checker(4, 4);
        assert!(resize_with_code(&src, 2, 2, 7).is_err());
        assert_eq!(resize_with_code(&src, 2, 2, 1).unwrap().dimensions(), (2, 2));
    }

    #[test]
    fn test_resolve_dimensions() {
        assert_eq!(resolve_dimensions(300, 200, 150, 0).unwrap(), (150, 100));
        assert_eq!(resolve_dimensions(300, 200, 0, 100).unwrap(), (150, 100));
        assert_eq!(resolve_dimensions(750, 1000, 500, 0).unwrap(), (500, 666));
        assert_eq!(resolve_dimensions(750, 1000, 0, 250).unwrap(), (187, 250));
        assert_eq!(resolve_dimensions(750, 1000, -10, 20).unwrap(), (15, 20));
        assert_eq!(resolve_dimensions(10, 10, 3, 7).unwrap(), (3, 7));

        assert!(resolve_dimensions(300, 200, 0, 0).unwrap_err().is_invalid_argument());
        assert!(resolve_dimensions(300, 200, -5, -5).is_err());
        // 1 * 1 / 1000 truncates to zero.
        assert!(resolve_dimensions(1, 1000, 0, 1).is_err());
    }

    #[test]
    fn test_same_size_borrows() {
        let src = checker(8, 6);
        for quality in [ResizeQuality::Low, ResizeQuality::High] {
            let out = resize(&src, 8, 6, quality).unwrap();
            assert!(matches!(out, Cow::Borrowed(_)));
            assert_eq!(*out, src);
            // Inferred size that lands on the source size also short-circuits.
            assert!(matches!(resize(&src, 8, 0, quality).unwrap(), Cow::Borrowed(_)));
        }
    }

    #[test]
    fn test_nearest_upscale() {
        let src = PixelBuffer::from_raw(
            2,
            2,
            [Color::RED, Color::GREEN, Color::BLUE, Color::WHITE]
                .iter()
                .flat_map(|c| c.to_array())
                .collect(),
        )
        .unwrap();
        let dst = resize(&src, 4, 4, ResizeQuality::Low).unwrap();
        assert_eq!(dst.dimensions(), (4, 4));
        assert_eq!(dst.pixel(0, 0), Color::RED);
        assert_eq!(dst.pixel(1, 1), Color::RED);
        assert_eq!(dst.pixel(3, 0), Color::GREEN);
        assert_eq!(dst.pixel(0, 3), Color::BLUE);
        assert_eq!(dst.pixel(3, 3), Color::WHITE);
    }

    #[test]
    fn test_nearest_downscale_samples_truncated_coords() {
        let src = PixelBuffer::from_fn(9, 1, |x, _| Color::rgb(x as u8, 0, 0)).unwrap();
        let dst = resize(&src, 4, 1, ResizeQuality::Low).unwrap();
        // x * 9 / 4 -> 0, 2, 4, 6
        let reds: Vec<u8> = dst.pixels().map(|(_, _, c)| c.red()).collect();
        assert_eq!(reds, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_high_quality_preserves_aspect_and_color() {
        let src = PixelBuffer::filled(300, 200, Color::RED).unwrap();
        let dst = resize(&src, 150, 0, ResizeQuality::High).unwrap();
        assert_eq!(dst.dimensions(), (150, 100));
        assert!(dst.pixels().all(|(_, _, c)| c == Color::RED));
    }

    #[test]
    fn test_high_quality_upscale_then_mixed() {
        let src = checker(187, 250);
        let dst = resize(&src, 1400, 1000, ResizeQuality::High).unwrap();
        assert_eq!(dst.dimensions(), (1400, 1000));

        let dst = resize(&src, 40, 600, ResizeQuality::High).unwrap();
        assert_eq!(dst.dimensions(), (40, 600));
    }

    #[test]
    fn test_progressive_steps() {
        assert!(progressive_steps((10, 10), (10, 10)).is_empty());
        assert_eq!(
            progressive_steps((800, 600), (100, 600)),
            vec![(400, 600), (200, 600), (100, 600)]
        );
        assert_eq!(
            progressive_steps((187, 250), (1400, 1000)),
            vec![(374, 500), (748, 1000), (1400, 1000)]
        );
        // Clamped on the last step instead of overshooting.
        assert_eq!(progressive_steps((300, 200), (150, 100)), vec![(150, 100)]);
        assert_eq!(progressive_steps((300, 200), (149, 99)), vec![(150, 100), (149, 99)]);
    }

    #[test]
    fn test_progressive_steps_move_closer() {
        let from = (4096, 3);
        let to = (5, 2000);
        let mut prev = from;
        for step in progressive_steps(from, to) {
            assert!(step.0.abs_diff(to.0) < prev.0.abs_diff(to.0) || step.0 == to.0);
            assert!(step.1.abs_diff(to.1) < prev.1.abs_diff(to.1) || step.1 == to.1);
            prev = step;
        }
        assert_eq!(prev, to);
    }

    #[test]
    fn test_bilinear_smooths_checker() {
        // Halving a checkerboard with bilinear blends neighbors to mid gray.
        let src = checker(64, 64);
        let dst = Filter::Bilinear.resample(&src, 32, 32).unwrap();
        for (_, _, c) in dst.pixels() {
            assert!((120..=135).contains(&c.red()), "{c:?}");
            assert_eq!(c.alpha(), 255);
        }
    }

    #[test]
    fn test_bilinear_identity() {
        let src = PixelBuffer::from_fn(5, 4, |x, y| Color::rgba(x as u8 * 40, y as u8 * 60, 7, 255))
            .unwrap();
        assert_eq!(Filter::Bilinear.resample(&src, 5, 4).unwrap(), src);
    }

    #[test]
    fn test_bilinear_ignores_transparent_color() {
        // Transparent black next to opaque white: the blend stays white.
        let src = PixelBuffer::from_fn(2, 1, |x, _| {
            if x == 0 { Color::WHITE } else { Color::TRANSPARENT }
        })
        .unwrap();
        let dst = Filter::Bilinear.resample(&src, 1, 1).unwrap();
        let c = dst.pixel(0, 0);
        assert_eq!((c.red(), c.green(), c.blue()), (255, 255, 255));
        assert!((127..=128).contains(&c.alpha()));
    }

    #[test]
    fn test_taps_stay_in_range_on_long_axes() {
        for (src_len, dst_len) in [
            (16_777_220, 8_388_610),
            (16_777_217, 16_777_216),
            (33_554_467, 16_777_233),
            (8_388_610, 16_777_220),
        ] {
            let taps = taps(src_len, dst_len);
            assert_eq!(taps.len(), dst_len as usize);
            for (i, t) in taps.iter().enumerate() {
                assert!(t.lo < src_len as usize, "lo {} @ {i} for {src_len}", t.lo);
                assert!(t.hi < src_len as usize, "hi {} @ {i} for {src_len}", t.hi);
                assert!((0.0..=1.0).contains(&t.frac));
            }

            // Exact halving lands every center on a pixel boundary.
            if src_len == 2 * dst_len {
                for (i, t) in taps.iter().enumerate().step_by(99_991) {
                    assert_eq!(t.lo, 2 * i, "{src_len} -> {dst_len}");
                    assert!((t.frac - 0.5).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_taps_track_exact_positions() {
        let (src_len, dst_len) = (33_554_467u32, 16_777_233u32);
        let taps = taps(src_len, dst_len);
        for i in (0..dst_len as usize).step_by(65_537).chain([dst_len as usize - 1]) {
            // Integer reference: floor(((2i + 1) * src - dst) / (2 * dst)).
            let num = (2 * i as u64 + 1) * src_len as u64 - dst_len as u64;
            let expected = (num / (2 * dst_len as u64)).min(src_len as u64 - 1);
            assert_eq!(taps[i].lo as u64, expected, "tap {i}");
        }
    }

    #[test]
    fn test_bilinear_wide_row() {
        let src = PixelBuffer::from_fn(16_777_220, 1, |x, _| {
            if x % 2 == 0 {
                Color::RED
            } else {
                Color::BLUE
            }
        })
        .unwrap();
        let dst = Filter::Bilinear.resample(&src, 8_388_610, 1).unwrap();
        assert_eq!(dst.dimensions(), (8_388_610, 1));
        // Each output averages one red and one blue neighbor.
        for x in [0, 4_194_304, 8_388_609] {
            assert_eq!(dst.pixel(x, 0), Color::rgb(128, 0, 128), "x = {x}");
        }
    }

    #[test]
    fn test_custom_sampler() {
        struct Fill(Color);
        impl Sampler for Fill {
            fn resample(&self, _src: &PixelBuffer, w: u32, h: u32) -> OpsResult<PixelBuffer> {
                Ok(PixelBuffer::filled(w, h, self.0)?)
            }
        }
        let src = checker(16, 16);
        let out = progressive_scale(&src, 2, 2, &Fill(Color::CYAN)).unwrap();
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.pixel(1, 1), Color::CYAN);
        assert!(progressive_scale(&src, 0, 2, &Fill(Color::CYAN)).is_err());
    }
}
