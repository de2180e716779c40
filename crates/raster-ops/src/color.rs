//! Per-color operations.
//!
//! Pure functions over single [`Color`] values. Nothing here touches a
//! [`PixelBuffer`](raster_core::PixelBuffer); the whole-image versions live
//! in [`crate::recolor`].
//!
//! Alpha is never compared by [`within_tolerance`] and never changed by
//! [`invert`] or [`grayscale`].
//!
//! # Example
//!
//! ```rust
//! use raster_core::Color;
//! use raster_ops::color::{grayscale, invert, within_tolerance};
//!
//! assert_eq!(invert(Color::BLUE), Color::rgb(255, 255, 0));
//! assert_eq!(grayscale(Color::BLUE), Color::rgb(85, 85, 85));
//! assert!(within_tolerance(Color::rgb(0, 0, 0), Color::rgb(10, 10, 10), 15).unwrap());
//! ```

use raster_core::Color;

use crate::{OpsError, OpsResult};

/// Largest meaningful per-channel difference for 8-bit channels.
pub const MAX_THRESHOLD: i32 = 255;

/// Checks a tolerance threshold is within `0..=255`.
pub(crate) fn validate_threshold(threshold: i32) -> OpsResult<u8> {
    u8::try_from(threshold).map_err(|_| {
        OpsError::invalid_argument(format!(
            "threshold {} must be within 0..={}",
            threshold, MAX_THRESHOLD
        ))
    })
}

/// Checks an alpha value is within `0..=255`.
pub(crate) fn validate_alpha(alpha: i32) -> OpsResult<u8> {
    u8::try_from(alpha)
        .map_err(|_| OpsError::invalid_argument(format!("alpha {} out of range 0..=255", alpha)))
}

/// Channel test used once the threshold is known to be valid.
#[inline]
pub(crate) fn rgb_within(a: Color, b: Color, threshold: u8) -> bool {
    a.red().abs_diff(b.red()) <= threshold
        && a.green().abs_diff(b.green()) <= threshold
        && a.blue().abs_diff(b.blue()) <= threshold
}

/// Returns `true` if every RGB channel of `a` and `b` differs by at most
/// `threshold`.
///
/// Either color may be absent (`None`); an absent color never matches.
///
/// # Errors
///
/// [`OpsError::InvalidArgument`] if `threshold` is outside `0..=255`. The
/// threshold is validated before absence is considered.
///
/// ```rust
/// use raster_core::Color;
/// use raster_ops::color::within_tolerance;
///
/// assert!(!within_tolerance(None::<Color>, Color::BLUE, 20).unwrap());
/// assert!(within_tolerance(Color::BLUE, Color::RED, -1).is_err());
/// ```
pub fn within_tolerance(
    a: impl Into<Option<Color>>,
    b: impl Into<Option<Color>>,
    threshold: i32,
) -> OpsResult<bool> {
    let threshold = validate_threshold(threshold)?;
    match (a.into(), b.into()) {
        (Some(a), Some(b)) => Ok(rgb_within(a, b, threshold)),
        _ => Ok(false),
    }
}

/// Inverts the RGB channels, keeping alpha.
#[inline]
pub fn invert(c: Color) -> Color {
    Color::rgba(255 - c.red(), 255 - c.green(), 255 - c.blue(), c.alpha())
}

/// Replaces RGB with their truncated mean, keeping alpha.
#[inline]
pub fn grayscale(c: Color) -> Color {
    let mean = ((c.red() as u16 + c.green() as u16 + c.blue() as u16) / 3) as u8;
    Color::rgba(mean, mean, mean, c.alpha())
}

/// Returns `c` with its alpha replaced.
///
/// # Errors
///
/// [`OpsError::InvalidArgument`] if `alpha` is outside `0..=255`.
pub fn with_alpha(c: Color, alpha: i32) -> OpsResult<Color> {
    let alpha = validate_alpha(alpha)?;
    Ok(Color::rgba(c.red(), c.green(), c.blue(), alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_tolerance_cases() {
        let cases = [
            (true, Color::rgb(0, 0, 0), Color::rgb(10, 10, 10), 15),
            (true, Color::rgb(35, 20, 90), Color::rgb(5, 40, 120), 35),
            (true, Color::rgba(120, 40, 20, 30), Color::rgba(130, 50, 10, 100), 20),
            (true, Color::rgba(200, 240, 220, 30), Color::rgb(180, 250, 210), 30),
            (false, Color::rgb(10, 10, 10), Color::rgb(200, 200, 200), 50),
            (false, Color::rgb(0, 50, 0), Color::rgb(0, 70, 0), 10),
            (false, Color::rgb(0, 0, 70), Color::rgb(0, 0, 30), 15),
        ];
        for (expected, a, b, t) in cases {
            assert_eq!(within_tolerance(a, b, t).unwrap(), expected, "{a:?} vs {b:?} @ {t}");
            // Symmetric in its color arguments.
            assert_eq!(within_tolerance(b, a, t).unwrap(), expected);
        }
    }

    #[test]
    fn test_within_tolerance_absent() {
        assert!(!within_tolerance(None::<Color>, Color::BLUE, 20).unwrap());
        assert!(!within_tolerance(Color::BLUE, None::<Color>, 20).unwrap());
        assert!(!within_tolerance(None::<Color>, None::<Color>, 4).unwrap());
    }

    #[test]
    fn test_within_tolerance_ignores_alpha() {
        let a = Color::rgba(1, 2, 3, 0);
        let b = Color::rgba(1, 2, 3, 255);
        assert!(within_tolerance(a, b, 0).unwrap());
    }

    #[test]
    fn test_threshold_validation() {
        assert!(within_tolerance(Color::BLUE, Color::RED, -27)
            .unwrap_err()
            .is_invalid_argument());
        assert!(within_tolerance(Color::BLUE, Color::RED, 270).is_err());
        // Validated even when a color is absent.
        assert!(within_tolerance(None::<Color>, Color::RED, -1).is_err());
        assert!(within_tolerance(Color::BLUE, Color::RED, 255).unwrap());
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(Color::BLUE), Color::rgb(255, 255, 0));
        assert_eq!(invert(Color::rgb(100, 200, 200)), Color::rgb(155, 55, 55));
        assert_eq!(invert(Color::BLACK), Color::WHITE);
        assert_eq!(invert(Color::rgba(250, 100, 0, 200)), Color::rgba(5, 155, 255, 200));
        assert_eq!(invert(Color::rgba(255, 255, 255, 0)), Color::rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_invert_involution() {
        for v in (0..=255u8).step_by(17) {
            let c = Color::rgba(v, 255 - v, v / 2, v);
            assert_eq!(invert(invert(c)), c);
            assert_eq!(invert(c).alpha(), c.alpha());
        }
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(grayscale(Color::BLUE), Color::rgb(85, 85, 85));
        assert_eq!(grayscale(Color::rgb(200, 250, 150)), Color::rgb(200, 200, 200));
        assert_eq!(grayscale(Color::WHITE), Color::WHITE);
        assert_eq!(grayscale(Color::BLACK), Color::BLACK);
        // 230 / 3 = 76.67, truncated
        assert_eq!(grayscale(Color::rgba(130, 100, 0, 200)), Color::rgba(76, 76, 76, 200));
        assert_eq!(grayscale(Color::rgba(90, 60, 130, 150)), Color::rgba(93, 93, 93, 150));
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha(Color::BLUE, 50).unwrap(), Color::rgba(0, 0, 255, 50));
        assert_eq!(with_alpha(Color::BLACK, 255).unwrap(), Color::BLACK);
        assert_eq!(with_alpha(Color::WHITE, 0).unwrap(), Color::rgba(255, 255, 255, 0));
        assert!(with_alpha(Color::BLUE, -27).unwrap_err().is_invalid_argument());
        assert!(with_alpha(Color::BLUE, 270).is_err());
    }
}
