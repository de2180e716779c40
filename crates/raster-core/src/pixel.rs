//! The 8-bit RGBA color value stored at every buffer coordinate.
//!
//! [`Color`] is a plain `Copy` value. Its channels are only readable; every
//! "modification" builds a new color, so a color handed to a transform can
//! never change underneath it.
//!
//! ```
//! use raster_core::Color;
//!
//! let teal = Color::rgb(0, 128, 128);
//! assert_eq!(teal.alpha(), 255);
//! assert_eq!(teal.to_array(), [0, 128, 128, 255]);
//! ```
//!
//! # Memory Layout
//!
//! `#[repr(C)]` with channels in R, G, B, A order, matching the interleaved
//! layout of [`PixelBuffer`](crate::PixelBuffer) storage.

use std::fmt;

/// Number of channels stored per pixel.
pub const CHANNELS: usize = 4;

/// An immutable 8-bit RGBA color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Opaque cyan.
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Creates a color from all four channels.
    #[inline]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        self.red
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        self.green
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Alpha channel (0 = transparent, 255 = opaque).
    #[inline]
    pub const fn alpha(self) -> u8 {
        self.alpha
    }

    /// Returns `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Builds a color from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::rgba(arr[0], arr[1], arr[2], arr[3])
    }

    /// Reads a color from the first four bytes of an interleaved RGBA slice.
    ///
    /// # Panics
    ///
    /// Panics if `px` has fewer than four elements.
    #[inline]
    pub fn from_slice(px: &[u8]) -> Self {
        Self::rgba(px[0], px[1], px[2], px[3])
    }

    /// Writes this color into the first four bytes of an interleaved RGBA slice.
    #[inline]
    pub fn write_to(self, px: &mut [u8]) {
        px[..CHANNELS].copy_from_slice(&self.to_array());
    }

    /// Unpacks a `0xAARRGGBB` pixel word.
    #[inline]
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self::rgba(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Packs into a `0xAARRGGBB` pixel word.
    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        (self.alpha as u32) << 24
            | (self.red as u32) << 16
            | (self.green as u32) << 8
            | self.blue as u32
    }

    /// Returns `true` if alpha is 255.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.alpha == 255
    }
}

impl From<[u8; 4]> for Color {
    fn from(arr: [u8; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb_u32())
    }
}
