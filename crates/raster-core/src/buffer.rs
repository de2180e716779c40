//! Owned RGBA pixel buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, with channels
//! interleaved:
//!
//! ```text
//! Memory: [R G B A R G B A R G B A ...]  ← Row 0
//!         [R G B A R G B A R G B A ...]  ← Row 1
//!         ...
//! ```
//!
//! # Ownership
//!
//! A [`PixelBuffer`] exclusively owns its storage. `Clone` (and its explicit
//! spelling, [`PixelBuffer::deep_copy`]) allocates fresh storage, so two
//! buffers never alias after a copy. Transforms in `raster-ops` read their
//! input through `&PixelBuffer` and hand back a new buffer.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::{Color, PixelBuffer};
//!
//! let mut buf = PixelBuffer::filled(4, 3, Color::WHITE).unwrap();
//! buf.set(1, 2, Color::RED).unwrap();
//! assert_eq!(buf.get(1, 2).unwrap(), Color::RED);
//! assert!(buf.get(4, 0).is_err());
//! ```

use crate::pixel::CHANNELS;
use crate::{Color, Error, Result};

/// Owned, mutable 2D grid of RGBA pixels.
///
/// Width and height are always at least 1 and `width * height` pixels are
/// always present.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Creates a buffer filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either dimension is zero or the
    /// byte size overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Creates a buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        let px = color.to_array();
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&px);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer by evaluating `f(x, y)` for every coordinate.
    ///
    /// ```rust
    /// use raster_core::{Color, PixelBuffer};
    ///
    /// let ramp = PixelBuffer::from_fn(256, 1, |x, _| Color::rgb(x as u8, 0, 0)).unwrap();
    /// assert_eq!(ramp.pixel(200, 0).red(), 200);
    /// ```
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Color,
    {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).to_array());
            }
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Wraps interleaved RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for zero dimensions or if
    /// `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_argument(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Allocates a transparent buffer with the same dimensions as `self`.
    pub fn blank_like(&self) -> PixelBuffer {
        Self {
            data: vec![0; self.data.len()],
            width: self.width,
            height: self.height,
        }
    }

    /// Allocates a transparent buffer with width and height swapped.
    pub fn blank_transposed(&self) -> PixelBuffer {
        Self {
            data: vec![0; self.data.len()],
            width: self.height,
            height: self.width,
        }
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    #[inline]
    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if (x, y) is outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Result<Color> {
        if !self.contains(x, y) {
            return Err(Error::out_of_range(x, y, self.width, self.height));
        }
        Ok(self.pixel(x, y))
    }

    /// Sets the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if (x, y) is outside the buffer.
    /// The buffer is left untouched in that case.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::out_of_range(x, y, self.width, self.height));
        }
        self.put_pixel(x, y, color);
        Ok(())
    }

    /// Returns the color at (x, y) without a recoverable bounds check.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(self.contains(x, y), "pixel ({x}, {y}) out of bounds");
        let offset = self.offset(x, y);
        Color::from_slice(&self.data[offset..offset + CHANNELS])
    }

    /// Writes the color at (x, y) without a recoverable bounds check.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        assert!(self.contains(x, y), "pixel ({x}, {y}) out of bounds");
        let offset = self.offset(x, y);
        color.write_to(&mut self.data[offset..offset + CHANNELS]);
    }

    /// Returns an independent copy with identical dimensions and pixels.
    ///
    /// The copy shares no storage with `self`; mutating one never affects
    /// the other.
    #[inline]
    pub fn deep_copy(&self) -> PixelBuffer {
        self.clone()
    }

    /// Returns a row of interleaved RGBA bytes.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} out of bounds");
        let start = self.offset(0, y);
        &self.data[start..start + self.row_len()]
    }

    /// Row length in bytes.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Raw interleaved RGBA bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw interleaved RGBA bytes.
    ///
    /// The slice length is fixed, so the size invariant cannot be broken
    /// through it.
    #[inline]
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns its bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Iterates over all pixels with their coordinates, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let width = self.width;
        self.data
            .chunks_exact(CHANNELS)
            .enumerate()
            .map(move |(i, px)| {
                let i = i as u32;
                (i % width, i / width, Color::from_slice(px))
            })
    }

    /// Applies `f` to every pixel of this buffer in place.
    pub fn map_in_place<F>(&mut self, f: F)
    where
        F: Fn(Color) -> Color,
    {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            f(Color::from_slice(px)).write_to(px);
        }
    }

    /// Returns `true` if every pixel has alpha 255.
    pub fn is_opaque(&self) -> bool {
        self.data.chunks_exact(CHANNELS).all(|px| px[3] == 255)
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Validates dimensions and returns the storage length in bytes.
fn byte_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_argument(format!(
            "buffer dimensions must be > 0, got {}x{}",
            width, height
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            Error::invalid_argument(format!("buffer size {}x{} overflows", width, height))
        })
}
