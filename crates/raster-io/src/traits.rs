//! Decoder trait implemented by each format module.

use std::path::Path;

use raster_core::PixelBuffer;

use crate::IoResult;

/// Trait for image format readers.
///
/// Implement this trait to add support for decoding a new format.
///
/// # Example
///
/// ```rust
/// use raster_core::{Color, PixelBuffer};
/// use raster_io::{ImageReader, IoResult};
///
/// /// Treats every input as a single opaque gray pixel.
/// struct GrayStub;
///
/// impl ImageReader for GrayStub {
///     fn read_from_memory(&self, _data: &[u8]) -> IoResult<PixelBuffer> {
///         Ok(PixelBuffer::filled(1, 1, Color::rgb(128, 128, 128))?)
///     }
/// }
///
/// assert_eq!(GrayStub.read_from_memory(b"anything").unwrap().dimensions(), (1, 1));
/// ```
pub trait ImageReader {
    /// Decodes an image held in memory.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer>;

    /// Decodes an image from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<PixelBuffer>
    where
        Self: Sized,
    {
        let data = std::fs::read(path.as_ref())?;
        self.read_from_memory(&data)
    }
}
