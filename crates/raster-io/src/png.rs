//! PNG format support.
//!
//! Decodes every PNG color type into RGBA8. Palette and low-bit-depth
//! images are expanded, 16-bit channels are reduced to their high byte,
//! and `tRNS` transparency becomes a real alpha channel.
//!
//! # Example
//!
//! ```rust,ignore
//! use raster_io::png;
//!
//! let icon = png::read("icon.png")?;
//! ```

use std::io::Cursor;
use std::path::Path;

use raster_core::PixelBuffer;
use tracing::trace;

use crate::{ImageReader, IoError, IoResult};

/// PNG reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngReader;

impl ImageReader for PngReader {
    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::normalize_to_color8());

        let mut reader = decoder
            .read_info()
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

        let buf_size = reader
            .output_buffer_size()
            .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
        let mut buf = vec![0u8; buf_size];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
        buf.truncate(info.buffer_size());

        trace!(
            width = info.width,
            height = info.height,
            color_type = ?info.color_type,
            "png decode"
        );

        let rgba = match (info.color_type, info.bit_depth) {
            (png::ColorType::Rgba, png::BitDepth::Eight) => buf,
            (png::ColorType::Rgb, png::BitDepth::Eight) => buf
                .chunks_exact(3)
                .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
                .collect(),
            (png::ColorType::Grayscale, png::BitDepth::Eight) => {
                buf.iter().flat_map(|&g| [g, g, g, 255]).collect()
            }
            (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => buf
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect(),
            (color_type, bit_depth) => {
                return Err(IoError::UnsupportedPixelFormat(format!(
                    "PNG {:?} {:?}",
                    color_type, bit_depth
                )));
            }
        };

        Ok(PixelBuffer::from_raw(info.width, info.height, rgba)?)
    }
}

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    PngReader.read(path)
}

/// Decodes PNG bytes.
pub fn decode(data: &[u8]) -> IoResult<PixelBuffer> {
    PngReader.read_from_memory(data)
}
