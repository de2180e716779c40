//! JPEG format support.
//!
//! Decodes baseline and progressive JPEG into opaque RGBA8. Grayscale is
//! replicated across RGB, 16-bit grayscale keeps its high byte and CMYK is
//! converted with the usual `(1 - c) * (1 - k)` approximation.

use std::io::Cursor;
use std::path::Path;

use raster_core::PixelBuffer;
use tracing::trace;

use crate::{ImageReader, IoError, IoResult};

/// JPEG reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegReader;

impl ImageReader for JpegReader {
    fn read_from_memory(&self, data: &[u8]) -> IoResult<PixelBuffer> {
        let mut decoder = jpeg_decoder::Decoder::new(Cursor::new(data));
        let pixels = decoder
            .decode()
            .map_err(|e| IoError::DecodeError(e.to_string()))?;

        let info = decoder
            .info()
            .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

        let width = info.width as u32;
        let height = info.height as u32;
        trace!(width, height, pixel_format = ?info.pixel_format, "jpeg decode");

        let rgba: Vec<u8> = match info.pixel_format {
            jpeg_decoder::PixelFormat::RGB24 => pixels
                .chunks_exact(3)
                .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
                .collect(),
            jpeg_decoder::PixelFormat::L8 => {
                pixels.iter().flat_map(|&g| [g, g, g, 255]).collect()
            }
            jpeg_decoder::PixelFormat::L16 => pixels
                .chunks_exact(2)
                .flat_map(|l16| {
                    let g = l16[0]; // High byte
                    [g, g, g, 255]
                })
                .collect(),
            jpeg_decoder::PixelFormat::CMYK32 => pixels
                .chunks_exact(4)
                .flat_map(|cmyk| {
                    let k = 1.0 - cmyk[3] as f32 / 255.0;
                    let channel = |v: u8| ((1.0 - v as f32 / 255.0) * k * 255.0) as u8;
                    [channel(cmyk[0]), channel(cmyk[1]), channel(cmyk[2]), 255]
                })
                .collect(),
        };

        Ok(PixelBuffer::from_raw(width, height, rgba)?)
    }
}

/// Reads a JPEG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    JpegReader.read(path)
}

/// Decodes JPEG bytes.
pub fn decode(data: &[u8]) -> IoResult<PixelBuffer> {
    JpegReader.read_from_memory(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_rgb(width: u16, height: u16, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let encoder = jpeg_encoder::Encoder::new(&mut out, 95);
        encoder
            .encode(data, width, height, jpeg_encoder::ColorType::Rgb)
            .unwrap();
        out
    }

    #[test]
    fn test_decode_flat_rgb() {
        let data: Vec<u8> = std::iter::repeat([200u8, 40, 40]).take(16 * 8).flatten().collect();
        let buf = decode(&encode_rgb(16, 8, &data)).unwrap();
        assert_eq!(buf.dimensions(), (16, 8));
        assert!(buf.is_opaque());
        // Lossy: allow a small drift on a flat color.
        let c = buf.pixel(7, 3);
        assert!(c.red().abs_diff(200) <= 4, "{c:?}");
        assert!(c.green().abs_diff(40) <= 4, "{c:?}");
    }

    #[test]
    fn test_decode_truncated_fails() {
        let data = vec![0u8; 8 * 8 * 3];
        let bytes = encode_rgb(8, 8, &data);
        assert!(decode(&bytes[..bytes.len() / 3]).is_err());
    }
}
