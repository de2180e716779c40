//! # raster-io
//!
//! Decoding of encoded images into [`raster_core::PixelBuffer`].
//!
//! Unreadable input is an expected condition at this boundary (a missing
//! icon, a truncated download), so the top-level [`read`] and [`decode`]
//! report failure as `None` and log the cause at `debug` level. Use
//! [`try_read`] and [`try_decode`] when the cause matters.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use raster_io::read;
//!
//! let icon = read("assets/icon.png").unwrap_or_else(placeholder);
//! ```
//!
//! # Supported Formats
//!
//! | Format | Color types                          |
//! |--------|--------------------------------------|
//! | PNG    | Gray, GrayAlpha, RGB, RGBA, indexed  |
//! | JPEG   | L8, L16, RGB24, CMYK32               |
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use std::path::Path;

use raster_core::PixelBuffer;
use tracing::debug;

mod error;
mod traits;

pub mod detect;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use traits::ImageReader;

/// Reads an image file, returning `None` if it is missing or unreadable.
pub fn read<P: AsRef<Path>>(path: P) -> Option<PixelBuffer> {
    let path = path.as_ref();
    match try_read(path) {
        Ok(image) => Some(image),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "read failed");
            None
        }
    }
}

/// Decodes in-memory image bytes, returning `None` if they are unreadable.
pub fn decode(data: &[u8]) -> Option<PixelBuffer> {
    match try_decode(data) {
        Ok(image) => Some(image),
        Err(err) => {
            debug!(len = data.len(), error = %err, "decode failed");
            None
        }
    }
}

/// Reads an image file with format auto-detection.
///
/// The format is taken from the file's magic bytes, falling back to the
/// extension.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be read
/// - [`IoError::UnsupportedFormat`] if the format is not recognized or its
///   feature is disabled
/// - [`IoError::DecodeError`] if the data is corrupt
pub fn try_read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let format = Format::detect(path, &data);
    decode_as(format, &data).map_err(|err| match err {
        IoError::UnsupportedFormat(_) => IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        ),
        other => other,
    })
}

/// Decodes in-memory image bytes, detecting the format from magic bytes.
pub fn try_decode(data: &[u8]) -> IoResult<PixelBuffer> {
    decode_as(Format::from_bytes(data), data)
}

fn decode_as(format: Format, data: &[u8]) -> IoResult<PixelBuffer> {
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::decode(data),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::decode(data),

        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!("{other:?}"))),
    }
}
