//! JPEG encoding of the 16-bit working buffer.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::pixel::{PixelBuffer, CHANNELS};

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Sample data length doesn't match the buffer dimensions
    #[error("Invalid pixel data: expected {expected} samples (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a [`PixelBuffer`] to JPEG bytes.
///
/// The 16-bit RGBA canvas is narrowed to 8-bit RGB at this boundary (JPEG
/// has no alpha channel).
///
/// # Arguments
///
/// * `buffer` - Image to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality;
///   out-of-range values are clamped)
pub fn encode_jpeg(buffer: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }

    let expected = buffer.width as usize * buffer.height as usize * CHANNELS;
    if buffer.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: buffer.pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);
    let rgb = buffer.to_rgb8();

    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder
        .write_image(&rgb, buffer.width, buffer.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(out.into_inner())
}
