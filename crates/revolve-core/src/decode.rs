//! JPEG decoding into the 16-bit working buffer.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;

use crate::pixel::PixelBuffer;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not recognized as a supported image format.
    #[error("Invalid or unsupported image format: {0}")]
    InvalidFormat(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Decode a JPEG byte stream into a [`PixelBuffer`].
///
/// The 8-bit JPEG samples are widened to 16 bits per channel so later
/// stages work on the high-precision canvas.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a readable
/// image, `DecodeError::CorruptedFile` if decoding fails midway.
pub fn decode_jpeg(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::InvalidFormat(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(PixelBuffer::from_rgba16_image(img.into_rgba16()))
}
