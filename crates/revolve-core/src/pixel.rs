//! 16-bit RGBA pixel buffer shared by the decode, transform and encode stages.
//!
//! Sixteen bits per channel keeps the working canvas free of banding even
//! though the codec boundary is 8-bit JPEG on both ends.

use image::{ImageBuffer, Rgba};

/// Channels per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// A single RGBA pixel, 16 bits per channel.
pub type Pixel = [u16; CHANNELS];

/// Fully transparent black; the fill for destination areas with no
/// corresponding source content.
pub const TRANSPARENT: Pixel = [0; CHANNELS];

/// An in-memory image with RGBA pixel data, 16 bits per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA samples in row-major order (4 values per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u16>,
}

impl PixelBuffer {
    /// Allocate a zeroed (fully transparent) canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    /// Create a PixelBuffer from raw samples.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u16>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * CHANNELS,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a PixelBuffer from the image crate's 16-bit RGBA buffer.
    pub fn from_rgba16_image(img: ImageBuffer<Rgba<u16>, Vec<u16>>) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Any coordinate outside the buffer reads as [`TRANSPARENT`]. Callers
    /// that inverse-map beyond the source extent rely on this instead of
    /// clamping.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Pixel {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return TRANSPARENT;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Write the pixel at `(x, y)`. The coordinate must be in bounds.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&pixel);
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Check if this is an empty/degenerate image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Narrow to 8-bit RGB samples for the JPEG encoder (alpha dropped).
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(CHANNELS)
            .flat_map(|px| [(px[0] >> 8) as u8, (px[1] >> 8) as u8, (px[2] >> 8) as u8])
            .collect()
    }
}
