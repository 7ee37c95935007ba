//! Inverse-mapping scale/rotate with nearest-neighbor sampling.
//!
//! # Algorithm
//!
//! The transform uses inverse mapping: for each pixel in the output image,
//! the corresponding source coordinate is found by undoing the scale and
//! rotation in polar form, and the single nearest source pixel is copied.
//! Iterating the destination rather than the source means every output
//! pixel is assigned at most once, with no gaps or duplicate overwrites
//! from rounding.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::{round_half_away, to_cartesian, to_polar};
use crate::pixel::PixelBuffer;

/// Parameters of a single transform invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformParams {
    /// Scale factor; 1.0 leaves the image size unchanged. Must be positive,
    /// zero or negative values yield degenerate results.
    pub scale: f64,
    /// Rotation in degrees, counter-clockwise. Any real value is accepted.
    pub rotate: f64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotate: 0.0,
        }
    }
}

impl TransformParams {
    pub fn new(scale: f64, rotate: f64) -> Self {
        Self { scale, rotate }
    }

    /// Rotation converted to radians.
    fn radians(&self) -> f64 {
        self.rotate / 180.0 * PI
    }
}

/// Compute the destination canvas size for a source of `width` x `height`
/// under the given scale and rotation (radians).
///
/// This is the axis-aligned bounding box of the source rectangle after
/// rotation and uniform scale: the projections of width and height onto
/// each axis, summed, scaled, and rounded half away from zero.
pub fn compute_bounds(width: u32, height: u32, scale: f64, radians: f64) -> (u32, u32) {
    let dx = f64::from(width);
    let dy = f64::from(height);
    let dx2 = (dx * radians.cos() + dy * radians.sin()) * scale;
    let dy2 = (dy * radians.cos() + dx * radians.sin()) * scale;
    (
        round_half_away(dx2.abs()) as u32,
        round_half_away(dy2.abs()) as u32,
    )
}

/// Map a centre-relative destination offset back to the centre-relative
/// source offset it samples from.
///
/// The offset is taken to polar form, the radius divided by the scale and
/// the rotation subtracted from the angle, undoing the forward transform.
pub fn source_offset(x: i32, y: i32, scale: f64, radians: f64) -> (f64, f64) {
    let (radius, angle) = to_polar(f64::from(x), f64::from(y));
    to_cartesian(radius / scale, angle - radians)
}

/// Transform the image with the given parameters.
///
/// Returns a new [`PixelBuffer`] sized by [`compute_bounds`]. Destination
/// pixels whose inverse-mapped source coordinate falls outside the source
/// extent are left transparent, as are the last row/column of odd-sized
/// canvases that the centre-relative iteration does not reach.
pub fn transform(image: &PixelBuffer, params: TransformParams) -> PixelBuffer {
    let radians = params.radians();
    let (dst_w, dst_h) = compute_bounds(image.width, image.height, params.scale, radians);
    let mut output = PixelBuffer::new(dst_w, dst_h);

    // rotate around the centre of the image
    let ox = (image.width / 2) as i32;
    let oy = (image.height / 2) as i32;
    let ox2 = (dst_w / 2) as i32;
    let oy2 = (dst_h / 2) as i32;

    for x2 in -ox2..ox2 {
        for y2 in -oy2..oy2 {
            let (x1, y1) = source_offset(x2, y2, params.scale, radians);
            let pixel = image.get(
                i64::from(ox + round_half_away(x1)),
                i64::from(oy + round_half_away(y1)),
            );
            output.put((ox2 + x2) as u32, (oy2 + y2) as u32, pixel);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::euclidean;
    use crate::pixel::TRANSPARENT;
    use std::f64::consts::FRAC_PI_2;
    use std::f64::consts::FRAC_PI_4;

    /// Create a test image with a gradient pattern, fully opaque.
    fn gradient_image(width: u32, height: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = ((x + y) * 1024) as u16;
                buf.put(x, y, [v, v, v, u16::MAX]);
            }
        }
        buf
    }

    #[test]
    fn test_bounds_noop() {
        assert_eq!(compute_bounds(20, 10, 1.0, 0.0), (20, 10));
    }

    #[test]
    fn test_bounds_45_square() {
        let diagonal = round_half_away(euclidean(10.0, 10.0)) as u32;
        assert_eq!(compute_bounds(10, 10, 1.0, FRAC_PI_4), (diagonal, diagonal));
        assert_eq!(diagonal, 14);
    }

    #[test]
    fn test_bounds_45_rect() {
        // both projections are (20 + 10) * cos(45)
        assert_eq!(compute_bounds(20, 10, 1.0, FRAC_PI_4), (21, 21));
    }

    #[test]
    fn test_bounds_quarter_turns_swap() {
        assert_eq!(compute_bounds(20, 10, 1.0, FRAC_PI_2), (10, 20));
        assert_eq!(compute_bounds(20, 10, 1.0, 1.5 * PI), (10, 20));
    }

    #[test]
    fn test_bounds_half_and_full_turns_preserve() {
        assert_eq!(compute_bounds(20, 10, 1.0, PI), (20, 10));
        assert_eq!(compute_bounds(20, 10, 1.0, 2.0 * PI), (20, 10));
    }

    #[test]
    fn test_bounds_scaling() {
        assert_eq!(compute_bounds(20, 10, 2.0, 0.0), (40, 20));
        assert_eq!(compute_bounds(20, 10, 0.5, 0.0), (10, 5));
    }

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        let tolerance = 0.25;
        assert!(
            (actual.0 - expected.0).abs() <= tolerance && (actual.1 - expected.1).abs() <= tolerance,
            "expected ({}, {}), got ({}, {})",
            expected.0,
            expected.1,
            actual.0,
            actual.1
        );
    }

    #[test]
    fn test_source_offset_noop() {
        assert_close(source_offset(10, 0, 1.0, 0.0), (10.0, 0.0));
        assert_close(source_offset(-10, 0, 1.0, 0.0), (-10.0, 0.0));
    }

    #[test]
    fn test_source_offset_scale() {
        // zoom in: destination offsets reach back half as far, and so on
        assert_close(source_offset(10, 0, 0.5, 0.0), (20.0, 0.0));
        assert_close(source_offset(10, 0, 2.0, 0.0), (5.0, 0.0));
        assert_close(source_offset(10, 10, 0.5, 0.0), (20.0, 20.0));
        assert_close(source_offset(10, 10, 2.0, 0.0), (5.0, 5.0));
    }

    #[test]
    fn test_source_offset_quarter_turns() {
        assert_close(source_offset(10, 0, 1.0, -FRAC_PI_2), (0.0, 10.0));
        assert_close(source_offset(10, 0, 1.0, FRAC_PI_2), (0.0, -10.0));
    }

    #[test]
    fn test_source_offset_45() {
        let diagonal = round_half_away(euclidean(10.0, 10.0));
        assert_close(source_offset(diagonal, 0, 1.0, FRAC_PI_4), (10.0, -10.0));
        assert_close(source_offset(diagonal, 0, 0.5, FRAC_PI_4), (20.0, -20.0));
        assert_close(source_offset(diagonal, 0, 2.0, FRAC_PI_4), (5.0, -5.0));
    }

    #[test]
    fn test_transform_identity_preserves_pixels() {
        let img = gradient_image(16, 12);
        let result = transform(&img, TransformParams::default());

        assert_eq!(result.width, 16);
        assert_eq!(result.height, 12);
        // even dimensions: the centre-relative iteration covers every pixel
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_transform_full_turn_preserves_bounds() {
        let img = gradient_image(20, 10);
        let result = transform(&img, TransformParams::new(1.0, 360.0));
        assert_eq!(result.width, 20);
        assert_eq!(result.height, 10);
    }

    #[test]
    fn test_transform_quarter_turn_swaps_bounds() {
        let img = gradient_image(20, 10);
        let result = transform(&img, TransformParams::new(1.0, 90.0));
        assert_eq!(result.width, 10);
        assert_eq!(result.height, 20);
    }

    #[test]
    fn test_transform_45_square() {
        let img = gradient_image(10, 10);
        let result = transform(&img, TransformParams::new(1.0, 45.0));
        assert_eq!(result.width, 14);
        assert_eq!(result.height, 14);
    }

    #[test]
    fn test_transform_swept_corners_are_transparent() {
        // a fully opaque square rotated 45 degrees leaves the canvas
        // corners without source content
        let mut img = PixelBuffer::new(10, 10);
        for y in 0..10 {
            for x in 0..10 {
                img.put(x, y, [u16::MAX; 4]);
            }
        }

        let result = transform(&img, TransformParams::new(1.0, 45.0));
        assert_eq!(result.get(0, 0), TRANSPARENT);
        assert_eq!(
            result.get(i64::from(result.width) - 1, i64::from(result.height) - 1),
            TRANSPARENT
        );
        // the centre keeps its source content
        let centre = result.get(i64::from(result.width / 2), i64::from(result.height / 2));
        assert_eq!(centre, [u16::MAX; 4]);
    }

    #[test]
    fn test_transform_odd_dimensions_leave_edge_unwritten() {
        let mut img = PixelBuffer::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                img.put(x, y, [u16::MAX; 4]);
            }
        }

        let result = transform(&img, TransformParams::default());
        assert_eq!(result.width, 5);
        assert_eq!(result.height, 5);
        // the iteration range is half-open around the centre
        assert_eq!(result.get(0, 0), [u16::MAX; 4]);
        assert_eq!(result.get(3, 3), [u16::MAX; 4]);
        assert_eq!(result.get(4, 4), TRANSPARENT);
    }

    #[test]
    fn test_transform_zoom_out_halves_bounds() {
        let img = gradient_image(20, 10);
        let result = transform(&img, TransformParams::new(0.5, 0.0));
        assert_eq!(result.width, 10);
        assert_eq!(result.height, 5);
    }

    #[test]
    fn test_transform_1x1_image() {
        let mut img = PixelBuffer::new(1, 1);
        img.put(0, 0, [u16::MAX; 4]);
        let result = transform(&img, TransformParams::new(1.0, 45.0));
        // degenerate but must not panic
        assert!(result.width <= 2);
        assert!(result.height <= 2);
    }

    #[test]
    fn test_params_default_is_noop() {
        let params = TransformParams::default();
        assert_eq!(params.scale, 1.0);
        assert_eq!(params.rotate, 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: scale 1, rotation 0 is the identity on bounds.
        #[test]
        fn prop_identity_bounds(width in 0u32..4000, height in 0u32..4000) {
            prop_assert_eq!(compute_bounds(width, height, 1.0, 0.0), (width, height));
        }

        /// Property: at rotation 0 the bounds scale linearly.
        #[test]
        fn prop_doubling_bounds(width in 0u32..2000, height in 0u32..2000) {
            prop_assert_eq!(compute_bounds(width, height, 2.0, 0.0), (width * 2, height * 2));
        }

        /// Property: the no-op inverse mapping returns the input offset.
        #[test]
        fn prop_source_offset_identity(x in -2000i32..2000, y in -2000i32..2000) {
            let (sx, sy) = source_offset(x, y, 1.0, 0.0);
            prop_assert!((sx - f64::from(x)).abs() < 1e-6);
            prop_assert!((sy - f64::from(y)).abs() < 1e-6);
        }
    }
}
