//! The scale + rotation transform.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, converted to radians internally
//! - The image is rotated and scaled around its centre
//! - Origin is the top-left corner; the destination canvas is the
//!   axis-aligned bounding box of the transformed source rectangle

mod scale_rotate;

pub use scale_rotate::{compute_bounds, source_offset, transform, TransformParams};
