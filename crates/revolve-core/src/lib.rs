//! Revolve Core - scale/rotate transform engine
//!
//! This crate provides the processing pipeline for Revolve: JPEG decoding,
//! the geometric scale + rotation transform, and JPEG encoding. All
//! operations are synchronous and pure; I/O lives in the front-end crate.

pub mod decode;
pub mod encode;
pub mod geometry;
pub mod pixel;
pub mod transform;

pub use decode::{decode_jpeg, DecodeError};
pub use encode::{encode_jpeg, EncodeError};
pub use pixel::PixelBuffer;
pub use transform::{compute_bounds, source_offset, transform, TransformParams};
