#![deny(missing_docs)]
//! RGBA raster types for per-pixel image filtering

/// Error types for the image module.
pub mod error;

/// RGBA raster representation.
pub mod image;

/// 8-bit RGBA pixel sample.
pub mod pixel;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, RgbaImage};
pub use crate::pixel::Pixel;
