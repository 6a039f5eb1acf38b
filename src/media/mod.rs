// SPDX-License-Identifier: MPL-2.0
//! Image handling: decoding, geometry and pixel transforms.

pub mod geometry;
pub mod image;
pub mod image_transform;

// Re-export commonly used types
pub use geometry::{CropBox, IconGeometry};
pub use image::{load_image, save_png, save_png_optimized};
