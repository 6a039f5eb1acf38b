// SPDX-License-Identifier: MPL-2.0
//! Crop geometry derived from the source icon dimensions.
//!
//! All values are computed up front so the transform step only has to apply
//! them. Floating-point products are truncated toward zero, which matches
//! `floor` for the non-negative values involved.

use crate::config::{SAFE_ZONE_RATIO, SCALE_FACTOR};
use std::fmt;

/// Rectangle in the resampled image that is kept, as `(left, top, right, bottom)`.
///
/// Coordinates are signed: a source taller than the resampled square yields
/// a negative `top`, i.e. a box reaching above the resampled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropBox {
    /// Centers a `width × height` box inside a `size × size` square.
    pub fn centered(size: u32, width: u32, height: u32) -> Self {
        let left = (i64::from(size) - i64::from(width)).div_euclid(2);
        let top = (i64::from(size) - i64::from(height)).div_euclid(2);
        Self {
            left,
            top,
            right: left + i64::from(width),
            bottom: top + i64::from(height),
        }
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top) as u32
    }

    /// Whether the box lies entirely inside a `width × height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= i64::from(width)
            && self.bottom <= i64::from(height)
    }
}

impl fmt::Display for CropBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Everything the rescaler derives from the source dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGeometry {
    pub width: u32,
    pub height: u32,
    /// Reported to the user only; the crop does not depend on it.
    pub safe_zone_radius: u32,
    pub scale_factor: f64,
    /// Side of the intermediate square. Derived from the width alone, the
    /// source is assumed to be square.
    pub new_size: u32,
    pub crop_box: CropBox,
}

impl IconGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_scale_factor(width, height, SCALE_FACTOR)
    }

    pub fn with_scale_factor(width: u32, height: u32, scale_factor: f64) -> Self {
        let safe_zone_radius = (f64::from(width) * SAFE_ZONE_RATIO) as u32;
        let new_size = (f64::from(width) * scale_factor) as u32;
        Self {
            width,
            height,
            safe_zone_radius,
            scale_factor,
            new_size,
            crop_box: CropBox::centered(new_size, width, height),
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_icon_geometry() {
        let geometry = IconGeometry::new(108, 108);
        assert_eq!(geometry.safe_zone_radius, 65);
        assert_eq!(geometry.new_size, 140);
        assert_eq!(
            geometry.crop_box,
            CropBox {
                left: 16,
                top: 16,
                right: 124,
                bottom: 124
            }
        );
    }

    #[test]
    fn launcher_density_sizes() {
        // mdpi through xxxhdpi foreground layers
        let cases = [
            (108, 140, 16),
            (162, 210, 24),
            (216, 280, 32),
            (324, 421, 48),
            (432, 561, 64),
            (1024, 1331, 153),
        ];
        for (width, new_size, offset) in cases {
            let geometry = IconGeometry::new(width, width);
            assert_eq!(geometry.new_size, new_size, "width {width}");
            assert_eq!(geometry.crop_box.left, offset, "width {width}");
            assert_eq!(geometry.crop_box.top, offset, "width {width}");
        }
    }

    #[test]
    fn crop_box_always_spans_source_dimensions() {
        for width in 1..=300 {
            let geometry = IconGeometry::new(width, width);
            assert_eq!(geometry.new_size, (f64::from(width) * 1.3) as u32);
            assert_eq!(geometry.crop_box.width(), width);
            assert_eq!(geometry.crop_box.height(), width);
            assert!(geometry
                .crop_box
                .fits_within(geometry.new_size, geometry.new_size));
        }
    }

    #[test]
    fn tall_source_produces_negative_top() {
        let geometry = IconGeometry::new(100, 200);
        assert_eq!(geometry.new_size, 130);
        assert_eq!(geometry.crop_box.left, 15);
        assert_eq!(geometry.crop_box.top, -35);
        assert_eq!(geometry.crop_box.height(), 200);
        assert!(!geometry.crop_box.fits_within(130, 130));
        assert!(!geometry.is_square());
    }

    #[test]
    fn odd_margin_rounds_down() {
        let crop = CropBox::centered(13, 10, 10);
        assert_eq!((crop.left, crop.top, crop.right, crop.bottom), (1, 1, 11, 11));
    }

    #[test]
    fn crop_box_display_matches_tuple_form() {
        let crop = CropBox::centered(140, 108, 108);
        assert_eq!(crop.to_string(), "(16, 16, 124, 124)");
    }
}
