// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions for the resample and crop steps.

use crate::media::geometry::{CropBox, IconGeometry};
use image_rs::{imageops, imageops::FilterType, DynamicImage, ImageBuffer, Pixel};

/// Resize the image to a `size × size` square using a high-quality filter.
///
/// The aspect ratio is not preserved; non-square sources are stretched.
pub fn resample_square(image: &DynamicImage, size: u32) -> DynamicImage {
    let size = size.max(1);
    image.resize_exact(size, size, FilterType::Lanczos3)
}

/// Crop the image to the given box.
///
/// The result always has the box's dimensions and the source's color type.
/// Parts of the box lying outside the image are zero-filled, i.e. black and,
/// where there is an alpha channel, fully transparent.
pub fn crop(image: &DynamicImage, crop_box: &CropBox) -> DynamicImage {
    if crop_box.fits_within(image.width(), image.height()) {
        return image.crop_imm(
            crop_box.left as u32,
            crop_box.top as u32,
            crop_box.width(),
            crop_box.height(),
        );
    }

    match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(pad_crop(buf, crop_box)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(pad_crop(buf, crop_box)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(pad_crop(buf, crop_box)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(pad_crop(buf, crop_box)),
        DynamicImage::ImageLuma16(buf) => DynamicImage::ImageLuma16(pad_crop(buf, crop_box)),
        DynamicImage::ImageLumaA16(buf) => DynamicImage::ImageLumaA16(pad_crop(buf, crop_box)),
        DynamicImage::ImageRgb16(buf) => DynamicImage::ImageRgb16(pad_crop(buf, crop_box)),
        DynamicImage::ImageRgba16(buf) => DynamicImage::ImageRgba16(pad_crop(buf, crop_box)),
        DynamicImage::ImageRgb32F(buf) => DynamicImage::ImageRgb32F(pad_crop(buf, crop_box)),
        DynamicImage::ImageRgba32F(buf) => DynamicImage::ImageRgba32F(pad_crop(buf, crop_box)),
        other => DynamicImage::ImageRgba8(pad_crop(&other.to_rgba8(), crop_box)),
    }
}

/// Copy the part of `source` covered by `crop_box` onto a zeroed canvas of
/// the box's size.
fn pad_crop<P: Pixel>(
    source: &ImageBuffer<P, Vec<P::Subpixel>>,
    crop_box: &CropBox,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let mut canvas = ImageBuffer::new(crop_box.width(), crop_box.height());
    imageops::replace(&mut canvas, source, -crop_box.left, -crop_box.top);
    canvas
}

/// Enlarge the icon by the geometry's scale factor and center-crop it back
/// to its original dimensions, keeping the source's color type.
pub fn rescale(image: &DynamicImage, geometry: &IconGeometry) -> DynamicImage {
    let scaled = resample_square(image, geometry.new_size);
    crop(&scaled, &geometry.crop_box)
}
