// SPDX-License-Identifier: MPL-2.0
//! Image loading and PNG encoding.

use crate::error::{Error, Result};
use image_rs::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image_rs::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load and decode the image at `path`.
///
/// The format is detected from the file contents rather than the extension.
///
/// # Errors
///
/// Every failure, whether the file cannot be opened or its contents cannot
/// be decoded, is reported as [`Error::Decode`] with the underlying cause.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let reader = ImageReader::open(path.as_ref())
        .map_err(|e| Error::Decode(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| Error::Decode(e.to_string()))?;

    reader.decode().map_err(|e| Error::Decode(e.to_string()))
}

/// Save `image` as a PNG using maximum compression and adaptive filtering.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the encoder rejects
/// the image's color type.
pub fn save_png_optimized<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let failed = |err: &dyn std::fmt::Display| {
        Error::unexpected(format!("Failed to save image to {}: {err}", path.display()))
    };

    let file = File::create(path).map_err(|e| failed(&e))?;
    let mut writer = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilterType::Adaptive);
    image.write_with_encoder(encoder).map_err(|e| failed(&e))?;

    writer.flush().map_err(|e| failed(&e))?;
    Ok(())
}

/// Save `image` as a PNG with the encoder's default settings.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_png<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::unexpected(format!("Failed to save image to {}: {e}", path.display())))
}
