// SPDX-License-Identifier: MPL-2.0
//! End-to-end rescaling of the adaptive icon foreground.
//!
//! The procedure is strictly linear: check the input, decode it, derive the
//! geometry, resample and crop, write the result, then write a backup of the
//! original unless one already exists. Progress is printed to stdout as each
//! step runs. Nothing is written until the input has been decoded, so a
//! failed run leaves the assets directory untouched.

use crate::config::{BUILD_COMMAND, PREBUILD_COMMAND};
use crate::error::{Error, Result};
use crate::media::geometry::IconGeometry;
use crate::media::{image, image_transform};
use crate::paths::AssetPaths;
use image_rs::GenericImageView;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RescaleReport {
    pub paths: AssetPaths,
    pub geometry: IconGeometry,
    /// `false` when a backup from an earlier run was left in place.
    pub backup_created: bool,
}

impl RescaleReport {
    /// Success banner followed by the manual steps left to the user.
    pub fn summary(&self) -> String {
        let input = self.paths.input.display();
        let output = self.paths.output.display();
        let backup = self.paths.backup.display();

        format!(
            r#"
Success!
   Scaled icon saved to: {output}
   Original backed up to: {backup}

Next steps:
   1. Review the new icon: {output}
   2. Replace the original:
      mv "{output}" "{input}"
   3. Regenerate Android resources:
      {PREBUILD_COMMAND}
   4. Build and test:
      {BUILD_COMMAND}"#
        )
    }
}

/// Rescale the icon at `paths.input`, writing `paths.output` and, on the
/// first run only, `paths.backup`.
///
/// # Errors
///
/// - [`Error::InputNotFound`] if the input file does not exist
/// - [`Error::Decode`] if it cannot be opened or decoded
/// - [`Error::Unexpected`] if an output cannot be encoded or written
pub fn rescale_icon(paths: &AssetPaths) -> Result<RescaleReport> {
    println!("Scaling Android adaptive icon...");
    println!("   Input: {}", paths.input.display());

    if !paths.input.exists() {
        return Err(Error::InputNotFound(paths.input.clone()));
    }

    let original = image::load_image(&paths.input)?;
    let (width, height) = original.dimensions();
    println!("   Original size: {width}x{height}px");

    let geometry = IconGeometry::new(width, height);
    println!(
        "   Safe zone radius: {}px (61% of canvas)",
        geometry.safe_zone_radius
    );
    println!("   Scale factor: {}x", geometry.scale_factor);
    println!(
        "   Intermediate size: {size}x{size}px",
        size = geometry.new_size
    );
    if !geometry.is_square() {
        eprintln!("[WARN] Source is not square; it will be stretched before cropping.");
    }

    println!("   Scaling image...");
    let scaled = image_transform::resample_square(&original, geometry.new_size);
    println!("   Cropping to center: {}", geometry.crop_box);
    let result = image_transform::crop(&scaled, &geometry.crop_box);

    println!("   Saving scaled icon to: {}", paths.output.display());
    image::save_png_optimized(&result, &paths.output)?;

    let backup_created = if paths.backup.exists() {
        println!("   Backup already exists: {}", paths.backup.display());
        false
    } else {
        println!("   Creating backup: {}", paths.backup.display());
        image::save_png(&original, &paths.backup)?;
        true
    };

    Ok(RescaleReport {
        paths: paths.clone(),
        geometry,
        backup_created,
    })
}

/// Rescale the icon and print the follow-up instructions.
///
/// # Errors
///
/// See [`rescale_icon`].
pub fn run(paths: &AssetPaths) -> Result<RescaleReport> {
    let report = rescale_icon(paths)?;
    println!("{}", report.summary());
    Ok(report)
}
