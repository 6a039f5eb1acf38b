// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the icon rescaler.
//!
//! Nothing here is configurable at runtime; these constants are the single
//! source of truth for file names, geometry ratios and the follow-up
//! commands printed after a successful run.
//!
//! # Categories
//!
//! - **Layout**: asset directory and file names
//! - **Geometry**: safe zone ratio and scale factor
//! - **Follow-up**: commands suggested to the user

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Directory, relative to the project root, holding the icon assets.
pub const ASSETS_DIR: &str = "assets";

/// Adaptive icon foreground to rescale.
pub const INPUT_FILE_NAME: &str = "adaptive-icon-foreground.png";

/// Rescaled icon written next to the input.
pub const OUTPUT_FILE_NAME: &str = "adaptive-icon-foreground-new.png";

/// One-time copy of the untouched input.
pub const BACKUP_FILE_NAME: &str = "adaptive-icon-foreground-old.png";

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Radius of the launcher's circular safe zone relative to the canvas width
/// (66dp out of a 108dp canvas).
pub const SAFE_ZONE_RATIO: f64 = 0.61;

/// Enlargement applied before center-cropping back to the original size.
///
/// 1.3x makes the artwork fill roughly 71% of the safe zone diameter.
pub const SCALE_FACTOR: f64 = 1.3;

// ==========================================================================
// Follow-up Defaults
// ==========================================================================

/// Command regenerating the native Android resources from the assets.
pub const PREBUILD_COMMAND: &str = "npx expo prebuild --platform android --clean";

/// Command building and launching the Android app.
pub const BUILD_COMMAND: &str = "npm run android";
