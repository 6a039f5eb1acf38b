// SPDX-License-Identifier: MPL-2.0
//! `icon_rescaler` enlarges an Android adaptive icon foreground so that it
//! fills more of the launcher's circular safe zone.
//!
//! The icon is upsampled by a fixed factor, center-cropped back to its
//! original dimensions and written next to the source, together with a
//! one-time backup of the original. See [`rescaler::rescale_icon`].

pub mod config;
pub mod error;
pub mod media;
pub mod paths;
pub mod process;
pub mod rescaler;

pub use error::{Error, Result};
pub use paths::AssetPaths;
pub use rescaler::{rescale_icon, run, RescaleReport};
