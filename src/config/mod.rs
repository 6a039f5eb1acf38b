// SPDX-License-Identifier: MPL-2.0
//! Compile-time configuration.
//!
//! The rescaler exposes no options: paths and geometry are fixed by the
//! project layout and the launcher's mask. See [`defaults`].

pub mod defaults;

pub use defaults::{
    ASSETS_DIR, BACKUP_FILE_NAME, BUILD_COMMAND, INPUT_FILE_NAME, OUTPUT_FILE_NAME,
    PREBUILD_COMMAND, SAFE_ZONE_RATIO, SCALE_FACTOR,
};
