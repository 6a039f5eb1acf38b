// SPDX-License-Identifier: MPL-2.0
//! Path resolution for the icon assets.
//!
//! The rescaler works on a fixed project layout: the base directory sits two
//! levels above the program's own source file, and the icons live in its
//! `assets` subdirectory. Nothing here reads arguments or the environment.
//!
//! # Layout
//!
//! ```text
//! <base>/
//! ├── assets/
//! │   ├── adaptive-icon-foreground.png      (input)
//! │   ├── adaptive-icon-foreground-new.png  (output)
//! │   └── adaptive-icon-foreground-old.png  (backup)
//! └── src/
//!     └── paths.rs
//! ```

use crate::config::{ASSETS_DIR, BACKUP_FILE_NAME, INPUT_FILE_NAME, OUTPUT_FILE_NAME};
use std::path::{Path, PathBuf};

/// The three files the rescaler touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub backup: PathBuf,
}

impl AssetPaths {
    /// Resolves the paths relative to this source file's location.
    pub fn locate() -> Self {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        Self::from_source_file(&manifest_dir.join(file!()))
            .unwrap_or_else(|| Self::from_base_dir(manifest_dir))
    }

    /// Resolves the paths for a program whose source file is `source`.
    ///
    /// The base directory is two levels up from the file itself, so
    /// `<base>/src/main.rs` resolves to `<base>/assets/...`.
    ///
    /// Returns `None` when `source` is too shallow to have such an ancestor.
    pub fn from_source_file(source: &Path) -> Option<Self> {
        source.ancestors().nth(2).map(Self::from_base_dir)
    }

    /// Resolves the paths inside `<base>/assets`.
    pub fn from_base_dir<P: AsRef<Path>>(base: P) -> Self {
        let assets = base.as_ref().join(ASSETS_DIR);
        Self {
            input: assets.join(INPUT_FILE_NAME),
            output: assets.join(OUTPUT_FILE_NAME),
            backup: assets.join(BACKUP_FILE_NAME),
        }
    }

    /// Directory containing all three files.
    pub fn assets_dir(&self) -> &Path {
        self.input.parent().unwrap_or_else(|| Path::new(""))
    }
}
