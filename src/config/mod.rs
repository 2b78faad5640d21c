//! Path configuration for the manifest builder
//!
//! The source directory and the output file are resolved once at start and
//! handed to the builder, so nothing below reads process-global state.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory scanned for dashboards, relative to the root
pub const DEFAULT_SOURCE_DIR: &str = "dashboards";

/// Manifest file name, relative to the root
pub const DEFAULT_OUTPUT_FILE: &str = "manifest.json";

/// Returns paths used by a single manifest run
#[derive(Debug, Clone)]
pub struct ManifestPaths {
    pub root: PathBuf,
    pub source_dir: PathBuf,
    pub output: PathBuf,
}

impl ManifestPaths {
    /// Default layout under the current working directory
    pub fn new() -> Result<Self> {
        let root = std::env::current_dir().context("Could not determine working directory")?;
        Ok(Self::at(root))
    }

    /// Default layout (`dashboards/` and `manifest.json`) under `root`
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            source_dir: root.join(DEFAULT_SOURCE_DIR),
            output: root.join(DEFAULT_OUTPUT_FILE),
            root,
        }
    }

    /// Explicit source directory and output file.
    /// `root` becomes the parent of the source directory.
    pub fn with_paths(source_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let root = source_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            root,
            source_dir,
            output: output.into(),
        }
    }

    /// Final component of the source directory, used as the `path` prefix
    pub fn source_dir_name(&self) -> String {
        self.source_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_SOURCE_DIR.to_string())
    }

    /// Display name of the output file for user-facing messages
    pub fn output_name(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string())
    }
}
