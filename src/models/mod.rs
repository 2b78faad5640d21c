//! Data models for the dashboard manifest
//!
//! Field order matches the JSON document: `path`, `filename`, `modified`.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Local time, seconds precision, no offset (e.g. `2024-06-01T09:30:00`)
pub const MODIFIED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One dashboard file in the manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    /// `<directory-name>/<filename>`, always with a forward slash
    pub path: String,
    pub filename: String,
    pub modified: String,
}

impl ManifestEntry {
    pub fn new(dir_name: &str, filename: &str, modified: DateTime<Local>) -> Self {
        Self {
            path: format!("{}/{}", dir_name, filename),
            filename: filename.to_string(),
            modified: modified.format(MODIFIED_FORMAT).to_string(),
        }
    }
}

/// Entries ordered newest first once sorted
pub type Manifest = Vec<ManifestEntry>;
