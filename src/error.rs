//! Error types for manifest builds

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("'{}' folder not found at {}", dir_name(.path), .path.display())]
    Configuration { path: PathBuf },

    #[error("Failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest")]
    Serialize(#[from] serde_json::Error),
}

impl ManifestError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        ManifestError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

fn dir_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, ManifestError>;
