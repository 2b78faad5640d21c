//! Dashboard manifest - a JSON index of the HTML dashboards in a directory

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use builder::ManifestBuilder;
pub use config::ManifestPaths;
pub use error::{ManifestError, Result};
pub use models::{Manifest, ManifestEntry};
