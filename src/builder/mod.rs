//! Manifest builder
//!
//! One linear pass over the source directory:
//! - list entries (non-recursive)
//! - keep regular files whose name ends in `.html`, any case
//! - read each file's modification time
//! - sort newest first and write the JSON array over the output file
//!
//! Any failure aborts the run. A failed write never leaves a half-written
//! manifest behind: the document goes to a sibling temp file first and is
//! renamed into place.

use std::fs::{self, File, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info, trace, warn};

use crate::config::ManifestPaths;
use crate::error::{ManifestError, Result};
use crate::models::{Manifest, ManifestEntry};

const DASHBOARD_EXTENSION: &str = ".html";

/// Returns true when `name` ends in `.html`, ignoring case
pub fn is_dashboard_name(name: &str) -> bool {
    name.to_lowercase().ends_with(DASHBOARD_EXTENSION)
}

/// Stable sort by `modified`, newest first.
/// Entries with equal timestamps keep directory enumeration order.
pub fn sort_newest_first(entries: &mut Manifest) {
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
}

pub struct ManifestBuilder {
    paths: ManifestPaths,
}

impl ManifestBuilder {
    pub fn new(paths: ManifestPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ManifestPaths {
        &self.paths
    }

    /// Scan, sort and write the manifest. Returns the number of entries written.
    pub fn build(&self) -> Result<usize> {
        let mut entries = self.scan()?;
        sort_newest_first(&mut entries);
        self.write(&entries)?;

        info!(
            count = entries.len(),
            output = %self.paths.output.display(),
            "manifest written"
        );
        Ok(entries.len())
    }

    /// Collect one entry per dashboard file, in enumeration order
    pub fn scan(&self) -> Result<Manifest> {
        let source_dir = &self.paths.source_dir;
        self.check_source_dir()?;

        let dir_name = self.paths.source_dir_name();
        let read_dir = fs::read_dir(source_dir)
            .map_err(|e| ManifestError::io("read directory", source_dir, e))?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry =
                dir_entry.map_err(|e| ManifestError::io("read directory", source_dir, e))?;
            let full_path = dir_entry.path();

            let Some(filename) = dir_entry.file_name().to_str().map(str::to_string) else {
                warn!(path = %full_path.display(), "skipping entry with non-UTF-8 name");
                continue;
            };

            if !is_dashboard_name(&filename) {
                trace!(%filename, "skipping non-dashboard entry");
                continue;
            }

            let Some(modified) = regular_file_mtime(&full_path)? else {
                trace!(%filename, "skipping entry that is not a regular file");
                continue;
            };

            debug!(%filename, "including dashboard");
            entries.push(ManifestEntry::new(&dir_name, &filename, modified));
        }

        Ok(entries)
    }

    /// Serialize `entries` as a pretty-printed JSON array over the output file.
    /// A symlinked output is written through: its target gets the new content.
    pub fn write(&self, entries: &Manifest) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;

        let target = resolve_output(&self.paths.output)?;
        let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());

        let temp_path = temp_path_for(&target);
        if let Err(e) = write_synced(&temp_path, json.as_bytes(), permissions) {
            let _ = fs::remove_file(&temp_path);
            return Err(ManifestError::io("write manifest", &temp_path, e));
        }

        if let Err(e) = fs::rename(&temp_path, &target) {
            let _ = fs::remove_file(&temp_path);
            return Err(ManifestError::io("replace manifest", &target, e));
        }

        Ok(())
    }

    fn check_source_dir(&self) -> Result<()> {
        let source_dir = &self.paths.source_dir;
        match fs::metadata(source_dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            _ => Err(ManifestError::Configuration {
                path: source_dir.clone(),
            }),
        }
    }
}

/// Modification time of `path` if it is a regular file (symlinks followed).
/// A dangling symlink is not a regular file; other stat failures abort.
fn regular_file_mtime(path: &Path) -> Result<Option<DateTime<Local>>> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound && path.is_symlink() => return Ok(None),
        Err(e) => return Err(ManifestError::io("read metadata of", path, e)),
    };

    if !meta.is_file() {
        return Ok(None);
    }

    let modified = meta
        .modified()
        .map_err(|e| ManifestError::io("read modification time of", path, e))?;
    Ok(Some(DateTime::<Local>::from(modified)))
}

/// The real file behind `output`, following symlinks.
/// A missing output resolves to itself; a dangling link to its target.
fn resolve_output(output: &Path) -> Result<PathBuf> {
    match fs::canonicalize(output) {
        Ok(real) => Ok(real),
        Err(e) if e.kind() == ErrorKind::NotFound && output.is_symlink() => {
            let link =
                fs::read_link(output).map_err(|err| ManifestError::io("read link", output, err))?;
            Ok(match output.parent() {
                Some(parent) if link.is_relative() => parent.join(link),
                _ => link,
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(output.to_path_buf()),
        Err(e) => Err(ManifestError::io("resolve", output, e)),
    }
}

fn temp_path_for(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!(".{}.tmp", name))
}

/// Write and sync `bytes`, carrying over the permissions of the file being replaced
fn write_synced(
    path: &Path,
    bytes: &[u8],
    permissions: Option<Permissions>,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    if let Some(permissions) = permissions {
        file.set_permissions(permissions)?;
    }
    Ok(())
}
