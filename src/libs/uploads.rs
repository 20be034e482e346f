//! Upload directory management.
//!
//! Task images live in a single flat directory; tasks reference them by
//! bare filename. Filenames are sanitized before storage and collisions
//! overwrite silently. Deletions are best-effort: a reference whose file
//! has already disappeared is not an error anywhere in the system.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const UPLOAD_DIR_NAME: &str = "uploads";

/// Reduces a user-supplied filename to a safe flat name.
///
/// Path components are stripped down to the final segment, anything outside
/// `[A-Za-z0-9._-]` becomes `_`, and leading dots are dropped so the result
/// can never escape the upload directory or hide as a dotfile. Returns
/// `None` when nothing usable remains.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let last = name.split(['/', '\\']).filter(|part| !part.is_empty()).next_back()?;

    let cleaned: String = last
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();

    if cleaned.is_empty() {
        return None;
    }
    Some(cleaned)
}

/// Handle on the flat image upload directory.
pub struct Uploads {
    dir: PathBuf,
}

impl Uploads {
    /// Opens the upload directory inside the platform data directory,
    /// creating it if needed.
    pub fn new() -> Result<Self> {
        Self::at(DataStorage::new().get_path(UPLOAD_DIR_NAME)?)
    }

    /// Opens an upload directory at an explicit location.
    pub fn at(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Uploads { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Sanitizes the name and writes the file, overwriting any previous
    /// upload with the same name. Returns the stored filename, or `None`
    /// when the name sanitizes away to nothing (the upload is ignored).
    pub fn store(&self, original_name: &str, bytes: &[u8]) -> Result<Option<String>> {
        let Some(filename) = sanitize_filename(original_name) else {
            return Ok(None);
        };
        fs::write(self.dir.join(&filename), bytes)?;
        Ok(Some(filename))
    }

    /// Best-effort removal of a stored file; missing files are ignored.
    pub fn remove(&self, name: &str) {
        if name.is_empty() {
            return;
        }
        if let Err(err) = fs::remove_file(self.dir.join(name)) {
            tracing::debug!("upload '{}' not removed: {}", name, err);
        }
    }
}
