use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

/// A single item inside a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Full path to the item
    pub path: PathBuf,

    /// Entry name (last component of path)
    pub name: String,

    /// True if this is a directory, following symlinks
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let is_dir = path.is_dir();

        Self { path, name, is_dir }
    }
}

/// List the immediate entries of `dir`, sorted by name.
///
/// Names compare by code point, so output does not depend on locale.
/// Nothing is cached: every call reads the filesystem again.
pub fn list_entries(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| TreeError::listing(dir, e))?;

    let mut entries = Vec::new();
    for item in read_dir {
        let item = item.map_err(|e| TreeError::listing(dir, e))?;
        entries.push(DirectoryEntry::new(item.path()));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::trace!(path = %dir.display(), count = entries.len(), "Listed directory");

    Ok(entries)
}
