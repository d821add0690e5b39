//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use assetopt_core::{
    application::{ApplicationError, ports::Filesystem},
    error::AssetoptResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn list_entries(&self, dir: &Path) -> AssetoptResult<Vec<PathBuf>> {
        let metadata =
            std::fs::metadata(dir).map_err(|e| ApplicationError::enumeration_failed(dir, &e))?;
        if !metadata.is_dir() {
            let e = io::Error::new(io::ErrorKind::NotADirectory, "Not a directory");
            return Err(ApplicationError::enumeration_failed(dir, &e).into());
        }

        let mut entries = Vec::new();
        for walk_entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = walk_entry.map_err(|e| {
                let e = io::Error::from(e);
                ApplicationError::enumeration_failed(dir, &e)
            })?;
            entries.push(entry.into_path());
        }

        trace!(dir = %dir.display(), count = entries.len(), "Listed entries");
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> AssetoptResult<String> {
        std::fs::read_to_string(path)
            .map_err(|e| ApplicationError::read_failed(path, &e).into())
    }

    fn write_file(&self, path: &Path, content: &str) -> AssetoptResult<()> {
        std::fs::write(path, content).map_err(|e| ApplicationError::write_failed(path, &e).into())
    }
}
