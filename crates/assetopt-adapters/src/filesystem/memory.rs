//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use assetopt_core::{
    application::{ApplicationError, ports::Filesystem},
    error::AssetoptResult,
};

/// In-memory filesystem for testing.
///
/// Listings come back sorted by path, which stands in for the OS listing
/// order of a real directory.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    unlistable: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a directory and all of its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) -> AssetoptResult<()> {
        let mut inner = self.write()?;
        insert_dir_all(&mut inner.directories, path.as_ref());
        Ok(())
    }

    /// Create a file, creating parent directories as needed.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) -> AssetoptResult<()> {
        let path = path.as_ref();
        let mut inner = self.write()?;
        if let Some(parent) = path.parent() {
            insert_dir_all(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
        Ok(())
    }

    /// Make every later write to `path` fail with permission denied.
    pub fn set_read_only(&self, path: impl AsRef<Path>) -> AssetoptResult<()> {
        self.write()?.read_only.insert(path.as_ref().to_path_buf());
        Ok(())
    }

    /// Make listing `dir` fail with permission denied.
    pub fn set_unlistable(&self, dir: impl AsRef<Path>) -> AssetoptResult<()> {
        self.write()?.unlistable.insert(dir.as_ref().to_path_buf());
        Ok(())
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> AssetoptResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> AssetoptResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn list_entries(&self, dir: &Path) -> AssetoptResult<Vec<PathBuf>> {
        let inner = self.read()?;

        if inner.unlistable.contains(dir) {
            let e = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
            return Err(ApplicationError::enumeration_failed(dir, &e).into());
        }
        if !inner.directories.contains(dir) {
            let e = if inner.files.contains_key(dir) {
                io::Error::new(io::ErrorKind::NotADirectory, "Not a directory")
            } else {
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory")
            };
            return Err(ApplicationError::enumeration_failed(dir, &e).into());
        }

        let children: BTreeSet<PathBuf> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect();

        Ok(children.into_iter().collect())
    }

    fn read_to_string(&self, path: &Path) -> AssetoptResult<String> {
        let inner = self.read()?;

        if let Some(content) = inner.files.get(path) {
            return Ok(content.clone());
        }

        let e = if inner.directories.contains(path) {
            io::Error::new(io::ErrorKind::IsADirectory, "Is a directory")
        } else {
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory")
        };
        Err(ApplicationError::read_failed(path, &e).into())
    }

    fn write_file(&self, path: &Path, content: &str) -> AssetoptResult<()> {
        let mut inner = self.write()?;

        let failure = if inner.read_only.contains(path) {
            Some(io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"))
        } else if inner.directories.contains(path) {
            Some(io::Error::new(io::ErrorKind::IsADirectory, "Is a directory"))
        } else if path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !inner.directories.contains(p))
        {
            Some(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
        } else {
            None
        };

        if let Some(e) = failure {
            return Err(ApplicationError::write_failed(path, &e).into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

fn insert_dir_all(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}
