//! In-memory filesystem adapter for testing and previews.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use faststart_core::{
    application::{ApplicationError, ports::Filesystem},
    error::FastStartResult,
};

/// In-memory filesystem. Clones share the same tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    executables: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().ok()?.files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.read().is_ok_and(|inner| inner.executables.contains(path))
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Files below `root`, relative to it.
    pub fn list_under(&self, root: &Path) -> Vec<PathBuf> {
        self.list_files()
            .into_iter()
            .filter_map(|p| p.strip_prefix(root).ok().map(Path::to_path_buf))
            .collect()
    }

    fn read(&self) -> FastStartResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> FastStartResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> faststart_core::error::FastStartError {
    ApplicationError::LockError {
        resource: "memory filesystem",
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> FastStartResult<()> {
        let mut inner = self.write()?;
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FastStartResult<()> {
        let mut inner = self.write()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(
                    ApplicationError::filesystem(path, "Parent directory does not exist").into(),
                );
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> FastStartResult<()> {
        let mut inner = self.write()?;
        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn remove_dir_all(&self, path: &Path) -> FastStartResult<()> {
        let mut inner = self.write()?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.executables.retain(|p| !p.starts_with(path));
        Ok(())
    }
}
