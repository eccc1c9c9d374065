//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use faststart_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{FastStartError, FastStartResult},
};
use tracing::trace;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }

    /// Every file below `root`, relative to it, sorted.
    ///
    /// Used to report what a run left on disk.
    pub fn list_files(&self, root: &Path) -> FastStartResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                map_io_error(&path, io::Error::other(e.to_string()), "walk directory")
            })?;
            if entry.file_type().is_file() {
                if let Ok(rel) = entry.path().strip_prefix(root) {
                    files.push(rel.to_path_buf());
                }
            }
        }
        Ok(files)
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FastStartResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> FastStartResult<()> {
        trace!(path = %path.display(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> FastStartResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = perms.mode();
            perms.set_mode(if executable { mode | 0o111 } else { mode & !0o111 });
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            let _ = (path, executable);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> FastStartResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> FastStartError {
    ApplicationError::filesystem(path, format!("Failed to {operation}: {e}")).into()
}
