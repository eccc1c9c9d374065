//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `faststart-adapters` crate provides filesystem, registry and VCS
//! implementations; the CLI provides the interactive prompt.

use std::path::{Path, PathBuf};

use crate::domain::{StackDefinition, StackId};
use crate::error::FastStartResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `faststart_adapters::filesystem::LocalFilesystem` (production)
/// - `faststart_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are whatever the pipeline computed (output dir joined with the
/// project directory); the port does not resolve them further.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FastStartResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> FastStartResult<()>;

    /// Set or clear the executable bit.
    fn set_permissions(&self, path: &Path, executable: bool) -> FastStartResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> FastStartResult<()>;
}

/// Port for the read-only stack registry.
///
/// Implemented by `faststart_adapters::registry::BuiltinRegistry`. The
/// registry is built once at startup and injected; nothing mutates it.
#[cfg_attr(test, mockall::automock)]
pub trait StackRegistry: Send + Sync {
    /// The base definition for `id`, if the registry carries it.
    fn get(&self, id: StackId) -> Option<StackDefinition>;

    /// Every stack the registry carries, in presentation order.
    fn ids(&self) -> Vec<StackId>;

    /// Stack used when a lookup misses.
    fn default_stack(&self) -> StackId;
}

/// Port asking the user whether an existing directory may be replaced.
#[cfg_attr(test, mockall::automock)]
pub trait OverwritePrompt: Send + Sync {
    /// `Ok(false)` means the user declined.
    fn confirm_overwrite(&self, path: &Path) -> FastStartResult<bool>;
}

/// Port for local version control.
///
/// Implemented by `faststart_adapters::vcs::GitCli`.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    fn is_available(&self) -> bool;

    fn init(&self, dir: &Path, default_branch: &str) -> FastStartResult<()>;

    /// Stage everything and record a commit.
    fn commit_all(&self, dir: &Path, message: &str) -> FastStartResult<()>;
}

/// Everything needed to create a hosted repository for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepoRequest {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub source: PathBuf,
    /// Topics attached after creation; empty means none.
    pub topics: Vec<String>,
    pub enable_issues: bool,
    /// Branch to protect after the first push, if any.
    pub protect_branch: Option<String>,
}

impl RemoteRepoRequest {
    /// Whether anything beyond plain creation was asked for.
    pub fn needs_settings(&self) -> bool {
        !self.topics.is_empty() || self.enable_issues
    }
}

/// Port for creating a hosted repository and pushing the first commit.
///
/// Implemented by `faststart_adapters::vcs::GhCli`.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteRepository: Send + Sync {
    fn is_available(&self) -> bool;

    /// Whether an account is logged in.
    fn is_authenticated(&self) -> bool;

    /// Create the repository from `request.source` and push.
    ///
    /// An existing repository of the same name is `RemoteRepositoryExists`.
    fn create(&self, request: &RemoteRepoRequest) -> FastStartResult<()>;

    /// Apply topics and feature switches to the created repository.
    fn apply_settings(&self, request: &RemoteRepoRequest) -> FastStartResult<()>;

    /// Require reviews and passing checks on `branch`.
    fn protect_branch(&self, request: &RemoteRepoRequest, branch: &str) -> FastStartResult<()>;

    /// Web URL of the repository.
    fn url(&self, request: &RemoteRepoRequest) -> FastStartResult<String>;
}
