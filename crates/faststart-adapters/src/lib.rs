//! Infrastructure adapters for FastStart.
//!
//! This crate implements the ports defined in `faststart_core::application::ports`.
//! It contains all external dependencies and I/O operations: the local and
//! in-memory filesystems, the built-in stack registry, package-manager
//! detection and the git / gh collaborators.

pub mod filesystem;
pub mod package_manager;
pub mod process;
pub mod registry;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::BuiltinRegistry;
pub use vcs::{GhCli, GitCli};
