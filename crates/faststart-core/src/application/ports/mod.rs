//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `faststart-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: file operations for the materialization pipeline
//!   - `StackRegistry`: read-only stack definitions
//!   - `OverwritePrompt`: confirmation before replacing an existing directory
//!   - `VersionControl`: repository initialization and first commit
//!   - `RemoteRepository`: hosted repository creation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Filesystem, OverwritePrompt, RemoteRepoRequest, RemoteRepository, StackRegistry,
    VersionControl,
};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockOverwritePrompt, MockRemoteRepository, MockStackRegistry,
    MockVersionControl,
};
