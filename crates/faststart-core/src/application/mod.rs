//! Application layer for FastStart.
//!
//! This layer contains:
//! - **Services**: use case orchestration (ScaffoldService, StackService, VcsService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    PipelineState, Published, ScaffoldOutcome, ScaffoldPreview, ScaffoldReport, ScaffoldService,
    StackInfo, StackService, VcsOutcome, VcsService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Filesystem, OverwritePrompt, RemoteRepoRequest, RemoteRepository, StackRegistry,
    VersionControl,
};

pub use error::ApplicationError;
