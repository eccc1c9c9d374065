//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "list stacks".

pub mod scaffold_service;
pub mod stack_service;
pub mod vcs_service;

pub use scaffold_service::{
    PipelineState, ScaffoldOutcome, ScaffoldPreview, ScaffoldReport, ScaffoldService,
};
pub use stack_service::{StackInfo, StackService};
pub use vcs_service::{Published, VcsOutcome, VcsService};
