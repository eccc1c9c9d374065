// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for FastStart.
//!
//! Pure data and pure transforms: the stack model, profiles, the generator
//! table, placeholder substitution and name sanitization. Nothing in here
//! touches the filesystem, spawns processes or reads the clock; those
//! concerns are reached through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable entities**: every transform returns a new value
//! - **Data-only crates**: serde_json and toml for manifests, tracing for events
//!
// Public API - what the world sees
pub mod catalog;
pub mod entities;
pub mod error;
pub mod generators;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use catalog::{STACK_CATALOG, StackDef, stack_def};

pub use entities::{
    common::{Permissions, RelativePath},
    options::ResolvedOptions,
    profile::{Feature, ProfileConfig, apply_profile, resolve_profile},
    project_name::{FALLBACK_PROJECT_NAME, ProjectName},
    project_structure::{FileToWrite, ProjectStructure, TreeEntry},
    stack::{CommandHint, FileRole, IGNORE_FILE, StackDefinition, StackFile},
    variables::{Placeholder, TemplateVariables, substitute},
};

pub use error::DomainError;
pub use generators::{GENERATORS, Gate, compose};

pub use value_objects::{PackageManager, ProfileId, StackFamily, StackId};

pub use validation::DomainValidator;
