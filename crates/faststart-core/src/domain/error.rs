// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried through the unified error)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("unknown stack '{stack}'")]
    UnknownStack { stack: String },

    #[error("conflicting stack selections: {}", stacks.join(", "))]
    ConflictingStacks { stacks: Vec<String> },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Duplicate path in stack definition: {path}")]
    DuplicatePath { path: String },

    #[error("Project structure is empty")]
    EmptyStructure,

    // ========================================================================
    // Generator Defects
    // ========================================================================
    #[error("malformed template '{path}': {reason}")]
    MalformedTemplate { path: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownStack { stack } => vec![
                format!("'{}' is not a supported stack", stack),
                format!(
                    "Supported stacks: {}",
                    crate::domain::value_objects::StackId::supported_list()
                ),
                "Try: faststart list to see available stacks".into(),
            ],
            Self::ConflictingStacks { .. } => vec![
                "Select exactly one stack".into(),
                "Either pass --stack <id> or one shorthand flag such as --python".into(),
            ],
            Self::MalformedTemplate { path, .. } => vec![
                format!("The built-in template for '{}' is corrupted", path),
                "This is a bug, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownStack { .. } | Self::ConflictingStacks { .. } => {
                ErrorCategory::Configuration
            }
            Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::DuplicatePath { .. }
            | Self::EmptyStructure => ErrorCategory::Validation,
            Self::MalformedTemplate { .. } => ErrorCategory::Internal,
        }
    }
}
