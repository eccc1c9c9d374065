//! Unified error handling for FastStart Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for FastStart Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// faststart-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum FastStartError {
    /// Errors from the domain layer (stack model and generator violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl FastStartError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// Whether the error was raised before anything touched the filesystem.
    pub fn is_pre_write(&self) -> bool {
        !matches!(
            self,
            Self::Application(ApplicationError::FilesystemError { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type FastStartResult<T> = Result<T, FastStartError>;
