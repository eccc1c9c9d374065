//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the collaborators
//! behind the ports, not business logic. Business logic errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned: {resource}")]
    LockError { resource: &'static str },

    /// The registry has neither the requested stack nor its default.
    #[error("Stack '{stack}' is not available in the registry")]
    StackUnavailable { stack: String },

    /// An external command (git, gh, ...) failed or could not be spawned.
    #[error("Command `{command}` failed: {reason}")]
    ExternalCommandFailed { command: String, reason: String },

    /// Reading an answer from the user failed.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The hosting CLI is installed but has no logged-in account.
    #[error("Not authenticated with {host}")]
    RemoteNotAuthenticated { host: &'static str },

    /// A hosted repository with this name already exists.
    #[error("Repository '{name}' already exists")]
    RemoteRepositoryExists { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::StackUnavailable { .. } => vec![
                "Try: faststart list to see available stacks".into(),
            ],
            Self::ExternalCommandFailed { command, .. } => vec![
                format!("Check that `{}` is installed and on your PATH", command),
                "Skip this step with --no-git or --no-github".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run with --yes to skip interactive prompts".into(),
            ],
            Self::RemoteNotAuthenticated { .. } => vec![
                "Run: gh auth login".into(),
                "Then create the repository with: gh repo create --source . --push".into(),
            ],
            Self::RemoteRepositoryExists { name } => vec![
                format!("To use the existing repository, run inside {name}:"),
                format!("  git remote add origin git@github.com:<user>/{name}.git"),
                "  git push -u origin HEAD".into(),
            ],
            Self::LockError { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. }
            | Self::LockError { .. }
            | Self::ExternalCommandFailed { .. }
            | Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::StackUnavailable { .. } => ErrorCategory::NotFound,
            Self::RemoteNotAuthenticated { .. } => ErrorCategory::Configuration,
            Self::RemoteRepositoryExists { .. } => ErrorCategory::Validation,
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
