//! Terminal prompts.
//!
//! With the `interactive` feature (default) answers come from `dialoguer`.
//! Without it every question takes its default and overwrites are declined.

use std::path::Path;

use faststart_core::{
    application::{StackInfo, ports::OverwritePrompt},
    domain::StackId,
    error::FastStartResult,
};

#[cfg(feature = "interactive")]
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
#[cfg(feature = "interactive")]
use faststart_core::application::ApplicationError;

/// Asks the user the questions flags did not answer.
#[derive(Default)]
pub struct Prompter {
    #[cfg(feature = "interactive")]
    theme: ColorfulTheme,
}

#[cfg(feature = "interactive")]
fn prompt_failed(e: dialoguer::Error) -> ApplicationError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
}

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(feature = "interactive")]
    pub fn project_name(&self, default: &str) -> FastStartResult<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt("Project name")
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_failed)?)
    }

    #[cfg(not(feature = "interactive"))]
    pub fn project_name(&self, default: &str) -> FastStartResult<String> {
        Ok(default.to_string())
    }

    #[cfg(feature = "interactive")]
    pub fn stack(&self, choices: &[StackInfo], default: StackId) -> FastStartResult<StackId> {
        let labels: Vec<String> = choices
            .iter()
            .map(|s| format!("{} {:<12} {}", s.emoji, s.name, s.description))
            .collect();
        let start = choices.iter().position(|s| s.id == default).unwrap_or(0);
        let picked = Select::with_theme(&self.theme)
            .with_prompt("Stack")
            .items(&labels)
            .default(start)
            .interact()
            .map_err(prompt_failed)?;
        Ok(choices.get(picked).map_or(default, |s| s.id))
    }

    #[cfg(not(feature = "interactive"))]
    pub fn stack(&self, _choices: &[StackInfo], default: StackId) -> FastStartResult<StackId> {
        Ok(default)
    }

    #[cfg(feature = "interactive")]
    pub fn description(&self, default: &str) -> FastStartResult<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt("Description")
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_failed)?)
    }

    #[cfg(not(feature = "interactive"))]
    pub fn description(&self, default: &str) -> FastStartResult<String> {
        Ok(default.to_string())
    }

    /// `Some(private)` when the user wants a GitHub repository.
    #[cfg(feature = "interactive")]
    pub fn github_repository(&self) -> FastStartResult<Option<bool>> {
        let create = Confirm::with_theme(&self.theme)
            .with_prompt("Create a GitHub repository and push?")
            .default(false)
            .interact()
            .map_err(prompt_failed)?;
        if !create {
            return Ok(None);
        }
        let private = Confirm::with_theme(&self.theme)
            .with_prompt("Private repository?")
            .default(true)
            .interact()
            .map_err(prompt_failed)?;
        Ok(Some(private))
    }

    #[cfg(not(feature = "interactive"))]
    pub fn github_repository(&self) -> FastStartResult<Option<bool>> {
        Ok(None)
    }
}

impl OverwritePrompt for Prompter {
    #[cfg(feature = "interactive")]
    fn confirm_overwrite(&self, path: &Path) -> FastStartResult<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(format!(
                "'{}' already exists. Replace it? All of its contents will be deleted",
                path.display()
            ))
            .default(false)
            .interact()
            .map_err(prompt_failed)?)
    }

    #[cfg(not(feature = "interactive"))]
    fn confirm_overwrite(&self, path: &Path) -> FastStartResult<bool> {
        tracing::warn!(path = %path.display(), "Built without prompts, keeping existing directory");
        Ok(false)
    }
}
