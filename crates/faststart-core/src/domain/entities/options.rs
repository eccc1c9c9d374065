use std::path::PathBuf;

use crate::domain::value_objects::{PackageManager, ProfileId, StackId};

pub const DEFAULT_DESCRIPTION: &str = "A new awesome project";
pub const DEFAULT_AUTHOR: &str = "Your Name";
pub const DEFAULT_LICENSE: &str = "MIT";

/// The fully-resolved record handed to the materialization pipeline.
///
/// Built once at the CLI boundary (flags, config file, prompts) and consumed
/// as plain data. `new` fills every field with its documented default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Raw, unsanitized project name as the user typed it.
    pub name: String,
    pub stack: StackId,
    pub description: String,
    pub author: String,
    pub license: String,
    pub profile: ProfileId,
    pub package_manager: PackageManager,
    /// Force container files regardless of profile.
    pub docker: bool,
    pub dry_run: bool,
    /// Replace an existing project directory without asking.
    pub force: bool,
    /// Never prompt; an existing directory is replaced.
    pub non_interactive: bool,
    pub github_username: Option<String>,
    /// Parent directory the project directory is created in.
    pub output_dir: PathBuf,
}

impl ResolvedOptions {
    pub fn new(name: impl Into<String>, stack: StackId) -> Self {
        Self {
            name: name.into(),
            stack,
            description: DEFAULT_DESCRIPTION.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            license: DEFAULT_LICENSE.to_string(),
            profile: ProfileId::Standard,
            package_manager: PackageManager::Npm,
            docker: false,
            dry_run: false,
            force: false,
            non_interactive: false,
            github_username: None,
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_profile(mut self, profile: ProfileId) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
