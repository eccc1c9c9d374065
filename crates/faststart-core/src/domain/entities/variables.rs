//! Placeholder vocabulary and textual substitution.
//!
//! # Token contract
//!
//! Every token is spelled `{{NAME}}`. Because each token opens with `{{` and
//! closes with `}}` and names contain no braces, no token is a substring of
//! another; the result of substitution is therefore independent of the order
//! in which distinct tokens are considered.
//!
//! Substitution is a single left-to-right scan. Replacement values are copied
//! to the output and never re-scanned, so a value that itself looks like a
//! token is emitted literally.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::{options::ResolvedOptions, project_name::ProjectName};

/// Default value for the hosting username when none was supplied.
pub const DEFAULT_GITHUB_USERNAME: &str = "yourusername";

// ── Placeholder ──────────────────────────────────────────────────────────────

/// The fixed placeholder vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    ProjectName,
    ProjectDescription,
    AuthorName,
    CurrentYear,
    LicenseType,
    PackageManager,
    GithubUsername,
    PmInstall,
    PmRun,
    PmExec,
    PmAdd,
    PmAddDev,
}

impl Placeholder {
    pub const ALL: [Placeholder; 12] = [
        Self::ProjectName,
        Self::ProjectDescription,
        Self::AuthorName,
        Self::CurrentYear,
        Self::LicenseType,
        Self::PackageManager,
        Self::GithubUsername,
        Self::PmInstall,
        Self::PmRun,
        Self::PmExec,
        Self::PmAdd,
        Self::PmAddDev,
    ];

    /// The literal token as it appears in template content.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::ProjectName => "{{PROJECT_NAME}}",
            Self::ProjectDescription => "{{PROJECT_DESCRIPTION}}",
            Self::AuthorName => "{{AUTHOR_NAME}}",
            Self::CurrentYear => "{{CURRENT_YEAR}}",
            Self::LicenseType => "{{LICENSE_TYPE}}",
            Self::PackageManager => "{{PACKAGE_MANAGER}}",
            Self::GithubUsername => "{{GITHUB_USERNAME}}",
            Self::PmInstall => "{{PM_INSTALL}}",
            Self::PmRun => "{{PM_RUN}}",
            Self::PmExec => "{{PM_EXEC}}",
            Self::PmAdd => "{{PM_ADD}}",
            Self::PmAddDev => "{{PM_ADD_DEV}}",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ── TemplateVariables ────────────────────────────────────────────────────────

/// Resolved placeholder values for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVariables {
    values: BTreeMap<Placeholder, String>,
}

impl TemplateVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute every value from the resolved options.
    pub fn from_options(options: &ResolvedOptions, year: i32) -> Self {
        let name = ProjectName::sanitize(&options.name);
        let pm = options.package_manager.commands();

        Self::new()
            .with(Placeholder::ProjectName, name.display_name())
            .with(Placeholder::ProjectDescription, &options.description)
            .with(Placeholder::AuthorName, &options.author)
            .with(Placeholder::CurrentYear, year.to_string())
            .with(Placeholder::LicenseType, &options.license)
            .with(Placeholder::PackageManager, options.package_manager.as_str())
            .with(
                Placeholder::GithubUsername,
                options
                    .github_username
                    .as_deref()
                    .filter(|u| !u.trim().is_empty())
                    .unwrap_or(DEFAULT_GITHUB_USERNAME),
            )
            .with(Placeholder::PmInstall, pm.install)
            .with(Placeholder::PmRun, pm.run)
            .with(Placeholder::PmExec, pm.exec)
            .with(Placeholder::PmAdd, pm.add)
            .with(Placeholder::PmAddDev, pm.add_dev)
    }

    pub fn with(mut self, key: Placeholder, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    pub fn get(&self, key: Placeholder) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace every known token in `text`. Unknown `{{...}}` runs are kept.
    pub fn substitute(&self, text: &str) -> String {
        substitute(text, self)
    }
}

/// Replace every token present in `variables`; leave everything else as is.
pub fn substitute(text: &str, variables: &TemplateVariables) -> String {
    if variables.is_empty() || !text.contains("{{") {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        let hit = variables
            .values
            .iter()
            .find(|(key, _)| candidate.starts_with(key.token()));

        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &candidate[key.token().len()..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
