use std::collections::{BTreeMap, HashSet};

use crate::domain::{
    entities::{
        common::{Permissions, RelativePath},
        profile::Feature,
    },
    error::DomainError,
    value_objects::StackId,
};

/// Conventional name of the ignore file written for every stack.
pub const IGNORE_FILE: &str = ".gitignore";

// ============================================================================
// FileRole - What a File Is For
// ============================================================================

/// Role tag attached to every stack file.
///
/// Profiles strip files by role rather than by name, so a differently-named
/// lint or test configuration introduced by a new stack is still removed by
/// the minimal profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    /// Application source code.
    Source,
    /// Package manifest (package.json, Gemfile, pyproject.toml, ...).
    Manifest,
    /// Runtime or build configuration that every profile keeps.
    Config,
    /// Test sources and test-runner configuration.
    Test,
    /// Linter configuration.
    Lint,
    /// Formatter configuration.
    Format,
    /// Developer task runners (Makefile, Rakefile, dev requirements).
    DevTooling,
    /// Git hooks and pre-commit configuration.
    Hook,
    /// Continuous-integration workflows.
    Ci,
    /// Container image and compose files.
    Container,
    /// Editor configuration.
    EditorConfig,
    /// Documentation.
    Docs,
}

// ============================================================================
// StackFile / CommandHint
// ============================================================================

/// One file of a stack definition: raw template content plus its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFile {
    /// Raw content, may contain placeholder tokens.
    pub content: String,
    pub role: FileRole,
    pub permissions: Permissions,
}

impl StackFile {
    pub fn new(role: FileRole, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role,
            permissions: Permissions::default(),
        }
    }

    pub fn executable(mut self) -> Self {
        self.permissions = Permissions::executable();
        self
    }
}

/// A post-install command shown to the user after generation.
///
/// `requires` names the feature the command depends on (for example a
/// `lint` script), so profiles can drop hints for features they disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHint {
    pub command: String,
    pub requires: Option<Feature>,
}

impl CommandHint {
    pub fn always(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            requires: None,
        }
    }

    pub fn requires(feature: Feature, command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            requires: Some(feature),
        }
    }
}

// ============================================================================
// StackDefinition - The Static Content of One Stack
// ============================================================================

/// Everything needed to materialize one stack.
///
/// ## Invariants
///
/// 1. Every path in `files` is relative and stays inside the project root
/// 2. Paths are unique
/// 3. `files` does not contain the ignore file; its content is `ignore_rules`
///
/// ## Lifecycle
///
/// Constructed once per stack by the registry and never mutated in place.
/// Profile application and generators derive new definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDefinition {
    id: StackId,
    files: BTreeMap<RelativePath, StackFile>,
    ignore_rules: String,
    post_install: Vec<CommandHint>,
}

impl StackDefinition {
    /// Start the builder pattern for fluent construction.
    ///
    /// # Example
    /// ```rust,ignore
    /// let stack = StackDefinition::builder(StackId::JavaScript)
    ///     .file("package.json", FileRole::Manifest, PACKAGE_JSON)
    ///     .ignore_rules("node_modules/\n")
    ///     .post_install(CommandHint::always("{{PM_INSTALL}}"))
    ///     .build()?;
    /// ```
    pub fn builder(id: StackId) -> StackDefinitionBuilder {
        StackDefinitionBuilder {
            id,
            files: Vec::new(),
            ignore_rules: String::new(),
            post_install: Vec::new(),
        }
    }

    pub fn id(&self) -> StackId {
        self.id
    }

    pub fn files(&self) -> &BTreeMap<RelativePath, StackFile> {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&StackFile> {
        self.files.iter().find(|(p, _)| p.as_str() == path).map(|(_, f)| f)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.file(path).is_some()
    }

    pub fn ignore_rules(&self) -> &str {
        &self.ignore_rules
    }

    pub fn post_install(&self) -> &[CommandHint] {
        &self.post_install
    }

    // -------------------------------------------------------------------------
    // Derivations (each returns a new definition)
    // -------------------------------------------------------------------------

    /// Keep only the files for which `keep` returns true.
    pub fn retain_files(&self, mut keep: impl FnMut(&RelativePath, &StackFile) -> bool) -> Self {
        Self {
            files: self
                .files
                .iter()
                .filter(|(p, f)| keep(p, f))
                .map(|(p, f)| (p.clone(), f.clone()))
                .collect(),
            ..self.clone()
        }
    }

    /// Keep only the command hints for which `keep` returns true.
    pub fn retain_commands(&self, keep: impl FnMut(&&CommandHint) -> bool) -> Self {
        Self {
            post_install: self.post_install.iter().filter(keep).cloned().collect(),
            ..self.clone()
        }
    }

    /// Replace the content of an existing file, keeping its role.
    ///
    /// Used by augmenters that rewrite a base manifest rather than replace it.
    pub fn with_content(&self, path: &RelativePath, content: String) -> Self {
        let mut files = self.files.clone();
        if let Some(file) = files.get_mut(path) {
            file.content = content;
        }
        Self {
            files,
            ..self.clone()
        }
    }

    /// Merge generated files. Paths already present in the definition win.
    pub fn merged_with(&self, generated: BTreeMap<RelativePath, StackFile>) -> Self {
        let mut files = self.files.clone();
        for (path, file) in generated {
            files.entry(path).or_insert(file);
        }
        Self {
            files,
            ..self.clone()
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Builder for [`StackDefinition`].
///
/// Paths are validated at `build()`, not at each setter.
pub struct StackDefinitionBuilder {
    id: StackId,
    files: Vec<(String, StackFile)>,
    ignore_rules: String,
    post_install: Vec<CommandHint>,
}

impl StackDefinitionBuilder {
    pub fn file(mut self, path: &str, role: FileRole, content: &str) -> Self {
        self.files
            .push((path.to_string(), StackFile::new(role, content)));
        self
    }

    pub fn executable_file(mut self, path: &str, role: FileRole, content: &str) -> Self {
        self.files
            .push((path.to_string(), StackFile::new(role, content).executable()));
        self
    }

    pub fn ignore_rules(mut self, rules: &str) -> Self {
        self.ignore_rules = rules.to_string();
        self
    }

    pub fn post_install(mut self, hint: CommandHint) -> Self {
        self.post_install.push(hint);
        self
    }

    /// Consume builder and construct the definition.
    ///
    /// # Errors
    ///
    /// - `AbsolutePathNotAllowed` / `PathEscapesRoot` for unsafe paths
    /// - `DuplicatePath` if a path is registered twice or shadows the ignore file
    /// - `EmptyStructure` if no file was registered
    pub fn build(self) -> Result<StackDefinition, DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = HashSet::new();
        let mut files = BTreeMap::new();
        for (raw, file) in self.files {
            if raw == IGNORE_FILE || !seen.insert(raw.clone()) {
                return Err(DomainError::DuplicatePath { path: raw });
            }
            files.insert(RelativePath::try_new(raw)?, file);
        }

        Ok(StackDefinition {
            id: self.id,
            files,
            ignore_rules: self.ignore_rules,
            post_install: self.post_install,
        })
    }
}
