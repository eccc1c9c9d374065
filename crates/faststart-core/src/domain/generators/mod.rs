//! Config fragment generators and the enhancement pipeline.
//!
//! Each generator is a pure function from `(stack, package manager)` to an
//! optional list of files. Which generators run is decided by the static
//! [`GENERATORS`] table: every entry carries a [`Gate`] checked against the
//! resolved [`ProfileConfig`].
//!
//! [`compose`] is the single entry point used by the application layer:
//!
//! 1. apply the profile to the base definition,
//! 2. augment `package.json` and `pyproject.toml` in place,
//! 3. run every enabled generator in table order,
//! 4. merge the generated files under the base files.
//!
//! Base files always win over generated ones. Between generators, the later
//! table entry wins.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::domain::{
    entities::{
        common::RelativePath,
        profile::{Feature, ProfileConfig, apply_profile},
        stack::{FileRole, StackDefinition, StackFile},
    },
    error::DomainError,
    value_objects::{PackageManager, StackId},
};

pub mod build_tool;
pub mod ci;
pub mod container;
pub mod editorconfig;
pub mod enhance;
pub mod formatter;
pub mod lint;
pub mod precommit;
pub mod readme;

pub use enhance::with_enhancements;
pub use formatter::with_formatter_config;

/// A file produced by a generator, before path validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: &'static str,
    pub role: FileRole,
    pub content: String,
    pub executable: bool,
}

impl GeneratedFile {
    pub fn new(path: &'static str, role: FileRole, content: impl Into<String>) -> Self {
        Self {
            path,
            role,
            content: content.into(),
            executable: false,
        }
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }

    fn into_stack_file(self) -> Result<(RelativePath, StackFile), DomainError> {
        let path = RelativePath::try_new(self.path).map_err(|e| DomainError::MalformedTemplate {
            path: self.path.to_string(),
            reason: e.to_string(),
        })?;
        let file = StackFile::new(self.role, self.content);
        Ok((path, if self.executable { file.executable() } else { file }))
    }
}

/// `Ok(None)` means the generator has nothing to offer for this stack.
pub type GeneratorResult = Result<Option<Vec<GeneratedFile>>, DomainError>;

/// Condition under which a generator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    Feature(Feature),
    /// Any of tests, linting or formatting.
    DevTooling,
}

impl Gate {
    pub const fn is_open(&self, config: &ProfileConfig) -> bool {
        match self {
            Self::Always => true,
            Self::Feature(feature) => config.enabled(*feature),
            Self::DevTooling => config.dev_tooling(),
        }
    }
}

pub struct GeneratorDef {
    pub name: &'static str,
    pub gate: Gate,
    pub generate: fn(StackId, PackageManager) -> GeneratorResult,
}

/// Every generator, in the order they run.
pub static GENERATORS: &[GeneratorDef] = &[
    GeneratorDef {
        name: "editorconfig",
        gate: Gate::Feature(Feature::EditorConfig),
        generate: editorconfig::generate,
    },
    GeneratorDef {
        name: "lint",
        gate: Gate::Feature(Feature::Linting),
        generate: lint::generate,
    },
    GeneratorDef {
        name: "formatter",
        gate: Gate::Feature(Feature::Formatting),
        generate: formatter::generate,
    },
    GeneratorDef {
        name: "build_tool",
        gate: Gate::DevTooling,
        generate: build_tool::generate,
    },
    GeneratorDef {
        name: "precommit",
        gate: Gate::Feature(Feature::PreCommit),
        generate: precommit::generate,
    },
    GeneratorDef {
        name: "ci",
        gate: Gate::Feature(Feature::Ci),
        generate: ci::generate,
    },
    GeneratorDef {
        name: "container",
        gate: Gate::Feature(Feature::Docker),
        generate: container::generate,
    },
    GeneratorDef {
        name: "readme",
        gate: Gate::Always,
        generate: readme::generate,
    },
];

/// Run every generator whose gate is open, collecting files by path.
pub fn generate_all(
    stack: StackId,
    config: &ProfileConfig,
    pm: PackageManager,
) -> Result<BTreeMap<RelativePath, StackFile>, DomainError> {
    let mut generated = BTreeMap::new();
    for def in GENERATORS.iter().filter(|d| d.gate.is_open(config)) {
        let Some(files) = (def.generate)(stack, pm)? else {
            trace!(generator = def.name, stack = %stack, "Generator skipped");
            continue;
        };
        debug!(generator = def.name, files = files.len(), "Generator produced files");
        for file in files {
            let (path, file) = file.into_stack_file()?;
            generated.insert(path, file);
        }
    }
    Ok(generated)
}

/// Profile, augment and enhance a base stack definition.
///
/// # Errors
///
/// `MalformedTemplate` when a base manifest cannot be parsed or a generator
/// emits an invalid path.
pub fn compose(
    base: &StackDefinition,
    config: &ProfileConfig,
    pm: PackageManager,
) -> Result<StackDefinition, DomainError> {
    let profiled = apply_profile(base, config)?;
    let enhanced = with_enhancements(&profiled, config, pm)?;
    let augmented = with_formatter_config(&enhanced, config)?;
    let generated = generate_all(base.id(), config, pm)?;
    Ok(augmented.merged_with(generated))
}
