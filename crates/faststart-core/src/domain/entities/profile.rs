//! Profile resolution and application.
//!
//! A profile is a named bundle of feature toggles. Resolving never fails:
//! unknown identifiers fall back to `standard`. Applying a profile is a pure
//! transform that derives a new [`StackDefinition`] with every file, manifest
//! entry and command hint belonging to a disabled feature removed.

use serde_json::Value;
use tracing::debug;

use crate::domain::{
    entities::stack::{FileRole, StackDefinition},
    error::DomainError,
    value_objects::ProfileId,
};

/// Path of the Node manifest whose scripts and devDependencies are filtered.
pub const PACKAGE_JSON: &str = "package.json";

// ── Feature ──────────────────────────────────────────────────────────────────

/// An optional feature a profile can switch on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Tests,
    Linting,
    Formatting,
    PreCommit,
    Ci,
    Docker,
    EditorConfig,
}

// ── ProfileConfig ────────────────────────────────────────────────────────────

/// Resolved feature toggles for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileConfig {
    pub tests: bool,
    pub linting: bool,
    pub formatting: bool,
    pub pre_commit: bool,
    pub ci: bool,
    pub docker: bool,
    pub editor_config: bool,
}

impl ProfileConfig {
    pub const fn for_profile(profile: ProfileId) -> Self {
        match profile {
            ProfileId::Minimal => Self {
                tests: false,
                linting: false,
                formatting: false,
                pre_commit: false,
                ci: false,
                docker: false,
                editor_config: false,
            },
            ProfileId::Standard => Self {
                tests: true,
                linting: true,
                formatting: true,
                pre_commit: true,
                ci: false,
                docker: false,
                editor_config: true,
            },
            ProfileId::Full => Self {
                tests: true,
                linting: true,
                formatting: true,
                pre_commit: true,
                ci: true,
                docker: true,
                editor_config: true,
            },
        }
    }

    /// Force container files on (the `--docker` flag), keeping other toggles.
    pub const fn with_docker(mut self, docker: bool) -> Self {
        self.docker = self.docker || docker;
        self
    }

    pub const fn enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Tests => self.tests,
            Feature::Linting => self.linting,
            Feature::Formatting => self.formatting,
            Feature::PreCommit => self.pre_commit,
            Feature::Ci => self.ci,
            Feature::Docker => self.docker,
            Feature::EditorConfig => self.editor_config,
        }
    }

    /// Any developer tooling at all (task runners, dev requirements).
    pub const fn dev_tooling(&self) -> bool {
        self.tests || self.linting || self.formatting
    }

    /// Whether files tagged with `role` survive this profile.
    pub const fn keeps(&self, role: FileRole) -> bool {
        match role {
            FileRole::Source
            | FileRole::Manifest
            | FileRole::Config
            | FileRole::Docs => true,
            FileRole::Test => self.tests,
            FileRole::Lint => self.linting,
            FileRole::Format => self.formatting,
            FileRole::DevTooling => self.dev_tooling(),
            FileRole::Hook => self.pre_commit,
            FileRole::Ci => self.ci,
            FileRole::Container => self.docker,
            FileRole::EditorConfig => self.editor_config,
        }
    }
}

/// Map a raw profile identifier to its toggles. Unknown ids mean `standard`.
pub fn resolve_profile(raw: &str) -> ProfileConfig {
    ProfileConfig::for_profile(ProfileId::resolve(raw))
}

// ── applyProfile ─────────────────────────────────────────────────────────────

/// Derive a stack definition with everything the profile disables removed.
///
/// The input is not modified.
///
/// # Errors
///
/// `MalformedTemplate` if the stack's `package.json` is not valid JSON.
pub fn apply_profile(
    stack: &StackDefinition,
    config: &ProfileConfig,
) -> Result<StackDefinition, DomainError> {
    let stripped = stack
        .retain_files(|path, file| {
            let keep = config.keeps(file.role);
            if !keep {
                debug!(path = %path, role = ?file.role, "Dropping file disabled by profile");
            }
            keep
        })
        .retain_commands(|hint| hint.requires.is_none_or(|f| config.enabled(f)));

    let Some((path, manifest)) = stripped
        .files()
        .iter()
        .find(|(p, _)| p.as_str() == PACKAGE_JSON)
    else {
        return Ok(stripped);
    };

    let filtered = filter_package_json(&manifest.content, config)?;
    Ok(stripped.with_content(&path.clone(), filtered))
}

/// Feature a package.json script belongs to, judged by its name.
fn script_feature(name: &str) -> Option<Feature> {
    match name {
        "type-check" => Some(Feature::Linting),
        "pre-commit" | "prepare" => Some(Feature::PreCommit),
        n if n.starts_with("lint") => Some(Feature::Linting),
        n if n.starts_with("format") => Some(Feature::Formatting),
        n if n.starts_with("test") => Some(Feature::Tests),
        _ => None,
    }
}

/// Feature a devDependency serves, judged by its package name.
///
/// Only consulted while some dev tooling is on; build tooling (typescript,
/// vite, tsx, type definitions) belongs to no feature and stays then.
fn dev_dependency_feature(name: &str) -> Option<Feature> {
    match name {
        "husky" | "lint-staged" => Some(Feature::PreCommit),
        "jest" | "vitest" | "jsdom" | "ts-jest" | "supertest" | "@types/jest" => {
            Some(Feature::Tests)
        }
        n if n.starts_with("@testing-library/") || n.starts_with("jest-") => {
            Some(Feature::Tests)
        }
        n if n.starts_with("prettier") || n == "eslint-config-prettier" => {
            Some(Feature::Formatting)
        }
        n if n.starts_with("eslint") || n.starts_with("@typescript-eslint/") => {
            Some(Feature::Linting)
        }
        _ => None,
    }
}

fn filter_package_json(raw: &str, config: &ProfileConfig) -> Result<String, DomainError> {
    let mut pkg: Value = serde_json::from_str(raw).map_err(|e| malformed(PACKAGE_JSON, e))?;

    if let Some(obj) = pkg.as_object_mut() {
        if !config.dev_tooling() {
            obj.remove("devDependencies");
        }
        for (section, classify) in [
            ("scripts", script_feature as fn(&str) -> Option<Feature>),
            ("devDependencies", dev_dependency_feature),
        ] {
            let Some(entries) = obj.get_mut(section).and_then(Value::as_object_mut) else {
                continue;
            };
            entries.retain(|name, _| classify(name).is_none_or(|f| config.enabled(f)));
            if section == "devDependencies" && entries.is_empty() {
                obj.remove(section);
            }
        }
    }

    to_pretty_json(&pkg)
}

/// Serialize a manifest with two-space indentation and a trailing newline.
pub(crate) fn to_pretty_json(value: &Value) -> Result<String, DomainError> {
    let mut out = serde_json::to_string_pretty(value).map_err(|e| malformed(PACKAGE_JSON, e))?;
    out.push('\n');
    Ok(out)
}

pub(crate) fn malformed(path: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::MalformedTemplate {
        path: path.to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::stack::CommandHint;
    use crate::domain::value_objects::StackId;

    const PKG: &str = r#"{
  "name": "{{PROJECT_NAME}}",
  "scripts": {
    "start": "node src/index.js",
    "test": "node --test",
    "lint": "eslint .",
    "format": "prettier --write .",
    "type-check": "tsc --noEmit"
  },
  "devDependencies": {
    "eslint": "^8.50.0",
    "prettier": "^3.1.0",
    "typescript": "^5.3.0"
  }
}"#;

    fn stack() -> StackDefinition {
        StackDefinition::builder(StackId::TypeScript)
            .file(PACKAGE_JSON, FileRole::Manifest, PKG)
            .file("src/index.ts", FileRole::Source, "")
            .file("tsconfig.json", FileRole::Config, "{}")
            .file("jest.config.js", FileRole::Test, "")
            .file(".eslintrc.json", FileRole::Lint, "{}")
            .post_install(CommandHint::always("{{PM_INSTALL}}"))
            .post_install(CommandHint::requires(Feature::Linting, "{{PM_RUN}} lint"))
            .build()
            .unwrap()
    }

    // ── resolve ──

    #[test]
    fn unknown_profile_resolves_to_standard_toggles() {
        assert_eq!(resolve_profile("bogus"), ProfileConfig::for_profile(ProfileId::Standard));
    }

    #[test]
    fn full_profile_enables_everything() {
        let full = resolve_profile("full");
        assert!(full.ci && full.docker && full.tests && full.editor_config);
    }

    #[test]
    fn standard_profile_excludes_ci_and_docker() {
        let std = resolve_profile("standard");
        assert!(!std.ci);
        assert!(!std.docker);
        assert!(std.with_docker(true).docker);
    }

    // ── apply ──

    #[test]
    fn minimal_strips_dev_files_by_role() {
        let out = apply_profile(&stack(), &resolve_profile("minimal")).unwrap();
        assert!(!out.contains("jest.config.js"));
        assert!(!out.contains(".eslintrc.json"));
        assert!(out.contains("tsconfig.json"));
        assert!(out.contains("src/index.ts"));
    }

    #[test]
    fn minimal_strips_dev_scripts_and_tooling_dependencies() {
        let out = apply_profile(&stack(), &resolve_profile("minimal")).unwrap();
        let pkg: Value = serde_json::from_str(&out.file(PACKAGE_JSON).unwrap().content).unwrap();
        let scripts = pkg["scripts"].as_object().unwrap();
        assert!(scripts.contains_key("start"));
        for gone in ["test", "lint", "format", "type-check"] {
            assert!(!scripts.contains_key(gone), "{gone} should be stripped");
        }
        assert!(pkg.get("devDependencies").is_none());
    }

    #[test]
    fn partial_tooling_filters_dev_dependencies_by_feature() {
        let tests_only = ProfileConfig {
            linting: false,
            formatting: false,
            ..resolve_profile("standard")
        };
        let input = StackDefinition::builder(StackId::Next)
            .file(
                PACKAGE_JSON,
                FileRole::Manifest,
                r#"{"devDependencies": {"eslint": "^8", "jest": "^29", "jest-environment-jsdom": "^29", "typescript": "^5"}}"#,
            )
            .build()
            .unwrap();
        let out = apply_profile(&input, &tests_only).unwrap();
        let pkg: Value = serde_json::from_str(&out.file(PACKAGE_JSON).unwrap().content).unwrap();
        let dev = pkg["devDependencies"].as_object().unwrap();
        let names: Vec<_> = dev.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["jest", "jest-environment-jsdom", "typescript"]);

        let lint_only = ProfileConfig {
            tests: false,
            ..resolve_profile("standard")
        };
        let out = apply_profile(&input, &lint_only).unwrap();
        let pkg: Value = serde_json::from_str(&out.file(PACKAGE_JSON).unwrap().content).unwrap();
        assert!(pkg["devDependencies"].get("jest-environment-jsdom").is_none());
    }

    #[test]
    fn minimal_filters_command_hints() {
        let out = apply_profile(&stack(), &resolve_profile("minimal")).unwrap();
        let cmds: Vec<_> = out.post_install().iter().map(|c| c.command.as_str()).collect();
        assert_eq!(cmds, vec!["{{PM_INSTALL}}"]);
    }

    #[test]
    fn standard_keeps_the_definition_intact() {
        let input = stack();
        let out = apply_profile(&input, &resolve_profile("standard")).unwrap();
        assert_eq!(out.file_count(), input.file_count());
        let pkg: Value = serde_json::from_str(&out.file(PACKAGE_JSON).unwrap().content).unwrap();
        assert_eq!(pkg["scripts"].as_object().unwrap().len(), 5);
    }

    #[test]
    fn manifest_key_order_is_preserved() {
        let out = apply_profile(&stack(), &resolve_profile("standard")).unwrap();
        let content = &out.file(PACKAGE_JSON).unwrap().content;
        assert!(content.find("\"name\"").unwrap() < content.find("\"scripts\"").unwrap());
        assert!(content.find("\"start\"").unwrap() < content.find("\"test\"").unwrap());
    }

    #[test]
    fn input_is_not_mutated() {
        let input = stack();
        let _ = apply_profile(&input, &resolve_profile("minimal")).unwrap();
        assert_eq!(input.file(PACKAGE_JSON).unwrap().content, PKG);
    }

    #[test]
    fn malformed_manifest_fails_loud() {
        let broken = StackDefinition::builder(StackId::JavaScript)
            .file(PACKAGE_JSON, FileRole::Manifest, "{ not json")
            .build()
            .unwrap();
        let err = apply_profile(&broken, &resolve_profile("minimal")).unwrap_err();
        assert!(matches!(err, DomainError::MalformedTemplate { .. }));
    }
}
