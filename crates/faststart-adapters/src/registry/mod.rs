//! Built-in stack registry.
//!
//! The registry is built once at startup from the definitions in
//! [`stacks`] and handed to services by injection. It is never mutated
//! afterwards, so lookups need no locking.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use faststart_core::{
    application::ports::StackRegistry,
    domain::{StackDefinition, StackId},
    error::FastStartResult,
};

mod stacks;

/// Read-only registry of the stacks that ship with FastStart.
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    stacks: BTreeMap<StackId, StackDefinition>,
    order: Vec<StackId>,
    default: StackId,
}

impl BuiltinRegistry {
    /// Build the registry. Fails only if a built-in definition is invalid.
    #[instrument]
    pub fn new() -> FastStartResult<Self> {
        let definitions = stacks::all()?;
        let order = definitions.iter().map(StackDefinition::id).collect();
        let stacks: BTreeMap<_, _> = definitions.into_iter().map(|s| (s.id(), s)).collect();
        debug!(count = stacks.len(), "Built-in stacks loaded");
        Ok(Self {
            stacks,
            order,
            default: StackId::JavaScript,
        })
    }

    /// Registry containing only the given definitions. The first one is the default.
    pub fn from_definitions(definitions: Vec<StackDefinition>) -> Self {
        let order: Vec<_> = definitions.iter().map(StackDefinition::id).collect();
        let default = order.first().copied().unwrap_or(StackId::JavaScript);
        Self {
            stacks: definitions.into_iter().map(|s| (s.id(), s)).collect(),
            order,
            default,
        }
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}

impl StackRegistry for BuiltinRegistry {
    fn get(&self, id: StackId) -> Option<StackDefinition> {
        self.stacks.get(&id).cloned()
    }

    fn ids(&self) -> Vec<StackId> {
        self.order.clone()
    }

    fn default_stack(&self) -> StackId {
        self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faststart_core::domain::{
        FileRole, IGNORE_FILE, PackageManager, Placeholder, compose, resolve_profile,
    };

    fn registry() -> BuiltinRegistry {
        BuiltinRegistry::new().unwrap()
    }

    #[test]
    fn every_stack_is_registered_in_catalog_order() {
        assert_eq!(registry().ids(), StackId::ALL.to_vec());
        assert_eq!(registry().default_stack(), StackId::JavaScript);
    }

    #[test]
    fn required_files_are_present() {
        let required: &[(StackId, &[&str])] = &[
            (StackId::JavaScript, &["package.json", "src/index.js"]),
            (StackId::TypeScript, &["package.json", "src/index.ts", "tsconfig.json"]),
            (StackId::Python, &["requirements.txt", "pyproject.toml", "src/main.py"]),
            (StackId::Ruby, &["Gemfile", "src/main.rb"]),
            (
                StackId::Lamdera,
                &["elm.json", "src/Frontend.elm", "src/Backend.elm", "src/Types.elm"],
            ),
            (
                StackId::React,
                &["package.json", "vite.config.js", "index.html", "src/main.jsx", "src/App.jsx"],
            ),
            (StackId::Next, &["package.json", "next.config.js", "src/app/page.tsx"]),
            (
                StackId::FastApi,
                &["requirements.txt", "pyproject.toml", "app/__init__.py", "app/main.py"],
            ),
            (
                StackId::Rails,
                &["Gemfile", "config/routes.rb", "app/controllers/application_controller.rb"],
            ),
        ];

        let registry = registry();
        for (id, files) in required {
            let stack = registry.get(*id).unwrap();
            for file in *files {
                assert!(stack.contains(file), "{id} is missing {file}");
            }
        }
    }

    #[test]
    fn definitions_never_carry_the_ignore_file_or_generated_configs() {
        for stack in registry().stacks.values() {
            assert!(!stack.contains(IGNORE_FILE));
            assert!(!stack.contains(".eslintrc.json"));
            assert!(!stack.contains("Dockerfile"));
            assert!(!stack.ignore_rules().is_empty());
        }
    }

    #[test]
    fn manifests_parse() {
        for stack in registry().stacks.values() {
            if let Some(pkg) = stack.file("package.json") {
                serde_json::from_str::<serde_json::Value>(&pkg.content).unwrap();
            }
            if let Some(py) = stack.file("pyproject.toml") {
                toml::from_str::<toml::Table>(&py.content).unwrap();
            }
        }
    }

    #[test]
    fn node_manifests_use_the_name_token() {
        for id in [StackId::JavaScript, StackId::TypeScript, StackId::React, StackId::Next] {
            let stack = registry().get(id).unwrap();
            let pkg = &stack.file("package.json").unwrap().content;
            assert!(pkg.contains(Placeholder::ProjectName.token()));
        }
    }

    #[test]
    fn every_stack_has_source_and_test_files() {
        for stack in registry().stacks.values() {
            assert!(stack.files().values().any(|f| f.role == FileRole::Source));
            if stack.id() != StackId::Lamdera {
                assert!(
                    stack.files().values().any(|f| f.role == FileRole::Test),
                    "{} has no tests",
                    stack.id()
                );
            }
        }
    }

    #[test]
    fn minimal_next_keeps_no_dev_dependencies() {
        let next = registry().get(StackId::Next).unwrap();
        let composed = compose(&next, &resolve_profile("minimal"), PackageManager::Npm).unwrap();

        assert!(!composed.contains("jest.config.js"));
        let pkg: serde_json::Value =
            serde_json::from_str(&composed.file("package.json").unwrap().content).unwrap();
        assert!(pkg.get("devDependencies").is_none());
        assert!(pkg["scripts"].get("test").is_none());
    }

    #[test]
    fn standard_next_keeps_its_test_environment() {
        let next = registry().get(StackId::Next).unwrap();
        let composed = compose(&next, &resolve_profile("standard"), PackageManager::Npm).unwrap();

        let pkg: serde_json::Value =
            serde_json::from_str(&composed.file("package.json").unwrap().content).unwrap();
        assert!(pkg["devDependencies"].get("jest-environment-jsdom").is_some());
        assert!(pkg["devDependencies"].get("typescript").is_some());
    }

    #[test]
    fn quality_hints_follow_the_profile() {
        let expected: &[(StackId, &[&str])] = &[
            (StackId::JavaScript, &["{{PM_RUN}} lint", "{{PM_RUN}} format"]),
            (
                StackId::TypeScript,
                &["{{PM_RUN}} test", "{{PM_RUN}} lint", "{{PM_RUN}} format"],
            ),
            (StackId::React, &["{{PM_RUN}} lint", "{{PM_RUN}} format"]),
            (StackId::Next, &["{{PM_RUN}} lint", "{{PM_RUN}} format"]),
            (StackId::Python, &["black . && isort . && flake8"]),
            (StackId::FastApi, &["black . && isort . && flake8"]),
            (StackId::Ruby, &["bundle exec rubocop"]),
            (StackId::Rails, &["bundle exec rubocop"]),
        ];

        let registry = registry();
        for (id, hints) in expected {
            let stack = registry.get(*id).unwrap();
            for profile in ["standard", "minimal"] {
                let composed =
                    compose(&stack, &resolve_profile(profile), PackageManager::Npm).unwrap();
                let commands: Vec<_> =
                    composed.post_install().iter().map(|h| h.command.as_str()).collect();
                for hint in *hints {
                    assert_eq!(
                        commands.contains(hint),
                        profile == "standard",
                        "{id} {profile}: {hint}"
                    );
                }
            }
        }
    }

    #[test]
    fn from_definitions_uses_first_as_default() {
        let python = registry().get(StackId::Python).unwrap();
        let small = BuiltinRegistry::from_definitions(vec![python]);
        assert_eq!(small.default_stack(), StackId::Python);
        assert!(small.get(StackId::Ruby).is_none());
        assert_eq!(small.len(), 1);
    }
}
