//! Commit hooks: husky + lint-staged for Node, `.pre-commit-config.yaml`
//! for everything else.

use serde_json::json;

use super::{GeneratedFile, GeneratorResult};
use crate::domain::{
    entities::{profile::to_pretty_json, stack::FileRole},
    value_objects::{PackageManager, StackFamily, StackId},
};

pub const PRE_COMMIT_CONFIG: &str = ".pre-commit-config.yaml";
pub const HUSKY_HOOK: &str = ".husky/pre-commit";

const PYTHON: &str = "# Pre-commit hooks for Python
# Install: pip install pre-commit && pre-commit install
repos:
  - repo: https://github.com/psf/black
    rev: 23.12.1
    hooks:
      - id: black
        language_version: python3
        args: [--line-length=88]

  - repo: https://github.com/pycqa/isort
    rev: 5.13.2
    hooks:
      - id: isort
        args: [--profile=black]

  - repo: https://github.com/pycqa/flake8
    rev: 7.0.0
    hooks:
      - id: flake8
        args: [--max-line-length=88, --extend-ignore=E203]

  - repo: https://github.com/pre-commit/mirrors-mypy
    rev: v1.8.0
    hooks:
      - id: mypy
";

const RUBY: &str = "# Pre-commit hooks for Ruby
# Install: pip install pre-commit && pre-commit install
repos:
  - repo: https://github.com/pre-commit/mirrors-rubocop
    rev: v1.59.0
    hooks:
      - id: rubocop
        args: [--autocorrect]

  - repo: local
    hooks:
      - id: rspec
        name: RSpec Tests
        entry: bundle exec rspec
        language: system
        pass_filenames: false
        always_run: true
";

const ELM: &str = r"# Pre-commit hooks for Elm
# Install: pip install pre-commit && pre-commit install
repos:
  - repo: local
    hooks:
      - id: elm-format
        name: elm-format
        entry: elm-format
        language: system
        files: \.elm$
        args: [--yes]

      - id: elm-review
        name: elm-review
        entry: elm-review
        language: system
        pass_filenames: false
";

pub fn generate(stack: StackId, pm: PackageManager) -> GeneratorResult {
    let files = match stack.family() {
        StackFamily::Node => node_hooks(pm)?,
        StackFamily::Python => vec![config(PYTHON)],
        StackFamily::Ruby => vec![config(RUBY)],
        StackFamily::Elm => vec![config(ELM)],
    };
    Ok(Some(files))
}

fn config(content: &str) -> GeneratedFile {
    GeneratedFile::new(PRE_COMMIT_CONFIG, FileRole::Hook, content)
}

fn node_hooks(pm: PackageManager) -> Result<Vec<GeneratedFile>, crate::domain::DomainError> {
    let hook = format!(
        "#!/usr/bin/env sh\n. \"$(dirname -- \"$0\")/_/husky.sh\"\n\n{} lint-staged\n",
        pm.commands().exec
    );
    let lint_staged = json!({
        "*.{js,jsx,ts,tsx}": ["eslint --fix", "prettier --write"],
        "*.{json,css,md}": "prettier --write",
    });

    Ok(vec![
        GeneratedFile::new(HUSKY_HOOK, FileRole::Hook, hook).executable(),
        GeneratedFile::new(".lintstagedrc.json", FileRole::Hook, to_pretty_json(&lint_staged)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_gets_an_executable_husky_hook() {
        let files = generate(StackId::TypeScript, PackageManager::Pnpm).unwrap().unwrap();
        let hook = files.iter().find(|f| f.path == HUSKY_HOOK).unwrap();
        assert!(hook.executable);
        assert!(hook.content.starts_with("#!/usr/bin/env sh"));
        assert!(hook.content.contains("pnpm dlx lint-staged"));
        assert!(files.iter().any(|f| f.path == ".lintstagedrc.json"));
    }

    #[test]
    fn lint_staged_keeps_pattern_order() {
        let files = generate(StackId::JavaScript, PackageManager::Npm).unwrap().unwrap();
        let rc = &files.iter().find(|f| f.path == ".lintstagedrc.json").unwrap().content;
        assert!(rc.find("*.{js,jsx,ts,tsx}").unwrap() < rc.find("*.{json,css,md}").unwrap());
    }

    #[test]
    fn other_families_use_pre_commit_framework() {
        for stack in [StackId::Python, StackId::Rails, StackId::Lamdera] {
            let files = generate(stack, PackageManager::Npm).unwrap().unwrap();
            assert_eq!(files.len(), 1);
            assert_eq!(files[0].path, PRE_COMMIT_CONFIG);
            assert!(!files[0].executable);
        }
    }
}
