//! Linter configuration: ESLint for Node, flake8 for Python, RuboCop for Ruby.

use serde_json::{Map, Value, json};

use super::{GeneratedFile, GeneratorResult};
use crate::domain::{
    entities::{profile::to_pretty_json, stack::FileRole},
    value_objects::{PackageManager, StackFamily, StackId},
};

const FLAKE8: &str = "[flake8]
max-line-length = 88
extend-ignore = E203, W503
exclude =
    .git,
    __pycache__,
    .venv,
    venv,
    build,
    dist
per-file-ignores =
    __init__.py:F401
";

const RUBOCOP: &str = "AllCops:
  NewCops: enable
  TargetRubyVersion: 3.0
  Exclude:
    - 'vendor/**/*'
    - 'db/**/*'
    - 'config/**/*'
    - 'script/**/*'
    - 'bin/*'
    - 'node_modules/**/*'

Style/Documentation:
  Enabled: false

Style/FrozenStringLiteralComment:
  Enabled: false

Metrics/MethodLength:
  Max: 20

Metrics/BlockLength:
  Exclude:
    - 'spec/**/*'
    - 'test/**/*'

Layout/LineLength:
  Max: 120
";

pub fn generate(stack: StackId, _pm: PackageManager) -> GeneratorResult {
    let file = match stack.family() {
        StackFamily::Node => GeneratedFile::new(
            ".eslintrc.json",
            FileRole::Lint,
            to_pretty_json(&eslint_config(stack))?,
        ),
        StackFamily::Python => GeneratedFile::new(".flake8", FileRole::Lint, FLAKE8),
        StackFamily::Ruby => GeneratedFile::new(".rubocop.yml", FileRole::Lint, RUBOCOP),
        StackFamily::Elm => return Ok(None),
    };
    Ok(Some(vec![file]))
}

/// ESLint configuration: TypeScript parser for TS stacks, React plugins for
/// JSX stacks, Next's web-vitals preset for Next.
fn eslint_config(stack: StackId) -> Value {
    let mut extends = vec![json!("eslint:recommended")];
    let mut plugins: Vec<Value> = Vec::new();
    let mut rules = Map::new();
    let mut parser_options = json!({
        "ecmaVersion": "latest",
        "sourceType": "module",
    });

    let unused = json!(["error", { "argsIgnorePattern": "^_" }]);
    if stack.is_typescript() {
        extends.push(json!("plugin:@typescript-eslint/recommended"));
        plugins.push(json!("@typescript-eslint"));
        rules.insert("@typescript-eslint/no-unused-vars".into(), unused);
    } else {
        rules.insert("no-unused-vars".into(), unused);
    }
    rules.insert(
        "no-console".into(),
        json!(["warn", { "allow": ["warn", "error"] }]),
    );
    rules.insert("prefer-const".into(), json!("error"));
    rules.insert("no-var".into(), json!("error"));

    if stack.uses_jsx() {
        extends.push(json!("plugin:react/recommended"));
        extends.push(json!("plugin:react-hooks/recommended"));
        plugins.push(json!("react"));
        plugins.push(json!("react-hooks"));
        parser_options["ecmaFeatures"] = json!({ "jsx": true });
        rules.insert("react/react-in-jsx-scope".into(), json!("off"));
        rules.insert("react/prop-types".into(), json!("off"));
    }
    if stack == StackId::Next {
        extends.push(json!("next/core-web-vitals"));
    }

    let mut config = Map::new();
    config.insert(
        "env".into(),
        json!({ "browser": true, "es2021": true, "node": true }),
    );
    if stack.is_typescript() {
        config.insert("parser".into(), json!("@typescript-eslint/parser"));
    }
    config.insert("extends".into(), Value::Array(extends));
    if !plugins.is_empty() {
        config.insert("plugins".into(), Value::Array(plugins));
    }
    config.insert("parserOptions".into(), parser_options);
    if stack.uses_jsx() {
        config.insert(
            "settings".into(),
            json!({ "react": { "version": "detect" } }),
        );
    }
    config.insert("rules".into(), Value::Object(rules));
    Value::Object(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eslint(stack: StackId) -> Value {
        let files = generate(stack, PackageManager::Npm).unwrap().unwrap();
        serde_json::from_str(&files[0].content).unwrap()
    }

    #[test]
    fn plain_javascript_uses_core_rules() {
        let cfg = eslint(StackId::JavaScript);
        assert_eq!(cfg["extends"], json!(["eslint:recommended"]));
        assert!(cfg.get("parser").is_none());
        assert!(cfg["rules"].get("no-unused-vars").is_some());
    }

    #[test]
    fn typescript_swaps_in_the_ts_parser_and_rule() {
        let cfg = eslint(StackId::TypeScript);
        assert_eq!(cfg["parser"], "@typescript-eslint/parser");
        assert!(cfg["rules"].get("no-unused-vars").is_none());
        assert!(cfg["rules"].get("@typescript-eslint/no-unused-vars").is_some());
    }

    #[test]
    fn next_combines_typescript_react_and_web_vitals() {
        let cfg = eslint(StackId::Next);
        let extends: Vec<_> = cfg["extends"].as_array().unwrap().iter().collect();
        assert!(extends.contains(&&json!("plugin:react/recommended")));
        assert!(extends.contains(&&json!("plugin:@typescript-eslint/recommended")));
        assert_eq!(extends.last().unwrap(), &&json!("next/core-web-vitals"));
        assert_eq!(cfg["settings"]["react"]["version"], "detect");
        assert_eq!(cfg["parserOptions"]["ecmaFeatures"]["jsx"], true);
    }

    #[test]
    fn other_families_get_their_own_linters() {
        let py = generate(StackId::Python, PackageManager::Npm).unwrap().unwrap();
        assert_eq!(py[0].path, ".flake8");
        let rb = generate(StackId::Rails, PackageManager::Npm).unwrap().unwrap();
        assert_eq!(rb[0].path, ".rubocop.yml");
        assert!(generate(StackId::Lamdera, PackageManager::Npm).unwrap().is_none());
    }
}
