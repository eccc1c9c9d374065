//! Formatter configuration.
//!
//! Node stacks get a standalone `.prettierrc`. Python stacks keep their
//! formatter settings inside `pyproject.toml`, so instead of a generated file
//! they get [`with_formatter_config`], which appends `[tool.black]` and
//! `[tool.isort]` to the existing manifest.

use serde_json::{Value, json};
use tracing::debug;

use super::{GeneratedFile, GeneratorResult};
use crate::domain::{
    entities::{
        profile::{ProfileConfig, malformed, to_pretty_json},
        stack::{FileRole, StackDefinition},
    },
    error::DomainError,
    value_objects::{PackageManager, StackFamily, StackId},
};

pub const PYPROJECT: &str = "pyproject.toml";

const BLACK: &str = r#"[tool.black]
line-length = 88
target-version = ['py39', 'py310', 'py311']
include = '\.pyi?$'
extend-exclude = '''
/(
  # directories
  \.eggs
  | \.git
  | \.hg
  | \.mypy_cache
  | \.tox
  | \.venv
  | build
  | dist
)/
'''
"#;

const ISORT: &str = r#"[tool.isort]
profile = "black"
line_length = 88
multi_line_output = 3
include_trailing_comma = true
force_grid_wrap = 0
use_parentheses = true
ensure_newline_before_comments = true
"#;

pub fn generate(stack: StackId, _pm: PackageManager) -> GeneratorResult {
    if stack.family() != StackFamily::Node {
        return Ok(None);
    }
    Ok(Some(vec![GeneratedFile::new(
        ".prettierrc",
        FileRole::Format,
        to_pretty_json(&prettier_config(stack))?,
    )]))
}

fn prettier_config(stack: StackId) -> Value {
    let mut cfg = json!({
        "semi": true,
        "trailingComma": "es5",
        "singleQuote": true,
        "printWidth": 100,
        "tabWidth": 2,
        "useTabs": false,
        "bracketSpacing": true,
        "arrowParens": "always",
        "endOfLine": "lf",
    });
    if stack.uses_jsx() {
        cfg["jsxSingleQuote"] = json!(false);
        cfg["bracketSameLine"] = json!(false);
    }
    cfg
}

/// Append black/isort sections to a Python stack's `pyproject.toml`.
///
/// Sections already present in the manifest are left alone. Stacks without
/// a `pyproject.toml`, non-Python stacks and profiles without formatting are
/// returned unchanged.
///
/// # Errors
///
/// `MalformedTemplate` if the manifest is not valid TOML.
pub fn with_formatter_config(
    stack: &StackDefinition,
    config: &ProfileConfig,
) -> Result<StackDefinition, DomainError> {
    if !config.formatting || stack.id().family() != StackFamily::Python {
        return Ok(stack.clone());
    }
    let Some((path, file)) = stack.files().iter().find(|(p, _)| p.as_str() == PYPROJECT) else {
        return Ok(stack.clone());
    };

    let parsed: toml::Table =
        toml::from_str(&file.content).map_err(|e| malformed(PYPROJECT, e))?;
    let tool = parsed.get("tool").and_then(toml::Value::as_table);
    let has = |name: &str| tool.is_some_and(|t| t.contains_key(name));

    let mut content = file.content.clone();
    for (name, section) in [("black", BLACK), ("isort", ISORT)] {
        if has(name) {
            debug!(section = name, "pyproject already configures formatter");
            continue;
        }
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push('\n');
        content.push_str(section);
    }

    Ok(stack.with_content(&path.clone(), content))
}
