use faststart_core::domain::{CommandHint, DomainError, Feature, FileRole, StackDefinition, StackId};

use super::PYTHON_IGNORE;

const REQUIREMENTS: &str = "# Runtime dependencies
python-dotenv>=1.0.0
";

const PYPROJECT: &str = r#"[project]
name = "{{PROJECT_NAME}}"
version = "0.1.0"
description = "{{PROJECT_DESCRIPTION}}"
authors = [{ name = "{{AUTHOR_NAME}}" }]
license = { text = "{{LICENSE_TYPE}}" }
requires-python = ">=3.9"

[tool.mypy]
python_version = "3.9"
warn_return_any = true
warn_unused_configs = true
disallow_untyped_defs = true

[tool.pytest.ini_options]
testpaths = ["tests"]
pythonpath = ["src"]
"#;

const MAIN_PY: &str = r#"#!/usr/bin/env python3
"""{{PROJECT_NAME}}: {{PROJECT_DESCRIPTION}}"""

import os
from dataclasses import dataclass, field


@dataclass
class Config:
    name: str = "{{PROJECT_NAME}}"
    version: str = "0.1.0"
    debug: bool = field(default_factory=lambda: os.getenv("DEBUG", "false") == "true")


def main() -> None:
    config = Config()
    print(f"{config.name} v{config.version}")


if __name__ == "__main__":
    main()
"#;

const TEST_MAIN: &str = r#"from main import Config


def test_config_defaults() -> None:
    config = Config()
    assert config.version == "0.1.0"
    assert isinstance(config.debug, bool)
"#;

const ENV_EXAMPLE: &str = "DEBUG=false
LOG_LEVEL=INFO
";

pub(super) fn definition() -> Result<StackDefinition, DomainError> {
    StackDefinition::builder(StackId::Python)
        .file("requirements.txt", FileRole::Manifest, REQUIREMENTS)
        .file("pyproject.toml", FileRole::Manifest, PYPROJECT)
        .executable_file("src/main.py", FileRole::Source, MAIN_PY)
        .file("src/__init__.py", FileRole::Source, "")
        .file("tests/__init__.py", FileRole::Test, "")
        .file("tests/test_main.py", FileRole::Test, TEST_MAIN)
        .file(".env.example", FileRole::Config, ENV_EXAMPLE)
        .ignore_rules(PYTHON_IGNORE)
        .post_install(CommandHint::always("python -m venv venv"))
        .post_install(CommandHint::always("source venv/bin/activate"))
        .post_install(CommandHint::always("pip install -r requirements.txt"))
        .post_install(CommandHint::requires(Feature::Tests, "pytest"))
        .post_install(CommandHint::requires(Feature::Formatting, "black . && isort . && flake8"))
        .post_install(CommandHint::always("python src/main.py"))
        .build()
}
