//! Built-in stack definitions, one module per stack.

use faststart_core::domain::{DomainError, StackDefinition};

mod fastapi;
mod javascript;
mod lamdera;
mod next;
mod python;
mod rails;
mod react;
mod ruby;
mod typescript;

const NODE_IGNORE: &str = "# Dependencies
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*
.pnpm-debug.log*

# Environment
.env
.env.local
.env.*.local

# Build
dist/
build/
coverage/

# Editors and OS
.vscode/
.idea/
*.swp
.DS_Store
Thumbs.db

# Logs
logs/
*.log
.eslintcache
";

const PYTHON_IGNORE: &str = "# Python
__pycache__/
*.py[cod]
*.so
*.egg-info/
build/
dist/

# Virtual environments
venv/
.venv/
env/

# Tooling caches
.pytest_cache/
.mypy_cache/
.coverage
htmlcov/

# Environment
.env
.env.local

# Editors and OS
.vscode/
.idea/
.DS_Store
Thumbs.db

*.log
";

const RUBY_IGNORE: &str = "# Ruby
/.bundle/
/vendor/bundle
*.gem
/coverage/
/pkg/
.rspec_status

# Environment
.env
.env.local

# Editors and OS
.vscode/
.idea/
.DS_Store
Thumbs.db

*.log
";

const ELM_IGNORE: &str = "# Elm / Lamdera
elm-stuff/
.lamdera/
node_modules/
main.js

# Environment
.env

# Editors and OS
.vscode/
.idea/
.DS_Store
";

/// Every built-in definition, in catalog order.
pub(super) fn all() -> Result<Vec<StackDefinition>, DomainError> {
    Ok(vec![
        javascript::definition()?,
        typescript::definition()?,
        python::definition()?,
        ruby::definition()?,
        lamdera::definition()?,
        react::definition()?,
        next::definition()?,
        fastapi::definition()?,
        rails::definition()?,
    ])
}
