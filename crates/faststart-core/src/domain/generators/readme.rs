//! Project README.

use super::{GeneratedFile, GeneratorResult};
use crate::domain::{
    catalog::stack_def,
    entities::stack::FileRole,
    value_objects::{PackageManager, StackId},
};

const PYTHON_INSTALL: &str = "# Create a virtual environment
python -m venv venv
source venv/bin/activate  # On Windows: venv\\Scripts\\activate

# Install dependencies
pip install -r requirements.txt";

struct StackDocs {
    install: &'static str,
    start: &'static str,
    commands: &'static [(&'static str, &'static str)],
    code_style: &'static str,
    testing: &'static str,
    formatting: &'static str,
}

fn docs(stack: StackId) -> StackDocs {
    match stack {
        StackId::JavaScript => StackDocs {
            install: "{{PM_INSTALL}}",
            start: "{{PM_RUN}} dev",
            commands: &[
                ("{{PM_RUN}} start", "Start the application"),
                ("{{PM_RUN}} dev", "Development mode with watch"),
                ("{{PM_RUN}} test", "Run the tests"),
                ("{{PM_RUN}} lint", "Lint the code"),
            ],
            code_style: "ESLint recommended",
            testing: "node:test",
            formatting: "Prettier",
        },
        StackId::TypeScript => StackDocs {
            install: "{{PM_INSTALL}}",
            start: "{{PM_RUN}} dev",
            commands: &[
                ("{{PM_RUN}} dev", "Development mode with watch"),
                ("{{PM_RUN}} build", "Compile TypeScript"),
                ("{{PM_RUN}} type-check", "Check types"),
                ("{{PM_RUN}} test", "Run the tests"),
                ("{{PM_RUN}} lint", "Lint the code"),
            ],
            code_style: "TypeScript ESLint",
            testing: "node:test",
            formatting: "Prettier + ESLint",
        },
        StackId::React => StackDocs {
            install: "{{PM_INSTALL}}",
            start: "{{PM_RUN}} dev",
            commands: &[
                ("{{PM_RUN}} dev", "Development server"),
                ("{{PM_RUN}} build", "Production build"),
                ("{{PM_RUN}} preview", "Preview the production build"),
                ("{{PM_RUN}} test", "Run the tests"),
                ("{{PM_RUN}} lint", "Lint the code"),
            ],
            code_style: "ESLint + React hooks rules",
            testing: "Vitest + React Testing Library",
            formatting: "Prettier",
        },
        StackId::Next => StackDocs {
            install: "{{PM_INSTALL}}",
            start: "{{PM_RUN}} dev",
            commands: &[
                ("{{PM_RUN}} dev", "Development server"),
                ("{{PM_RUN}} build", "Production build"),
                ("{{PM_RUN}} start", "Serve the production build"),
                ("{{PM_RUN}} test", "Run the tests"),
                ("{{PM_RUN}} lint", "Lint the code"),
            ],
            code_style: "Next.js conventions",
            testing: "Jest + React Testing Library",
            formatting: "Prettier + ESLint",
        },
        StackId::Python => StackDocs {
            install: PYTHON_INSTALL,
            start: "python src/main.py",
            commands: &[
                ("python src/main.py", "Run the application"),
                ("pytest", "Run the tests"),
                ("black .", "Format the code"),
                ("flake8 .", "Check the style"),
                ("mypy src", "Check types"),
            ],
            code_style: "PEP 8",
            testing: "pytest",
            formatting: "Black + isort",
        },
        StackId::FastApi => StackDocs {
            install: PYTHON_INSTALL,
            start: "uvicorn app.main:app --reload",
            commands: &[
                ("uvicorn app.main:app --reload", "Development server"),
                ("pytest", "Run the tests"),
                ("black .", "Format the code"),
                ("mypy app", "Check types"),
            ],
            code_style: "PEP 8 + type hints",
            testing: "pytest + httpx",
            formatting: "Black + isort",
        },
        StackId::Ruby => StackDocs {
            install: "bundle install",
            start: "ruby src/main.rb",
            commands: &[
                ("ruby src/main.rb", "Run the application"),
                ("bundle exec rspec", "Run the tests"),
                ("bundle exec rubocop", "Check the style"),
            ],
            code_style: "Ruby Style Guide",
            testing: "RSpec",
            formatting: "RuboCop",
        },
        StackId::Rails => StackDocs {
            install: "bundle install\n\n# Set up the database\nbin/rails db:create db:migrate",
            start: "bin/rails server",
            commands: &[
                ("bin/rails server", "Start the server"),
                ("bin/rails console", "Interactive console"),
                ("bin/rails db:migrate", "Run migrations"),
                ("bundle exec rspec", "Run the tests"),
                ("bin/rails routes", "List routes"),
            ],
            code_style: "Rails conventions",
            testing: "RSpec",
            formatting: "RuboCop",
        },
        StackId::Lamdera => StackDocs {
            install: "npm install -g lamdera",
            start: "lamdera live",
            commands: &[
                ("lamdera live", "Development mode"),
                ("lamdera deploy", "Deploy to production"),
                ("elm-format src/ --yes", "Format the code"),
                ("elm-test", "Run the tests"),
            ],
            code_style: "elm-review",
            testing: "elm-test",
            formatting: "elm-format",
        },
    }
}

pub fn generate(stack: StackId, _pm: PackageManager) -> GeneratorResult {
    let def = stack_def(stack);
    let d = docs(stack);

    let commands: String = d
        .commands
        .iter()
        .map(|(cmd, what)| format!("- `{cmd}` - {what}\n"))
        .collect();

    let content = format!(
        "# {{{{PROJECT_NAME}}}}

{{{{PROJECT_DESCRIPTION}}}}

## Stack

{emoji} **{name}** ([documentation]({docs}))

## Installation

```bash
git clone https://github.com/{{{{GITHUB_USERNAME}}}}/{{{{PROJECT_NAME}}}}.git
cd {{{{PROJECT_NAME}}}}

{install}
```

## Getting started

```bash
{start}
```

## Development

{commands}
## Conventions

- **Code style**: {style}
- **Testing**: {testing}
- **Formatting**: {formatting}

## License

{{{{LICENSE_TYPE}}}} © {{{{CURRENT_YEAR}}}} {{{{AUTHOR_NAME}}}}
",
        emoji = def.emoji,
        name = def.display_name,
        docs = def.docs_url,
        install = d.install,
        start = d.start,
        style = d.code_style,
        testing = d.testing,
        formatting = d.formatting,
    );

    Ok(Some(vec![GeneratedFile::new("README.md", FileRole::Docs, content)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readme(stack: StackId) -> String {
        generate(stack, PackageManager::Npm).unwrap().unwrap().remove(0).content
    }

    #[test]
    fn readme_is_templated_with_project_tokens() {
        let r = readme(StackId::JavaScript);
        assert!(r.starts_with("# {{PROJECT_NAME}}\n\n{{PROJECT_DESCRIPTION}}"));
        assert!(r.contains("{{LICENSE_TYPE}} © {{CURRENT_YEAR}} {{AUTHOR_NAME}}"));
        assert!(r.contains("- `{{PM_RUN}} lint` - Lint the code"));
    }

    #[test]
    fn readme_uses_catalog_metadata() {
        let r = readme(StackId::Rails);
        assert!(r.contains("🛤️ **Ruby on Rails**"));
        assert!(r.contains("bundle install"));
    }

    #[test]
    fn python_readme_explains_virtualenv() {
        assert!(readme(StackId::FastApi).contains("python -m venv venv"));
    }
}
