//! Task-runner files: Makefile + dev requirements for Python, Rakefile for
//! Ruby, Makefile for Elm. Node stacks use package.json scripts instead.

use super::{GeneratedFile, GeneratorResult};
use crate::domain::{
    entities::stack::FileRole,
    value_objects::{PackageManager, StackFamily, StackId},
};

const REQUIREMENTS_DEV: &str = "# Development dependencies
-r requirements.txt
pytest>=7.4.0
pytest-cov>=4.1.0
pytest-asyncio>=0.21.0
black>=23.0.0
flake8>=6.0.0
mypy>=1.4.0
isort>=5.12.0
pre-commit>=3.3.0
";

const LAMDERA_MAKEFILE: &str = "# {{PROJECT_NAME}} Makefile

.PHONY: help dev format review test clean

help:
\t@echo \"Available commands:\"
\t@echo \"  make dev        Run lamdera live\"
\t@echo \"  make format     Format Elm code\"
\t@echo \"  make review     Run elm-review\"
\t@echo \"  make test       Run elm-test\"
\t@echo \"  make clean      Remove build artifacts\"

dev:
\tlamdera live

format:
\telm-format src/ --yes

review:
\telm-review

test:
\telm-test

clean:
\trm -rf elm-stuff
";

pub fn generate(stack: StackId, _pm: PackageManager) -> GeneratorResult {
    let files = match stack.family() {
        StackFamily::Python => vec![
            GeneratedFile::new("Makefile", FileRole::DevTooling, python_makefile(stack)),
            GeneratedFile::new("requirements-dev.txt", FileRole::DevTooling, REQUIREMENTS_DEV),
        ],
        StackFamily::Ruby => vec![GeneratedFile::new(
            "Rakefile",
            FileRole::DevTooling,
            rakefile(stack),
        )],
        StackFamily::Elm => vec![GeneratedFile::new(
            "Makefile",
            FileRole::DevTooling,
            LAMDERA_MAKEFILE,
        )],
        StackFamily::Node => return Ok(None),
    };
    Ok(Some(files))
}

fn python_makefile(stack: StackId) -> String {
    let (dev, src) = if stack == StackId::FastApi {
        ("uvicorn app.main:app --reload", "app")
    } else {
        ("python src/main.py", "src")
    };

    format!(
        "# {{{{PROJECT_NAME}}}} Makefile

.PHONY: help install dev test lint format clean

help:
\t@echo \"Available commands:\"
\t@echo \"  make install    Install dependencies\"
\t@echo \"  make dev        Run development server\"
\t@echo \"  make test       Run tests\"
\t@echo \"  make lint       Run linters\"
\t@echo \"  make format     Format code\"
\t@echo \"  make clean      Clean cache files\"

install:
\tpip install -r requirements.txt
\tpip install -r requirements-dev.txt

dev:
\t{dev}

test:
\tpytest -v --cov={src} --cov-report=term-missing

lint:
\tflake8 . --max-line-length=88 --extend-ignore=E203
\tmypy {src}
\tisort --check-only .
\tblack --check .

format:
\tisort .
\tblack .

clean:
\tfind . -type d -name __pycache__ -exec rm -rf {{}} +
\tfind . -type f -name \"*.pyc\" -delete
\trm -rf .pytest_cache .mypy_cache .coverage htmlcov dist build *.egg-info
"
    )
}

fn rakefile(stack: StackId) -> String {
    let dev = if stack == StackId::Rails {
        "bundle exec rails server"
    } else {
        "ruby src/main.rb"
    };

    format!(
        "# {{{{PROJECT_NAME}}}} Rakefile

require 'rake'

desc 'Install dependencies'
task :install do
  sh 'bundle install'
end

desc 'Run development server'
task :dev do
  sh '{dev}'
end

desc 'Run tests'
task :test do
  sh 'bundle exec rspec'
end

desc 'Run linter'
task :lint do
  sh 'bundle exec rubocop'
end

desc 'Auto-correct linting issues'
task :format do
  sh 'bundle exec rubocop -A'
end

desc 'Clean temporary files'
task :clean do
  sh 'rm -rf coverage/ tmp/ log/'
end

task default: :test
"
    )
}
