//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "faststart",
    bin_name = "faststart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "FastStart contributors",
    about    = "\u{26a1} Instant project scaffolding",
    long_about = "FastStart generates ready-to-run project skeletons for JavaScript, \
                  TypeScript, Python, Ruby and Elm stacks, with linting, formatting, \
                  tests, CI and containers selected by profile.",
    after_help = "EXAMPLES:\n\
        \x20 faststart new my-app --react\n\
        \x20 faststart new api --fastapi --profile full --docker\n\
        \x20 faststart list --format json\n\
        \x20 faststart completions bash > /usr/share/bash-completion/completions/faststart",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 faststart new my-app --typescript\n\
            \x20 faststart new @acme/widgets --next --package-manager pnpm\n\
            \x20 faststart new service --python --profile minimal --dry-run"
    )]
    New(NewArgs),

    /// List supported stacks.
    #[command(
        visible_alias = "ls",
        about = "List supported stacks",
        after_help = "EXAMPLES:\n\
            \x20 faststart list\n\
            \x20 faststart list --format csv"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 faststart init\n\
            \x20 faststart init --force\n\
            \x20 faststart --config ./faststart.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 faststart completions bash > ~/.local/share/bash-completion/completions/faststart\n\
            \x20 faststart completions zsh  > ~/.zfunc/_faststart\n\
            \x20 faststart completions fish > ~/.config/fish/completions/faststart.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the FastStart configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 faststart config get defaults.author\n\
            \x20 faststart config set defaults.profile full\n\
            \x20 faststart config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `faststart new`.
///
/// The stack can be chosen with `--stack <id>` or one of the shorthand flags;
/// picking two different stacks is rejected before anything is written.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Project name, optionally scoped (`@scope/name`).
    #[arg(value_name = "NAME", help = "Project name (prompted for when omitted)")]
    pub name: Option<String>,

    #[arg(
        short = 's',
        long = "stack",
        value_name = "STACK",
        help = "Stack identifier (see `faststart list`)"
    )]
    pub stack: Option<String>,

    #[command(flatten)]
    pub shorthand: StackFlags,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Project description"
    )]
    pub description: Option<String>,

    #[arg(long = "author", value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    #[arg(long = "license", value_name = "SPDX", help = "License identifier")]
    pub license: Option<String>,

    #[arg(
        short = 'p',
        long = "profile",
        value_name = "PROFILE",
        help = "minimal, standard or full"
    )]
    pub profile: Option<String>,

    #[arg(
        long = "package-manager",
        value_name = "PM",
        help = "npm, yarn or pnpm (detected when omitted)"
    )]
    pub package_manager: Option<String>,

    #[arg(long = "docker", help = "Add Dockerfile and docker-compose.yml")]
    pub docker: bool,

    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Replace an existing directory (destructive).
    #[arg(short = 'f', long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    #[arg(
        short = 'y',
        long = "yes",
        help = "Never prompt; accept defaults and replace existing directories"
    )]
    pub yes: bool,

    #[arg(long = "no-git", help = "Skip git initialization")]
    pub no_git: bool,

    #[arg(long = "no-github", help = "Never offer to create a GitHub repository")]
    pub no_github: bool,

    #[arg(
        long = "default-branch",
        value_name = "BRANCH",
        help = "Initial git branch name"
    )]
    pub default_branch: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,
}

/// One boolean flag per stack.
#[derive(Debug, Default, Clone, Args)]
pub struct StackFlags {
    #[arg(long, help_heading = "Stacks")]
    pub javascript: bool,
    #[arg(long, help_heading = "Stacks")]
    pub typescript: bool,
    #[arg(long, help_heading = "Stacks")]
    pub python: bool,
    #[arg(long, help_heading = "Stacks")]
    pub ruby: bool,
    #[arg(long, help_heading = "Stacks")]
    pub lamdera: bool,
    #[arg(long, help_heading = "Stacks")]
    pub react: bool,
    #[arg(long, help_heading = "Stacks")]
    pub next: bool,
    #[arg(long, help_heading = "Stacks")]
    pub fastapi: bool,
    #[arg(long, help_heading = "Stacks")]
    pub rails: bool,
}

impl StackFlags {
    /// Identifiers of every flag that was set.
    pub fn selected(&self) -> Vec<&'static str> {
        [
            (self.javascript, "javascript"),
            (self.typescript, "typescript"),
            (self.python, "python"),
            (self.ruby, "ruby"),
            (self.lamdera, "lamdera"),
            (self.react, "react"),
            (self.next, "next"),
            (self.fastapi, "fastapi"),
            (self.rails, "rails"),
        ]
        .into_iter()
        .filter_map(|(set, id)| set.then_some(id))
        .collect()
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One identifier per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Set a configuration key and save the file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
