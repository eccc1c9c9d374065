//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `FASTSTART_DEFAULTS__AUTHOR=...`
//! 3. Config file (`--config` path, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

pub const ENV_PREFIX: &str = "FASTSTART";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    pub git: GitConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: Option<String>,
    pub license: String,
    pub profile: String,
    /// Unset means "detect from lock files and PATH".
    pub package_manager: Option<String>,
    /// Unset means "prompt, or javascript when non-interactive".
    pub stack: Option<String>,
    pub default_branch: String,
    pub github_username: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            author: None,
            license: "MIT".into(),
            profile: "standard".into(),
            package_manager: None,
            stack: None,
            default_branch: "main".into(),
            github_username: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Initialize a repository after scaffolding.
    pub enabled: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

/// Keys accepted by `config get` / `config set`.
pub const KEYS: [&str; 10] = [
    "defaults.author",
    "defaults.license",
    "defaults.profile",
    "defaults.package_manager",
    "defaults.stack",
    "defaults.default_branch",
    "defaults.github_username",
    "git.enabled",
    "output.no_color",
    "output.format",
];

impl AppConfig {
    /// Load configuration: defaults, then the config file if it exists, then
    /// `FASTSTART_*` environment variables.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let path = Self::config_path(config_file.map(PathBuf::as_path));
        debug!(path = %path.display(), exists = path.exists(), "Loading configuration");
        Self::load_from(&path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, env: Environment) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)
    }

    /// The file `init` and `config set` write to.
    ///
    /// An explicit `--config` path wins; otherwise the platform config dir
    /// (`directories::ProjectDirs`), falling back to `.faststart.toml`.
    pub fn config_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        directories::ProjectDirs::from("dev", "faststart", "faststart")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".faststart.toml"))
    }

    pub fn get(&self, key: &str) -> CliResult<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        Ok(match key {
            "defaults.author" => opt(&self.defaults.author),
            "defaults.license" => self.defaults.license.clone(),
            "defaults.profile" => self.defaults.profile.clone(),
            "defaults.package_manager" => opt(&self.defaults.package_manager),
            "defaults.stack" => opt(&self.defaults.stack),
            "defaults.default_branch" => self.defaults.default_branch.clone(),
            "defaults.github_username" => opt(&self.defaults.github_username),
            "git.enabled" => self.git.enabled.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return Err(unknown_key(key)),
        })
    }

    /// Update one key. Empty strings clear optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        let opt = |v: &str| (!v.trim().is_empty()).then(|| v.trim().to_string());
        match key {
            "defaults.author" => self.defaults.author = opt(value),
            "defaults.license" => self.defaults.license = value.to_string(),
            "defaults.profile" => self.defaults.profile = value.to_string(),
            "defaults.package_manager" => self.defaults.package_manager = opt(value),
            "defaults.stack" => self.defaults.stack = opt(value),
            "defaults.default_branch" => self.defaults.default_branch = value.to_string(),
            "defaults.github_username" => self.defaults.github_username = opt(value),
            "git.enabled" => self.git.enabled = parse_bool(key, value)?,
            "output.no_color" => self.output.no_color = parse_bool(key, value)?,
            "output.format" => self.output.format = value.to_string(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(CliError::ConfigError {
            message: format!("'{key}' expects true or false, got '{other}'"),
            source: None,
        }),
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
