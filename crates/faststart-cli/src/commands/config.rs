//! `faststart config`: read and write configuration values.

use std::path::Path;

use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    let path = AppConfig::config_path(config_file);
    match cmd {
        ConfigCommands::Get { key } => {
            println!("{}", config.get(&key)?);
        }

        ConfigCommands::Set { key, value } => {
            let updated = persist(&path, &key, &value)?;
            info!(key = %key, path = %path.display(), "Configuration updated");
            output.success(&format!("{key} = {}", updated.get(&key)?))?;
        }

        ConfigCommands::List => {
            print!("{}", config.to_toml()?);
        }

        ConfigCommands::Path => {
            println!("{}", path.display());
        }
    }

    Ok(())
}

/// Update one key in the file at `path` only.
///
/// Environment overrides are not written back.
fn persist(path: &Path, key: &str, value: &str) -> CliResult<AppConfig> {
    let mut on_disk = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str(&text).map_err(|e| crate::error::CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        AppConfig::default()
    };

    on_disk.set(key, value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, on_disk.to_toml()?)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(on_disk)
}

// ── tests ─────────────────────────────────────────────────────────────────────
