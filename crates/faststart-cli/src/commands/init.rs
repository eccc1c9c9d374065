//! `faststart init`: write a default configuration file.

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path(global.config.as_deref());

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = AppConfig::default().to_toml()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}
