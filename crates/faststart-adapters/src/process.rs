//! Thin wrapper over `std::process::Command` for the CLI collaborators.

use std::path::Path;
use std::process::{Command, Stdio};

use faststart_core::{application::ApplicationError, error::FastStartResult};
use tracing::debug;

/// Whether `program --version` runs and exits successfully.
pub fn command_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Run `program args..` in `dir`, returning trimmed stdout.
///
/// A non-zero exit is an `ExternalCommandFailed` carrying stderr.
pub fn run(program: &str, args: &[&str], dir: &Path) -> FastStartResult<String> {
    let command_line = format!("{program} {}", args.join(" "));
    debug!(command = %command_line, dir = %dir.display(), "Running");

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| ApplicationError::ExternalCommandFailed {
            command: command_line.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ApplicationError::ExternalCommandFailed {
            command: command_line,
            reason: if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            },
        }
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
