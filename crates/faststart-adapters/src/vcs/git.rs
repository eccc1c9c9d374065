use std::path::Path;

use faststart_core::{application::ports::VersionControl, error::FastStartResult};

use crate::process::{command_available, run};

/// `VersionControl` through the system `git` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

impl VersionControl for GitCli {
    fn is_available(&self) -> bool {
        command_available("git")
    }

    fn init(&self, dir: &Path, default_branch: &str) -> FastStartResult<()> {
        run("git", &["init", "--initial-branch", default_branch], dir)?;
        Ok(())
    }

    fn commit_all(&self, dir: &Path, message: &str) -> FastStartResult<()> {
        run("git", &["add", "."], dir)?;
        run("git", &["commit", "-m", message], dir)?;
        Ok(())
    }
}
