//! Version-control hand-off after a project has been written.
//!
//! The pipeline never runs git itself; the CLI calls this service with the
//! finished project path.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{RemoteRepoRequest, RemoteRepository, VersionControl},
    },
    error::FastStartResult,
};

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsOutcome {
    Committed,
    /// git is not installed; nothing was done.
    Unavailable,
}

pub struct VcsService {
    vcs: Box<dyn VersionControl>,
    remote: Box<dyn RemoteRepository>,
}

impl VcsService {
    pub fn new(vcs: Box<dyn VersionControl>, remote: Box<dyn RemoteRepository>) -> Self {
        Self { vcs, remote }
    }

    /// `git init` on `default_branch`, then commit everything.
    #[instrument(skip_all, fields(dir = %dir.display(), branch = default_branch))]
    pub fn initialize(&self, dir: &Path, default_branch: &str) -> FastStartResult<VcsOutcome> {
        if !self.vcs.is_available() {
            warn!("git not found, skipping repository initialization");
            return Ok(VcsOutcome::Unavailable);
        }
        self.vcs.init(dir, default_branch)?;
        self.vcs.commit_all(dir, INITIAL_COMMIT_MESSAGE)?;
        info!("Repository initialized");
        Ok(VcsOutcome::Committed)
    }

    pub fn remote_available(&self) -> bool {
        self.remote.is_available()
    }

    /// Create the hosted repository, push, then apply settings.
    ///
    /// Creation failures are errors. Topics, feature switches and branch
    /// protection are best effort: the repository already exists by then.
    #[instrument(skip_all, fields(name = %request.name, private = request.private))]
    pub fn publish(&self, request: &RemoteRepoRequest) -> FastStartResult<Published> {
        if !self.remote.is_available() {
            return Err(ApplicationError::ExternalCommandFailed {
                command: "gh".into(),
                reason: "GitHub CLI is not installed or not on PATH".into(),
            }
            .into());
        }
        if !self.remote.is_authenticated() {
            return Err(ApplicationError::RemoteNotAuthenticated { host: "GitHub" }.into());
        }

        self.remote.create(request)?;
        info!("Remote repository created");

        let settings_applied = request.needs_settings()
            && match self.remote.apply_settings(request) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Repository settings not applied");
                    false
                }
            };

        let protected_branch = request.protect_branch.as_ref().and_then(|branch| {
            match self.remote.protect_branch(request, branch) {
                Ok(()) => Some(branch.clone()),
                Err(e) => {
                    warn!(%branch, error = %e, "Branch protection not applied");
                    None
                }
            }
        });

        let url = self.remote.url(request)?;
        info!(%url, "Repository published");
        Ok(Published {
            url,
            settings_applied,
            protected_branch,
        })
    }
}

/// What `publish` managed to set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub url: String,
    /// Topics and feature switches were applied.
    pub settings_applied: bool,
    pub protected_branch: Option<String>,
}
