use std::path::Path;

use faststart_core::{
    application::{
        ApplicationError,
        ports::{RemoteRepoRequest, RemoteRepository},
    },
    error::{FastStartError, FastStartResult},
};

use crate::process::{command_available, run};

/// Status check context required on protected branches.
pub const REQUIRED_CHECK: &str = "continuous-integration";

/// `RemoteRepository` through the GitHub CLI.
///
/// Everything after `repo create` runs inside the project directory so gh
/// resolves the repository from its `origin` remote.
#[derive(Debug, Clone, Copy, Default)]
pub struct GhCli;

impl GhCli {
    pub fn new() -> Self {
        Self
    }
}

/// Arguments for `gh repo create`.
pub(crate) fn create_args(request: &RemoteRepoRequest) -> Vec<String> {
    let visibility = if request.private { "--private" } else { "--public" };
    vec![
        "repo".into(),
        "create".into(),
        request.name.clone(),
        visibility.into(),
        "--source".into(),
        request.source.display().to_string(),
        "--remote".into(),
        "origin".into(),
        "--push".into(),
        "--description".into(),
        request.description.clone(),
    ]
}

/// Arguments for `gh repo edit`, or `None` when there is nothing to change.
pub(crate) fn edit_args(request: &RemoteRepoRequest) -> Option<Vec<String>> {
    if !request.needs_settings() {
        return None;
    }
    let mut args = vec!["repo".to_string(), "edit".to_string()];
    for topic in &request.topics {
        args.push("--add-topic".into());
        args.push(topic.clone());
    }
    if request.enable_issues {
        args.push("--enable-issues".into());
    }
    Some(args)
}

/// Arguments for the branch protection API call on `branch`.
pub(crate) fn protect_args(branch: &str) -> Vec<String> {
    vec![
        "api".into(),
        "--method".into(),
        "PUT".into(),
        format!("repos/{{owner}}/{{repo}}/branches/{branch}/protection"),
        "-F".into(),
        "required_status_checks[strict]=true".into(),
        "-f".into(),
        format!("required_status_checks[contexts][]={REQUIRED_CHECK}"),
        "-F".into(),
        "enforce_admins=false".into(),
        "-F".into(),
        "required_pull_request_reviews[required_approving_review_count]=1".into(),
        "-F".into(),
        "restrictions=null".into(),
    ]
}

fn gh(args: &[String], dir: &Path) -> FastStartResult<String> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run("gh", &args, dir)
}

fn already_exists(err: &FastStartError) -> bool {
    matches!(
        err,
        FastStartError::Application(ApplicationError::ExternalCommandFailed { reason, .. })
            if reason.contains("already exists")
    )
}

impl RemoteRepository for GhCli {
    fn is_available(&self) -> bool {
        command_available("gh")
    }

    fn is_authenticated(&self) -> bool {
        run("gh", &["auth", "status"], Path::new(".")).is_ok()
    }

    fn create(&self, request: &RemoteRepoRequest) -> FastStartResult<()> {
        match gh(&create_args(request), &request.source) {
            Ok(_) => Ok(()),
            Err(e) if already_exists(&e) => Err(ApplicationError::RemoteRepositoryExists {
                name: request.name.clone(),
            }
            .into()),
            Err(e) => Err(e),
        }
    }

    fn apply_settings(&self, request: &RemoteRepoRequest) -> FastStartResult<()> {
        match edit_args(request) {
            Some(args) => gh(&args, &request.source).map(|_| ()),
            None => Ok(()),
        }
    }

    fn protect_branch(&self, request: &RemoteRepoRequest, branch: &str) -> FastStartResult<()> {
        gh(&protect_args(branch), &request.source).map(|_| ())
    }

    fn url(&self, request: &RemoteRepoRequest) -> FastStartResult<String> {
        run(
            "gh",
            &["repo", "view", "--json", "url", "-q", ".url"],
            &request.source,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn request() -> RemoteRepoRequest {
        RemoteRepoRequest {
            name: "demo".into(),
            description: "A demo".into(),
            private: true,
            source: PathBuf::from("/tmp/demo"),
            topics: vec!["python".into(), "faststart".into()],
            enable_issues: true,
            protect_branch: Some("main".into()),
        }
    }

    #[test]
    fn create_args_follow_visibility() {
        let mut request = request();
        let args = create_args(&request);
        assert_eq!(&args[..4], ["repo", "create", "demo", "--private"]);
        assert!(args.windows(2).any(|w| w == ["--remote", "origin"]));
        assert_eq!(args.last().unwrap(), "A demo");

        request.private = false;
        assert!(create_args(&request).contains(&"--public".to_string()));
    }

    #[test]
    fn edit_args_add_each_topic_and_issues() {
        let args = edit_args(&request()).unwrap();
        assert_eq!(
            args,
            [
                "repo",
                "edit",
                "--add-topic",
                "python",
                "--add-topic",
                "faststart",
                "--enable-issues"
            ]
        );
    }

    #[test]
    fn edit_args_skip_when_nothing_requested() {
        let mut request = request();
        request.topics.clear();
        request.enable_issues = false;
        assert_eq!(edit_args(&request), None);
    }

    #[test]
    fn protect_args_target_the_branch() {
        let args = protect_args("trunk");
        assert_eq!(&args[..3], ["api", "--method", "PUT"]);
        assert_eq!(args[3], "repos/{owner}/{repo}/branches/trunk/protection");
        assert!(args.contains(&"required_status_checks[contexts][]=continuous-integration".into()));
        assert!(args.contains(&"required_pull_request_reviews[required_approving_review_count]=1".into()));
    }

    #[test]
    fn already_exists_is_recognised_from_stderr() {
        let exists: FastStartError = ApplicationError::ExternalCommandFailed {
            command: "gh repo create demo".into(),
            reason: "GraphQL: Name already exists on this account (createRepository)".into(),
        }
        .into();
        let other: FastStartError = ApplicationError::ExternalCommandFailed {
            command: "gh repo create demo".into(),
            reason: "HTTP 401".into(),
        }
        .into();
        assert!(already_exists(&exists));
        assert!(!already_exists(&other));
    }
}
