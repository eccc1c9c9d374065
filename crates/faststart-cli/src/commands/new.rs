//! Implementation of the `faststart new` command.
//!
//! Responsibility: turn flags, config and prompt answers into a
//! `ResolvedOptions`, run the scaffold pipeline, then hand the finished
//! directory to git. No business logic lives here.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use serde_json::json;
use tracing::{debug, info, instrument};

use faststart_adapters::{BuiltinRegistry, GhCli, GitCli, LocalFilesystem, package_manager};
use faststart_core::{
    application::{
        RemoteRepoRequest, ScaffoldOutcome, ScaffoldPreview, ScaffoldReport, ScaffoldService,
        StackService, VcsOutcome, VcsService,
    },
    domain::{
        DomainValidator, FALLBACK_PROJECT_NAME, PackageManager, ProfileId, ProjectName,
        ResolvedOptions, StackFamily, StackId,
        entities::options::{DEFAULT_AUTHOR, DEFAULT_DESCRIPTION},
    },
    error::FastStartError,
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::Prompter,
};

/// Execute the `faststart new` command.
///
/// 1. Resolve options (flags > config > prompts > defaults)
/// 2. Run the pipeline (preview, overwrite check, writes)
/// 3. Print the report
/// 4. `git init` + first commit, then optionally `gh repo create`
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("")))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let non_interactive = non_interactive(
        args.yes,
        std::io::stdin().is_terminal(),
        std::env::var("CI").ok().as_deref(),
    );
    debug!(non_interactive, quiet = global.quiet, "Interaction mode");

    let registry = BuiltinRegistry::new()?;
    let prompter = Prompter::new();
    let stacks = StackService::new(Box::new(registry.clone()));

    let options = resolve_options(&args, &config, non_interactive, &prompter, &stacks)?;

    let name = ProjectName::sanitize(&options.name);
    if name.was_adjusted() {
        output.warning(&format!(
            "Project name adjusted: '{}' -> '{}'",
            options.name,
            name.display_name()
        ))?;
    }

    let target = options.output_dir.join(name.directory_name());
    let will_prompt =
        !options.dry_run && target.exists() && !options.force && !options.non_interactive;

    let service = ScaffoldService::new(
        Box::new(registry),
        Box::new(LocalFilesystem::new()),
        Box::new(Prompter::new()),
    );

    let spinner = if will_prompt || options.dry_run {
        ProgressBar::hidden()
    } else {
        output.spinner(&format!("Creating {}...", name.display_name()))
    };
    let outcome = service.scaffold(&options);
    spinner.finish_and_clear();

    match outcome? {
        ScaffoldOutcome::Previewed(preview) => show_preview(&preview, &output),
        ScaffoldOutcome::Declined { path } => {
            output.warning(&format!(
                "Kept existing directory {}; nothing was written",
                path.display()
            ))?;
            Ok(())
        }
        ScaffoldOutcome::Created(report) => {
            info!(path = %report.project_path.display(), "Project created");
            show_report(&report, &output)?;
            if args.no_git || !config.git.enabled {
                debug!("git initialization disabled");
                return Ok(());
            }
            let branch = args
                .default_branch
                .as_deref()
                .unwrap_or(&config.defaults.default_branch);
            hand_off_to_git(&report, &options, branch, &args, &prompter, &output)
        }
    }
}

// ── Option resolution ─────────────────────────────────────────────────────────

/// `--yes`, a non-TTY stdin, or `CI=true|1` all disable prompts.
pub fn non_interactive(yes: bool, stdin_is_tty: bool, ci: Option<&str>) -> bool {
    let ci = ci.is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"));
    yes || !stdin_is_tty || ci
}

/// Merge flags, config, prompt answers and defaults into one record.
///
/// Stack validation happens here, before any filesystem access.
fn resolve_options(
    args: &NewArgs,
    config: &AppConfig,
    non_interactive: bool,
    prompter: &Prompter,
    stacks: &StackService,
) -> CliResult<ResolvedOptions> {
    let stack = resolve_stack(args, config, non_interactive, prompter, stacks)?;

    let name = match &args.name {
        Some(name) => name.clone(),
        None if non_interactive => FALLBACK_PROJECT_NAME.to_string(),
        None => prompter.project_name(FALLBACK_PROJECT_NAME)?,
    };

    let description = match &args.description {
        Some(d) => d.clone(),
        None if non_interactive => DEFAULT_DESCRIPTION.to_string(),
        None => prompter.description(DEFAULT_DESCRIPTION)?,
    };

    let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    if output_dir.exists() && !output_dir.is_dir() {
        return Err(CliError::OutputNotADirectory { path: output_dir });
    }

    let mut options = ResolvedOptions::new(name, stack)
        .with_profile(ProfileId::resolve(
            args.profile.as_deref().unwrap_or(&config.defaults.profile),
        ))
        .with_output_dir(output_dir);
    options.description = description;
    options.author = args
        .author
        .clone()
        .or_else(|| config.defaults.author.clone())
        .unwrap_or_else(|| login_author(std::env::var("USER").ok()));
    options.license = args
        .license
        .clone()
        .unwrap_or_else(|| config.defaults.license.clone());
    options.package_manager = resolve_package_manager(args, config, stack)?;
    options.docker = args.docker;
    options.dry_run = args.dry_run;
    options.force = args.force;
    options.non_interactive = non_interactive;
    options.github_username = config.defaults.github_username.clone();

    debug!(
        stack = %options.stack,
        profile = %options.profile,
        package_manager = %options.package_manager,
        "Options resolved"
    );
    Ok(options)
}

/// The login name when one is set, else the placeholder author.
fn login_author(login: Option<String>) -> String {
    login
        .filter(|user| !user.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string())
}

fn resolve_stack(
    args: &NewArgs,
    config: &AppConfig,
    non_interactive: bool,
    prompter: &Prompter,
    stacks: &StackService,
) -> CliResult<StackId> {
    let mut selected: Vec<&str> = args.shorthand.selected();
    selected.extend(args.stack.as_deref());
    if let Some(stack) = DomainValidator::select_stack(selected).map_err(FastStartError::from)? {
        return Ok(stack);
    }

    if let Some(raw) = &config.defaults.stack {
        return Ok(raw.parse::<StackId>().map_err(FastStartError::from)?);
    }

    let default = stacks.default_stack();
    if non_interactive {
        return Ok(default);
    }
    Ok(prompter.stack(&stacks.list(), default)?)
}

/// Explicit flag, then config, then detection for Node stacks.
fn resolve_package_manager(
    args: &NewArgs,
    config: &AppConfig,
    stack: StackId,
) -> CliResult<PackageManager> {
    let explicit = args
        .package_manager
        .as_deref()
        .or(config.defaults.package_manager.as_deref());
    if let Some(raw) = explicit {
        return Ok(PackageManager::resolve(raw));
    }
    if stack.family() != StackFamily::Node {
        return Ok(PackageManager::default());
    }
    let cwd = std::env::current_dir().with_cli_context(|| "reading the working directory")?;
    Ok(package_manager::detect(&cwd))
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn show_preview(preview: &ScaffoldPreview, out: &OutputManager) -> CliResult<()> {
    let report = &preview.report;
    if out.format() == OutputFormat::Json {
        let files: Vec<String> = preview
            .structure
            .files()
            .map(|f| f.path.display().to_string())
            .collect();
        out.json(&json!({
            "dry_run": true,
            "target_exists": preview.target_exists,
            "report": report_json(report),
            "files": files,
        }))?;
        return Ok(());
    }

    out.header("Dry run: nothing was written")?;
    show_summary(report, out)?;
    if preview.target_exists {
        out.warning(&format!(
            "{} already exists and would be replaced",
            report.project_path.display()
        ))?;
    }
    out.print("")?;
    for line in preview.structure.render_tree().lines() {
        out.print(line)?;
    }
    Ok(())
}

fn show_report(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        out.json(&report_json(report))?;
        return Ok(());
    }

    out.success(&format!("Project '{}' created!", report.display_name))?;
    show_summary(report, out)?;
    out.print("")?;
    out.header("Next steps:")?;
    for step in &report.next_steps {
        out.print(&format!("  {step}"))?;
    }
    Ok(())
}

fn show_summary(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    out.field("Project", &report.display_name)?;
    out.field("Location", &report.project_path.display().to_string())?;
    out.field("Stack", report.stack.as_str())?;
    out.field("Profile", report.profile.as_str())?;
    out.field("Package manager", report.package_manager.as_str())?;
    out.field("Files", &report.file_count.to_string())?;
    Ok(())
}

fn report_json(report: &ScaffoldReport) -> serde_json::Value {
    json!({
        "project_path": report.project_path,
        "display_name": report.display_name,
        "stack": report.stack,
        "profile": report.profile,
        "package_manager": report.package_manager,
        "file_count": report.file_count,
        "next_steps": report.next_steps,
    })
}

// ── Version control ───────────────────────────────────────────────────────────

fn hand_off_to_git(
    report: &ScaffoldReport,
    options: &ResolvedOptions,
    branch: &str,
    args: &NewArgs,
    prompter: &Prompter,
    out: &OutputManager,
) -> CliResult<()> {
    let vcs = VcsService::new(Box::new(GitCli::new()), Box::new(GhCli::new()));
    match vcs.initialize(&report.project_path, branch)? {
        VcsOutcome::Committed => {
            out.success(&format!("Initialized git repository on '{branch}'"))?;
        }
        VcsOutcome::Unavailable => {
            out.warning("git not found; skipped repository initialization")?;
            return Ok(());
        }
    }

    if options.non_interactive || args.no_github || !vcs.remote_available() {
        return Ok(());
    }
    let Some(private) = prompter.github_repository()? else {
        return Ok(());
    };

    let request = remote_request(report, options, branch, private);
    let published = match vcs.publish(&request) {
        Ok(published) => published,
        Err(e) => {
            // The project stays on disk either way.
            out.warning(&format!("GitHub repository not created: {e}"))?;
            for suggestion in e.suggestions() {
                out.info(&suggestion)?;
            }
            return Ok(());
        }
    };

    out.success(&format!("Repository created: {}", published.url))?;
    if published.settings_applied {
        out.info(&format!("Topics added: {}", request.topics.join(", ")))?;
    }
    if let Some(branch) = &published.protected_branch {
        out.info(&format!("Branch protection enabled for {branch}"))?;
    }
    Ok(())
}

/// Hosted repositories use the directory name: `@scope/` is not valid there.
///
/// Repositories are tagged with the stack, and `full` projects get their
/// default branch protected.
fn remote_request(
    report: &ScaffoldReport,
    options: &ResolvedOptions,
    branch: &str,
    private: bool,
) -> RemoteRepoRequest {
    let name = report
        .project_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.display_name.clone());
    RemoteRepoRequest {
        name,
        description: options.description.clone(),
        private,
        source: absolute(&report.project_path),
        topics: vec![report.stack.to_string(), REPOSITORY_TOPIC.to_string()],
        enable_issues: true,
        protect_branch: (report.profile == ProfileId::Full).then(|| branch.to_string()),
    }
}

/// Topic every published project carries besides its stack.
const REPOSITORY_TOPIC: &str = "faststart";

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
