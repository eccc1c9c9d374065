//! Scaffold Service - the materialization pipeline.
//!
//! This service coordinates the entire generation workflow:
//! 1. Resolve the stack and compose it with the profile and generators
//! 2. Substitute placeholders into every file
//! 3. Preview (dry-run) or write the tree to the filesystem
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, OverwritePrompt, StackRegistry},
    },
    domain::{
        DomainValidator as validator, IGNORE_FILE, PackageManager, Permissions, ProfileConfig,
        ProfileId, ProjectName, ProjectStructure, ResolvedOptions, StackDefinition, StackId,
        TemplateVariables, compose, generators::container::DOCKERFILE,
    },
    error::FastStartResult,
};

/// Pipeline states, logged on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Resolving,
    Previewing,
    Writing,
    Done,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Resolving => "resolving",
            Self::Previewing => "previewing",
            Self::Writing => "writing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Summary of a generated (or previewed) project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_path: PathBuf,
    pub display_name: String,
    pub stack: StackId,
    pub profile: ProfileId,
    pub package_manager: PackageManager,
    pub file_count: usize,
    pub next_steps: Vec<String>,
}

/// What a dry run would have produced.
#[derive(Debug, Clone)]
pub struct ScaffoldPreview {
    pub report: ScaffoldReport,
    pub structure: ProjectStructure,
    /// The target directory already exists and would need replacing.
    pub target_exists: bool,
}

#[derive(Debug, Clone)]
pub enum ScaffoldOutcome {
    Previewed(ScaffoldPreview),
    Created(ScaffoldReport),
    /// The target existed and the user chose not to replace it.
    Declined { path: PathBuf },
}

/// Main scaffolding service.
pub struct ScaffoldService {
    registry: Box<dyn StackRegistry>,
    filesystem: Box<dyn Filesystem>,
    prompt: Box<dyn OverwritePrompt>,
    year: Option<i32>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use faststart_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     registry,   // impl StackRegistry
    ///     filesystem, // impl Filesystem
    ///     prompt,     // impl OverwritePrompt
    /// );
    /// ```
    pub fn new(
        registry: Box<dyn StackRegistry>,
        filesystem: Box<dyn Filesystem>,
        prompt: Box<dyn OverwritePrompt>,
    ) -> Self {
        Self {
            registry,
            filesystem,
            prompt,
            year: None,
        }
    }

    /// Pin `{{CURRENT_YEAR}}` instead of reading the clock.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Generate a project from resolved options.
    #[instrument(
        skip_all,
        fields(
            project = %options.name,
            stack = %options.stack,
            profile = %options.profile,
            dry_run = options.dry_run
        )
    )]
    pub fn scaffold(&self, options: &ResolvedOptions) -> FastStartResult<ScaffoldOutcome> {
        let result = self.run(options);
        if let Err(e) = &result {
            transition(PipelineState::Failed);
            warn!(error = %e, pre_write = e.is_pre_write(), "Scaffold failed");
        }
        result
    }

    /// Compose and substitute without touching the filesystem.
    pub fn plan(
        &self,
        options: &ResolvedOptions,
    ) -> FastStartResult<(ProjectStructure, ScaffoldReport)> {
        let name = ProjectName::sanitize(&options.name);
        let root = options.output_dir.join(name.directory_name());

        let base = resolve_stack(self.registry.as_ref(), options.stack)?;
        let profile = ProfileConfig::for_profile(options.profile).with_docker(options.docker);
        let composed = compose(&base, &profile, options.package_manager)?;
        debug!(files = composed.file_count(), "Stack composed");

        let variables = TemplateVariables::from_options(options, self.current_year());
        let structure = build_structure(root.clone(), &composed, &variables);
        validator::validate_project_structure(&structure)?;

        let report = ScaffoldReport {
            project_path: root,
            display_name: name.display_name(),
            stack: composed.id(),
            profile: options.profile,
            package_manager: options.package_manager,
            file_count: structure.file_count(),
            next_steps: next_steps(&name, &composed, &variables),
        };
        Ok((structure, report))
    }

    fn run(&self, options: &ResolvedOptions) -> FastStartResult<ScaffoldOutcome> {
        transition(PipelineState::Resolving);
        let (structure, report) = self.plan(options)?;
        let root = structure.root().to_path_buf();
        let exists = self.filesystem.exists(&root);

        if options.dry_run {
            transition(PipelineState::Previewing);
            return Ok(ScaffoldOutcome::Previewed(ScaffoldPreview {
                report,
                structure,
                target_exists: exists,
            }));
        }

        if exists && !self.clear_existing(&root, options)? {
            info!(path = %root.display(), "Overwrite declined, nothing written");
            return Ok(ScaffoldOutcome::Declined { path: root });
        }

        transition(PipelineState::Writing);
        self.write_structure(&structure)?;

        transition(PipelineState::Done);
        info!(
            path = %root.display(),
            files = report.file_count,
            "Project created"
        );
        Ok(ScaffoldOutcome::Created(report))
    }

    /// Remove an existing target. Returns `false` when the user declines.
    fn clear_existing(&self, root: &Path, options: &ResolvedOptions) -> FastStartResult<bool> {
        let replace_silently = options.force || options.non_interactive;
        if !replace_silently && !self.prompt.confirm_overwrite(root)? {
            return Ok(false);
        }
        warn!(path = %root.display(), "Removing existing directory");
        self.filesystem.remove_dir_all(root)?;
        Ok(true)
    }

    /// Write every file in order. The first failure aborts; nothing is rolled back.
    fn write_structure(&self, structure: &ProjectStructure) -> FastStartResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for file in structure.files() {
            let path = root.join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            if file.permissions.executable_flag() {
                self.filesystem.set_permissions(&path, true)?;
            }
            debug!(path = %file.path.display(), bytes = file.size(), "Wrote file");
        }
        Ok(())
    }

    fn current_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }
}

fn transition(state: PipelineState) {
    debug!(%state, "Pipeline state");
}

/// Registry lookup with fallback to the registry's default stack.
pub(crate) fn resolve_stack(
    registry: &dyn StackRegistry,
    id: StackId,
) -> FastStartResult<StackDefinition> {
    if let Some(stack) = registry.get(id) {
        validator::validate_stack_definition(&stack)?;
        return Ok(stack);
    }

    let fallback = registry.default_stack();
    warn!(requested = %id, fallback = %fallback, "Stack not in registry, using default");
    let stack = registry
        .get(fallback)
        .ok_or_else(|| ApplicationError::StackUnavailable {
            stack: fallback.to_string(),
        })?;
    validator::validate_stack_definition(&stack)?;
    Ok(stack)
}

/// Substitute every file and order them for writing.
///
/// Files come out of the definition in path order; the ignore file is
/// appended last and is never substituted.
fn build_structure(
    root: PathBuf,
    stack: &StackDefinition,
    variables: &TemplateVariables,
) -> ProjectStructure {
    let mut structure = ProjectStructure::new(root);
    for (path, file) in stack.files() {
        structure.add_file(
            path.as_path(),
            variables.substitute(&file.content),
            file.permissions,
        );
    }
    structure.add_file(
        IGNORE_FILE,
        stack.ignore_rules().to_string(),
        Permissions::read_write(),
    );
    structure
}

fn next_steps(
    name: &ProjectName,
    stack: &StackDefinition,
    variables: &TemplateVariables,
) -> Vec<String> {
    let mut steps = vec![format!("cd {}", name.directory_name())];
    steps.extend(
        stack
            .post_install()
            .iter()
            .map(|hint| variables.substitute(&hint.command)),
    );
    if stack.contains(DOCKERFILE) {
        steps.push("docker-compose up".into());
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockOverwritePrompt, MockStackRegistry};
    use crate::domain::{CommandHint, Feature, FileRole};
    use crate::error::FastStartError;
    use mockall::predicate::*;

    fn js_stack() -> StackDefinition {
        StackDefinition::builder(StackId::JavaScript)
            .file(
                "package.json",
                FileRole::Manifest,
                "{\n  \"name\": \"{{PROJECT_NAME}}\",\n  \"author\": \"{{AUTHOR_NAME}}\"\n}\n",
            )
            .file("src/index.js", FileRole::Source, "console.log('{{PROJECT_NAME}}');\n")
            .file("test/index.test.js", FileRole::Test, "// test\n")
            .ignore_rules("node_modules/\n{{PROJECT_NAME}}\n")
            .post_install(CommandHint::always("{{PM_INSTALL}}"))
            .post_install(CommandHint::requires(Feature::Tests, "{{PM_RUN}} test"))
            .build()
            .unwrap()
    }

    fn registry() -> MockStackRegistry {
        let mut registry = MockStackRegistry::new();
        registry
            .expect_get()
            .returning(|id| (id == StackId::JavaScript).then(js_stack));
        registry
            .expect_default_stack()
            .return_const(StackId::JavaScript);
        registry
    }

    fn options() -> ResolvedOptions {
        ResolvedOptions::new("demo-app", StackId::JavaScript)
            .with_profile(ProfileId::Minimal)
            .with_output_dir("/work")
    }

    fn service(fs: MockFilesystem, prompt: MockOverwritePrompt) -> ScaffoldService {
        ScaffoldService::new(Box::new(registry()), Box::new(fs), Box::new(prompt)).with_year(2026)
    }

    fn no_prompt() -> MockOverwritePrompt {
        let mut prompt = MockOverwritePrompt::new();
        prompt.expect_confirm_overwrite().never();
        prompt
    }

    // ── plan ──

    #[test]
    fn plan_substitutes_everything_but_the_ignore_file() {
        let svc = service(MockFilesystem::new(), no_prompt());
        let (structure, report) = svc.plan(&options()).unwrap();

        let pkg = structure.file("package.json").unwrap();
        assert!(pkg.content.contains("\"name\": \"demo-app\""));

        let files: Vec<_> = structure.files().collect();
        let last = files.last().unwrap();
        assert!(last.is_ignore_file());
        assert_eq!(last.content, "node_modules/\n{{PROJECT_NAME}}\n");

        assert_eq!(report.project_path, PathBuf::from("/work/demo-app"));
        assert_eq!(report.file_count, structure.file_count());
    }

    #[test]
    fn minimal_next_steps_skip_test_hint() {
        let svc = service(MockFilesystem::new(), no_prompt());
        let (_, report) = svc.plan(&options()).unwrap();
        assert_eq!(report.next_steps, vec!["cd demo-app", "npm install"]);
    }

    #[test]
    fn scoped_name_keeps_scope_out_of_the_path() {
        let svc = service(MockFilesystem::new(), no_prompt());
        let mut opts = options();
        opts.name = "@acme/Widgets".into();
        let (structure, report) = svc.plan(&opts).unwrap();
        assert_eq!(structure.root(), Path::new("/work/widgets"));
        assert_eq!(report.display_name, "@acme/widgets");
        assert!(
            structure
                .file("package.json")
                .unwrap()
                .content
                .contains("@acme/widgets")
        );
    }

    #[test]
    fn unknown_registry_entry_falls_back_to_default() {
        let svc = service(MockFilesystem::new(), no_prompt());
        let mut opts = options();
        opts.stack = StackId::Rails;
        let (_, report) = svc.plan(&opts).unwrap();
        assert_eq!(report.stack, StackId::JavaScript);
    }

    // ── dry run ──

    #[test]
    fn dry_run_never_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_remove_dir_all().never();

        let mut opts = options();
        opts.dry_run = true;
        let outcome = service(fs, no_prompt()).scaffold(&opts).unwrap();

        let ScaffoldOutcome::Previewed(preview) = outcome else {
            panic!("expected a preview");
        };
        assert!(preview.target_exists);
        assert_eq!(preview.structure.root(), Path::new("/work/demo-app"));
    }

    // ── existing directory ──

    #[test]
    fn declined_overwrite_leaves_directory_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_dir_all().never();
        fs.expect_write_file().never();

        let mut prompt = MockOverwritePrompt::new();
        prompt
            .expect_confirm_overwrite()
            .times(1)
            .returning(|_| Ok(false));

        let outcome = service(fs, prompt).scaffold(&options()).unwrap();
        assert!(matches!(outcome, ScaffoldOutcome::Declined { .. }));
    }

    #[test]
    fn force_removes_without_prompting() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_dir_all()
            .with(eq(PathBuf::from("/work/demo-app")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut opts = options();
        opts.force = true;
        let outcome = service(fs, no_prompt()).scaffold(&opts).unwrap();
        assert!(matches!(outcome, ScaffoldOutcome::Created(_)));
    }

    #[test]
    fn non_interactive_mode_replaces_without_prompting() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let mut opts = options();
        opts.non_interactive = true;
        assert!(service(fs, no_prompt()).scaffold(&opts).is_ok());
    }

    // ── writing ──

    #[test]
    fn write_failure_surfaces_first_error_without_rollback() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .times(1)
            .returning(|path, _| Err(ApplicationError::filesystem(path, "disk full").into()));
        fs.expect_remove_dir_all().never();

        let err = service(fs, no_prompt()).scaffold(&options()).unwrap_err();
        assert!(matches!(
            err,
            FastStartError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert!(!err.is_pre_write());
    }

    #[test]
    fn ignore_file_is_written_last() {
        use std::sync::{Arc, Mutex};

        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |path, _| {
            sink.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });

        service(fs, no_prompt()).scaffold(&options()).unwrap();

        let written = written.lock().unwrap();
        assert_eq!(
            written.last().unwrap(),
            &PathBuf::from("/work/demo-app/.gitignore")
        );
        assert!(written.contains(&PathBuf::from("/work/demo-app/src/index.js")));
    }
}
