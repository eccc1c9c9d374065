//! End-to-end materialization through the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use faststart_adapters::{BuiltinRegistry, LocalFilesystem, MemoryFilesystem};
use faststart_core::{
    domain::{Placeholder, ProfileId, ResolvedOptions, StackId},
    prelude::*,
};
use tempfile::TempDir;

struct Answer(bool);

impl OverwritePrompt for Answer {
    fn confirm_overwrite(&self, _path: &Path) -> FastStartResult<bool> {
        Ok(self.0)
    }
}

fn service_with(fs: Box<dyn Filesystem>, confirm: bool) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BuiltinRegistry::new().unwrap()),
        fs,
        Box::new(Answer(confirm)),
    )
    .with_year(2026)
}

fn created(outcome: ScaffoldOutcome) -> ScaffoldReport {
    match outcome {
        ScaffoldOutcome::Created(report) => report,
        other => panic!("expected Created, got {other:?}"),
    }
}

fn relative_files(root: &Path) -> Vec<String> {
    LocalFilesystem::new()
        .list_files(root)
        .unwrap()
        .into_iter()
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect()
}

// ── javascript on disk ──

#[test]
fn javascript_standard_project_on_disk() {
    let tmp = TempDir::new().unwrap();
    let opts = ResolvedOptions::new("demo-app", StackId::JavaScript).with_output_dir(tmp.path());

    let report = created(
        service_with(Box::new(LocalFilesystem::new()), false)
            .scaffold(&opts)
            .unwrap(),
    );
    let root = tmp.path().join("demo-app");
    assert_eq!(report.project_path, root);

    let pkg = fs::read_to_string(root.join("package.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&pkg).unwrap();
    assert_eq!(manifest["name"], "demo-app");
    assert!(manifest["scripts"]["lint"].is_string());

    let files = relative_files(&root);
    for expected in [
        "src/index.js",
        ".gitignore",
        ".eslintrc.json",
        ".prettierrc",
        ".editorconfig",
        "README.md",
    ] {
        assert!(files.iter().any(|f| f == expected), "missing {expected}");
    }
    assert!(!root.join(".github/workflows/ci.yml").exists());
    assert!(!root.join("Dockerfile").exists());
    assert_eq!(report.file_count, files.len());
    assert_eq!(report.next_steps[0], "cd demo-app");
}

#[test]
fn generated_files_carry_no_placeholders() {
    let tmp = TempDir::new().unwrap();
    let opts = ResolvedOptions::new("@acme/Shop Front", StackId::TypeScript)
        .with_profile(ProfileId::Full)
        .with_output_dir(tmp.path());

    created(
        service_with(Box::new(LocalFilesystem::new()), false)
            .scaffold(&opts)
            .unwrap(),
    );

    let root = tmp.path().join("shop-front");
    let pkg = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"@acme/shop-front\""));

    for file in relative_files(&root) {
        let content = fs::read_to_string(root.join(&file)).unwrap();
        for placeholder in Placeholder::ALL {
            assert!(
                !content.contains(placeholder.token()),
                "{file} contains {}",
                placeholder.token()
            );
        }
    }
}

// ── python ──

#[test]
fn python_full_with_docker() {
    let tmp = TempDir::new().unwrap();
    let mut opts = ResolvedOptions::new("data-tool", StackId::Python)
        .with_profile(ProfileId::Full)
        .with_output_dir(tmp.path());
    opts.docker = true;

    let report = created(
        service_with(Box::new(LocalFilesystem::new()), false)
            .scaffold(&opts)
            .unwrap(),
    );
    let root = tmp.path().join("data-tool");

    for expected in [
        "requirements.txt",
        "pyproject.toml",
        "src/main.py",
        "tests/test_main.py",
        ".flake8",
        "Makefile",
        "requirements-dev.txt",
        ".pre-commit-config.yaml",
        ".github/workflows/ci.yml",
        "Dockerfile",
        "docker-compose.yml",
    ] {
        assert!(root.join(expected).is_file(), "missing {expected}");
    }

    let pyproject = fs::read_to_string(root.join("pyproject.toml")).unwrap();
    let parsed: toml::Table = toml::from_str(&pyproject).unwrap();
    assert!(parsed.contains_key("tool"));
    assert!(
        report
            .next_steps
            .iter()
            .any(|s| s.contains("docker-compose up"))
    );
    assert!(report.next_steps.contains(&"black . && isort . && flake8".to_string()));
}

#[cfg(unix)]
#[test]
fn executable_entry_points_keep_their_mode() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let opts = ResolvedOptions::new("runner", StackId::Python).with_output_dir(tmp.path());
    created(
        service_with(Box::new(LocalFilesystem::new()), false)
            .scaffold(&opts)
            .unwrap(),
    );

    let mode = fs::metadata(tmp.path().join("runner/src/main.py"))
        .unwrap()
        .permissions()
        .mode();
    assert_ne!(mode & 0o111, 0);
}

// ── profiles ──

#[test]
fn minimal_is_a_strict_subset_of_standard() {
    let scaffold_into = |profile: ProfileId| {
        let fs = MemoryFilesystem::new();
        let opts = ResolvedOptions::new("subset", StackId::React)
            .with_profile(profile)
            .with_output_dir("/work");
        created(
            service_with(Box::new(fs.clone()), false)
                .scaffold(&opts)
                .unwrap(),
        );
        fs.list_under(Path::new("/work/subset"))
    };

    let minimal = scaffold_into(ProfileId::Minimal);
    let standard = scaffold_into(ProfileId::Standard);

    assert!(minimal.len() < standard.len());
    for path in &minimal {
        assert!(standard.contains(path), "{} missing from standard", path.display());
    }
    assert!(!minimal.iter().any(|p| p.to_string_lossy().contains("test")));
}

// ── dry run and overwrite ──

#[test]
fn dry_run_touches_nothing() {
    let tmp = TempDir::new().unwrap();
    let mut opts = ResolvedOptions::new("preview", StackId::Ruby).with_output_dir(tmp.path());
    opts.dry_run = true;

    let outcome = service_with(Box::new(LocalFilesystem::new()), false)
        .scaffold(&opts)
        .unwrap();

    let ScaffoldOutcome::Previewed(preview) = outcome else {
        panic!("expected a preview");
    };
    assert!(!preview.target_exists);
    assert!(preview.report.file_count > 0);
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn declined_overwrite_leaves_directory_untouched() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("keep-me");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("notes.txt"), "precious\n").unwrap();

    let opts = ResolvedOptions::new("keep-me", StackId::JavaScript).with_output_dir(tmp.path());
    let outcome = service_with(Box::new(LocalFilesystem::new()), false)
        .scaffold(&opts)
        .unwrap();

    assert!(matches!(outcome, ScaffoldOutcome::Declined { .. }));
    assert_eq!(relative_files(&root), vec!["notes.txt".to_string()]);
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "precious\n");
}

#[test]
fn confirmed_overwrite_replaces_directory() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("replace-me");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("stale.txt"), "old\n").unwrap();

    let opts = ResolvedOptions::new("replace-me", StackId::JavaScript).with_output_dir(tmp.path());
    created(
        service_with(Box::new(LocalFilesystem::new()), true)
            .scaffold(&opts)
            .unwrap(),
    );

    assert!(!root.join("stale.txt").exists());
    assert!(root.join("package.json").is_file());
}

// ── every stack ──

#[test]
fn every_stack_materializes_its_entry_files() {
    let expectations: [(StackId, &[&str]); 9] = [
        (StackId::JavaScript, &["package.json", "src/index.js"]),
        (StackId::TypeScript, &["package.json", "tsconfig.json", "src/index.ts"]),
        (StackId::Python, &["requirements.txt", "src/main.py"]),
        (StackId::Ruby, &["Gemfile", "src/main.rb"]),
        (StackId::Lamdera, &["elm.json", "src/Frontend.elm", "src/Backend.elm"]),
        (StackId::React, &["package.json", "index.html", "src/App.jsx"]),
        (StackId::Next, &["package.json", "src/app/page.tsx"]),
        (StackId::FastApi, &["requirements.txt", "app/main.py"]),
        (StackId::Rails, &["Gemfile", "config/routes.rb"]),
    ];

    for (stack, files) in expectations {
        let fs = MemoryFilesystem::new();
        let mut opts = ResolvedOptions::new("every", stack).with_output_dir("/out");
        opts.non_interactive = true;
        created(
            service_with(Box::new(fs.clone()), false)
                .scaffold(&opts)
                .unwrap(),
        );

        let root = PathBuf::from("/out/every");
        for file in files.iter().chain([&".gitignore"]) {
            assert!(
                fs.read_file(&root.join(file)).is_some(),
                "{stack}: missing {file}"
            );
        }
    }
}
