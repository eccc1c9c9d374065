//! Binary-level tests for the `faststart` executable.

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config and terminal.
fn faststart(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("faststart");
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("faststart.toml"));
    cmd
}

// ── help / version ──

#[test]
fn help_lists_subcommands() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_help_shows_stack_flags() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--fastapi"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn no_color_env_accepts_conventional_values() {
    let tmp = TempDir::new().unwrap();
    for value in ["1", "yes", "", "0"] {
        faststart(tmp.path())
            .env("NO_COLOR", value)
            .args(["list", "--format", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("javascript"))
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

// ── new ──

#[test]
fn new_javascript_project() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["new", "demo-app", "--javascript", "--package-manager", "npm"])
        .args(["--yes", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps"))
        .stdout(predicate::str::contains("cd demo-app"));

    let root = tmp.path().join("demo-app");
    let pkg = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"demo-app\""));
    assert!(root.join("src/index.js").is_file());
    assert!(root.join(".gitignore").is_file());
    assert!(!root.join(".git").exists());
}

#[test]
fn scoped_name_creates_base_directory() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["new", "@acme/widgets", "--stack", "typescript"])
        .args(["--package-manager", "pnpm", "--yes", "--no-git"])
        .assert()
        .success();

    let pkg = fs::read_to_string(tmp.path().join("widgets/package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"@acme/widgets\""));
}

#[test]
fn adjusted_name_is_reported() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["new", "My Cool App!!", "--python", "--yes", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-cool-app"));
    assert!(tmp.path().join("my-cool-app/src/main.py").is_file());
}

#[test]
fn output_flag_selects_parent_directory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("projects")).unwrap();
    faststart(tmp.path())
        .args(["new", "gem", "--ruby", "-o", "projects", "--yes", "--no-git"])
        .assert()
        .success();
    assert!(tmp.path().join("projects/gem/Gemfile").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["new", "preview", "--react", "--package-manager", "npm"])
        .args(["--dry-run", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("preview/"));
    assert!(!tmp.path().join("preview").exists());
}

#[test]
fn json_output_is_machine_readable() {
    let tmp = TempDir::new().unwrap();
    let out = faststart(tmp.path())
        .args(["--output-format", "json", "new", "svc", "--fastapi"])
        .args(["--profile", "minimal", "--yes", "--no-git"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["stack"], "fastapi");
    assert_eq!(report["profile"], "minimal");
    assert!(report["file_count"].as_u64().unwrap() > 0);
}

#[test]
fn existing_directory_is_replaced_non_interactively() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("again");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("old.txt"), "stale").unwrap();

    faststart(tmp.path())
        .args(["new", "again", "--lamdera", "--yes", "--no-git"])
        .assert()
        .success();

    assert!(!root.join("old.txt").exists());
    assert!(root.join("elm.json").is_file());
}

#[test]
fn quiet_mode_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["-q", "new", "silent", "--python", "--yes", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── stack validation ──

#[test]
fn conflicting_stacks_exit_with_configuration_code() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["new", "clash", "--python", "--react", "--yes"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Select exactly one stack"));
    assert!(!tmp.path().join("clash").exists());
}

#[test]
fn unknown_stack_lists_supported_ones() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["new", "legacy", "--stack", "cobol", "--yes"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("cobol"))
        .stderr(predicate::str::contains("fastapi"));
    assert!(!tmp.path().join("legacy").exists());
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["new", "x", "--cobol"])
        .assert()
        .code(2);
}

// ── list ──

#[test]
fn list_json_has_every_stack() {
    let tmp = TempDir::new().unwrap();
    let out = faststart(tmp.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stacks: Vec<serde_json::Value> = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(stacks.len(), 9);
    assert_eq!(stacks[0]["id"], "javascript");
}

#[test]
fn list_plain_prints_identifiers() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["ls", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rails\n"))
        .stdout(predicate::str::contains("lamdera\n"));
}

// ── config / init ──

#[test]
fn config_set_then_get() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["config", "set", "defaults.author", "Ada Lovelace"])
        .assert()
        .success();

    faststart(tmp.path())
        .args(["config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout("Ada Lovelace\n");
}

#[test]
fn config_defaults_flow_into_new_projects() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("faststart.toml"),
        "[defaults]\nstack = \"python\"\nprofile = \"minimal\"\n\n[git]\nenabled = false\n",
    )
    .unwrap();

    faststart(tmp.path())
        .args(["new", "from-config", "--yes"])
        .assert()
        .success();

    let root = tmp.path().join("from-config");
    assert!(root.join("requirements.txt").is_file());
    assert!(!root.join("tests").exists());
    assert!(!root.join(".git").exists());
}

#[test]
fn unknown_config_key_is_a_configuration_error() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(4);
}

#[test]
fn init_writes_default_config_once() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path()).arg("init").assert().success();

    let text = fs::read_to_string(tmp.path().join("faststart.toml")).unwrap();
    assert!(text.contains("[defaults]"));

    faststart(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_path_prints_explicit_file() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("faststart.toml"));
}

// ── completions ──

#[test]
fn bash_completions() {
    let tmp = TempDir::new().unwrap();
    faststart(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("faststart"));
}
