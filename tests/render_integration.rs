//! Integration tests for tree rendering

use assert_cmd::Command;
use dirtree::{render_to_string, ErrorPolicy, RenderOptions, TreeError};
use std::fs::{self, File};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

fn dirtree() -> Command {
    Command::cargo_bin("dirtree").unwrap()
}

fn create_test_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("src/commands")).unwrap();
    fs::create_dir_all(root.join("tests")).unwrap();
    fs::create_dir_all(root.join("target/debug")).unwrap();

    for file in [
        "Cargo.toml",
        "README.md",
        "src/main.rs",
        "src/lib.rs",
        "src/commands/mod.rs",
        "tests/cli.rs",
        "target/debug/app",
    ] {
        File::create(root.join(file)).unwrap();
    }

    dir
}

fn render(root: &Path) -> String {
    render_to_string(root, &RenderOptions::default()).unwrap()
}

#[test]
fn test_sorted_with_last_entry_cornered() {
    let dir = TempDir::new().unwrap();
    File::create(dir.path().join("b.txt")).unwrap();
    File::create(dir.path().join("a.txt")).unwrap();
    fs::create_dir(dir.path().join("c")).unwrap();

    dirtree()
        .arg(dir.path())
        .assert()
        .success()
        .stdout("├── a.txt\n├── b.txt\n└── c\n");
}

#[test]
fn test_single_entry_never_branches() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("lonely")).unwrap();

    let output = render(dir.path());
    assert_eq!(output, "└── lonely\n");
    assert!(!output.contains("├── "));
}

#[test]
fn test_nested_last_gets_blank_continuation() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("x")).unwrap();
    File::create(dir.path().join("x/y.txt")).unwrap();

    assert_eq!(render(dir.path()), "└── x\n    └── y.txt\n");
}

#[test]
fn test_output_is_idempotent() {
    let dir = create_test_project();

    let first = dirtree().arg(dir.path()).output().unwrap();
    let second = dirtree().arg(dir.path()).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_empty_directory_prints_nothing() {
    let dir = TempDir::new().unwrap();

    dirtree().arg(dir.path()).assert().success().stdout("");
}

#[test]
fn test_nonexistent_root_is_not_found() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    let result = render_to_string(&missing, &RenderOptions::default());
    assert!(matches!(result, Err(TreeError::NotFound(p)) if p == missing));
}

#[test]
fn test_one_line_per_reachable_entry() {
    let dir = create_test_project();

    let reachable = WalkDir::new(dir.path()).min_depth(1).into_iter().count();
    assert_eq!(render(dir.path()).lines().count(), reachable);
}

#[test]
fn test_vertical_bars_end_at_last_descendant() {
    let dir = create_test_project();
    let output = render(dir.path());
    let lines: Vec<&str> = output.lines().collect();

    // Below the last top-level entry no line may continue a top-level bar
    let last_top = lines
        .iter()
        .rposition(|l| l.starts_with("└── "))
        .unwrap();
    assert!(lines[last_top + 1..].iter().all(|l| l.starts_with("    ")));

    // Every line above it at depth > 0 hangs off a vertical bar
    assert!(lines[..last_top]
        .iter()
        .filter(|l| !l.starts_with("├── "))
        .all(|l| l.starts_with("│   ")));
}

/// Create a directory that cannot be listed, or None when running with
/// privileges that bypass permission checks.
fn locked_dir(parent: &Path) -> Option<std::path::PathBuf> {
    let locked = parent.join("locked");
    fs::create_dir(&locked).unwrap();
    File::create(locked.join("secret")).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return None;
    }
    Some(locked)
}

fn unlock(path: &Path) {
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_unreadable_subdirectory_halts_by_default() {
    let dir = TempDir::new().unwrap();
    File::create(dir.path().join("a")).unwrap();
    File::create(dir.path().join("z")).unwrap();
    let Some(locked) = locked_dir(dir.path()) else {
        return;
    };

    let assert = dirtree().arg(dir.path()).assert();
    unlock(&locked);

    assert
        .failure()
        .stdout("├── a\n├── locked\n")
        .stderr(predicates::str::contains("Permission denied"));
}

#[test]
fn test_unreadable_subdirectory_marked() {
    let dir = TempDir::new().unwrap();
    File::create(dir.path().join("a")).unwrap();
    File::create(dir.path().join("z")).unwrap();
    let Some(locked) = locked_dir(dir.path()) else {
        return;
    };

    let options = RenderOptions::new().with_error_policy(ErrorPolicy::Mark);
    let output = render_to_string(dir.path(), &options);
    unlock(&locked);

    assert_eq!(
        output.unwrap(),
        "├── a\n├── locked\n│   └── [unreadable]\n└── z\n"
    );
}

#[test]
fn test_unreadable_root_fails_even_when_marking() {
    let dir = TempDir::new().unwrap();
    let Some(locked) = locked_dir(dir.path()) else {
        return;
    };

    let options = RenderOptions::new().with_error_policy(ErrorPolicy::Mark);
    let result = render_to_string(&locked, &options);
    unlock(&locked);

    assert!(matches!(result, Err(TreeError::AccessDenied(_))));
}
