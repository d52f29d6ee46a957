//! Functional integration tests for dirtree.
//!
//! This module contains end-to-end tests that invoke the compiled `dirtree`
//! binary directly and validate its output against expected behavior.
//!
//! Test categories:
//! - Help and version information
//! - Argument errors
//! - Directory-only and file-including trees
//! - Ordering, prefixes and size formatting
//! - ASCII charset
//! - Filesystem errors and exit codes
//!
//! Author: WaterRun
//! Date: 2026-10-19

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// Executes dirtree with the given arguments.
fn run_dirtree(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dirtree"))
        .args(args)
        .env_remove("DIRTREE_LOG")
        .output()
        .expect("Failed to execute dirtree")
}

/// Executes dirtree on `path` with extra arguments.
fn run_dirtree_on(path: &Path, extra: &[&str]) -> Output {
    let path = path.to_str().expect("temp path should be UTF-8");
    let mut args = vec![path];
    args.extend_from_slice(extra);
    run_dirtree(&args)
}

/// Gets stdout as a string from command output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Gets stderr as a string from command output.
fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// Test Directory Builders
// ============================================================================

/// Creates the sample structure.
///
/// ```text
/// root/
/// ├── a/
/// │   └── x (5 bytes)
/// └── b.txt (0 bytes)
/// ```
fn create_sample_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();

    fs::create_dir(root.join("a")).unwrap();
    File::create(root.join("a/x"))
        .unwrap()
        .write_all(b"hello")
        .unwrap();
    File::create(root.join("b.txt")).unwrap();

    dir
}

/// Creates a project-like structure with several levels.
///
/// ```text
/// root/
/// ├── Cargo.toml (9 bytes)
/// ├── src/
/// │   ├── bin/
/// │   │   └── tool.rs (0 bytes)
/// │   ├── lib.rs (15 bytes)
/// │   └── main.rs (12 bytes)
/// ├── target/
/// │   └── debug/
/// └── tests/
///     └── it.rs (7 bytes)
/// ```
fn create_project_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();

    fs::create_dir_all(root.join("src/bin")).unwrap();
    fs::create_dir_all(root.join("target/debug")).unwrap();
    fs::create_dir(root.join("tests")).unwrap();

    fs::write(root.join("Cargo.toml"), b"[package]").unwrap();
    fs::write(root.join("src/main.rs"), b"fn main() {}").unwrap();
    fs::write(root.join("src/lib.rs"), b"pub fn lib() {}").unwrap();
    File::create(root.join("src/bin/tool.rs")).unwrap();
    fs::write(root.join("tests/it.rs"), b"#[test]").unwrap();

    dir
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn should_show_help_with_all_flag_variants() {
    for flag in ["-h", "--help", "/?"] {
        let output = run_dirtree(&[flag]);
        assert!(output.status.success(), "{flag}");
        assert!(stdout_str(&output).contains("Usage: dirtree"), "{flag}");
    }
}

#[test]
fn should_show_version_with_all_flag_variants() {
    for flag in ["-v", "--version", "/V"] {
        let output = run_dirtree(&[flag]);
        assert!(output.status.success(), "{flag}");
        assert!(stdout_str(&output).contains(env!("CARGO_PKG_VERSION")), "{flag}");
    }
}

// ============================================================================
// Argument Errors
// ============================================================================

#[test]
fn should_fail_without_arguments() {
    let output = run_dirtree(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_str(&output).is_empty());
    assert!(stderr_str(&output).contains("Usage: dirtree"));
}

#[test]
fn should_fail_with_two_paths() {
    let dir = create_sample_dir();
    let path = dir.path().to_str().unwrap();

    let output = run_dirtree(&[path, path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_str(&output).is_empty());
    assert!(stderr_str(&output).contains("Only one path"));
}

#[test]
fn should_fail_with_unknown_option() {
    let dir = create_sample_dir();
    let output = run_dirtree_on(dir.path(), &["-z"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_str(&output).is_empty());
    let stderr = stderr_str(&output);
    assert!(stderr.contains("Unknown option: -z"));
    assert!(stderr.contains("--help"));
}

#[test]
fn should_fail_with_empty_path() {
    let output = run_dirtree(&[""]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_str(&output).is_empty());
}

// ============================================================================
// Tree Output
// ============================================================================

#[test]
fn should_render_sample_with_files() {
    let dir = create_sample_dir();
    let output = run_dirtree_on(dir.path(), &["-f"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_str(&output),
        "├───a\n│   └───x (5b)\n└───b.txt (empty)\n"
    );
}

#[test]
fn should_render_sample_directories_only() {
    let dir = create_sample_dir();
    let output = run_dirtree_on(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout_str(&output), "└───a\n");
}

#[test]
fn should_render_project_with_files() {
    let dir = create_project_dir();
    let output = run_dirtree_on(dir.path(), &["--files"]);

    let expected = "\
├───Cargo.toml (9b)
├───src
│   ├───bin
│   │   └───tool.rs (empty)
│   ├───lib.rs (15b)
│   └───main.rs (12b)
├───target
│   └───debug
└───tests
    └───it.rs (7b)
";
    assert!(output.status.success());
    assert_eq!(stdout_str(&output), expected);
}

#[test]
fn should_render_project_directories_only() {
    let dir = create_project_dir();
    let output = run_dirtree_on(dir.path(), &[]);

    let expected = "\
├───src
│   └───bin
├───target
│   └───debug
└───tests
";
    assert!(output.status.success());
    assert_eq!(stdout_str(&output), expected);
}

#[test]
fn should_render_project_with_ascii_charset() {
    let dir = create_project_dir();
    let output = run_dirtree_on(dir.path(), &["-a"]);

    let expected = "\
+---src
|   \\---bin
+---target
|   \\---debug
\\---tests
";
    assert!(output.status.success());
    assert_eq!(stdout_str(&output), expected);
}

#[test]
fn should_accept_flag_before_path() {
    let dir = create_sample_dir();
    let path = dir.path().to_str().unwrap();

    let output = run_dirtree(&["/F", path]);
    assert!(output.status.success());
    assert!(stdout_str(&output).contains("b.txt (empty)"));
}

#[test]
fn should_render_nothing_for_empty_directory() {
    let dir = TempDir::new().unwrap();
    let output = run_dirtree_on(dir.path(), &["-f"]);

    assert!(output.status.success());
    assert!(stdout_str(&output).is_empty());
}

#[test]
fn should_never_print_files_without_flag() {
    let dir = create_project_dir();
    let output = run_dirtree_on(dir.path(), &[]);

    let stdout = stdout_str(&output);
    assert!(!stdout.contains(".rs"));
    assert!(!stdout.contains(".toml"));
    assert!(!stdout.contains('('));
}

#[test]
fn should_print_every_file_exactly_once_with_flag() {
    let dir = create_project_dir();
    let stdout = stdout_str(&run_dirtree_on(dir.path(), &["-f"]));

    for name in ["Cargo.toml", "tool.rs", "lib.rs", "main.rs", "it.rs"] {
        let count = stdout
            .lines()
            .filter(|line| line.contains(&format!("{name} (")))
            .count();
        assert_eq!(count, 1, "{name}");
    }
}

#[test]
fn should_produce_identical_output_on_repeat() {
    let dir = create_project_dir();
    let first = run_dirtree_on(dir.path(), &["-f"]);
    let second = run_dirtree_on(dir.path(), &["-f"]);

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn should_align_deep_last_branches() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c/d")).unwrap();
    fs::create_dir(dir.path().join("z")).unwrap();

    let output = run_dirtree_on(dir.path(), &[]);
    let expected = "\
├───a
│   └───b
│       └───c
│           └───d
└───z
";
    assert_eq!(stdout_str(&output), expected);
}

#[test]
fn should_keep_stdout_clean_when_logging_enabled() {
    let dir = create_sample_dir();
    let path = dir.path().to_str().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dirtree"))
        .args([path, "-f"])
        .env("DIRTREE_LOG", "debug")
        .output()
        .expect("Failed to execute dirtree");

    assert!(output.status.success());
    assert_eq!(
        stdout_str(&output),
        "├───a\n│   └───x (5b)\n└───b.txt (empty)\n"
    );
    assert!(stderr_str(&output).contains("listed directory"));
}

// ============================================================================
// Filesystem Errors
// ============================================================================

#[test]
fn should_fail_for_nonexistent_path() {
    let dir = TempDir::new().unwrap();
    let output = run_dirtree_on(&dir.path().join("missing"), &["-f"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_str(&output).is_empty());
    assert!(stderr_str(&output).contains("Path not found"));
}

#[test]
fn should_fail_for_file_as_root() {
    let dir = create_sample_dir();
    let output = run_dirtree_on(&dir.path().join("b.txt"), &[]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_str(&output).is_empty());
    assert!(stderr_str(&output).contains("not a directory"));
}
