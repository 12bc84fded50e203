//! End-to-end tests for the `jslint-runner` binary.
//!
//! Each test drives the real binary against a fake linter shell script,
//! so they are unix-only.

#![cfg(unix)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::predicate;
use tempfile::TempDir;

fn fake_linter(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn cmd() -> Command {
    Command::cargo_bin("jslint-runner").unwrap()
}

const ERROR_LINTER: &str = r#"case "$1" in -v) exit 0 ;; esac
echo "  1:10  error  Missing semicolon""#;

#[test]
fn test_no_input_fails() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing either a file"));
}

#[test]
fn test_missing_executable_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "var x = 1;\n").unwrap();

    cmd()
        .arg(tmp.path())
        .args(["--executable", "definitely-not-a-real-linter-9f3a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lint executable not found"));
}

#[test]
fn test_clean_run_exits_zero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "var x = 1;\n").unwrap();
    let linter = fake_linter(tmp.path(), "clean-linter", "exit 0");

    cmd()
        .arg(tmp.path())
        .args(["--executable", &linter.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 files passed lint"));
}

#[test]
fn test_lint_errors_exit_zero_by_default() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "var x = 1\n").unwrap();
    let linter = fake_linter(tmp.path(), "noisy-linter", ERROR_LINTER);

    cmd()
        .arg(tmp.path())
        .args(["--executable", &linter.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing semicolon"));
}

#[test]
fn test_halt_on_failure_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "var x = 1\n").unwrap();
    let linter = fake_linter(tmp.path(), "noisy-linter", ERROR_LINTER);

    cmd()
        .arg(tmp.path())
        .args(["--executable", &linter.to_string_lossy()])
        .arg("--halt-on-failure")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Syntax error(s) in JS files"));
}

#[test]
fn test_status_file_written_on_errors() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "var x = 1\n").unwrap();
    let linter = fake_linter(tmp.path(), "noisy-linter", ERROR_LINTER);
    let status = tmp.path().join("status");

    cmd()
        .arg(tmp.path())
        .args(["--executable", &linter.to_string_lossy()])
        .args(["--status-file", &status.to_string_lossy()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&status).unwrap(), "1");
}

#[test]
fn test_status_file_written_on_clean_run() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "var x = 1;\n").unwrap();
    let linter = fake_linter(tmp.path(), "clean-linter", "exit 0");
    let status = tmp.path().join("status");

    cmd()
        .arg(tmp.path())
        .args(["--executable", &linter.to_string_lossy()])
        .args(["--status-file", &status.to_string_lossy()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&status).unwrap(), "0");
}

#[test]
fn test_status_file_written_even_when_halting() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "var x = 1\n").unwrap();
    let linter = fake_linter(tmp.path(), "noisy-linter", ERROR_LINTER);
    let status = tmp.path().join("status");

    cmd()
        .arg(tmp.path())
        .args(["--executable", &linter.to_string_lossy()])
        .args(["--status-file", &status.to_string_lossy()])
        .arg("--halt-on-failure")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&status).unwrap(), "1");
}

#[test]
fn test_json_format() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "var x = 1\n").unwrap();
    let linter = fake_linter(tmp.path(), "noisy-linter", ERROR_LINTER);

    let output = cmd()
        .arg(tmp.path())
        .args(["--executable", &linter.to_string_lossy()])
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["linted_files"], 1);
    assert_eq!(json["has_errors"], true);
    assert_eq!(json["ok"], false);
    assert!(json["files"][0]["lines"][0]
        .as_str()
        .unwrap()
        .contains("Missing semicolon"));
}

#[test]
fn test_single_file_flag() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("app.js");
    fs::write(&target, "var x = 1;\n").unwrap();
    fs::write(tmp.path().join("other.js"), "var y = 2;\n").unwrap();
    let linter = fake_linter(tmp.path(), "clean-linter", "exit 0");

    cmd()
        .args(["--file", &target.to_string_lossy()])
        .args(["--executable", &linter.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 files passed lint"));
}

#[test]
fn test_exclude_flag() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("app.js"), "var x = 1;\n").unwrap();
    fs::write(tmp.path().join("app.spec.js"), "var y = 2;\n").unwrap();
    let linter = fake_linter(tmp.path(), "clean-linter", "exit 0");

    cmd()
        .arg(tmp.path())
        .args(["--executable", &linter.to_string_lossy()])
        .args(["--exclude", "*.spec.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 files passed lint"));
}
