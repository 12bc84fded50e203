//! External linter invocation.
//!
//! Shells out to the configured lint executable, one file per blocking
//! invocation, and scans the captured stdout for error lines. The
//! linter's exit code is deliberately ignored: only output content
//! drives the error flag, matching the informal contract with the
//! external tool.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::config::LinterConfig;
use crate::error::LintError;
use crate::report::FileLintResult;

/// Verify that the lint executable exists and responds to `-v`.
///
/// # Errors
///
/// Returns [`LintError::ExecutableNotFound`] if the process cannot be
/// spawned or exits non-zero.
pub fn probe_executable(executable: &str) -> Result<(), LintError> {
    let status = Command::new(executable)
        .arg("-v")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(_) | Err(_) => Err(LintError::ExecutableNotFound(executable.to_owned())),
    }
}

/// Lint a single file: run `<executable> <file> [--config <path>]`,
/// capture stdout, and count lines matching the error pattern.
///
/// Blank output lines are discarded; every kept line is logged at info
/// level. stderr is logged at debug level and never scanned.
///
/// # Errors
///
/// Returns [`LintError::FileNotFound`] / [`LintError::PermissionDenied`]
/// if the target cannot be handed to the linter, and
/// [`LintError::Spawn`] if the linter process fails to start.
pub fn lint_file(path: &Path, config: &LinterConfig) -> Result<FileLintResult, LintError> {
    if !path.exists() {
        return Err(LintError::FileNotFound(path.to_owned()));
    }

    // Open-for-read check up front so an unreadable target surfaces as a
    // runner error, not as opaque linter output.
    if let Err(e) = std::fs::File::open(path) {
        return Err(match e.kind() {
            std::io::ErrorKind::PermissionDenied => LintError::PermissionDenied(path.to_owned()),
            std::io::ErrorKind::NotFound => LintError::FileNotFound(path.to_owned()),
            _ => LintError::Io {
                file: path.to_owned(),
                source: e,
            },
        });
    }

    let mut cmd = Command::new(&config.executable);
    cmd.arg(path);
    if let Some(config_file) = &config.config_file {
        cmd.arg("--config").arg(config_file);
    }

    debug!("linting {}", path.display());
    let output = cmd.output().map_err(|e| LintError::Spawn {
        executable: config.executable.clone(),
        source: e,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<String> = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToOwned::to_owned)
        .collect();

    for line in &lines {
        info!("{line}");
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
        debug!("linter stderr: {line}");
    }

    let error_lines = lines
        .iter()
        .filter(|line| is_error_line(line, &config.error_pattern))
        .count();

    Ok(FileLintResult {
        file: path.to_owned(),
        lines,
        error_lines,
    })
}

/// Whether an output line indicates a lint error.
pub(crate) fn is_error_line(line: &str, pattern: &str) -> bool {
    line.contains(pattern)
}
