//! Error types for lint runs.

use std::path::PathBuf;

use serde::Serialize;

/// A fatal condition that aborts the whole run.
///
/// These mirror the build-breaking failures of the task contract:
/// nothing to lint, no usable linter, or a target file that cannot be
/// handed to the linter at all. Per-file lint findings are *not* errors
/// at this level — they are aggregated into the [`LintReport`].
///
/// [`LintReport`]: crate::LintReport
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LintError {
    /// Neither a single file nor any source path was configured.
    #[error("missing either a file or at least one source path")]
    MissingInput,
    /// The lint executable could not be found or did not respond to `-v`.
    #[error("lint executable not found: {0}")]
    ExecutableNotFound(String),
    /// A lint target does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// A lint target exists but cannot be opened for reading.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Any other I/O failure while checking a lint target.
    #[error("failed to read {file}: {source}")]
    Io {
        /// The file that could not be accessed.
        file: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The linter process could not be spawned for a file.
    #[error("failed to run {executable}: {source}")]
    Spawn {
        /// The executable that failed to spawn.
        executable: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// The kind of discovery-stage failure that kept a path out of the run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
    /// An I/O error occurred while resolving a path.
    IoError,
    /// The resolved path is outside the scan root (symlink escape).
    OutsideRoot,
    /// The `max_files` limit was reached, truncating the run.
    LimitExceeded,
}

/// A scan-level error: a path that could not be considered for linting.
///
/// Distinct from lint findings (linter output lines flagged as errors).
/// A `ScanError` means the runner did not fully cover the configured
/// file sets — CI must treat these as failures.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_scan_error() {
        let err = ScanError {
            file: PathBuf::from("src/app.js"),
            kind: ScanErrorKind::WalkError,
            message: "permission denied".to_owned(),
        };
        let formatted = err.format_human_readable();
        assert!(formatted.contains("src/app.js"));
        assert!(formatted.contains("[scan error]"));
        assert!(formatted.contains("permission denied"));
    }

    #[test]
    fn test_lint_error_messages() {
        let msg = LintError::MissingInput.to_string();
        assert!(msg.contains("missing either a file"), "got: {msg}");

        let msg = LintError::ExecutableNotFound("eslint".to_owned()).to_string();
        assert!(msg.contains("eslint"), "got: {msg}");

        let msg = LintError::FileNotFound(PathBuf::from("a.js")).to_string();
        assert!(msg.contains("file not found: a.js"), "got: {msg}");
    }
}
