//! Lint report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ScanError;

/// Linter output captured for a single file.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct FileLintResult {
    /// The file that was linted.
    pub file: PathBuf,
    /// Non-blank stdout lines produced by the linter, in order.
    pub lines: Vec<String>,
    /// How many of those lines matched the error pattern.
    pub error_lines: usize,
}

impl FileLintResult {
    /// Whether the linter flagged at least one error in this file.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_lines > 0
    }
}

/// Result of a lint run.
///
/// CI pipelines must check both `has_errors` and `scan_errors`.
/// A non-empty `scan_errors` means the runner did not fully cover the
/// configured file sets — treat this as a build failure regardless of
/// `has_errors`.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct LintReport {
    /// Number of files the linter was invoked on.
    pub linted_files: usize,
    /// Number of paths that could not be considered (discovery failures).
    pub failed_files: usize,
    /// Whether any linter output line matched the error pattern.
    pub has_errors: bool,
    /// Whether the run is clean: no lint errors AND no scan errors.
    pub ok: bool,
    /// Per-file linter output.
    pub files: Vec<FileLintResult>,
    /// Discovery-stage errors: paths that could not be scanned.
    pub scan_errors: Vec<ScanError>,
}

impl LintReport {
    /// Total number of files attempted (linted + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.linted_files + self.failed_files
    }

    /// Total number of error lines across all linted files.
    #[must_use]
    pub fn error_lines_count(&self) -> usize {
        self.files.iter().map(|f| f.error_lines).sum()
    }
}
