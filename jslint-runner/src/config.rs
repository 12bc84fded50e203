//! Configuration types for lint runs.
//!
//! Split into core linter config (which tool runs, how its output is
//! scanned) and source-specific config (how candidate files are
//! discovered). This keeps the invocation path free of filesystem
//! concerns.

use std::path::PathBuf;

/// Core linter config — applies regardless of how files are discovered.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct LinterConfig {
    /// Name or path of the external lint executable (default: `eslint`).
    /// Probed with `<executable> -v` before any file is linted.
    pub executable: String,
    /// Optional linter config file, forwarded as `--config <path>`.
    pub config_file: Option<PathBuf>,
    /// Substring that marks an output line as a lint error (default:
    /// `error`). Matched case-sensitively against every stdout line.
    pub error_pattern: String,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            executable: "eslint".to_owned(),
            config_file: None,
            error_pattern: "error".to_owned(),
        }
    }
}

/// Filesystem-specific source options.
///
/// Either `file` or at least one entry in `paths` is required.
/// Default scan roots are a CLI/wrapper concern, not baked into the
/// library — keeps `jslint-runner` repo-layout-agnostic.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Single-file mode: lint exactly this file, skipping path discovery.
    /// Ignored (falls through to `paths`) when the file is not a
    /// lintable `.js` file.
    pub file: Option<PathBuf>,
    /// Paths to scan (files or directories).
    pub paths: Vec<PathBuf>,
    /// Exclude patterns (glob format), matched against the full path or
    /// the file name.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`** — following symlinks allows escaping the
    /// repository root and traversing system directories in CI
    /// environments. Only enable if you explicitly trust all symlinks
    /// in the repository.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
    /// Maximum number of files to lint (default: `100_000`).
    /// Prevents runaway runs on pathological repositories.
    pub max_files: usize,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            file: None,
            paths: Vec::new(),
            exclude: Vec::new(),
            follow_links: false,
            max_depth: 64,
            max_files: 100_000,
        }
    }
}
