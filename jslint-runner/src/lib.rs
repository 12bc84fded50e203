//! # jslint-runner
//!
//! JavaScript lint runner for build pipelines.
//!
//! This crate provides a clean separation between the **lint engine**
//! (external-linter invocation and output scanning) and **file-set
//! discovery** (filesystem scanning with include/exclude rules).
//!
//! The external linter (ESLint by default) is invoked once per file as
//! `<executable> <file> [--config <path>]`; any stdout line containing
//! the error pattern flags the run as failed. The linter's exit code is
//! ignored.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use jslint_runner::{lint_fs, FsSourceConfig, LinterConfig};
//!
//! let mut fs_config = FsSourceConfig::default();
//! fs_config.paths = vec![PathBuf::from("src"), PathBuf::from("lib")];
//! fs_config.exclude = vec!["*.spec.js".to_owned()];
//!
//! let linter = LinterConfig::default(); // eslint, error pattern "error"
//!
//! let report = lint_fs(&fs_config, &linter).unwrap();
//! println!("Files linted: {}", report.linted_files);
//! println!("Has errors: {}", report.has_errors);
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
mod fileset;
pub mod output;
mod report;
mod runner;

pub use config::{FsSourceConfig, LinterConfig};
pub use error::{LintError, ScanError, ScanErrorKind};
pub use fileset::is_js_file;
pub use report::{FileLintResult, LintReport};

use fileset::find_files;
use runner::{lint_file, probe_executable};

/// Lint JavaScript files on disk with an external linter.
///
/// This is the primary public API.
///
/// # Arguments
///
/// * `fs_config` - Filesystem source options (single file or scan paths,
///   exclude patterns, traversal limits)
/// * `linter` - Linter options (executable, config file, error pattern)
///
/// # Errors
///
/// Returns [`LintError::MissingInput`] if neither `fs_config.file` nor
/// any entry in `fs_config.paths` is set, [`LintError::ExecutableNotFound`]
/// if the linter does not respond to `-v`, and a fatal [`LintError`] if a
/// lint target is missing or unreadable. Discovery failures (walk errors,
/// bad exclude patterns, boundary violations) are reported in
/// `report.scan_errors` and never silently discarded.
pub fn lint_fs(fs_config: &FsSourceConfig, linter: &LinterConfig) -> Result<LintReport, LintError> {
    if fs_config.file.is_none() && fs_config.paths.is_empty() {
        return Err(LintError::MissingInput);
    }

    probe_executable(&linter.executable)?;

    // Single-file mode short-circuits discovery. A configured file that is
    // not a lintable .js file falls through to the paths.
    let (files, mut scan_errors) = match &fs_config.file {
        Some(file) if is_js_file(file) => (vec![file.clone()], Vec::new()),
        _ => find_files(fs_config),
    };

    let mut results = Vec::with_capacity(files.len());
    let mut linted_files: usize = 0;
    // Discovery-stage failures are already in scan_errors from find_files.
    // Count them as failed files upfront.
    let mut failed_files: usize = scan_errors.len();

    for file_path in &files {
        if linted_files + failed_files >= fs_config.max_files {
            scan_errors.push(ScanError {
                file: file_path.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Run aborted: max_files limit ({}) reached; remaining files not linted",
                    fs_config.max_files
                ),
            });
            failed_files += 1;
            break;
        }

        let result = lint_file(file_path, linter)?;
        linted_files += 1;
        results.push(result);
    }

    let has_errors = results.iter().any(FileLintResult::has_errors);
    let ok = !has_errors && scan_errors.is_empty();
    Ok(LintReport {
        linted_files,
        failed_files,
        has_errors,
        ok,
        files: results,
        scan_errors,
    })
}
