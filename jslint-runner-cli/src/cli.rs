//! Argument parsing and command execution.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use jslint_runner::{FsSourceConfig, LinterConfig, lint_fs, output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report.
    Human,
    /// Machine-readable JSON report.
    Json,
}

/// Run an external JavaScript linter over a set of source files and
/// report aggregated results.
#[derive(Debug, Parser)]
#[command(name = "jslint-runner", version, about)]
struct Cli {
    /// Directories or files to scan for JavaScript sources
    paths: Vec<PathBuf>,

    /// Lint exactly this file instead of scanning paths
    #[arg(long)]
    file: Option<PathBuf>,

    /// Lint executable to invoke
    #[arg(long, default_value = "eslint")]
    executable: String,

    /// Linter config file, forwarded as `--config <path>`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exclude glob pattern (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Substring that marks an output line as a lint error
    #[arg(long, default_value = "error")]
    error_pattern: String,

    /// Exit non-zero when lint errors are found
    #[arg(long)]
    halt_on_failure: bool,

    /// Write "1" (errors found) or "0" (clean) to this file after the run
    #[arg(long)]
    status_file: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Follow symbolic links during discovery
    #[arg(long)]
    follow_links: bool,

    /// Maximum directory traversal depth
    #[arg(long, default_value_t = 64)]
    max_depth: usize,

    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Parse arguments, run the linter, and propagate the pass/fail signal.
///
/// The status file is written before the `--halt-on-failure` check, so a
/// caller combining both flags still receives the aggregate flag. (The
/// build-task ancestor of this tool halted first and left its status
/// property unset in that combination; writing it unconditionally is the
/// deliberate divergence here.)
///
/// # Errors
///
/// Returns an error for the fatal conditions (missing input, missing
/// executable, missing/unreadable target) and, under
/// `--halt-on-failure`, when lint errors were found.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let mut fs_config = FsSourceConfig::default();
    fs_config.file = cli.file;
    fs_config.paths = cli.paths;
    fs_config.exclude = cli.exclude;
    fs_config.follow_links = cli.follow_links;
    fs_config.max_depth = cli.max_depth;

    let mut linter = LinterConfig::default();
    linter.executable = cli.executable;
    linter.config_file = cli.config;
    linter.error_pattern = cli.error_pattern;

    let report = lint_fs(&fs_config, &linter)?;

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut stdout)?,
        OutputFormat::Json => output::write_json(&report, &mut stdout)?,
    }
    stdout.flush()?;

    if let Some(status_file) = &cli.status_file {
        let status = if report.has_errors { "1" } else { "0" };
        std::fs::write(status_file, status)
            .with_context(|| format!("failed to write status file {}", status_file.display()))?;
    }

    if cli.halt_on_failure && report.has_errors {
        anyhow::bail!("Syntax error(s) in JS files");
    }

    Ok(())
}
