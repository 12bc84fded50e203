//! Shared output formatting for lint reports.
//!
//! Provides JSON and plain-text formatters for `LintReport`.
//! Color/terminal formatting is intentionally excluded from this core
//! module — that concern belongs to the CLI layer.

use std::io::Write;

use crate::report::LintReport;

/// Format a `LintReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &LintReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `LintReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &LintReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  JAVASCRIPT LINT RUNNER")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Files linted:   {}", report.linted_files)?;
    writeln!(writer, "  Files failed:   {}", report.failed_files)?;
    writeln!(writer, "  Error lines:    {}", report.error_lines_count())?;
    writeln!(writer)?;

    if !report.scan_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  SCAN ERRORS (paths that could not be linted)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "{}", scan_err.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    let noisy_files = report.files.iter().filter(|f| !f.lines.is_empty());
    let mut wrote_output_header = false;
    for file in noisy_files {
        if !wrote_output_header {
            writeln!(writer, "{}", "-".repeat(80))?;
            writeln!(writer, "  LINTER OUTPUT")?;
            writeln!(writer, "{}", "-".repeat(80))?;
            wrote_output_header = true;
        }
        writeln!(writer, "{}:", file.file.display())?;
        for line in &file.lines {
            writeln!(writer, "  {line}")?;
        }
    }
    if wrote_output_header {
        writeln!(writer)?;
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} files passed lint",
            report.linted_files
        )?;
    } else {
        if !report.scan_errors.is_empty() {
            writeln!(
                writer,
                "\u{2717} {} path(s) could not be scanned \u{2014} CI must treat this as a failure",
                report.failed_files
            )?;
        }
        if report.has_errors {
            writeln!(
                writer,
                "\u{2717} {} lint error line(s) found",
                report.error_lines_count()
            )?;
        }
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
