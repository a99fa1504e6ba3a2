//! Command execution for the linter binary.

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use tracing::warn;

use python_filename_linter::core::pipeline::{render_json, render_text};
use python_filename_linter::{run_lint, LintConfig, ReportFormat};

/// Install the global tracing subscriber for this run.
///
/// WARN by default so that only findings and skipped renames show up; the
/// verbose flag lowers it to DEBUG for per-path skip reasons.
pub fn init_logging(config: &LintConfig) {
    let log_level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Lint the configured paths and map the outcome to an exit status.
pub fn lint_command(config: &LintConfig) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;

    let report = run_lint(config, &cwd)
        .with_context(|| format!("Lint run failed under root {}", config.root.display()))?;

    if report.has_findings() {
        warn!("{}", render_text(&report));
    }

    if config.format == ReportFormat::Json {
        println!("{}", render_json(&report)?);
    }

    Ok(if report.has_findings() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
