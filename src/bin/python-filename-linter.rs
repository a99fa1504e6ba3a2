#!/usr/bin/env rust
//! python-filename-linter CLI
//!
//! Checks that Python files (and optionally their folders) follow the
//! snake_case naming convention. Exits with status 1 when any path does not.

use std::process::ExitCode;

use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.into_config();

    // Initialize tracing/logging
    cli::init_logging(&config);

    cli::lint_command(&config)
}
