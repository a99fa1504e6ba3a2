//! CLI Argument Structures
//!
//! This module contains the argument definitions for the linter binary and
//! their conversion into a [`LintConfig`].

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use python_filename_linter::{LintConfig, ReportFormat, VERSION};

/// Checks that your files follow the PEP8 convention
#[derive(Parser, Debug)]
#[command(name = "python-filename-linter")]
#[command(version = VERSION)]
#[command(about = "Checks that your files follow the PEP8 convention")]
#[command(long_about = "
Checks that Python file names (and optionally their folders) are snake_case:
all lowercase, words separated by underscores. Exits with status 1 when any
path does not follow the convention, even if it was renamed.

Common Usage:

  # Report offending files
  python-filename-linter src/*.py

  # Include the folders that contain them
  python-filename-linter --lint-folders src/pkg/MyModule.py

  # Fix names in place, restricted to a project root
  python-filename-linter --rename --root ./project $(git ls-files '*.py')
")]
pub struct Cli {
    /// Files to check
    pub files: Vec<PathBuf>,

    /// If set, will try to rename the file to follow snake_case
    #[arg(long)]
    pub rename: bool,

    /// If set, will try to lint folder names as well
    #[arg(short = 'f', long, alias = "lint_folders")]
    pub lint_folders: bool,

    /// Folder where to begin to lint filenames; files and folders outside this root are ignored
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Warning log only
    Text,
    /// Warning log plus a JSON report on stdout
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    /// Convert parsed arguments into a run configuration.
    pub fn into_config(self) -> LintConfig {
        LintConfig {
            paths: self.files,
            root: self.root,
            rename: self.rename,
            lint_folders: self.lint_folders,
            verbose: self.verbose,
            format: self.format.into(),
        }
    }
}
