//! Run configuration for the linter.
//!
//! There is no configuration file: the CLI builds a [`LintConfig`] from its
//! arguments and hands it to the pipeline and to the logging setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::Result;
use crate::core::file_utils::resolve_root;

/// Report rendering mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Warning-level log listing every finding
    #[default]
    Text,
    /// Warning log plus a JSON document on stdout
    Json,
}

/// Everything one lint run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Candidate files as given on the command line
    pub paths: Vec<PathBuf>,
    /// Boundary directory; anything outside is ignored
    pub root: PathBuf,
    /// Rename non-compliant paths to their recommended names
    pub rename: bool,
    /// Also lint the folders containing the files
    pub lint_folders: bool,
    /// Show per-path debug diagnostics
    pub verbose: bool,
    /// How the final report is rendered
    pub format: ReportFormat,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            root: PathBuf::from("."),
            rename: false,
            lint_folders: false,
            verbose: false,
            format: ReportFormat::Text,
        }
    }
}

impl LintConfig {
    /// Create a configuration for `root` with every flag off.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Set the candidate paths
    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    /// Enable or disable renaming
    pub fn with_rename(mut self, rename: bool) -> Self {
        self.rename = rename;
        self
    }

    /// Enable or disable folder linting
    pub fn with_lint_folders(mut self, lint_folders: bool) -> Self {
        self.lint_folders = lint_folders;
        self
    }

    /// Validate the configuration and return the canonical root.
    ///
    /// A relative root is resolved against `cwd`.
    pub fn validate(&self, cwd: &Path) -> Result<PathBuf> {
        resolve_root(&self.root, cwd)
    }
}
