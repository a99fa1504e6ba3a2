//! # python-filename-linter
//!
//! Checks that Python file names, and optionally the folders that contain
//! them, follow the PEP 8 `snake_case` convention, and can rename offenders
//! to the recommended form.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     CLI binary                       │
//! ├──────────────────────────────────────────────────────┤
//! │  Core                        │  Detectors            │
//! │ • Config                     │ • Names (snake_case)  │
//! │ • File utils (collection)    │ • Paths (evaluation,  │
//! │ • Pipeline (run + report)    │   rename)             │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use python_filename_linter::{run_lint, LintConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cwd = std::env::current_dir()?;
//!     let config = LintConfig::new(&cwd)
//!         .with_paths(vec!["src/MyModule.py".into()])
//!         .with_lint_folders(true);
//!
//!     let report = run_lint(&config, &cwd)?;
//!     println!("{} non-compliant paths", report.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Run configuration, collection and reporting
pub mod core {
    //! Configuration, path collection and the lint pipeline.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
    pub mod pipeline;
}

// Naming rules
pub mod detectors {
    //! Naming convention checks.

    pub mod names;
    pub mod paths;
}

// Re-export primary types for convenience
pub use core::config::{LintConfig, ReportFormat};
pub use core::errors::{LinterError, Result};
pub use core::pipeline::{run_lint, LintReport};
pub use detectors::names::{is_snake_case, to_snake_case};
pub use detectors::paths::{lint_path, Finding, LintPath, RenameOutcome};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
