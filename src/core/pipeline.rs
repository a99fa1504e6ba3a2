//! Lint pipeline: collect, evaluate, report.
//!
//! Files are evaluated first in argument order, then (optionally) their
//! ancestor folders deepest first, so a folder rename never invalidates a path
//! that is still waiting to be processed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::LintConfig;
use crate::core::errors::Result;
use crate::core::file_utils::{
    absolutize, collect_folders, collect_python_files, relative_to_root,
};
use crate::detectors::paths::{lint_path, Finding, LintPath};

/// Findings of a lint run, files and folders kept apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// Non-compliant files
    pub files: Vec<Finding>,
    /// Non-compliant folders, deepest first
    pub folders: Vec<Finding>,
}

impl LintReport {
    /// Whether anything was non-compliant.
    pub fn has_findings(&self) -> bool {
        !self.files.is_empty() || !self.folders.is_empty()
    }

    /// Total number of findings
    pub fn len(&self) -> usize {
        self.files.len() + self.folders.len()
    }

    /// Whether the report is empty
    pub fn is_empty(&self) -> bool {
        !self.has_findings()
    }
}

/// Run the linter described by `config`.
///
/// `cwd` anchors relative path arguments and a relative root; the process
/// working directory is never consulted.
pub fn run_lint(config: &LintConfig, cwd: &Path) -> Result<LintReport> {
    let root = config.validate(cwd)?;
    debug!("Linting against root {}", root.display());

    let inputs: Vec<PathBuf> = config
        .paths
        .iter()
        .map(|path| absolutize(path, cwd))
        .collect();

    let mut files = Vec::new();
    for path in collect_python_files(&inputs) {
        if let Some(relative) = relative_to_root(&path, &root, cwd)? {
            files.push(relative);
        }
    }

    let mut report = LintReport::default();
    for file in &files {
        if let Some(finding) = lint_path(&LintPath::file(file), &root, config.rename)? {
            report.files.push(finding);
        }
    }

    if config.lint_folders {
        for folder in collect_folders(&files) {
            if let Some(finding) = lint_path(&LintPath::directory(&folder), &root, config.rename)? {
                report.folders.push(finding);
            }
        }
    }

    info!(
        "Checked {} files, {} non-compliant paths",
        files.len(),
        report.len()
    );
    Ok(report)
}

/// Render the report as a human-readable listing.
pub fn render_text(report: &LintReport) -> String {
    let mut out = String::from("The following paths do not follow the snake_case convention:");
    for finding in &report.files {
        out.push_str(&format!("\n(file) {finding}"));
    }
    for finding in &report.folders {
        out.push_str(&format!("\n(folder) {finding}"));
    }
    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &LintReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::paths::RenameOutcome;
    use std::fs;
    use tempfile::tempdir;

    fn setup_root() -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        (dir, root)
    }

    #[test]
    fn test_reports_only_non_compliant_files() -> Result<()> {
        let (_dir, root) = setup_root();
        fs::write(root.join("FooBar.py"), "")?;
        fs::write(root.join("baz_qux.py"), "")?;

        let config = LintConfig::new(&root)
            .with_paths(vec![root.join("FooBar.py"), root.join("baz_qux.py")]);
        let report = run_lint(&config, &root)?;

        assert_eq!(report.files.len(), 1);
        assert!(report.folders.is_empty());
        assert_eq!(report.files[0].to_string(), "FooBar.py -> foo_bar.py");
        assert!(root.join("FooBar.py").exists());
        Ok(())
    }

    #[test]
    fn test_rename_still_reports() -> Result<()> {
        let (_dir, root) = setup_root();
        fs::write(root.join("FooBar.py"), "")?;

        let config = LintConfig::new(&root)
            .with_paths(vec![PathBuf::from("FooBar.py")])
            .with_rename(true);
        let report = run_lint(&config, &root)?;

        assert!(report.has_findings());
        assert_eq!(report.files[0].outcome, RenameOutcome::Renamed);
        assert!(root.join("foo_bar.py").exists());
        assert!(!root.join("FooBar.py").exists());
        Ok(())
    }

    #[test]
    fn test_relative_inputs_resolve_against_given_cwd() -> Result<()> {
        let (_dir, base) = setup_root();
        fs::create_dir_all(base.join("project/pkg"))?;
        fs::write(base.join("project/pkg/FooBar.py"), "")?;
        fs::write(base.join("Outside.py"), "")?;
        assert_ne!(std::env::current_dir()?, base);

        let config = LintConfig::new("project")
            .with_paths(vec![
                PathBuf::from("project/pkg/FooBar.py"),
                PathBuf::from("Outside.py"),
            ])
            .with_lint_folders(true);
        let report = run_lint(&config, &base)?;

        assert_eq!(report.len(), 1);
        assert_eq!(report.files[0].path, PathBuf::from("pkg/FooBar.py"));
        assert_eq!(report.files[0].recommended_name, "foo_bar.py");
        Ok(())
    }

    #[test]
    fn test_folders_follow_files_deepest_first() -> Result<()> {
        let (_dir, root) = setup_root();
        fs::create_dir_all(root.join("SubDir/InnerDir"))?;
        fs::write(root.join("SubDir/File.py"), "")?;
        fs::write(root.join("SubDir/InnerDir/ok.py"), "")?;

        let config = LintConfig::new(&root)
            .with_paths(vec![
                root.join("SubDir/File.py"),
                root.join("SubDir/InnerDir/ok.py"),
            ])
            .with_lint_folders(true);
        let report = run_lint(&config, &root)?;

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].recommended_name, "file.py");
        assert_eq!(
            report
                .files
                .iter()
                .chain(&report.folders)
                .map(|finding| finding.path.clone())
                .collect::<Vec<_>>(),
            vec![
                PathBuf::from("SubDir/File.py"),
                PathBuf::from("SubDir/InnerDir"),
                PathBuf::from("SubDir"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_rename_with_folders_moves_everything() -> Result<()> {
        let (_dir, root) = setup_root();
        fs::create_dir_all(root.join("SubDir/InnerDir"))?;
        fs::write(root.join("SubDir/InnerDir/MyFile.py"), "")?;

        let config = LintConfig::new(&root)
            .with_paths(vec![root.join("SubDir/InnerDir/MyFile.py")])
            .with_rename(true)
            .with_lint_folders(true);
        let report = run_lint(&config, &root)?;

        assert_eq!(report.len(), 3);
        assert!(root.join("sub_dir/inner_dir/my_file.py").exists());
        Ok(())
    }

    #[test]
    fn test_ignores_paths_outside_root_and_non_python() -> Result<()> {
        let (_dir, base) = setup_root();
        let root = base.join("project");
        fs::create_dir_all(&root)?;
        fs::write(base.join("Outside.py"), "")?;
        fs::write(root.join("Notes.txt"), "")?;

        let config = LintConfig::new(&root).with_paths(vec![
            base.join("Outside.py"),
            root.join("Notes.txt"),
            root.join("Missing.py"),
        ]);

        assert!(run_lint(&config, &root)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_render_text_marks_kinds() {
        let report = LintReport {
            files: vec![Finding {
                path: PathBuf::from("SubDir/File.py"),
                recommended_name: "file.py".into(),
                outcome: RenameOutcome::NotRequested,
            }],
            folders: vec![Finding {
                path: PathBuf::from("SubDir"),
                recommended_name: "sub_dir".into(),
                outcome: RenameOutcome::NotRequested,
            }],
        };

        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "(file) SubDir/File.py -> file.py");
        assert_eq!(lines[2], "(folder) SubDir -> sub_dir");
    }

    #[test]
    fn test_render_json() -> Result<()> {
        let report = LintReport {
            files: vec![Finding {
                path: PathBuf::from("FooBar.py"),
                recommended_name: "foo_bar.py".into(),
                outcome: RenameOutcome::SkippedExisting,
            }],
            folders: Vec::new(),
        };

        let parsed: serde_json::Value = serde_json::from_str(&render_json(&report)?)?;
        assert_eq!(parsed["files"][0]["recommended_name"], "foo_bar.py");
        assert_eq!(parsed["files"][0]["outcome"], "skipped_existing");
        assert_eq!(parsed["folders"].as_array().map(Vec::len), Some(0));
        Ok(())
    }
}
