//! Path collection utilities.
//!
//! This module turns user-supplied arguments into root-relative Python file
//! paths and expands them into the set of ancestor folders to lint.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::core::errors::{LinterError, Result};

/// Extension of the files the linter looks at.
pub const PYTHON_EXTENSION: &str = "py";

/// Check if a path has the Python source extension
pub fn is_python_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == PYTHON_EXTENSION)
        .unwrap_or(false)
}

/// Anchor a relative path at `cwd`; absolute paths are returned as they are.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Resolve the lint root to an absolute, canonical directory.
///
/// A relative root is taken relative to `cwd`.
pub fn resolve_root(root: &Path, cwd: &Path) -> Result<PathBuf> {
    let root = &absolutize(root, cwd);
    if !root.exists() {
        return Err(LinterError::config_field(
            format!("Lint root does not exist: {}", root.display()),
            "root",
        ));
    }

    let root_path = fs::canonicalize(root)
        .map_err(|e| LinterError::io_at("Failed to resolve lint root", root, e))?;

    if !root_path.is_dir() {
        return Err(LinterError::config_field(
            format!("Lint root must be a directory: {}", root_path.display()),
            "root",
        ));
    }

    Ok(root_path)
}

/// Keep the arguments that exist, are regular files and end in `.py`.
///
/// Relative paths are checked against the process working directory; anchor
/// them with [`absolutize`] first when linting on behalf of another directory.
pub fn collect_python_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| {
            if !path.is_file() {
                debug!("Skipping {}: not an existing file", path.display());
                return false;
            }
            if !is_python_file(path) {
                debug!("Skipping {}: not a Python file", path.display());
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Express `path` relative to the canonical `root`.
///
/// Relative inputs are resolved against `cwd`. Only the parent directory is
/// canonicalized so that the final component keeps the name it has on disk,
/// even when it is a symlink. Returns `Ok(None)` for paths outside the root.
pub fn relative_to_root(path: &Path, root: &Path, cwd: &Path) -> Result<Option<PathBuf>> {
    let absolute = absolutize(path, cwd);

    let Some(file_name) = absolute.file_name() else {
        return Ok(None);
    };
    let parent = absolute.parent().unwrap_or(Path::new("/"));
    let parent = fs::canonicalize(parent)
        .map_err(|e| LinterError::io_at("Failed to resolve path", parent, e))?;

    match parent.join(file_name).strip_prefix(root) {
        Ok(relative) => Ok(Some(relative.to_path_buf())),
        Err(_) => {
            debug!(
                "Skipping {}: outside root {}",
                path.display(),
                root.display()
            );
            Ok(None)
        }
    }
}

/// Every ancestor folder of `files`, deduplicated, deepest first.
///
/// Ties at the same depth are ordered by their string form. The root itself
/// (an empty path or `.`) is never included.
pub fn collect_folders(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut folders: Vec<PathBuf> = files
        .iter()
        .flat_map(|file| file.ancestors().skip(1))
        .filter(|folder| !is_root_marker(folder))
        .filter(|folder| seen.insert(folder.to_path_buf()))
        .map(Path::to_path_buf)
        .collect();

    folders.sort_by_cached_key(|folder| {
        (
            Reverse(folder.components().count()),
            folder.to_string_lossy().into_owned(),
        )
    });
    folders
}

fn is_root_marker(path: &Path) -> bool {
    path.as_os_str().is_empty() || path.components().all(|c| c == Component::CurDir)
}
