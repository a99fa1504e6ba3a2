//! Path evaluation against the snake case convention.
//!
//! A [`LintPath`] is always relative to the lint root. Files are judged by
//! their stem and keep their suffix in the recommendation; folders are judged
//! by their full name.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

use crate::core::errors::{LinterError, Result};
use crate::detectors::names::{is_snake_case, to_snake_case};

/// A root-relative path, tagged with its kind.
///
/// Name components are kept as [`OsString`] so that names which are not
/// valid UTF-8 still point at the entry on disk. Only the recommendation is
/// built from a lossy copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LintPath {
    /// A regular file
    File {
        /// Parent directory, relative to the root (empty at the root)
        parent: PathBuf,
        /// File name without its final extension
        stem: OsString,
        /// Final extension including the leading `.`
        suffix: Option<OsString>,
    },
    /// A directory
    Directory {
        /// Parent directory, relative to the root (empty at the root)
        parent: PathBuf,
        /// Full directory name
        name: OsString,
    },
}

impl LintPath {
    /// Build a file entry from a root-relative path.
    pub fn file(relative: &Path) -> Self {
        let stem = relative.file_stem().map(OsStr::to_os_string).unwrap_or_default();
        let suffix = relative.extension().map(|ext| {
            let mut suffix = OsString::from(".");
            suffix.push(ext);
            suffix
        });

        Self::File {
            parent: parent_of(relative),
            stem,
            suffix,
        }
    }

    /// Build a directory entry from a root-relative path.
    pub fn directory(relative: &Path) -> Self {
        let name = relative.file_name().map(OsStr::to_os_string).unwrap_or_default();

        Self::Directory {
            parent: parent_of(relative),
            name,
        }
    }

    /// The name checked against the convention.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::File { stem, .. } => stem.to_string_lossy(),
            Self::Directory { name, .. } => name.to_string_lossy(),
        }
    }

    /// Final extension, empty for directories and extensionless files.
    pub fn suffix(&self) -> Cow<'_, str> {
        match self {
            Self::File {
                suffix: Some(suffix),
                ..
            } => suffix.to_string_lossy(),
            _ => Cow::Borrowed(""),
        }
    }

    /// Parent directory relative to the root.
    pub fn parent(&self) -> &Path {
        match self {
            Self::File { parent, .. } | Self::Directory { parent, .. } => parent.as_path(),
        }
    }

    /// The full path relative to the root, byte for byte as on disk.
    pub fn relative_path(&self) -> PathBuf {
        let file_name = match self {
            Self::File { stem, suffix, .. } => {
                let mut file_name = stem.clone();
                if let Some(suffix) = suffix {
                    file_name.push(suffix);
                }
                file_name
            }
            Self::Directory { name, .. } => name.clone(),
        };
        self.parent().join(file_name)
    }
}

fn parent_of(relative: &Path) -> PathBuf {
    relative
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

fn serialize_path_lossy<S>(path: &Path, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&path.to_string_lossy())
}

/// What happened on disk for a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameOutcome {
    /// Rename mode was off
    NotRequested,
    /// The path was moved to the recommended name
    Renamed,
    /// The recommended name was already taken, nothing was moved
    SkippedExisting,
}

/// A non-compliant path together with its recommended name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Original path, relative to the root
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Recommended final component (stem plus original suffix for files)
    pub recommended_name: String,
    /// Result of the rename attempt
    pub outcome: RenameOutcome,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.path.display(), self.recommended_name)
    }
}

/// Evaluate one root-relative path, renaming it when `rename` is set.
///
/// Returns `Ok(None)` for compliant names. A rename whose destination already
/// exists is skipped with a warning and still produces a finding. Failures of
/// the move itself are returned as errors.
pub fn lint_path(path: &LintPath, root: &Path, rename: bool) -> Result<Option<Finding>> {
    let name = path.name();
    if is_snake_case(&name) {
        return Ok(None);
    }

    let recommended_name = format!("{}{}", to_snake_case(&name), path.suffix());
    let relative = path.relative_path();

    let outcome = if rename {
        let source = root.join(&relative);
        let destination = root.join(path.parent()).join(&recommended_name);

        if destination.exists() {
            warn!(
                "path not renamed as it would overwrite another: {} -> {}",
                relative.display(),
                recommended_name
            );
            RenameOutcome::SkippedExisting
        } else {
            std::fs::rename(&source, &destination)
                .map_err(|e| LinterError::io_at("Failed to rename", &source, e))?;
            debug!("Renamed {} to {}", source.display(), destination.display());
            RenameOutcome::Renamed
        }
    } else {
        RenameOutcome::NotRequested
    };

    Ok(Some(Finding {
        path: relative,
        recommended_name,
        outcome,
    }))
}
