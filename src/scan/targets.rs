//! Target expansion
//!
//! Command-line targets are either plain files, passed through untouched, or
//! directories, which are walked with the ignore crate (hidden entries and
//! .gitignore'd paths are skipped) and expanded to their files in sorted
//! order.

use ignore::WalkBuilder;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::error::XrefError;
use crate::core::paths::normalize_path;

/// A file to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    /// Identifier used in reports
    pub name: String,
}

impl Target {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.to_string_lossy().into_owned();
        Self { path, name }
    }
}

/// Expand command-line paths into the files to scan, keeping argument order
pub fn expand_targets(paths: &[PathBuf]) -> Vec<Target> {
    let mut targets = Vec::new();
    for path in paths {
        if path.is_dir() {
            targets.extend(walk_dir(path));
        } else {
            targets.push(Target::new(path.clone()));
        }
    }
    targets
}

/// Files under `dir`, sorted by path
fn walk_dir(dir: &Path) -> Vec<Target> {
    let mut builder = WalkBuilder::new(dir);
    builder.hidden(true).git_ignore(true).git_exclude(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.into_path();
        files.push(Target {
            name: normalize_path(&path),
            path,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    files
}

/// Read whitespace-separated file names, as given with `-@`
pub fn read_target_list<R: Read>(mut reader: R) -> Result<Vec<PathBuf>, XrefError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(XrefError::StdinList)?;
    Ok(text.split_whitespace().map(PathBuf::from).collect())
}
