//! Path helpers
//!
//! File identifiers in reports use '/' as separator so output is the same on
//! every platform.

use std::path::Path;

/// Normalize a path to use '/' as separator
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
