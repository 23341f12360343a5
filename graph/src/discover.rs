//! Source discovery.
//!
//! A corpus is a flat directory of converted documents. Files are returned
//! sorted by name so document indices are stable between runs.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{GraphError, Result};

/// Lists the regular files directly inside `dir` whose extension is one of
/// `extensions` (compared case-insensitively, without the leading dot).
///
/// # Errors
///
/// Returns [`GraphError::NotADirectory`] if `dir` is not a directory and
/// [`GraphError::Walk`] if it cannot be listed.
pub fn discover(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(GraphError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| GraphError::Walk {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|x| x.to_str())
            .map(|x| extensions.iter().any(|want| want.eq_ignore_ascii_case(x)))
            .unwrap_or(false);
        if matches {
            files.push(entry.into_path());
        }
    }

    debug!(dir = %dir.display(), count = files.len(), "discovered source files");
    Ok(files)
}
