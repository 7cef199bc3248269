//! Glob-pattern file expansion.

use anyhow::{Context, Result, bail};
use glob::glob;
use std::path::PathBuf;

use crate::flow::{Flow, flow};

/// Expand a glob pattern into a [`Flow`] of matching file paths, sorted
/// lexicographically for deterministic processing order.
///
/// Supports standard glob syntax (`*`, `?`, `**`, `[abc]`). Directories
/// are skipped; only files are yielded. Zero matches is an empty flow, not
/// an error -- see [`glob_files_required`] for the stricter variant.
///
/// # Errors
/// Returns an error if the pattern is invalid or the filesystem cannot be
/// read while matching.
pub fn glob_files(pattern: &str) -> Result<Flow<std::vec::IntoIter<PathBuf>>> {
    let paths = glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;

    let mut result = Vec::new();
    for entry in paths {
        let path =
            entry.with_context(|| format!("error reading glob entry for pattern: {pattern}"))?;
        if path.is_file() {
            result.push(path);
        }
    }
    result.sort();
    tracing::debug!(pattern, files = result.len(), "expanded glob");
    Ok(flow(result))
}

/// Expand a glob pattern, erroring if no files match.
///
/// # Errors
/// Same as [`glob_files`], plus an error when the match set is empty.
pub fn glob_files_required(pattern: &str) -> Result<Flow<std::vec::IntoIter<PathBuf>>> {
    let files = glob_files(pattern)?;
    if files.get_ref().len() == 0 {
        bail!("no files found matching pattern: {pattern}");
    }
    Ok(files)
}
