//! Recursive filesystem walkers.
//!
//! Lazy traversal sources: directories are opened only as the pipeline
//! pulls, so walking a huge tree costs no more than the part actually
//! consumed. Unreadable entries are skipped (with a debug event) rather
//! than failing the whole walk.

use std::fs::ReadDir;
use std::path::{Path, PathBuf};

use crate::flow::Flow;

/// Yield every file under `root`, recursively.
///
/// Directories are visited depth-first; an unreadable directory is logged
/// and skipped. A missing or unreadable `root` produces an empty flow.
///
/// # Example
/// ```no_run
/// use rivulet::io::walk_files;
///
/// let rust_files = walk_files("src")
///     .filter(|p| p.extension().is_some_and(|e| e == "rs"))
///     .to_vec();
/// ```
pub fn walk_files(root: impl AsRef<Path>) -> Flow<WalkFiles> {
    Flow {
        iter: WalkFiles {
            stack: open_dir(root.as_ref()).into_iter().collect(),
        },
    }
}

/// Yield every directory under `root`, recursively, starting with `root`
/// itself.
pub fn walk_dirs(root: impl AsRef<Path>) -> Flow<WalkDirs> {
    Flow {
        iter: WalkDirs {
            queue: vec![root.as_ref().to_path_buf()],
        },
    }
}

fn open_dir(path: &Path) -> Option<ReadDir> {
    match std::fs::read_dir(path) {
        Ok(rd) => Some(rd),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "skipping unreadable directory");
            None
        }
    }
}

/// Lazy depth-first file walker for [`walk_files`].
pub struct WalkFiles {
    stack: Vec<ReadDir>,
}

impl Iterator for WalkFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let rd = self.stack.last_mut()?;
            match rd.next() {
                None => {
                    self.stack.pop();
                }
                Some(Err(e)) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                }
                Some(Ok(entry)) => {
                    let path = entry.path();
                    if path.is_dir() {
                        if let Some(rd) = open_dir(&path) {
                            self.stack.push(rd);
                        }
                    } else {
                        return Some(path);
                    }
                }
            }
        }
    }
}

/// Lazy depth-first directory walker for [`walk_dirs`].
pub struct WalkDirs {
    queue: Vec<PathBuf>,
}

impl Iterator for WalkDirs {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let dir = self.queue.pop()?;
        if let Some(rd) = open_dir(&dir) {
            for entry in rd {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if path.is_dir() {
                            self.queue.push(path);
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "skipping unreadable entry");
                    }
                }
            }
        }
        Some(dir)
    }
}
