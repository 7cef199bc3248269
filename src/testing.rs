//! Testing utilities for rivulet pipelines.
//!
//! Assertion helpers for comparing drained pipeline output with expected
//! results, plus a small temp-directory fixture for exercising the file
//! source adapters without touching the real filesystem layout.
//!
//! # Quick Start
//!
//! ```
//! use rivulet::flow;
//! use rivulet::testing::*;
//!
//! let out = flow(0..5).map(|x| x * 2).to_vec();
//! assert_flows_equal(&out, &[0, 2, 4, 6, 8]);
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Assert that two drained sequences are equal in order and content.
///
/// # Panics
/// Panics if the sequences differ in length or content.
pub fn assert_flows_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Sequence length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Sequence mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two drained sequences contain the same elements with the
/// same multiplicities, ignoring order.
///
/// Useful for stages that reorder ([`shuffle`](crate::Flow::shuffle)) or
/// for comparing tee branches drained in different interleavings.
///
/// # Panics
/// Panics if the sequences differ as multisets.
pub fn assert_flows_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    let mut counts: HashMap<&T, i64> = HashMap::new();
    for a in actual {
        *counts.entry(a).or_default() += 1;
    }
    for e in expected {
        *counts.entry(e).or_default() -= 1;
    }
    let unbalanced: Vec<_> = counts.iter().filter(|(_, n)| **n != 0).collect();
    assert!(
        unbalanced.is_empty(),
        "Multiset mismatch (element, actual - expected count): {unbalanced:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that all elements satisfy a predicate.
///
/// # Panics
/// Panics if any element does not satisfy the predicate.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that at least one element satisfies a predicate.
///
/// # Panics
/// Panics if no elements satisfy the predicate.
pub fn assert_any<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        collection.iter().any(&predicate),
        "No elements satisfied the predicate:\n  Collection: {collection:?}"
    );
}

/// Assert that no elements satisfy a predicate.
///
/// # Panics
/// Panics if any element satisfies the predicate.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// A temporary directory of data files for exercising the source adapters.
///
/// The directory and everything in it are removed on drop.
///
/// # Example
/// ```
/// use rivulet::io::read_lines;
/// use rivulet::testing::TempDataDir;
///
/// let dir = TempDataDir::new()?;
/// let path = dir.write_file("input.txt", "a\nb\n")?;
/// assert_eq!(read_lines(&path)?.count(), 2);
/// # anyhow::Result::<()>::Ok(())
/// ```
pub struct TempDataDir {
    dir: tempfile::TempDir,
}

impl TempDataDir {
    /// Create a fresh temporary directory.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir().context("create temp data dir")?,
        })
    }

    /// Write `contents` to `name` inside the directory, creating parent
    /// subdirectories as needed, and return the full path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("mkdir -p {}", parent.display()))?;
        }
        std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Path of the temporary directory.
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}
