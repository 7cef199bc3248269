//! Line-oriented file sources and filters.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::flow::{Flow, flow};

/// Read a text file into a [`Flow`] of lines.
///
/// Line terminators are stripped. The whole file is read up front so that
/// I/O failures surface here rather than mid-pipeline.
///
/// # Errors
/// Returns an error if the file cannot be opened or read; errors include
/// the offending line number.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Flow<std::vec::IntoIter<String>>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = BufReader::new(f);
    let mut out = Vec::new();
    for (i, line) in rdr.lines().enumerate() {
        let line = line.with_context(|| format!("read line {} in {}", i + 1, path.display()))?;
        out.push(line);
    }
    tracing::debug!(path = %path.display(), lines = out.len(), "read line source");
    Ok(flow(out))
}

impl<I> Flow<I>
where
    I: Iterator<Item = String>,
{
    /// Keep only lines matching a regular expression.
    ///
    /// # Errors
    /// Returns an error immediately if the pattern is invalid.
    ///
    /// # Example
    /// ```
    /// use rivulet::flow;
    ///
    /// let lines = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
    /// let out = flow(lines).matching("^.a")?.to_vec();
    /// assert_eq!(out, vec!["gamma"]);
    /// # anyhow::Result::<()>::Ok(())
    /// ```
    pub fn matching(self, pattern: &str) -> Result<Flow<Matching<I>>> {
        let re = Regex::new(pattern).with_context(|| format!("invalid pattern: {pattern}"))?;
        Ok(Flow {
            iter: Matching { iter: self.iter, re },
        })
    }
}

/// Regex line-filtering adapter for [`Flow::matching`].
pub struct Matching<I> {
    iter: I,
    re: Regex,
}

impl<I: Iterator<Item = String>> Iterator for Matching<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let line = self.iter.next()?;
            if self.re.is_match(&line) {
                return Some(line);
            }
        }
    }
}
