//! JSON Lines (JSONL) sources.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::flow::{Flow, flow};

/// Read a JSONL file into a typed [`Flow`].
///
/// Each non-empty line is parsed as one JSON document and deserialized to
/// `T`. The file is read up front so parse failures surface here, with
/// line-number context, rather than mid-pipeline.
///
/// # Errors
/// Returns an error if the file cannot be opened, read, or if any line
/// fails to parse into `T`.
pub fn read_jsonl<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<Flow<std::vec::IntoIter<T>>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = BufReader::new(f);
    let mut out = Vec::<T>::new();
    for (i, line) in rdr.lines().enumerate() {
        let line = line.with_context(|| format!("read line {} in {}", i + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let v: T = serde_json::from_str(&line).with_context(|| {
            format!("parse JSONL line {} in {}: {}", i + 1, path.display(), line)
        })?;
        out.push(v);
    }
    tracing::debug!(path = %path.display(), records = out.len(), "read JSONL source");
    Ok(flow(out))
}
