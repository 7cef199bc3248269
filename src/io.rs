//! Boundary source adapters.
//!
//! Nothing in here is part of the operator engine: these helpers merely
//! supply sequences at the pipeline's edge -- lines of a file, typed JSONL
//! records, or filesystem paths -- as [`Flow`](crate::Flow) sources.

pub mod lines;
pub mod walk;

#[cfg(feature = "io-glob")]
pub mod glob;

#[cfg(feature = "io-jsonl")]
pub mod jsonl;

pub use lines::read_lines;
pub use walk::{walk_dirs, walk_files};

#[cfg(feature = "io-glob")]
pub use glob::{glob_files, glob_files_required};

#[cfg(feature = "io-jsonl")]
pub use jsonl::read_jsonl;
