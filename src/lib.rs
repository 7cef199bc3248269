//! # Rivulet
//!
//! A **lazy sequence-processing pipeline** library for Rust. Rivulet wraps
//! a single source of values once and transforms it through a chain of
//! composable operators -- map, filter, window, chunk, flatten, group,
//! unique, join, tee, rate-limit, side-effect -- without materializing the
//! sequence unless an operator's contract requires it.
//!
//! ## Key Features
//!
//! - **Fluent pipeline API** - chain operators on a single [`Flow`] handle
//! - **Pull-based evaluation** - every stage produces values on demand; a
//!   terminal reducer (or a plain `for` loop) drives the whole chain
//! - **Bounded-memory windows** - sliding windows and chunks buffer at
//!   most their own width
//! - **Grouping and joins** - sorted or adjacent grouping, uniqueness,
//!   hash-indexed left/inner joins against a side input
//! - **Fan-out** - [`tee`](Flow::tee) splits one upstream into
//!   independently-cursored branches sharing one buffer
//! - **Side effects** - observer hooks with guaranteed cleanup, and
//!   wall-clock rate limiting
//! - **Compile-time ownership** - operators consume the handle, so a
//!   wrapped or teed-out upstream can never be advanced twice
//!
//! ## Quick Start
//!
//! ```
//! use rivulet::flow;
//!
//! let out = flow(0..100)
//!     .map(|x| x * x)
//!     .filter(|x| x % 3 == 0)
//!     .chunk(3)
//!     .take(2)
//!     .to_vec();
//!
//! assert_eq!(out, vec![vec![0, 9, 36], vec![81, 144, 225]]);
//! ```
//!
//! ## Core Concepts
//!
//! ### Flow
//!
//! A [`Flow`] owns exactly one upstream iterator and is itself an
//! [`Iterator`]: the uniform pull protocol is `next()` -- produce the next
//! element or signal exhaustion. Nothing executes until something pulls.
//!
//! ### Laziness and materialization
//!
//! Most stages hold no more state than a cursor or a fixed-width buffer.
//! The explicitly materializing stages are [`sort`](Flow::sort),
//! [`shuffle`](Flow::shuffle), [`group_by`](Flow::group_by) (which sorts
//! first) and the join index over the side input; each documents the cost.
//! [`unique`](Flow::unique) is incremental but its seen-set grows with the
//! number of distinct keys.
//!
//! ### Ordering
//!
//! Every stage preserves upstream order except the ones whose purpose is
//! to reorder (`sort`, `shuffle`, sorted `group_by`) or to expand
//! (`join_*` within a key group).
//!
//! ### Errors
//!
//! Invalid operator parameters (zero chunk size, zero window step, a
//! non-positive rate) panic at the call that introduced them, and say so
//! under `# Panics`. Reducers that can come up empty return
//! [`anyhow::Result`]. Failures inside user callbacks propagate unmodified
//! to whoever is pulling -- no stage catches them, though
//! [`side_effect_with`](Flow::side_effect_with) still runs its cleanup
//! hook.
//!
//! ## Module Overview
//!
//! - [`flow`](mod@flow) - the [`Flow`] handle and stateless stages
//! - [`ops`] - stateful operator adapters (chunk, window, flatten, group,
//!   join, tee, side effects)
//! - [`io`] - boundary source adapters (lines, JSONL, glob, walkers)
//! - [`testing`] - assertion helpers and a temp-file fixture

pub mod flow;
pub mod io;
pub mod ops;
pub mod testing;

mod reduce;
mod utils;

// General re-exports
pub use flow::{Flow, flow, from_vec};
pub use ops::Nested;
pub use io::{read_lines, walk_dirs, walk_files};

// Gated re-exports
#[cfg(feature = "io-glob")]
pub use io::{glob_files, glob_files_required};

#[cfg(feature = "io-jsonl")]
pub use io::read_jsonl;
