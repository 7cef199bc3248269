//! Stateful operator stages, one concern per module.

pub(crate) mod chunk;
pub(crate) mod effect;
pub(crate) mod flatten;
pub(crate) mod group;
pub(crate) mod join;
pub(crate) mod sort;
pub(crate) mod tee;
pub(crate) mod window;

pub use chunk::Chunks;
pub use effect::{RateLimit, SideEffect};
pub use flatten::{Flatten, Nested};
pub use group::{GroupAdjacent, Unique};
pub use join::{JoinInner, JoinLeft};
pub use tee::TeeBranch;
pub use window::Windows;
