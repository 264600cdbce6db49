//! Directory tree building
//!
//! `TreeBuilder` walks a root directory depth-first and renders each visible
//! entry into a [`TreeLine`]. The result is a [`LineSequence`] in pre-order,
//! ready to be handed to an output destination.

mod builder;
mod config;
mod line;
mod utils;

pub use builder::{TreeBuilder, build};
pub use config::{BuilderConfig, DEFAULT_IGNORE_PREFIX};
pub use line::{LineSequence, TreeLine};
pub use utils::{ELBOW, PIPE_PREFIX, SPACE_PREFIX, TEE};
