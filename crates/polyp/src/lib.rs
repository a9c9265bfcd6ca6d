#![forbid(unsafe_code)]

//! Headless hierarchical circle packing.
//!
//! `polyp` is a runtime-agnostic port of the d3-hierarchy circle-packing
//! pipeline: front-chain sibling placement, smallest-enclosing-circle
//! computation, and the two-pass padded hierarchy layout. Unlike upstream,
//! placement is fully deterministic (no shuffled enclosure basis), so the
//! same input ordering always produces the same packing.

pub mod enclose;
pub mod hierarchy;
pub mod pack;

pub use enclose::enclose;
pub use hierarchy::{Hierarchy, NodeId, Pack};
pub use pack::{Circle, pack_siblings};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
