// src/tree/mod.rs

//! The resource tree core.
//!
//! - [`node`] owns the node arena and handle types.
//! - [`ordering`] defines the canonical comparator and sorted insertion.
//! - [`cache`] is the handle-keyed child-list cache.
//! - [`explorer`] ties them to the command executor: lazy fetch, failure
//!   degradation, invalidation and insertion.

pub mod cache;
pub mod explorer;
pub mod node;
pub mod ordering;

pub use cache::ChildCache;
pub use explorer::ResourceTree;
pub use node::{NodeArena, NodeData, NodeHandle, ResourceKind};
pub use ordering::{compare_nodes, insert_sorted, sort_siblings};
