// src/tree/ordering.rs

//! Canonical node ordering.
//!
//! One comparator drives both the initial sort of a fetched sibling list and
//! the binary-search position of later insertions; the two must agree or
//! insertion positions become meaningless.

use std::cmp::Ordering;

use super::node::{NodeArena, NodeData, NodeHandle, ResourceKind};

/// Compare two nodes: a node without a kind sorts before any classified
/// node, classified nodes order by kind label, ties break on the name.
///
/// Total and consistent (it is a lexicographic order on
/// `(Option<label>, name)`), which binary search relies on.
pub fn compare_nodes(a: &NodeData, b: &NodeData) -> Ordering {
    let a_label = a.kind.map(ResourceKind::label);
    let b_label = b.kind.map(ResourceKind::label);
    a_label
        .cmp(&b_label)
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort a sibling list in place by the canonical comparator.
pub fn sort_siblings(siblings: &mut [NodeHandle], arena: &NodeArena) {
    siblings.sort_by(|a, b| compare_nodes(&arena[*a], &arena[*b]));
}

/// Insert `node` into an already-sorted sibling list, keeping it sorted.
/// Returns the insertion index.
///
/// Contract: `siblings` MUST already be sorted by [`compare_nodes`],
/// otherwise the position is unspecified.
pub fn insert_sorted(
    siblings: &mut Vec<NodeHandle>,
    arena: &NodeArena,
    node: NodeHandle,
) -> usize {
    let new = &arena[node];
    let index = match siblings.binary_search_by(|h| compare_nodes(&arena[*h], new)) {
        Ok(i) | Err(i) => i,
    };
    siblings.insert(index, node);
    index
}
