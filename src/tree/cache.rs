// src/tree/cache.rs

use std::collections::HashMap;

use tracing::debug;

use super::node::NodeHandle;

/// In-memory cache of realized child lists, keyed by node handle.
///
/// Entries are added lazily on the first child fetch per parent. There is no
/// per-entry expiry; the only way an entry disappears is the wholesale
/// [`ChildCache::clear`] (user-triggered refresh). Resource sets are small,
/// so partial invalidation is not worth its bookkeeping.
#[derive(Debug, Default)]
pub struct ChildCache {
    entries: HashMap<NodeHandle, Vec<NodeHandle>>,
}

impl ChildCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Cached children of a parent, if a fetch already populated them.
    pub fn get(&self, parent: NodeHandle) -> Option<&Vec<NodeHandle>> {
        self.entries.get(&parent)
    }

    pub fn contains(&self, parent: NodeHandle) -> bool {
        self.entries.contains_key(&parent)
    }

    /// Store the realized child list for a parent.
    pub fn insert(&mut self, parent: NodeHandle, children: Vec<NodeHandle>) {
        self.entries.insert(parent, children);
    }

    /// Mutable access to an existing entry (for sorted insertion).
    pub fn entry_mut(&mut self, parent: NodeHandle) -> Option<&mut Vec<NodeHandle>> {
        self.entries.get_mut(&parent)
    }

    /// Drop all cached entries; subsequent fetches repopulate lazily.
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "clearing child cache");
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::{NodeArena, ResourceKind};

    #[test]
    fn get_returns_what_was_inserted() {
        let mut arena = NodeArena::new();
        let root = arena.root();
        let child = arena.alloc("p", ResourceKind::Pipeline, root, true);

        let mut cache = ChildCache::new();
        assert!(cache.get(root).is_none());

        cache.insert(root, vec![child]);
        assert_eq!(cache.get(root), Some(&vec![child]));
        assert!(cache.contains(root));
    }

    #[test]
    fn clear_removes_every_entry() {
        let mut arena = NodeArena::new();
        let root = arena.root();
        let child = arena.alloc("p", ResourceKind::Pipeline, root, true);

        let mut cache = ChildCache::new();
        cache.insert(root, vec![child]);
        cache.insert(child, vec![]);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(root).is_none());
    }
}
