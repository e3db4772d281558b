// src/tree/node.rs

//! Node arena and handles.
//!
//! Tree nodes live in a [`NodeArena`] and are referred to by copyable
//! [`NodeHandle`]s. The child cache is keyed by handle, not by reference,
//! which keeps lifetimes out of the cache API and makes "does this node
//! still exist?" an explicit question: invalidating the tree bumps the
//! arena generation, so handles obtained before the invalidation go stale
//! and look-ups return `None` instead of aliasing freshly fetched nodes.

/// Classification of a cluster resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pipeline,
    PipelineRun,
    Task,
    TaskRun,
    ClusterTask,
}

impl ResourceKind {
    /// Stable lowercase label, used for display and for the canonical
    /// node ordering. Changing a label changes sort positions.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Pipeline => "pipeline",
            ResourceKind::PipelineRun => "pipelinerun",
            ResourceKind::Task => "task",
            ResourceKind::TaskRun => "taskrun",
            ResourceKind::ClusterTask => "clustertask",
        }
    }
}

/// Opaque handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    index: u32,
    generation: u32,
}

/// One resource node, or a synthetic node (the root, or an error
/// placeholder carrying a failure message as its name).
#[derive(Debug, Clone)]
pub struct NodeData {
    pub name: String,
    /// `None` only for the synthetic root.
    pub kind: Option<ResourceKind>,
    /// `None` only for the root.
    pub parent: Option<NodeHandle>,
    /// Whether asking for children may trigger a fetch. Error placeholder
    /// nodes and leaf kinds are not expandable.
    pub expandable: bool,
}

/// Arena owning every node of the tree.
#[derive(Debug)]
pub struct NodeArena {
    nodes: Vec<NodeData>,
    generation: u32,
}

impl NodeArena {
    /// Create an arena holding just the synthetic root.
    pub fn new() -> Self {
        let root = NodeData {
            name: "root".to_string(),
            kind: None,
            parent: None,
            expandable: true,
        };
        Self {
            nodes: vec![root],
            generation: 0,
        }
    }

    pub fn root(&self) -> NodeHandle {
        NodeHandle {
            index: 0,
            generation: self.generation,
        }
    }

    /// Allocate a new node and return its handle.
    pub fn alloc(
        &mut self,
        name: impl Into<String>,
        kind: ResourceKind,
        parent: NodeHandle,
        expandable: bool,
    ) -> NodeHandle {
        let index = self.nodes.len() as u32;
        self.nodes.push(NodeData {
            name: name.into(),
            kind: Some(kind),
            parent: Some(parent),
            expandable,
        });
        NodeHandle {
            index,
            generation: self.generation,
        }
    }

    /// Look a handle up, returning `None` if it predates the last reset.
    pub fn get(&self, handle: NodeHandle) -> Option<&NodeData> {
        if handle.generation != self.generation {
            return None;
        }
        self.nodes.get(handle.index as usize)
    }

    /// Drop every node except the root and invalidate outstanding handles.
    pub fn reset(&mut self) {
        self.nodes.truncate(1);
        self.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<NodeHandle> for NodeArena {
    type Output = NodeData;

    /// Panics on a stale handle; only use where handles are known to be
    /// current (e.g. handles held inside the cache, which is cleared in the
    /// same step that resets the arena).
    fn index(&self, handle: NodeHandle) -> &NodeData {
        self.get(handle)
            .expect("node handle is stale (arena was reset)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_kindless_and_expandable() {
        let arena = NodeArena::new();
        let root = arena.get(arena.root()).unwrap();
        assert!(root.kind.is_none());
        assert!(root.parent.is_none());
        assert!(root.expandable);
    }

    #[test]
    fn alloc_links_parent() {
        let mut arena = NodeArena::new();
        let root = arena.root();
        let h = arena.alloc("build", ResourceKind::Pipeline, root, true);

        let node = arena.get(h).unwrap();
        assert_eq!(node.name, "build");
        assert_eq!(node.kind, Some(ResourceKind::Pipeline));
        assert_eq!(node.parent, Some(root));
    }

    #[test]
    fn handles_go_stale_after_reset() {
        let mut arena = NodeArena::new();
        let root = arena.root();
        let h = arena.alloc("build", ResourceKind::Pipeline, arena.root(), true);

        arena.reset();

        assert!(arena.get(h).is_none());
        // The pre-reset root handle is stale too; a fresh one works.
        assert!(arena.get(root).is_none());
        assert!(arena.get(arena.root()).is_some());
    }

    #[test]
    fn reused_indices_do_not_alias_old_handles() {
        let mut arena = NodeArena::new();
        let old = arena.alloc("before", ResourceKind::Task, arena.root(), true);

        arena.reset();
        let new = arena.alloc("after", ResourceKind::Task, arena.root(), true);

        assert!(arena.get(old).is_none());
        assert_eq!(arena.get(new).unwrap().name, "after");
    }
}
