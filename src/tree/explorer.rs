// src/tree/explorer.rs

//! The resource tree explorer.
//!
//! [`ResourceTree`] mediates between the external CLI tool and a display
//! layer: the display asks for the children of a node, the explorer answers
//! from its cache or runs the kind-specific list command, parses the output
//! into nodes, sorts them and caches the result.
//!
//! Failure policy (availability over strict error visibility):
//! - the tool reporting an error on stderr yields a single non-expandable
//!   placeholder node named with the error text, so the tree still renders
//!   something on a transient cluster issue;
//! - output that fails to parse yields an empty sibling list;
//! - only fail-fast operations (start, describe, logs) surface
//!   `ExecutionError` to the caller.

use tracing::{debug, warn};

use crate::errors::{Result, TektreeError};
use crate::exec::{CommandExecutor, Invocation};
use crate::tkn::{parse_list_output, CommandBuilder, FetchOutcome};

use super::cache::ChildCache;
use super::node::{NodeArena, NodeData, NodeHandle, ResourceKind};
use super::ordering::{insert_sorted, sort_siblings};

/// Lazy, cached view of the cluster's resources.
///
/// Constructed explicitly and handed its executor and command builder;
/// there is no process-wide instance. `children` takes `&mut self`, so two
/// fetches for the same uncached parent can never be in flight at once:
/// callers serialize, and the second call observes the populated cache.
pub struct ResourceTree<E: CommandExecutor> {
    arena: NodeArena,
    cache: ChildCache,
    executor: E,
    commands: CommandBuilder,
}

impl<E: CommandExecutor> std::fmt::Debug for ResourceTree<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceTree")
            .field("nodes", &self.arena.len())
            .field("cached_parents", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl<E: CommandExecutor> ResourceTree<E> {
    pub fn new(executor: E, commands: CommandBuilder) -> Self {
        Self {
            arena: NodeArena::new(),
            cache: ChildCache::new(),
            executor,
            commands,
        }
    }

    /// Handle of the synthetic root node.
    pub fn root(&self) -> NodeHandle {
        self.arena.root()
    }

    /// Display name of a node.
    pub fn name(&self, node: NodeHandle) -> Result<&str> {
        Ok(&self.node(node)?.name)
    }

    /// Kind of a node (`None` for the root).
    pub fn kind(&self, node: NodeHandle) -> Result<Option<ResourceKind>> {
        Ok(self.node(node)?.kind)
    }

    /// Parent of a node (`None` for the root).
    pub fn parent(&self, node: NodeHandle) -> Result<Option<NodeHandle>> {
        Ok(self.node(node)?.parent)
    }

    /// Children of a node, fetching and caching them on first request.
    pub async fn children(&mut self, parent: NodeHandle) -> Result<Vec<NodeHandle>> {
        let data = self.node(parent)?.clone();

        if let Some(cached) = self.cache.get(parent) {
            return Ok(cached.clone());
        }

        let children = if !data.expandable {
            Vec::new()
        } else {
            debug!(parent = %data.name, kind = ?data.kind, "cache miss; fetching children");
            match data.kind {
                None => self.fetch_root_children(parent).await?,
                Some(ResourceKind::Pipeline) => {
                    let command = self.commands.list_pipeline_runs(&data.name);
                    self.fetch_list(command, ResourceKind::PipelineRun, parent)
                        .await?
                }
                Some(ResourceKind::PipelineRun) | Some(ResourceKind::Task) => {
                    let command = self.commands.list_task_runs(&data.name);
                    self.fetch_list(command, ResourceKind::TaskRun, parent)
                        .await?
                }
                Some(ResourceKind::TaskRun) | Some(ResourceKind::ClusterTask) => Vec::new(),
            }
        };

        self.cache.insert(parent, children.clone());
        Ok(children)
    }

    /// Pipelines currently under the root (fetching the root sibling list if
    /// needed).
    pub async fn pipelines(&mut self) -> Result<Vec<NodeHandle>> {
        let root = self.root();
        let children = self.children(root).await?;
        Ok(children
            .into_iter()
            .filter(|h| self.arena[*h].kind == Some(ResourceKind::Pipeline))
            .collect())
    }

    /// Drop every cached sibling list and all nodes except the root.
    ///
    /// Handles obtained before this call go stale; subsequent `children`
    /// calls repopulate lazily.
    pub fn invalidate(&mut self) {
        debug!("invalidating resource tree");
        self.cache.clear();
        self.arena.reset();
    }

    /// Start a pipeline and splice a node for it into the cached root
    /// sibling list at its comparator position.
    pub async fn add_pipeline(&mut self, name: &str) -> Result<NodeHandle> {
        let command = self.commands.start_pipeline(name);
        self.executor.execute(Invocation::new(command, true)).await?;

        // Make sure the sibling list exists before splicing into it.
        let root = self.root();
        self.children(root).await?;

        let handle = self
            .arena
            .alloc(name, ResourceKind::Pipeline, root, true);
        if let Some(siblings) = self.cache.entry_mut(root) {
            insert_sorted(siblings, &self.arena, handle);
        }
        Ok(handle)
    }

    /// Re-run a pipeline that is already part of the tree.
    pub async fn start_pipeline(&mut self, pipeline: NodeHandle) -> Result<String> {
        let name = self.named_kind(pipeline, ResourceKind::Pipeline)?;
        let command = self.commands.start_pipeline(&name);
        self.run_fail_fast(command).await
    }

    /// Human-readable description of a pipeline, as printed by the tool.
    pub async fn describe_pipeline(&mut self, pipeline: NodeHandle) -> Result<String> {
        let name = self.named_kind(pipeline, ResourceKind::Pipeline)?;
        let command = self.commands.describe_pipeline(&name);
        self.run_fail_fast(command).await
    }

    /// Log output of a pipeline run.
    pub async fn pipeline_run_logs(&mut self, run: NodeHandle) -> Result<String> {
        let name = self.named_kind(run, ResourceKind::PipelineRun)?;
        let command = self.commands.pipeline_run_logs(&name);
        self.run_fail_fast(command).await
    }

    /// Log output of a task run.
    pub async fn task_run_logs(&mut self, run: NodeHandle) -> Result<String> {
        let name = self.named_kind(run, ResourceKind::TaskRun)?;
        let command = self.commands.task_run_logs(&name);
        self.run_fail_fast(command).await
    }

    async fn run_fail_fast(&mut self, command: String) -> Result<String> {
        let exit = self.executor.execute(Invocation::new(command, true)).await?;
        Ok(exit.stdout)
    }

    fn node(&self, handle: NodeHandle) -> Result<&NodeData> {
        self.arena.get(handle).ok_or(TektreeError::StaleHandle)
    }

    fn named_kind(&self, node: NodeHandle, kind: ResourceKind) -> Result<String> {
        let data = self.node(node)?;
        if data.kind != Some(kind) {
            return Err(anyhow::anyhow!(
                "node '{}' is not a {}",
                data.name,
                kind.label()
            )
            .into());
        }
        Ok(data.name.clone())
    }

    /// The root's sibling list is the union of the three top-level listings,
    /// in canonical order.
    async fn fetch_root_children(&mut self, root: NodeHandle) -> Result<Vec<NodeHandle>> {
        let pipelines = self.commands.list_pipelines();
        let tasks = self.commands.list_tasks();
        let cluster_tasks = self.commands.list_cluster_tasks();

        let mut children = self
            .fetch_list(pipelines, ResourceKind::Pipeline, root)
            .await?;
        children.extend(self.fetch_list(tasks, ResourceKind::Task, root).await?);
        children.extend(
            self.fetch_list(cluster_tasks, ResourceKind::ClusterTask, root)
                .await?,
        );

        sort_siblings(&mut children, &self.arena);
        Ok(children)
    }

    /// Run one list command (never fail-fast) and turn its outcome into a
    /// sorted sibling list.
    async fn fetch_list(
        &mut self,
        command: String,
        kind: ResourceKind,
        parent: NodeHandle,
    ) -> Result<Vec<NodeHandle>> {
        let exit = self
            .executor
            .execute(Invocation::new(command.clone(), false))
            .await?;

        let children = match parse_list_output(&exit) {
            FetchOutcome::Listed(names) => {
                let mut handles: Vec<NodeHandle> = names
                    .into_iter()
                    .map(|name| {
                        self.arena
                            .alloc(name, kind, parent, Self::expandable_for(kind))
                    })
                    .collect();
                sort_siblings(&mut handles, &self.arena);
                handles
            }
            FetchOutcome::ClusterError(message) => {
                warn!(command = %command, error = %message, "tool reported a cluster error");
                vec![self.arena.alloc(message, kind, parent, false)]
            }
            FetchOutcome::Malformed => {
                debug!(command = %command, "output was not the expected JSON; showing no resources");
                Vec::new()
            }
        };

        Ok(children)
    }

    fn expandable_for(kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Pipeline | ResourceKind::PipelineRun | ResourceKind::Task => true,
            ResourceKind::TaskRun | ResourceKind::ClusterTask => false,
        }
    }
}
