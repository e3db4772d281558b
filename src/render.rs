// src/render.rs

//! Plain-text rendering of the resource tree.
//!
//! This is the only display layer in the binary; it drives exactly the
//! boundary the explorer exposes: `children`, `name`, `kind`.

use crate::errors::Result;
use crate::exec::CommandExecutor;
use crate::tree::{NodeHandle, ResourceTree};

/// Walk the tree and render it with two-space indentation, e.g.
///
/// ```text
/// build [pipeline]
///   build-run-1 [pipelinerun]
/// lint [task]
/// ```
///
/// `max_depth` limits expansion (root children are depth 1); `None` expands
/// everything.
pub async fn render_tree<E: CommandExecutor>(
    tree: &mut ResourceTree<E>,
    max_depth: Option<usize>,
) -> Result<String> {
    let mut out = String::new();
    let root = tree.root();

    // Depth-first walk with an explicit stack; children are pushed in
    // reverse so siblings render in cache order.
    let mut stack: Vec<(NodeHandle, usize)> = Vec::new();
    for child in tree.children(root).await?.into_iter().rev() {
        stack.push((child, 1));
    }

    while let Some((node, depth)) = stack.pop() {
        let name = tree.name(node)?.to_string();
        let kind = tree.kind(node)?;

        for _ in 0..(depth - 1) {
            out.push_str("  ");
        }
        match kind {
            Some(kind) => out.push_str(&format!("{name} [{}]\n", kind.label())),
            None => out.push_str(&format!("{name}\n")),
        }

        let expand = max_depth.map(|max| depth < max).unwrap_or(true);
        if expand {
            for child in tree.children(node).await?.into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    Ok(out)
}
