// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod render;
pub mod tkn;
pub mod tree;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::exec::RealCommandExecutor;
use crate::tkn::CommandBuilder;
use crate::tree::ResourceTree;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (with CLI overrides)
/// - the real command executor
/// - the resource tree explorer
/// - tree rendering to stdout
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = load_and_validate(&args.config)?;

    // The CLI namespace flag wins over the config file.
    if let Some(ns) = &args.namespace {
        cfg.cluster.namespace = Some(ns.clone());
    }

    info!(
        binary = %cfg.tool.binary,
        namespace = ?cfg.cluster.namespace,
        "building resource tree"
    );

    let commands = CommandBuilder::from_config(&cfg);
    let mut tree = ResourceTree::new(RealCommandExecutor::new(), commands);

    let rendered = render::render_tree(&mut tree, args.depth).await?;
    print!("{rendered}");

    Ok(())
}
