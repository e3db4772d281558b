// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `tektree`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tektree",
    version,
    about = "Show Tekton pipelines, tasks and their runs as a tree.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Tektree.toml` in the current working directory. A missing
    /// file is fine; built-in defaults are used then.
    #[arg(long, value_name = "PATH", default_value = "Tektree.toml")]
    pub config: String,

    /// Cluster namespace to list resources from.
    ///
    /// Overrides `[cluster].namespace` from the config file.
    #[arg(long, short = 'n', value_name = "NAME")]
    pub namespace: Option<String>,

    /// Maximum tree depth to render (root children are depth 1).
    ///
    /// If omitted, the whole tree is expanded.
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TEKTREE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
