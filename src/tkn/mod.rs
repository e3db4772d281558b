// src/tkn/mod.rs

//! Glue for the external `tkn`-style CLI tool.
//!
//! - [`command`] builds the command strings the tool understands.
//! - [`output`] interprets the tool's JSON list output.
//!
//! Neither submodule performs IO; the [`crate::exec`] layer runs the
//! commands and the [`crate::tree`] layer decides what to do with the
//! parsed results.

pub mod command;
pub mod output;

pub use command::CommandBuilder;
pub use output::{parse_list_output, FetchOutcome};
