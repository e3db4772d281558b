// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running commands against the
//! external CLI tool and reporting captured output back to the resource
//! tree.
//!
//! - [`backend`] provides the `CommandExecutor` trait and a concrete
//!   `RealCommandExecutor` that the explorer uses in production, and which
//!   tests can replace with a fake implementation.

pub mod backend;

pub use backend::{CommandExecutor, ExecutionError, ExitData, Invocation, RealCommandExecutor};
