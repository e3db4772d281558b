// src/exec/backend.rs

//! Pluggable command executor abstraction.
//!
//! Every cluster observation in tektree flows through the [`CommandExecutor`]
//! trait; nothing else in the crate spawns processes. This makes it easy to
//! swap in a fake executor in tests while keeping the production
//! implementation here.
//!
//! - `RealCommandExecutor` is the default implementation. It runs the command
//!   string through the platform shell and captures its output.
//! - Tests provide their own `CommandExecutor` that replies with scripted
//!   output and records which commands were issued.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command '{command}' could not be executed: {source}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' exited with code {code}")]
    NonZeroExitStatus { command: String, code: i32 },

    #[error("Command '{command}' produced output that was not valid UTF-8")]
    InvalidUtf8Output {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Captured output of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitData {
    pub stdout: String,
    pub stderr: String,
}

impl ExitData {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// A single request to run a command.
///
/// `fail_fast` selects what happens when the command cannot run or exits
/// non-zero:
/// - `true`: the failure is surfaced as an [`ExecutionError`].
/// - `false`: a spawn failure degrades to empty [`ExitData`], and a non-zero
///   exit resolves to whatever output was captured, so callers can treat
///   "tool missing / command failed" as "no data" and still inspect stderr.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: String,
    pub cwd: Option<PathBuf>,
    pub fail_fast: bool,
}

impl Invocation {
    pub fn new(command: impl Into<String>, fail_fast: bool) -> Self {
        Self {
            command: command.into(),
            cwd: None,
            fail_fast,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Trait abstracting how commands are executed.
///
/// Production code uses [`RealCommandExecutor`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandExecutor: Send {
    /// Run the given invocation to completion and return its captured output,
    /// applying the invocation's fail-fast policy.
    fn execute(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ExitData, ExecutionError>> + Send + '_>>;
}

/// Real command executor used in production.
///
/// Commands run through the platform shell (`sh -c` on Unix, `cmd /C` on
/// Windows) so that the command string can be a full pipeline-free command
/// line without any quoting gymnastics on the caller's side.
#[derive(Debug, Clone, Default)]
pub struct RealCommandExecutor;

impl RealCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for RealCommandExecutor {
    fn execute(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ExitData, ExecutionError>> + Send + '_>> {
        Box::pin(run_invocation(invocation))
    }
}

async fn run_invocation(invocation: Invocation) -> Result<ExitData, ExecutionError> {
    debug!(
        command = %invocation.command,
        fail_fast = invocation.fail_fast,
        "executing command"
    );

    // Build a shell command appropriate for the platform.
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(&invocation.command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(&invocation.command);
        c
    };

    if let Some(cwd) = &invocation.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match cmd.output().await {
        Ok(output) => output,
        Err(err) if invocation.fail_fast => {
            return Err(ExecutionError::CommandFailed {
                command: invocation.command,
                source: err,
            });
        }
        Err(err) => {
            // The tool may simply not be installed; the caller asked to treat
            // that as "no data".
            warn!(
                command = %invocation.command,
                error = %err,
                "command could not be spawned; resolving to empty output"
            );
            return Ok(ExitData::default());
        }
    };

    let command = invocation.command;
    let stdout = String::from_utf8(output.stdout).map_err(|source| {
        ExecutionError::InvalidUtf8Output {
            command: command.clone(),
            source,
        }
    })?;
    let stderr = String::from_utf8(output.stderr).map_err(|source| {
        ExecutionError::InvalidUtf8Output {
            command: command.clone(),
            source,
        }
    })?;

    let code = output.status.code().unwrap_or(-1);
    if !output.status.success() && invocation.fail_fast {
        return Err(ExecutionError::NonZeroExitStatus { command, code });
    }

    if !output.status.success() {
        // Keep the captured streams: stderr of a failed listing is what the
        // tree shows as a placeholder node.
        debug!(command = %command, exit_code = code, "command exited non-zero");
    }

    Ok(ExitData { stdout, stderr })
}
