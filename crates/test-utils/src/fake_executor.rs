use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tektree::exec::{CommandExecutor, ExecutionError, ExitData, Invocation};

/// A fake executor that:
/// - records every invocation it receives
/// - replies with scripted output, matched by command prefix.
///
/// Unmatched commands resolve to empty `ExitData`, which the tree treats as
/// "no resources" (same as a missing tool with `fail_fast = false`).
pub struct FakeExecutor {
    replies: Vec<(String, Reply)>,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

#[derive(Clone)]
enum Reply {
    Exit(ExitData),
    SpawnFailure,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self {
            replies: Vec::new(),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded invocations; clone it before moving the
    /// executor into a `ResourceTree`.
    pub fn recorded(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.invocations)
    }

    /// Reply with the given exit data for commands starting with `prefix`.
    ///
    /// Replies are matched in registration order; the first prefix match
    /// wins.
    pub fn respond(mut self, prefix: &str, exit: ExitData) -> Self {
        self.replies.push((prefix.to_string(), Reply::Exit(exit)));
        self
    }

    /// Reply with stdout only.
    pub fn respond_stdout(self, prefix: &str, stdout: &str) -> Self {
        self.respond(prefix, ExitData::new(stdout, ""))
    }

    /// Reply with stderr only (a tool-reported cluster error).
    pub fn respond_stderr(self, prefix: &str, stderr: &str) -> Self {
        self.respond(prefix, ExitData::new("", stderr))
    }

    /// Simulate the command failing to spawn (e.g. tool not installed).
    pub fn fail_to_spawn(mut self, prefix: &str) -> Self {
        self.replies.push((prefix.to_string(), Reply::SpawnFailure));
        self
    }

    fn reply_for(&self, command: &str) -> Reply {
        self.replies
            .iter()
            .find(|(prefix, _)| command.starts_with(prefix.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or(Reply::Exit(ExitData::default()))
    }
}

impl Default for FakeExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for FakeExecutor {
    fn execute(
        &mut self,
        invocation: Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<ExitData, ExecutionError>> + Send + '_>> {
        let reply = self.reply_for(&invocation.command);

        {
            let mut guard = self.invocations.lock().unwrap();
            guard.push(invocation.clone());
        }

        // Apply the same fail-fast policy as the real executor.
        let result = match reply {
            Reply::Exit(exit) => Ok(exit),
            Reply::SpawnFailure if invocation.fail_fast => Err(ExecutionError::CommandFailed {
                command: invocation.command,
                source: io::Error::new(io::ErrorKind::NotFound, "scripted spawn failure"),
            }),
            Reply::SpawnFailure => Ok(ExitData::default()),
        };

        Box::pin(async move { result })
    }
}
