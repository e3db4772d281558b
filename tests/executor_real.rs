// tests/executor_real.rs

//! Tests for the real command executor, using small shell commands.

#![cfg(unix)]

use std::error::Error;

use tektree::exec::{CommandExecutor, ExecutionError, Invocation, RealCommandExecutor};
use tektree_test_utils::{init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn stdout_is_captured() -> TestResult {
    init_tracing();

    let mut executor = RealCommandExecutor::new();
    let exit = with_timeout(executor.execute(Invocation::new("echo hello", true))).await?;

    assert_eq!(exit.stdout, "hello\n");
    assert_eq!(exit.stderr, "");

    Ok(())
}

#[tokio::test]
async fn nonzero_exit_fails_fast() -> TestResult {
    init_tracing();

    let mut executor = RealCommandExecutor::new();
    let result = with_timeout(executor.execute(Invocation::new("exit 3", true))).await;

    match result {
        Err(ExecutionError::NonZeroExitStatus { code, .. }) => assert_eq!(code, 3),
        other => panic!("expected NonZeroExitStatus, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn nonzero_exit_without_fail_fast_keeps_output() -> TestResult {
    init_tracing();

    let mut executor = RealCommandExecutor::new();
    let exit = with_timeout(executor.execute(Invocation::new(
        "echo oops >&2; exit 1",
        false,
    )))
    .await?;

    // The captured streams survive so callers can show stderr in the tree.
    assert_eq!(exit.stderr, "oops\n");

    Ok(())
}

#[tokio::test]
async fn cwd_is_respected() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("marker.txt"), "x")?;

    let mut executor = RealCommandExecutor::new();
    let invocation = Invocation::new("ls", true).with_cwd(dir.path());
    let exit = with_timeout(executor.execute(invocation)).await?;

    assert!(exit.stdout.contains("marker.txt"));

    Ok(())
}
