//! External process execution for `exec`.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{ShellError, ShellResult};

/// Captured result of a finished external process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Stdout followed by stderr, trimmed.
    pub output: String,
    /// Exit status, or `-1` if the process was killed by a signal.
    pub exit_code: i32,
}

/// Runs an external program under a time limit.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `args[0]` with `args[1..]` as its arguments.
    async fn run(&self, args: &[String], timeout: Duration) -> ShellResult<ProcessOutput>;
}

/// Spawns real host processes with tokio.
///
/// The program is executed directly, never through a shell, with `/` as its
/// working directory. A process that outlives its timeout is killed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, args: &[String], timeout: Duration) -> ShellResult<ProcessOutput> {
        let (program, rest) = args.split_first().ok_or(ShellError::EmptyCommand)?;

        debug!(%program, args = ?rest, "spawning process");
        let child = Command::new(program)
            .args(rest)
            .current_dir("/")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(ShellError::Spawn)?;

        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(ShellError::Wait)?,
            Err(_) => {
                warn!(%program, timeout_secs = timeout.as_secs(), "process timed out");
                return Err(ShellError::Timeout(timeout));
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        let exit_code = output.status.code().unwrap_or(-1);
        debug!(%program, exit_code, "process exited");

        Ok(ProcessOutput {
            output: text.trim().to_string(),
            exit_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    #[tokio::test]
    async fn empty_args_are_rejected() {
        let err = SystemProcessRunner
            .run(&[], Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ShellError::EmptyCommand));
    }

    #[tokio::test]
    async fn echo_is_captured_and_trimmed() {
        let out = SystemProcessRunner
            .run(&argv(&["echo", "hello"]), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(out.output, "hello");
        assert_eq!(out.exit_code, 0);
    }

    #[tokio::test]
    async fn arguments_are_not_shell_interpreted() {
        let out = SystemProcessRunner
            .run(&argv(&["echo", "a;", "b"]), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(out.output, "a; b");
    }

    #[tokio::test]
    async fn pwd_runs_at_root() {
        let out = SystemProcessRunner
            .run(&argv(&["pwd"]), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(out.output, "/");
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let err = SystemProcessRunner
            .run(&argv(&["definitely-not-a-program-xyz"]), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ShellError::Spawn(_)));
    }

    #[tokio::test]
    async fn slow_process_times_out() {
        let err = SystemProcessRunner
            .run(&argv(&["sleep", "5"]), Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, ShellError::Timeout(_)));
    }
}
