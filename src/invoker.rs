//! Process invocation seam for the warp binary.
//!
//! [`ProcessInvoker`] is the collaborator contract: wait mode runs the
//! process to completion and captures its output, stream mode hands back a
//! live [`AgentStream`] for incremental consumption. [`SystemInvoker`] is
//! the `std::process` implementation; tests substitute a recording mock
//! through the same trait.
//!
//! Wait mode never fails on a non-zero exit code. It does not fail on a
//! spawn error either: that case surfaces as an absent exit code with the
//! failure text in stderr, so run-mode callers have exactly one place to
//! look. Stream mode must fail on spawn errors because there is no handle
//! to return.

use crate::error::{Result, WarpError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::{Child, ChildStderr, ChildStdout, Command, Stdio};
use tracing::debug;

/// Captured output of a completed invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Exit code; `None` when the process could not be started or did not
    /// exit normally (killed by a signal).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl ExecutionResult {
    /// True when the process exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Executes a named binary with a prepared argument vector.
///
/// `Send + Sync` so a client holding a boxed invoker can be shared across
/// threads; invocations themselves are stateless and independent.
pub trait ProcessInvoker: Send + Sync {
    /// Run to completion and capture stdout, stderr, and the exit code.
    fn invoke_wait(&self, binary: &str, args: &[String], cwd: Option<&Path>) -> ExecutionResult;

    /// Start the process and return a live handle with piped output.
    fn invoke_stream(
        &self,
        binary: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<AgentStream>;
}

/// `std::process`-backed invoker used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl SystemInvoker {
    fn command(binary: &str, args: &[String], cwd: Option<&Path>) -> Command {
        let mut cmd = Command::new(binary);
        cmd.args(args);
        if let Some(cwd) = cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }
}

impl ProcessInvoker for SystemInvoker {
    fn invoke_wait(&self, binary: &str, args: &[String], cwd: Option<&Path>) -> ExecutionResult {
        debug!(
            command = %format!("{} {}", binary, shell_words::join(args)),
            cwd = ?cwd,
            "invoking (wait)"
        );

        match Self::command(binary, args, cwd).output() {
            Ok(output) => ExecutionResult {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code(),
            },
            Err(e) => ExecutionResult {
                stdout: String::new(),
                stderr: format!("failed to start {}: {}", binary, e),
                exit_code: None,
            },
        }
    }

    fn invoke_stream(
        &self,
        binary: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> Result<AgentStream> {
        debug!(
            command = %format!("{} {}", binary, shell_words::join(args)),
            cwd = ?cwd,
            "invoking (stream)"
        );

        let child = Self::command(binary, args, cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| WarpError::Spawn {
                binary: binary.to_string(),
                details: e.to_string(),
            })?;

        Ok(AgentStream { child })
    }
}

/// Live handle to an in-progress agent process.
///
/// The client never interprets streamed bytes; consumption is entirely up
/// to the caller. Take the pipes for incremental reading, or call
/// [`AgentStream::wait_with_output`] to drain whatever pipes are still
/// attached and collect an [`ExecutionResult`].
#[derive(Debug)]
pub struct AgentStream {
    child: Child,
}

impl AgentStream {
    /// OS process id of the running agent.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Take the stdout pipe. Returns `None` if already taken.
    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    /// Take the stderr pipe. Returns `None` if already taken.
    pub fn take_stderr(&mut self) -> Option<ChildStderr> {
        self.child.stderr.take()
    }

    /// Wait for the process to exit, draining any pipes still attached.
    ///
    /// Pipes taken earlier are the caller's responsibility; their content
    /// will not appear in the result.
    pub fn wait_with_output(self) -> ExecutionResult {
        match self.child.wait_with_output() {
            Ok(output) => ExecutionResult {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code: output.status.code(),
            },
            Err(e) => ExecutionResult {
                stdout: String::new(),
                stderr: format!("failed to wait for agent process: {}", e),
                exit_code: None,
            },
        }
    }

    /// Kill the process and reap it. Ignores already-exited processes.
    pub fn kill(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(windows)]
    fn shell() -> (&'static str, &'static str) {
        ("cmd", "/c")
    }

    #[cfg(not(windows))]
    fn shell() -> (&'static str, &'static str) {
        ("sh", "-c")
    }

    #[test]
    fn wait_captures_stdout_and_exit_code() {
        let (sh, flag) = shell();
        let result = SystemInvoker.invoke_wait(sh, &strings(&[flag, "echo hello"]), None);

        assert_eq!(result.exit_code, Some(0));
        assert!(result.success());
        assert!(result.stdout.contains("hello"));
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn wait_captures_stderr() {
        let (sh, flag) = shell();
        let result = SystemInvoker.invoke_wait(sh, &strings(&[flag, "echo oops 1>&2"]), None);

        assert_eq!(result.exit_code, Some(0));
        assert!(result.stderr.contains("oops"));
    }

    #[test]
    fn wait_does_not_fail_on_nonzero_exit() {
        let (sh, flag) = shell();
        let result = SystemInvoker.invoke_wait(sh, &strings(&[flag, "exit 3"]), None);

        assert_eq!(result.exit_code, Some(3));
        assert!(!result.success());
    }

    #[test]
    fn wait_spawn_failure_yields_absent_exit_code() {
        let result = SystemInvoker.invoke_wait("nonexistent_binary_xyz_123", &[], None);

        assert_eq!(result.exit_code, None);
        assert!(!result.success());
        assert!(result.stderr.contains("failed to start"));
        assert!(result.stderr.contains("nonexistent_binary_xyz_123"));
    }

    #[test]
    #[cfg(not(windows))]
    fn wait_honors_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result =
            SystemInvoker.invoke_wait("sh", &strings(&["-c", "pwd"]), Some(temp_dir.path()));

        assert_eq!(result.exit_code, Some(0));
        let reported = std::path::PathBuf::from(result.stdout.trim())
            .canonicalize()
            .unwrap();
        assert_eq!(reported, temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn stream_spawn_failure_is_an_error() {
        let err = SystemInvoker
            .invoke_stream("nonexistent_binary_xyz_123", &[], None)
            .unwrap_err();
        assert!(matches!(err, WarpError::Spawn { .. }));
        assert!(err.to_string().contains("nonexistent_binary_xyz_123"));
    }

    #[test]
    fn stream_exposes_stdout_pipe() {
        let (sh, flag) = shell();
        let mut stream = SystemInvoker
            .invoke_stream(sh, &strings(&[flag, "echo streamed"]), None)
            .unwrap();

        let mut out = String::new();
        stream.take_stdout().unwrap().read_to_string(&mut out).unwrap();
        assert!(out.contains("streamed"));

        // A taken pipe cannot be taken twice.
        assert!(stream.take_stdout().is_none());
        let result = stream.wait_with_output();
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn stream_wait_with_output_collects_both_pipes() {
        let (sh, flag) = shell();
        let stream = SystemInvoker
            .invoke_stream(sh, &strings(&[flag, "echo out && echo err 1>&2"]), None)
            .unwrap();

        let result = stream.wait_with_output();
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("out"));
        assert!(result.stderr.contains("err"));
    }

    #[test]
    #[cfg(not(windows))]
    fn stream_kill_reaps_the_process() {
        let mut stream = SystemInvoker
            .invoke_stream("sleep", &strings(&["10"]), None)
            .unwrap();
        assert!(stream.id() > 0);
        stream.kill();

        let result = stream.wait_with_output();
        // Killed by signal, so no normal exit code.
        assert_eq!(result.exit_code, None);
    }

    #[test]
    fn execution_result_success() {
        let ok = ExecutionResult {
            exit_code: Some(0),
            ..Default::default()
        };
        assert!(ok.success());

        let failed = ExecutionResult {
            exit_code: Some(1),
            ..Default::default()
        };
        assert!(!failed.success());

        let never_started = ExecutionResult::default();
        assert!(!never_started.success());
    }
}
