// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess launch with wall-clock timeout and stream capture
//! (spec.md §4.4 steps 2-3).

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Raw outcome of running one job command. Classification into a wrapper
/// return code happens one layer up, in [`crate::wrapper`].
pub struct SubprocessOutcome {
    pub timeout_reached: bool,
    pub exit_status: Option<ExitStatus>,
    pub spawn_error: Option<std::io::Error>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Run `command` through a shell, capturing stdout always and stderr
/// either separately or merged into stdout when `interleave_stdout_stderr`
/// is set. On timeout, sends a kill signal and reaps the process before
/// returning.
pub async fn run_subprocess(
    command: &str,
    cwd: Option<&Path>,
    interleave_stdout_stderr: bool,
    timeout_seconds: Option<u64>,
) -> SubprocessOutcome {
    let mut cmd = Command::new("sh");
    let shell_command = if interleave_stdout_stderr {
        format!("{command} 2>&1")
    } else {
        command.to_string()
    };
    cmd.arg("-c").arg(shell_command);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(if interleave_stdout_stderr {
        Stdio::null()
    } else {
        Stdio::piped()
    });

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(source) => {
            return SubprocessOutcome {
                timeout_reached: false,
                exit_status: None,
                spawn_error: Some(source),
                stdout: Vec::new(),
                stderr: Vec::new(),
            };
        }
    };

    let mut stdout_pipe = child.stdout.take().expect("stdout is piped");
    let stderr_pipe = child.stderr.take();

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        let _ = stdout_pipe.read_to_end(&mut buf).await;
        buf
    });
    let stderr_task = stderr_pipe.map(|mut pipe| {
        tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf).await;
            buf
        })
    });

    let (timeout_reached, exit_status) = match timeout_seconds {
        Some(secs) if secs > 0 => {
            match tokio::time::timeout(Duration::from_secs(secs), child.wait()).await {
                Ok(result) => (false, result.ok()),
                Err(_elapsed) => {
                    let _ = child.kill().await;
                    let reaped = child.wait().await.ok();
                    (true, reaped)
                }
            }
        }
        _ => (false, child.wait().await.ok()),
    };

    let stdout = stdout_task.await.unwrap_or_default();
    let stderr = match stderr_task {
        Some(task) => task.await.unwrap_or_default(),
        None => Vec::new(),
    };

    SubprocessOutcome {
        timeout_reached,
        exit_status,
        spawn_error: None,
        stdout,
        stderr,
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
