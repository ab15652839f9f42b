// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Execution Wrapper state machine (spec.md §4.4): init → started →
//! running → terminated → finalized.

use crate::artifacts::copy_artifacts;
use crate::error::ExecError;
use crate::subprocess::run_subprocess;
use litani_core::{JobDescriptor, JobStatus, WrapperArgs};
use litani_store::RunPaths;

/// Synthetic `command_return_code` recorded when the real process never
/// produced one (spawn failure or timeout kill).
const SYNTHETIC_RETURN_CODE: i32 = -1;

/// Run one job to completion, publishing its status at every observable
/// transition, and return the wrapper's own exit code.
pub async fn exec_job(descriptor: &JobDescriptor, paths: &RunPaths) -> Result<i32, ExecError> {
    let span = tracing::info_span!("exec_job", job_id = %descriptor.id, pipeline = %descriptor.pipeline_name);
    let _enter = span.enter();

    std::fs::create_dir_all(paths.status_dir()).map_err(|source| ExecError::CreateDir {
        path: paths.status_dir(),
        source,
    })?;

    let start_time = litani_core::now();
    let wrapper_args = WrapperArgs {
        job_id: descriptor.id.clone(),
        command: descriptor.command.clone(),
        cwd: descriptor
            .cwd
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        timeout_seconds: descriptor.timeout_seconds,
    };
    let status_path = paths.status_file(&descriptor.id);

    let mut status = JobStatus::started(descriptor.id.clone(), wrapper_args, start_time);
    litani_core::write_json_atomic(&status_path, &status)?;

    let outcome = run_subprocess(
        &descriptor.command,
        descriptor.cwd.as_deref(),
        descriptor.interleave_stdout_stderr,
        descriptor.timeout_seconds,
    )
    .await;

    let end_time = litani_core::now();

    let (command_return_code, wrapper_return_code) = if let Some(spawn_err) = &outcome.spawn_error
    {
        tracing::error!(error = %spawn_err, "failed to spawn job command");
        (SYNTHETIC_RETURN_CODE, 1)
    } else if outcome.timeout_reached {
        tracing::warn!("job timed out");
        let code = if descriptor.timeout_ok || descriptor.timeout_ignore {
            0
        } else {
            1
        };
        (SYNTHETIC_RETURN_CODE, code)
    } else {
        let code = outcome
            .exit_status
            .and_then(|s| s.code())
            .unwrap_or(SYNTHETIC_RETURN_CODE);
        let wrapper_code = if descriptor.is_return_ignored(code) {
            0
        } else {
            1
        };
        (code, wrapper_code)
    };

    if let Some(stdout_file) = &descriptor.stdout_file {
        litani_core::write_atomic(stdout_file, &outcome.stdout)?;
    }
    if let Some(stderr_file) = &descriptor.stderr_file {
        litani_core::write_atomic(stderr_file, &outcome.stderr)?;
    }

    let stdout_lines = split_lines(&outcome.stdout);
    let stderr_lines = split_lines(&outcome.stderr);

    status.finalize(
        end_time,
        outcome.timeout_reached,
        command_return_code,
        wrapper_return_code,
        stdout_lines,
        stderr_lines,
    );
    litani_core::write_json_atomic(&status_path, &status)?;

    copy_artifacts(descriptor, paths)?;

    Ok(wrapper_return_code)
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    if bytes.is_empty() {
        return Vec::new();
    }
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[cfg(test)]
#[path = "wrapper_tests.rs"]
mod tests;
