// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job status: the mutable execution record for a descriptor.

use crate::job::JobId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the wrapper arguments a job's `exec` invocation ran with.
///
/// Kept for debuggability: the status file records exactly what the
/// wrapper was told to do, alongside what actually happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperArgs {
    pub job_id: JobId,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

/// Mutable execution record for one job, one file per job id.
///
/// The status file is the single source of truth for a job's outcome
/// (spec.md §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobStatus {
    pub job_id: JobId,
    pub wrapper_args: WrapperArgs,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    pub complete: bool,
    #[serde(default)]
    pub timeout_reached: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_return_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper_return_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stdout: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stderr: Vec<String>,
}

impl JobStatus {
    /// The initial *started* status: `complete=false`, only `start_time` set.
    pub fn started(job_id: JobId, wrapper_args: WrapperArgs, start_time: DateTime<Utc>) -> Self {
        Self {
            job_id,
            wrapper_args,
            start_time,
            end_time: None,
            duration_seconds: None,
            complete: false,
            timeout_reached: false,
            command_return_code: None,
            wrapper_return_code: None,
            stdout: vec![],
            stderr: vec![],
        }
    }

    /// Finalize this status in place with the outcome of the run.
    #[allow(clippy::too_many_arguments)]
    pub fn finalize(
        &mut self,
        end_time: DateTime<Utc>,
        timeout_reached: bool,
        command_return_code: i32,
        wrapper_return_code: i32,
        stdout: Vec<String>,
        stderr: Vec<String>,
    ) {
        let duration = (end_time - self.start_time).num_milliseconds().max(0) as f64 / 1000.0;
        self.end_time = Some(end_time);
        self.duration_seconds = Some(duration);
        self.complete = true;
        self.timeout_reached = timeout_reached;
        self.command_return_code = Some(command_return_code);
        self.wrapper_return_code = Some(wrapper_return_code);
        self.stdout = stdout;
        self.stderr = stderr;
    }

    /// `true` once this job id has a terminal status (spec.md §3: *finished*).
    pub fn is_finished(&self) -> bool {
        self.complete
    }
}

/// Per-stage or per-run rollup status (spec.md §3 Run Snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupStatus {
    Success,
    /// Resolved open question (spec.md §9): use `fail`, not `failure`.
    Fail,
    FailIgnored,
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
