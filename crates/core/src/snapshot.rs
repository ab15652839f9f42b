// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Run Snapshot: a derived, read-only view nesting
//! run → pipelines → ci_stages → jobs (spec.md §3).
//!
//! Types only; assembling one from `cache.json` + `status/*.json` is
//! `litani-store`'s job (it owns the merge, this crate owns the shape).

use crate::job::{CiStage, JobDescriptor};
use crate::run::{Run, RunId};
use crate::status::{JobStatus, RollupStatus};
use crate::version::SchemaVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One job's contribution to the snapshot: its immutable descriptor plus
/// whatever status is currently on disk for it (absent when unstarted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub descriptor: JobDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

impl JobSnapshot {
    pub fn is_complete(&self) -> bool {
        self.status.as_ref().is_some_and(JobStatus::is_finished)
    }
}

/// Aggregated state of one CI stage within one pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CiStageSnapshot {
    pub jobs: Vec<JobSnapshot>,
    /// Percentage (0-100) of this stage's jobs that have a finished status.
    pub progress_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RollupStatus>,
}

/// Aggregated state of one pipeline: its ci_stages keyed by stage name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineSnapshot {
    pub ci_stages: BTreeMap<String, CiStageSnapshot>,
}

/// The complete aggregate view: cache + all job status files merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub run_id: RunId,
    pub project_name: String,
    pub schema_version: SchemaVersion,
    pub start_time: chrono::DateTime<chrono::Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub status: crate::run::RunStatus,
    pub pipelines: BTreeMap<String, PipelineSnapshot>,
}

impl RunSnapshot {
    pub fn from_run(run: &Run) -> Self {
        Self {
            run_id: run.run_id.clone(),
            project_name: run.project_name.clone(),
            schema_version: run.schema_version,
            start_time: run.start_time,
            end_time: run.end_time,
            status: run.status,
            pipelines: BTreeMap::new(),
        }
    }

    /// The set of distinct pipeline names present in this snapshot.
    pub fn pipeline_names(&self) -> std::collections::BTreeSet<String> {
        self.pipelines.keys().cloned().collect()
    }
}

/// Compute a stage's percentage of finished jobs, `100.0` for an empty stage
/// (spec.md §8: "empty `outputs` list — job still runs"; an empty stage is
/// vacuously complete).
pub fn stage_progress_percent(jobs: &[JobSnapshot]) -> f64 {
    if jobs.is_empty() {
        return 100.0;
    }
    let finished = jobs.iter().filter(|j| j.is_complete()).count();
    (finished as f64 / jobs.len() as f64) * 100.0
}

/// Roll up a stage's jobs into a [`RollupStatus`], or `None` while any job
/// in the stage is still unfinished.
///
/// A stage is `FailIgnored` when every unsuccessful job's failure was
/// absorbed by `ok_returns` or `ignore_returns` and no job hit a
/// non-ignored timeout; it is `Fail` when any job truly failed.
pub fn stage_status(stage: &CiStage, jobs: &[JobSnapshot]) -> Option<RollupStatus> {
    let _ = stage;
    if jobs.is_empty() {
        return Some(RollupStatus::Success);
    }
    if !jobs.iter().all(JobSnapshot::is_complete) {
        return None;
    }
    let mut saw_ok_return = false;
    for job in jobs {
        let status = job.status.as_ref()?;
        if status.timeout_reached && job.descriptor.timeout_ignore {
            return Some(RollupStatus::Fail);
        }
        if status.timeout_reached {
            // Timed out but absorbed by `timeout_ok`; the wrapper never
            // produces a real return code here, so there's nothing to
            // check it against (spec.md §4.4 writes a synthetic code).
            if job.descriptor.timeout_ok {
                continue;
            }
            return Some(RollupStatus::Fail);
        }
        let code = status.command_return_code.unwrap_or(-1);
        if job.descriptor.is_return_ignored(code) {
            continue;
        }
        if job.descriptor.is_return_ok(code) {
            saw_ok_return = true;
            continue;
        }
        return Some(RollupStatus::Fail);
    }
    if saw_ok_return {
        Some(RollupStatus::FailIgnored)
    } else {
        Some(RollupStatus::Success)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
