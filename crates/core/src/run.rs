// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The top-level Run container.

use crate::job::JobDescriptor;
use crate::version::SchemaVersion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Globally-unique identifier for one run, assigned by `init`.
    #[derive(Default)]
    pub struct RunId;
}

/// Overall run status (spec.md §3, §9: resolved to the token `fail`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    InProgress,
    Success,
    Fail,
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunStatus::InProgress)
    }
}

/// A top-level run container, created by `init` and finalized by `run-build`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Run {
    pub run_id: RunId,
    pub project_name: String,
    pub schema_version: SchemaVersion,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub status: RunStatus,
}

impl Run {
    pub fn new(run_id: RunId, project_name: String, start_time: DateTime<Utc>) -> Self {
        Self {
            run_id,
            project_name,
            schema_version: crate::version::CURRENT_SCHEMA_VERSION,
            start_time,
            end_time: None,
            status: RunStatus::InProgress,
        }
    }

    pub fn finalize(&mut self, end_time: DateTime<Utc>, status: RunStatus) {
        self.end_time = Some(end_time);
        self.status = status;
    }
}

/// `cache.json`: the Run record plus every registered Job Descriptor,
/// assembled by the Run Coordinator before graph emission (spec.md §4.1).
///
/// Note: `#[serde(deny_unknown_fields)]` is not applicable here because the
/// struct flattens `Run` (serde forbids combining the two attributes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cache {
    #[serde(flatten)]
    pub run: Run,
    pub jobs: Vec<JobDescriptor>,
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
