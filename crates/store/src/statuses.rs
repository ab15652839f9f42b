// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-side access to job status files. Writing is the Execution
//! Wrapper's job (`litani-exec`); this crate only ever reads them.

use crate::error::{io_err, json_err, StoreError};
use crate::paths::RunPaths;
use litani_core::{JobId, JobStatus};
use std::collections::BTreeMap;

/// Read one job's status if it has started, `None` if unstarted.
pub fn read_status(paths: &RunPaths, job_id: &JobId) -> Result<Option<JobStatus>, StoreError> {
    let path = paths.status_file(job_id);
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(&path).map_err(|e| io_err(&path, e))?;
    let status = serde_json::from_slice(&bytes).map_err(|e| json_err(&path, e))?;
    Ok(Some(status))
}

/// Read every status file present, keyed by job id.
pub fn read_all_statuses(paths: &RunPaths) -> Result<BTreeMap<String, JobStatus>, StoreError> {
    let status_dir = paths.status_dir();
    if !status_dir.is_dir() {
        return Ok(BTreeMap::new());
    }
    let mut statuses = BTreeMap::new();
    for entry in std::fs::read_dir(&status_dir).map_err(|e| io_err(&status_dir, e))? {
        let entry = entry.map_err(|e| io_err(&status_dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let bytes = std::fs::read(&path).map_err(|e| io_err(&path, e))?;
        let status: JobStatus = serde_json::from_slice(&bytes).map_err(|e| json_err(&path, e))?;
        statuses.insert(status.job_id.as_str().to_string(), status);
    }
    Ok(statuses)
}

#[cfg(test)]
#[path = "statuses_tests.rs"]
mod tests;
