// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job Registry persistence: one descriptor file per job id (spec.md §4.2).

use crate::error::{io_err, json_err, StoreError};
use crate::paths::RunPaths;
use litani_core::JobDescriptor;

/// Persist a freshly-registered descriptor. Safe under concurrent
/// `add-job` invocations: each writes a distinct file (spec.md §4.2).
pub fn write_descriptor(paths: &RunPaths, descriptor: &JobDescriptor) -> Result<(), StoreError> {
    std::fs::create_dir_all(paths.jobs_dir()).map_err(|e| io_err(&paths.jobs_dir(), e))?;
    let path = paths.descriptor_file(&descriptor.id);
    litani_core::write_json_atomic(&path, descriptor)?;
    Ok(())
}

pub fn read_descriptor(
    paths: &RunPaths,
    job_id: &litani_core::JobId,
) -> Result<JobDescriptor, StoreError> {
    let path = paths.descriptor_file(job_id);
    read_descriptor_at(&path)
}

fn read_descriptor_at(path: &std::path::Path) -> Result<JobDescriptor, StoreError> {
    let bytes = std::fs::read(path).map_err(|e| io_err(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| json_err(path, e))
}

/// Read every descriptor under `jobs/`, sorted by job id for determinism.
pub fn read_all_descriptors(paths: &RunPaths) -> Result<Vec<JobDescriptor>, StoreError> {
    let jobs_dir = paths.jobs_dir();
    if !jobs_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut entries: Vec<std::path::PathBuf> = std::fs::read_dir(&jobs_dir)
        .map_err(|e| io_err(&jobs_dir, e))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    entries.sort();

    let mut descriptors = Vec::with_capacity(entries.len());
    for path in entries {
        descriptors.push(read_descriptor_at(&path)?);
    }
    Ok(descriptors)
}

#[cfg(test)]
#[path = "descriptors_tests.rs"]
mod tests;
