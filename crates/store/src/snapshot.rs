// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assembling a [`RunSnapshot`] from `cache.json` + `status/*.json`
//! (spec.md §3 Run Snapshot, §4.6 Reporter Loop step i).

use crate::cache::read_cache;
use crate::error::StoreError;
use crate::paths::RunPaths;
use crate::statuses::read_all_statuses;
use litani_core::snapshot::{
    stage_progress_percent, stage_status, CiStageSnapshot, JobSnapshot, PipelineSnapshot,
};
use litani_core::RunSnapshot;
use std::collections::BTreeMap;

/// Rebuild the run's snapshot by merging the cache with every status file
/// currently on disk. Read-only: never mutates descriptors or statuses.
pub fn build_snapshot(paths: &RunPaths) -> Result<RunSnapshot, StoreError> {
    let cache = read_cache(paths)?;
    let statuses = read_all_statuses(paths)?;

    let mut snapshot = RunSnapshot::from_run(&cache.run);

    let mut by_pipeline: BTreeMap<&str, BTreeMap<&str, Vec<JobSnapshot>>> = BTreeMap::new();
    for descriptor in &cache.jobs {
        let status = statuses.get(descriptor.id.as_str()).cloned();
        by_pipeline
            .entry(descriptor.pipeline_name.as_str())
            .or_default()
            .entry(descriptor.ci_stage.as_str())
            .or_default()
            .push(JobSnapshot {
                descriptor: descriptor.clone(),
                status,
            });
    }

    for (pipeline_name, stages) in by_pipeline {
        let mut pipeline_snapshot = PipelineSnapshot::default();
        for (stage_name, jobs) in stages {
            let stage = jobs[0].descriptor.ci_stage;
            let progress_percent = stage_progress_percent(&jobs);
            let status = stage_status(&stage, &jobs);
            pipeline_snapshot.ci_stages.insert(
                stage_name.to_string(),
                CiStageSnapshot {
                    jobs,
                    progress_percent,
                    status,
                },
            );
        }
        snapshot
            .pipelines
            .insert(pipeline_name.to_string(), pipeline_snapshot);
    }

    Ok(snapshot)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
