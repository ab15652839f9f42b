// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralizes every path under the litani root and a single run directory.

use litani_core::{JobId, RunId};
use std::path::PathBuf;

/// The litani root: `<tmp>/litani` by default.
#[derive(Debug, Clone)]
pub struct LitaniRoot {
    root: PathBuf,
}

impl LitaniRoot {
    /// Resolve the root from the platform temp-dir convention.
    pub fn discover() -> Self {
        Self {
            root: std::env::temp_dir().join("litani"),
        }
    }

    /// Build a root rooted at an explicit path, used by tests.
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn cache_pointer_path(&self) -> PathBuf {
        self.root.join("cache_pointer")
    }

    pub fn latest_link_path(&self) -> PathBuf {
        self.root.join("latest")
    }

    pub fn runs_dir(&self) -> PathBuf {
        self.root.join("runs")
    }

    pub fn run_dir(&self, run_id: &RunId) -> PathBuf {
        self.runs_dir().join(run_id.as_str())
    }

    pub fn run_paths(&self, run_id: &RunId) -> RunPaths {
        RunPaths::new(self.run_dir(run_id))
    }
}

/// Every path under one run directory (spec.md §4.1).
#[derive(Debug, Clone)]
pub struct RunPaths {
    root: PathBuf,
}

impl RunPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn cache_file(&self) -> PathBuf {
        self.root.join("cache.json")
    }

    pub fn jobs_dir(&self) -> PathBuf {
        self.root.join("jobs")
    }

    pub fn status_dir(&self) -> PathBuf {
        self.root.join("status")
    }

    pub fn descriptor_file(&self, job_id: &JobId) -> PathBuf {
        self.jobs_dir().join(format!("{job_id}.json"))
    }

    pub fn status_file(&self, job_id: &JobId) -> PathBuf {
        self.status_dir().join(format!("{job_id}.json"))
    }

    pub fn ninja_file(&self) -> PathBuf {
        self.root.join("litani.ninja")
    }

    pub fn run_snapshot_file(&self) -> PathBuf {
        self.root.join("run.json")
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.root.join("artifacts")
    }

    pub fn artifact_dir(&self, pipeline_name: &str, ci_stage: &str) -> PathBuf {
        self.artifacts_dir().join(pipeline_name).join(ci_stage)
    }

    /// Create every directory this run needs, idempotently.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.jobs_dir())?;
        std::fs::create_dir_all(self.status_dir())?;
        std::fs::create_dir_all(self.artifacts_dir())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
