// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifier and the immutable job descriptor.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

crate::define_id! {
    /// Unique identifier for a job within a run.
    #[derive(Default)]
    pub struct JobId;
}

/// CI stage a job belongs to. A closed set per the run's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CiStage {
    Build,
    Test,
    Report,
}

impl CiStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CiStage::Build => "build",
            CiStage::Test => "test",
            CiStage::Report => "report",
        }
    }

    /// Parse a stage name, rejecting anything outside the closed set.
    pub fn parse(s: &str) -> Result<Self, CiStageParseError> {
        match s {
            "build" => Ok(CiStage::Build),
            "test" => Ok(CiStage::Test),
            "report" => Ok(CiStage::Report),
            other => Err(CiStageParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for CiStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CiStage {
    type Err = CiStageParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid ci stage '{0}' (expected one of: build, test, report)")]
pub struct CiStageParseError(String);

/// The immutable record of how to run one command, produced by `add-job`.
///
/// Closed shape: unknown fields on deserialization are rejected rather than
/// silently dropped (spec.md §9: "define a closed descriptor record").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobDescriptor {
    pub id: JobId,
    pub command: String,
    pub pipeline_name: String,
    pub ci_stage: CiStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    /// Wall-clock timeout in seconds. Must be positive when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub timeout_ok: bool,
    #[serde(default)]
    pub timeout_ignore: bool,
    #[serde(default)]
    pub interleave_stdout_stderr: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_returns: Vec<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ok_returns: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr_file: Option<PathBuf>,
}

impl JobDescriptor {
    /// The set of return codes that count as success: `ignore_returns ∪ {0}`.
    pub fn effective_ignore_returns(&self) -> Vec<i32> {
        let mut codes = self.ignore_returns.clone();
        if !codes.contains(&0) {
            codes.push(0);
        }
        codes
    }

    pub fn is_return_ignored(&self, code: i32) -> bool {
        code == 0 || self.ignore_returns.contains(&code)
    }

    pub fn is_return_ok(&self, code: i32) -> bool {
        self.ok_returns.contains(&code)
    }

    /// Relative path of this job's status file under the run directory.
    pub fn status_file_rel(&self) -> PathBuf {
        PathBuf::from("status").join(format!("{}.json", self.id))
    }

    /// Relative path of this job's descriptor file under the run directory.
    pub fn descriptor_file_rel(&self) -> PathBuf {
        PathBuf::from("jobs").join(format!("{}.json", self.id))
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
