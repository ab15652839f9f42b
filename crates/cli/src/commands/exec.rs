// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `litani exec` - run one job, invoked once per job by the DAG executor.

use crate::exit_error::ExitError;
use anyhow::{Context, Result};
use litani_store::RunPaths;
use std::path::{Path, PathBuf};

#[derive(clap::Args)]
pub struct ExecArgs {
    /// Path to the job's descriptor file, as emitted into the rule's
    /// command by the Graph Emitter (spec.md §9's re-architecture note:
    /// this is the only supported invocation form, avoiding per-flag
    /// shell-quoting hazards).
    #[arg(long = "descriptor")]
    pub descriptor: PathBuf,
}

pub async fn handle(args: ExecArgs) -> Result<()> {
    let paths = run_paths_for(&args.descriptor);
    let bytes = std::fs::read(&args.descriptor)
        .with_context(|| format!("reading descriptor {}", args.descriptor.display()))?;
    let descriptor: litani_core::JobDescriptor = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing descriptor {}", args.descriptor.display()))?;

    let wrapper_return_code = litani_exec::exec_job(&descriptor, &paths).await?;
    if wrapper_return_code != 0 {
        return Err(ExitError::new(wrapper_return_code).into());
    }
    Ok(())
}

/// A job's descriptor lives at `<run_dir>/jobs/<job_id>.json`.
fn run_paths_for(descriptor_path: &Path) -> RunPaths {
    let run_dir = descriptor_path
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    RunPaths::new(run_dir)
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
