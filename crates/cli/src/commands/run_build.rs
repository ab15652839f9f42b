// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `litani run-build` - materialize the graph, run the executor, and
//! finalize the run (spec.md §4.5).

use crate::error::CliError;
use crate::exit_error::ExitError;
use anyhow::{Context, Result};
use litani_core::RunStatus;
use litani_graph::EmitContext;
use litani_reporter::{NullRenderer, ReporterConfig, StopSignal};
use litani_store::{LitaniRoot, RunPaths};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(clap::Args)]
pub struct RunBuildArgs {
    /// Limit the build to these pipeline names. Mutually exclusive with
    /// `--stage`.
    #[arg(long = "pipelines", num_args = 0.., value_delimiter = ',')]
    pub pipelines: Vec<String>,

    /// Limit the build to this CI stage. Mutually exclusive with
    /// `--pipelines`.
    #[arg(long = "stage")]
    pub stage: Option<String>,

    /// Parallelism passed to the executor; `0` means unbounded.
    #[arg(long = "parallel", default_value_t = 0)]
    pub parallel: u32,

    /// Pretend every job succeeds without running it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit non-zero if the executor itself reported failure.
    #[arg(long = "fail-on-pipeline-failure")]
    pub fail_on_pipeline_failure: bool,

    /// Also write each snapshot to this path.
    #[arg(long = "out-file")]
    pub out_file: Option<PathBuf>,
}

pub async fn handle(args: RunBuildArgs) -> Result<()> {
    if !args.pipelines.is_empty() && args.stage.is_some() {
        return Err(CliError::ConflictingTargetSelectors.into());
    }

    let root = LitaniRoot::discover();
    let run_dir = litani_store::read_pointer(&root).map_err(|_| CliError::NoActiveRun)?;
    let run_paths = RunPaths::new(run_dir);

    let exe_path = std::env::current_exe().context("resolving own executable path")?;
    run_once(&args, &run_paths, &exe_path).await
}

async fn run_once(args: &RunBuildArgs, run_paths: &RunPaths, exe_path: &std::path::Path) -> Result<()> {
    let mut cache = litani_store::read_cache(run_paths).context("reading cache.json")?;
    let jobs_dir = run_paths.jobs_dir();
    let status_dir = run_paths.status_dir();
    let ctx = EmitContext {
        exe_path,
        jobs_dir: &jobs_dir,
        status_dir: &status_dir,
    };
    litani_graph::write_graph_file(&cache.jobs, &ctx, &run_paths.ninja_file())
        .map_err(CliError::from)?;

    let initial_snapshot = litani_store::build_snapshot(run_paths).map_err(CliError::from)?;
    litani_core::write_json_atomic(&run_paths.run_snapshot_file(), &initial_snapshot)?;

    let stop = StopSignal::new();
    let mut reporter_config = ReporterConfig::new(run_paths.clone());
    reporter_config.out_file = args.out_file.clone();
    let reporter_handle = tokio::spawn(litani_reporter::run_reporter_loop(
        reporter_config,
        Arc::new(NullRenderer::new()),
        stop.clone(),
    ));

    let executor_success = run_executor(args, run_paths).await?;

    stop.signal();
    let _ = reporter_handle.await;

    let end_time = litani_core::now();
    let run_status = final_run_status(run_paths)?;
    cache.run.finalize(end_time, run_status);
    litani_store::write_cache(run_paths, &cache.run).map_err(CliError::from)?;

    let final_snapshot = litani_store::build_snapshot(run_paths).map_err(CliError::from)?;
    litani_core::write_json_atomic(&run_paths.run_snapshot_file(), &final_snapshot)?;
    if let Some(out_file) = &args.out_file {
        litani_core::write_json_atomic(out_file, &final_snapshot)?;
    }

    if args.fail_on_pipeline_failure && !executor_success {
        return Err(ExitError::new(1).into());
    }
    Ok(())
}

async fn run_executor(args: &RunBuildArgs, run_paths: &RunPaths) -> Result<bool> {
    let mut cmd = tokio::process::Command::new("ninja");
    cmd.arg("-f").arg(run_paths.ninja_file());
    cmd.arg("-k").arg("0");
    if args.parallel > 0 {
        cmd.arg("-j").arg(args.parallel.to_string());
    }
    if args.dry_run {
        cmd.arg("-n");
    }
    for target in build_targets(args) {
        cmd.arg(target);
    }

    let status = cmd
        .status()
        .await
        .context("spawning the DAG executor (ninja)")?;
    Ok(status.success())
}

fn build_targets(args: &RunBuildArgs) -> Vec<String> {
    if !args.pipelines.is_empty() {
        args.pipelines
            .iter()
            .map(|p| format!("__litani_pipeline_name_{p}"))
            .collect()
    } else if let Some(stage) = &args.stage {
        vec![format!("__litani_ci_stage_{stage}")]
    } else {
        Vec::new()
    }
}

/// spec.md §4.5's simplified surface form: success iff every status file
/// reports `wrapper_return_code == 0` and no `timeout_ignore` flag was
/// consumed.
fn final_run_status(run_paths: &RunPaths) -> Result<RunStatus> {
    let statuses = litani_store::read_all_statuses(run_paths).map_err(CliError::from)?;
    let cache = litani_store::read_cache(run_paths).map_err(CliError::from)?;

    for descriptor in &cache.jobs {
        let Some(status) = statuses.get(descriptor.id.as_str()) else {
            continue;
        };
        if status.timeout_reached && descriptor.timeout_ignore {
            return Ok(RunStatus::Fail);
        }
        if status.wrapper_return_code != Some(0) {
            return Ok(RunStatus::Fail);
        }
    }
    Ok(RunStatus::Success)
}

#[cfg(test)]
#[path = "run_build_tests.rs"]
mod tests;
