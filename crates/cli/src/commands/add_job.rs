// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `litani add-job` - register one job descriptor against the active run.

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use litani_core::{CiStage, IdGen, JobDescriptor, JobId, UuidIdGen};
use litani_store::LitaniRoot;
use std::path::PathBuf;

#[derive(Args)]
pub struct AddJobArgs {
    #[arg(long = "pipeline-name")]
    pub pipeline_name: String,

    #[arg(long = "ci-stage")]
    pub ci_stage: CiStage,

    /// Shorthand for a command with no shell metacharacters of its own.
    /// For a command that contains `--`-prefixed tokens, pass it after a
    /// trailing `--` instead.
    #[arg(long = "command")]
    pub command: Option<String>,

    #[arg(long = "cwd")]
    pub cwd: Option<PathBuf>,

    #[arg(long = "inputs", num_args = 0.., value_delimiter = ',')]
    pub inputs: Vec<String>,

    #[arg(long = "outputs", num_args = 0.., value_delimiter = ',')]
    pub outputs: Vec<String>,

    #[arg(long = "timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long = "timeout-ok")]
    pub timeout_ok: bool,

    #[arg(long = "timeout-ignore")]
    pub timeout_ignore: bool,

    #[arg(long = "interleave-stdout-stderr")]
    pub interleave_stdout_stderr: bool,

    #[arg(long = "ignore-returns", num_args = 0.., value_delimiter = ',')]
    pub ignore_returns: Vec<i32>,

    #[arg(long = "ok-returns", num_args = 0.., value_delimiter = ',')]
    pub ok_returns: Vec<i32>,

    #[arg(long = "description")]
    pub description: Option<String>,

    #[arg(long = "tags", num_args = 0.., value_delimiter = ',')]
    pub tags: Vec<String>,

    #[arg(long = "stdout-file")]
    pub stdout_file: Option<PathBuf>,

    #[arg(long = "stderr-file")]
    pub stderr_file: Option<PathBuf>,

    /// Tokens after a trailing `--` form the job's command verbatim and
    /// take precedence over `--command` (spec.md §4.8).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command_tokens: Vec<String>,
}

pub fn handle(args: AddJobArgs) -> Result<()> {
    handle_at(args, &LitaniRoot::discover())
}

fn handle_at(args: AddJobArgs, root: &LitaniRoot) -> Result<()> {
    let run_dir = litani_store::read_pointer(root).map_err(|_| CliError::NoActiveRun)?;
    let run_paths = litani_store::RunPaths::new(run_dir);

    let command = if !args.command_tokens.is_empty() {
        args.command_tokens.join(" ")
    } else {
        args.command.clone().ok_or(CliError::MissingCommand)?
    };

    let descriptor = JobDescriptor {
        id: JobId::new(UuidIdGen.next()),
        command,
        pipeline_name: args.pipeline_name,
        ci_stage: args.ci_stage,
        cwd: args.cwd,
        inputs: args.inputs,
        outputs: args.outputs,
        timeout_seconds: args.timeout_seconds,
        timeout_ok: args.timeout_ok,
        timeout_ignore: args.timeout_ignore,
        interleave_stdout_stderr: args.interleave_stdout_stderr,
        ignore_returns: args.ignore_returns,
        ok_returns: args.ok_returns,
        description: args.description,
        tags: args.tags,
        stdout_file: args.stdout_file,
        stderr_file: args.stderr_file,
    };

    litani_store::write_descriptor(&run_paths, &descriptor)?;
    println!("{}", descriptor.id);
    Ok(())
}

#[cfg(test)]
#[path = "add_job_tests.rs"]
mod tests;
