// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `litani init` - create a run directory and publish the cache pointer.

use anyhow::Result;
use clap::Args;
use litani_core::{IdGen, Run, UuidIdGen};
use litani_store::LitaniRoot;

#[derive(Args)]
pub struct InitArgs {
    /// Human-readable name for this run's project
    #[arg(long = "project-name")]
    pub project_name: String,
}

pub fn handle(args: InitArgs) -> Result<()> {
    handle_at(args, &LitaniRoot::discover())
}

fn handle_at(args: InitArgs, root: &LitaniRoot) -> Result<()> {
    let run_id = litani_core::RunId::new(UuidIdGen.next());
    let run_paths = root.run_paths(&run_id);
    run_paths
        .ensure_dirs()
        .map_err(|e| anyhow::anyhow!("failed to create run directory: {e}"))?;

    let run = Run::new(run_id.clone(), args.project_name, litani_core::now());
    litani_store::write_cache(&run_paths, &run)?;
    litani_store::update_pointer(root, run_paths.root())?;

    println!("{run_id}");
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
