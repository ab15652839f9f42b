// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! litani - an incremental build-graph orchestrator

mod commands;
mod error;
mod exit_error;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{add_job, exec, init, run_build};

#[derive(Parser)]
#[command(name = "litani", disable_version_flag = true, about = "An incremental build-graph orchestrator")]
struct Cli {
    /// Raise logging to debug for this binary's own target
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    /// Raise logging to trace for this binary's own target
    #[arg(short = 'w', long = "very-verbose", global = true)]
    very_verbose: bool,

    /// Print the schema version triple and exit
    #[arg(short = 'V', long = "version", global = true)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a run directory and publish the cache pointer
    Init(init::InitArgs),
    /// Register one job descriptor against the active run
    AddJob(add_job::AddJobArgs),
    /// Materialize the graph and run it to completion
    RunBuild(run_build::RunBuildArgs),
    /// Run one job; invoked by the DAG executor, not normally by a user
    Exec(exec::ExecArgs),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        if let Some(exit_err) = e.downcast_ref::<exit_error::ExitError>() {
            std::process::exit(exit_err.code);
        }
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {msg}");
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain when the top-level
/// Display already contains every source's text (common with thiserror
/// variants that embed `{0}` from a `#[from]` conversion).
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }
    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {i}: {cause}"));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.very_verbose);

    if cli.version {
        let v = litani_core::CURRENT_SCHEMA_VERSION;
        println!("{v}");
        return Ok(());
    }

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        println!();
        return Ok(());
    };

    match command {
        Commands::Init(args) => init::handle(args),
        Commands::AddJob(args) => add_job::handle(args),
        Commands::RunBuild(args) => run_build::handle(args).await,
        Commands::Exec(args) => exec::handle(args).await,
    }
}

fn init_tracing(verbose: bool, very_verbose: bool) {
    let filter = if very_verbose {
        "litani=trace"
    } else if verbose {
        "litani=debug"
    } else {
        "litani=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .try_init();
}
