// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors raised by CLI Dispatch itself (spec.md §4.8), distinct from the
/// `anyhow` context each command handler layers on top of these.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no active run: run `litani init` first")]
    NoActiveRun,
    #[error("job command is missing: pass `--command` or trailing `-- <command>`")]
    MissingCommand,
    #[error("--pipelines and --stage are mutually exclusive")]
    ConflictingTargetSelectors,
    #[error(transparent)]
    Store(#[from] litani_store::StoreError),
    #[error(transparent)]
    Graph(#[from] litani_graph::GraphError),
    #[error(transparent)]
    Exec(#[from] litani_exec::ExecError),
    #[error(transparent)]
    Reporter(#[from] litani_reporter::ReporterError),
}
