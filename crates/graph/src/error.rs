// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors raised while translating the registered job set into a DAG file.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("duplicate job id '{0}' in registered descriptor set")]
    DuplicateJobId(String),
    #[error("job id '{0}' collides with an internal rule or phony target name")]
    ReservedJobId(String),
    #[error("failed to write graph file at {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: litani_core::AtomicWriteError,
    },
}
