// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the Execution Wrapper (spec.md §4.4, §7).
///
/// The wrapper never raises these to its caller for a failed *command* —
/// that outcome is captured in the status file. These variants cover the
/// wrapper's own I/O failing, which is a genuine defect.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    AtomicWrite(#[from] litani_core::AtomicWriteError),
    #[error(transparent)]
    WriteJson(#[from] litani_core::WriteJsonError),
    #[error("failed to copy artifact {from} -> {to}: {source}")]
    ArtifactCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
