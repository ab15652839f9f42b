// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed json at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    AtomicWrite(#[from] litani_core::AtomicWriteError),
    #[error(transparent)]
    WriteJson(#[from] litani_core::WriteJsonError),
    #[error("cache pointer not found at {0}")]
    PointerMissing(PathBuf),
    #[error("cache pointer at {0} does not resolve to exactly one run directory")]
    PointerAmbiguous(PathBuf),
    #[error("descriptor not found for job {0}")]
    DescriptorNotFound(String),
}

pub(crate) fn io_err(path: &std::path::Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub(crate) fn json_err(path: &std::path::Path, source: serde_json::Error) -> StoreError {
    StoreError::Json {
        path: path.to_path_buf(),
        source,
    }
}
