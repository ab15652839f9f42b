// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Atomic file writes: stage into a sibling temp file, fsync, then rename
//! over the target. A reader never observes a partially-written file.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum AtomicWriteError {
    #[error("failed to create temp file {path}: {source}")]
    CreateTemp {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write to temp file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to sync temp file {path}: {source}")]
    Sync {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn temp_path_for(target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{file_name}.tmp"))
}

/// Write `contents` to `path` atomically: the target either holds its
/// previous contents or the new ones in full, never a partial write.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), AtomicWriteError> {
    let tmp_path = temp_path_for(path);
    let mut file = File::create(&tmp_path).map_err(|source| AtomicWriteError::CreateTemp {
        path: tmp_path.clone(),
        source,
    })?;
    file.write_all(contents)
        .map_err(|source| AtomicWriteError::Write {
            path: tmp_path.clone(),
            source,
        })?;
    file.sync_all().map_err(|source| AtomicWriteError::Sync {
        path: tmp_path.clone(),
        source,
    })?;
    drop(file);
    fs::rename(&tmp_path, path).map_err(|source| AtomicWriteError::Rename {
        from: tmp_path,
        to: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Serialize `value` as pretty JSON and write it atomically.
pub fn write_json_atomic<T: serde::Serialize>(
    path: &Path,
    value: &T,
) -> Result<(), WriteJsonError> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    write_atomic(path, &bytes)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum WriteJsonError {
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Write(#[from] AtomicWriteError),
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;
