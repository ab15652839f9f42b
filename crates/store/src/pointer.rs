// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The cache pointer: a plain-text file naming the active run directory,
//! plus a sibling `latest` symlink kept in sync with it.

use crate::error::{io_err, StoreError};
use crate::paths::LitaniRoot;
use std::path::{Path, PathBuf};

/// Point `cache_pointer` and `latest` at `run_dir`, atomically.
///
/// The symlink update follows spec.md §4.1: create a uniquely-named
/// symlink, then rename over `latest` — the rename is the atomic step,
/// so a reader never observes `latest` missing or half-created.
pub fn update_pointer(root: &LitaniRoot, run_dir: &Path) -> Result<(), StoreError> {
    std::fs::create_dir_all(root.root()).map_err(|e| io_err(root.root(), e))?;

    let absolute = run_dir
        .canonicalize()
        .unwrap_or_else(|_| run_dir.to_path_buf());

    litani_core::write_atomic(
        &root.cache_pointer_path(),
        absolute.to_string_lossy().as_bytes(),
    )?;

    let latest = root.latest_link_path();
    let tmp_link = root
        .root()
        .join(format!(".latest.tmp.{}", std::process::id()));
    let _ = std::fs::remove_file(&tmp_link);
    #[cfg(unix)]
    std::os::unix::fs::symlink(&absolute, &tmp_link).map_err(|e| io_err(&tmp_link, e))?;
    #[cfg(not(unix))]
    std::fs::write(&tmp_link, absolute.to_string_lossy().as_bytes())
        .map_err(|e| io_err(&tmp_link, e))?;
    std::fs::rename(&tmp_link, &latest).map_err(|e| io_err(&latest, e))?;

    Ok(())
}

/// Resolve the cache pointer to the active run directory.
pub fn read_pointer(root: &LitaniRoot) -> Result<PathBuf, StoreError> {
    let pointer_path = root.cache_pointer_path();
    if !pointer_path.exists() {
        return Err(StoreError::PointerMissing(pointer_path));
    }
    let contents = std::fs::read_to_string(&pointer_path).map_err(|e| io_err(&pointer_path, e))?;
    let run_dir = PathBuf::from(contents.trim());
    if !run_dir.is_dir() {
        return Err(StoreError::PointerAmbiguous(pointer_path));
    }
    Ok(run_dir)
}

#[cfg(test)]
#[path = "pointer_tests.rs"]
mod tests;
