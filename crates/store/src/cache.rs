// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cache.json`: single-writer discipline owned by the Run Coordinator
//! (spec.md §9 design note — preserved explicitly here).

use crate::descriptors::read_all_descriptors;
use crate::error::{io_err, json_err, StoreError};
use crate::paths::RunPaths;
use litani_core::{Cache, Run};

/// Merge the Run record with every registered descriptor and persist
/// `cache.json` atomically (spec.md §4.5 step 1).
pub fn write_cache(paths: &RunPaths, run: &Run) -> Result<Cache, StoreError> {
    let jobs = read_all_descriptors(paths)?;
    let cache = Cache {
        run: run.clone(),
        jobs,
    };
    litani_core::write_json_atomic(&paths.cache_file(), &cache)?;
    Ok(cache)
}

pub fn read_cache(paths: &RunPaths) -> Result<Cache, StoreError> {
    let path = paths.cache_file();
    let bytes = std::fs::read(&path).map_err(|e| io_err(&path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| json_err(&path, e))
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
