// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact preservation: copy declared outputs into the run's artifacts
//! tree after a job finishes (spec.md §4.4 step 7).

use crate::error::ExecError;
use litani_core::JobDescriptor;
use litani_store::RunPaths;
use std::path::Path;

/// Copy every declared output of `descriptor` into
/// `artifacts/<pipeline>/<ci_stage>/`, preserving each output's basename.
///
/// A missing source is logged and skipped, never a failure (spec.md §7).
/// Directory sources are copied recursively.
pub fn copy_artifacts(descriptor: &JobDescriptor, paths: &RunPaths) -> Result<(), ExecError> {
    if descriptor.outputs.is_empty() {
        return Ok(());
    }
    let dest_dir = paths.artifact_dir(&descriptor.pipeline_name, descriptor.ci_stage.as_str());
    std::fs::create_dir_all(&dest_dir).map_err(|source| ExecError::CreateDir {
        path: dest_dir.clone(),
        source,
    })?;

    for output in &descriptor.outputs {
        let source = Path::new(output);
        if !source.exists() {
            tracing::warn!(
                job_id = %descriptor.id,
                path = %source.display(),
                "declared output missing, skipping artifact copy"
            );
            continue;
        }
        let Some(basename) = source.file_name() else {
            tracing::warn!(job_id = %descriptor.id, path = %source.display(), "output path has no basename, skipping");
            continue;
        };
        let dest = dest_dir.join(basename);
        if source.is_dir() {
            copy_dir_recursive(source, &dest)?;
        } else {
            std::fs::copy(source, &dest).map_err(|e| ExecError::ArtifactCopy {
                from: source.to_path_buf(),
                to: dest.clone(),
                source: e,
            })?;
        }
    }
    Ok(())
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), ExecError> {
    std::fs::create_dir_all(dest).map_err(|source| ExecError::CreateDir {
        path: dest.to_path_buf(),
        source,
    })?;
    for entry in std::fs::read_dir(src).map_err(|source| ExecError::ArtifactCopy {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source,
    })? {
        let entry = entry.map_err(|source| ExecError::ArtifactCopy {
            from: src.to_path_buf(),
            to: dest.to_path_buf(),
            source,
        })?;
        let entry_dest = dest.join(entry.file_name());
        let entry_path = entry.path();
        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &entry_dest)?;
        } else {
            std::fs::copy(&entry_path, &entry_dest).map_err(|source| ExecError::ArtifactCopy {
                from: entry_path.clone(),
                to: entry_dest.clone(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "artifacts_tests.rs"]
mod tests;
