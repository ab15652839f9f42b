// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Translate the registered job set into a ninja DAG file (spec.md §4.3).

use crate::error::GraphError;
use crate::quoting::{ninja_escape, shell_quote};
use litani_core::JobDescriptor;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Everything needed to resolve one job's status-file path and emitted
/// command, independent of `litani-store` to keep this crate a pure
/// translator (spec.md §4.3 has no filesystem dependency of its own).
pub struct EmitContext<'a> {
    /// Absolute path to this binary, re-invoked by every rule in `exec` mode.
    pub exe_path: &'a Path,
    /// Absolute path to the run directory's `jobs/` folder.
    pub jobs_dir: &'a Path,
    /// Absolute path to the run directory's `status/` folder.
    pub status_dir: &'a Path,
}

const RESERVED_PREFIXES: [&str; 2] = ["__litani_pipeline_name_", "__litani_ci_stage_"];

/// Render the ninja file text for a job set. Pure function: does not touch
/// the filesystem (callers persist the result via the Atomic Writer).
pub fn render(descriptors: &[JobDescriptor], ctx: &EmitContext<'_>) -> Result<String, GraphError> {
    let mut seen_ids = BTreeSet::new();
    for d in descriptors {
        if !seen_ids.insert(d.id.as_str()) {
            return Err(GraphError::DuplicateJobId(d.id.as_str().to_string()));
        }
        if RESERVED_PREFIXES.iter().any(|p| d.id.as_str().starts_with(p)) {
            return Err(GraphError::ReservedJobId(d.id.as_str().to_string()));
        }
    }

    let mut out = String::new();
    out.push_str("# generated by litani-graph — do not edit by hand\n\n");

    let mut all_status_files: Vec<String> = Vec::new();
    let mut pipeline_outputs: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    let mut stage_outputs: BTreeMap<&'static str, BTreeSet<String>> = BTreeMap::new();

    for d in descriptors {
        let status_path = ctx
            .status_dir
            .join(format!("{}.json", d.id))
            .to_string_lossy()
            .into_owned();
        let descriptor_path = ctx
            .jobs_dir
            .join(format!("{}.json", d.id))
            .to_string_lossy()
            .into_owned();

        out.push_str(&format!("rule {}\n", d.id));
        out.push_str(&format!(
            "  command = {} exec --descriptor {}\n",
            shell_quote(&ctx.exe_path.to_string_lossy()),
            shell_quote(&descriptor_path),
        ));
        out.push_str(&format!(
            "  description = {} / {} / {}\n",
            d.pipeline_name, d.ci_stage, d.id
        ));
        out.push('\n');

        let mut outputs: Vec<String> = d.outputs.clone();
        outputs.sort();
        let mut edge_outputs: Vec<String> =
            outputs.iter().map(|o| ninja_escape(o)).collect();
        edge_outputs.push(ninja_escape(&status_path));

        let mut inputs: Vec<String> = d.inputs.clone();
        inputs.sort();
        let edge_inputs: Vec<String> = inputs.iter().map(|i| ninja_escape(i)).collect();

        out.push_str(&format!(
            "build {}: {}{}{}\n\n",
            edge_outputs.join(" "),
            d.id,
            if edge_inputs.is_empty() { "" } else { " " },
            edge_inputs.join(" "),
        ));

        all_status_files.push(status_path);
        pipeline_outputs
            .entry(d.pipeline_name.as_str())
            .or_default()
            .extend(outputs.clone());
        stage_outputs
            .entry(d.ci_stage.as_str())
            .or_default()
            .extend(outputs);
    }

    for (pipeline, outputs) in &pipeline_outputs {
        let mut sorted: Vec<&String> = outputs.iter().collect();
        sorted.sort();
        out.push_str(&format!(
            "build __litani_pipeline_name_{}: phony {}\n",
            pipeline,
            sorted
                .iter()
                .map(|o| ninja_escape(o))
                .collect::<Vec<_>>()
                .join(" ")
        ));
    }
    for (stage, outputs) in &stage_outputs {
        let mut sorted: Vec<&String> = outputs.iter().collect();
        sorted.sort();
        out.push_str(&format!(
            "build __litani_ci_stage_{}: phony {}\n",
            stage,
            sorted
                .iter()
                .map(|o| ninja_escape(o))
                .collect::<Vec<_>>()
                .join(" ")
        ));
    }

    all_status_files.sort();
    out.push_str(&format!(
        "\nbuild all: phony {}\n",
        all_status_files
            .iter()
            .map(|s| ninja_escape(s))
            .collect::<Vec<_>>()
            .join(" ")
    ));
    out.push_str("default all\n");

    Ok(out)
}

/// Render and persist the DAG file atomically.
pub fn write_graph_file(
    descriptors: &[JobDescriptor],
    ctx: &EmitContext<'_>,
    ninja_path: &Path,
) -> Result<(), GraphError> {
    let text = render(descriptors, ctx)?;
    litani_core::write_atomic(ninja_path, text.as_bytes()).map_err(|source| GraphError::Write {
        path: ninja_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;
