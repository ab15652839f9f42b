// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn creates_run_directory_and_cache() {
    let root_dir = tempdir().unwrap();
    let root = LitaniRoot::at(root_dir.path().to_path_buf());
    let args = InitArgs {
        project_name: "demo".to_string(),
    };
    handle_at(args, &root).unwrap();

    let run_dir = litani_store::read_pointer(&root).unwrap();
    assert!(run_dir.join("cache.json").exists());
}

#[test]
fn cache_embeds_the_given_project_name() {
    let root_dir = tempdir().unwrap();
    let root = LitaniRoot::at(root_dir.path().to_path_buf());
    let args = InitArgs {
        project_name: "my-project".to_string(),
    };
    handle_at(args, &root).unwrap();

    let run_dir = litani_store::read_pointer(&root).unwrap();
    let run_paths = litani_store::RunPaths::new(run_dir);
    let cache = litani_store::read_cache(&run_paths).unwrap();
    assert_eq!(cache.run.project_name, "my-project");
    assert!(cache.jobs.is_empty());
}
