// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn update_and_read_pointer_round_trips() {
    let dir = tempdir().unwrap();
    let root = LitaniRoot::at(dir.path().join("litani"));
    let run_dir = dir.path().join("run-a");
    std::fs::create_dir_all(&run_dir).unwrap();

    update_pointer(&root, &run_dir).unwrap();
    let resolved = read_pointer(&root).unwrap();
    assert_eq!(resolved, run_dir.canonicalize().unwrap());
}

#[test]
fn latest_symlink_points_at_run_dir() {
    let dir = tempdir().unwrap();
    let root = LitaniRoot::at(dir.path().join("litani"));
    let run_dir = dir.path().join("run-a");
    std::fs::create_dir_all(&run_dir).unwrap();

    update_pointer(&root, &run_dir).unwrap();
    let latest = root.latest_link_path();
    assert_eq!(
        latest.canonicalize().unwrap(),
        run_dir.canonicalize().unwrap()
    );
}

#[test]
fn updating_pointer_twice_switches_to_new_run() {
    let dir = tempdir().unwrap();
    let root = LitaniRoot::at(dir.path().join("litani"));
    let run_a = dir.path().join("run-a");
    let run_b = dir.path().join("run-b");
    std::fs::create_dir_all(&run_a).unwrap();
    std::fs::create_dir_all(&run_b).unwrap();

    update_pointer(&root, &run_a).unwrap();
    update_pointer(&root, &run_b).unwrap();

    let resolved = read_pointer(&root).unwrap();
    assert_eq!(resolved, run_b.canonicalize().unwrap());
}

#[test]
fn missing_pointer_is_an_error() {
    let dir = tempdir().unwrap();
    let root = LitaniRoot::at(dir.path().join("litani"));
    assert!(matches!(
        read_pointer(&root),
        Err(StoreError::PointerMissing(_))
    ));
}
