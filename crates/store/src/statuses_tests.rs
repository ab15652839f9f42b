// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use litani_core::WrapperArgs;
use tempfile::tempdir;

fn started(id: &str) -> JobStatus {
    JobStatus::started(
        JobId::new(id),
        WrapperArgs {
            job_id: JobId::new(id),
            command: "echo hi".to_string(),
            cwd: None,
            timeout_seconds: None,
        },
        chrono::Utc::now(),
    )
}

#[test]
fn read_status_none_when_unstarted() {
    let dir = tempdir().unwrap();
    let paths = RunPaths::new(dir.path().to_path_buf());
    assert!(read_status(&paths, &JobId::new("j1")).unwrap().is_none());
}

#[test]
fn read_status_returns_written_status() {
    let dir = tempdir().unwrap();
    let paths = RunPaths::new(dir.path().to_path_buf());
    std::fs::create_dir_all(paths.status_dir()).unwrap();
    let status = started("j1");
    litani_core::write_json_atomic(&paths.status_file(&JobId::new("j1")), &status).unwrap();

    let back = read_status(&paths, &JobId::new("j1")).unwrap().unwrap();
    assert_eq!(back, status);
}

#[test]
fn read_all_statuses_collects_every_file() {
    let dir = tempdir().unwrap();
    let paths = RunPaths::new(dir.path().to_path_buf());
    std::fs::create_dir_all(paths.status_dir()).unwrap();
    litani_core::write_json_atomic(&paths.status_file(&JobId::new("a")), &started("a")).unwrap();
    litani_core::write_json_atomic(&paths.status_file(&JobId::new("b")), &started("b")).unwrap();

    let all = read_all_statuses(&paths).unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains_key("a"));
    assert!(all.contains_key("b"));
}
