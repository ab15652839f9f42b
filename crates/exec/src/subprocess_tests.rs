// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn captures_stdout_of_successful_command() {
    let outcome = run_subprocess("echo hello", None, false, None).await;
    assert!(outcome.spawn_error.is_none());
    assert!(!outcome.timeout_reached);
    assert_eq!(String::from_utf8_lossy(&outcome.stdout).trim(), "hello");
    assert_eq!(outcome.exit_status.unwrap().code(), Some(0));
}

#[tokio::test]
async fn captures_nonzero_exit_code() {
    let outcome = run_subprocess("exit 3", None, false, None).await;
    assert_eq!(outcome.exit_status.unwrap().code(), Some(3));
}

#[tokio::test]
async fn interleaves_stdout_and_stderr_when_requested() {
    let outcome = run_subprocess("echo out; echo err 1>&2", None, true, None).await;
    let combined = String::from_utf8_lossy(&outcome.stdout);
    assert!(combined.contains("out"));
    assert!(combined.contains("err"));
    assert!(outcome.stderr.is_empty());
}

#[tokio::test]
async fn separates_stdout_and_stderr_by_default() {
    let outcome = run_subprocess("echo out; echo err 1>&2", None, false, None).await;
    assert_eq!(String::from_utf8_lossy(&outcome.stdout).trim(), "out");
    assert_eq!(String::from_utf8_lossy(&outcome.stderr).trim(), "err");
}

#[tokio::test]
async fn timeout_kills_and_reaps_long_running_command() {
    let outcome = run_subprocess("sleep 5", None, false, Some(1)).await;
    assert!(outcome.timeout_reached);
}

#[tokio::test]
async fn no_timeout_lets_quick_command_finish_normally() {
    let outcome = run_subprocess("echo quick", None, false, Some(5)).await;
    assert!(!outcome.timeout_reached);
    assert_eq!(outcome.exit_status.unwrap().code(), Some(0));
}

#[tokio::test]
async fn runs_command_in_given_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("marker.txt"), b"hi").unwrap();
    let outcome = run_subprocess("ls", Some(dir.path()), false, None).await;
    assert!(String::from_utf8_lossy(&outcome.stdout).contains("marker.txt"));
}
