// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

#[test]
fn new_run_starts_in_progress() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let run = Run::new(RunId::new("r1"), "demo".to_string(), start);
    assert_eq!(run.status, RunStatus::InProgress);
    assert!(run.end_time.is_none());
    assert!(!run.status.is_terminal());
}

#[test]
fn finalize_sets_end_time_and_terminal_status() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 1, 0).unwrap();
    let mut run = Run::new(RunId::new("r1"), "demo".to_string(), start);
    run.finalize(end, RunStatus::Success);
    assert_eq!(run.end_time, Some(end));
    assert_eq!(run.status, RunStatus::Success);
    assert!(run.status.is_terminal());
}

#[test]
fn run_status_uses_fail_not_failure_token() {
    let json = serde_json::to_string(&RunStatus::Fail).unwrap();
    assert_eq!(json, "\"fail\"");
}

#[test]
fn cache_flattens_run_fields_at_top_level() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let run = Run::new(RunId::new("r1"), "demo".to_string(), start);
    let cache = Cache {
        run,
        jobs: vec![],
    };
    let value = serde_json::to_value(&cache).unwrap();
    assert_eq!(value["run_id"], "r1");
    assert_eq!(value["project_name"], "demo");
    assert!(value.get("jobs").is_some());
}

#[test]
fn cache_round_trips_through_json() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let run = Run::new(RunId::new("r1"), "demo".to_string(), start);
    let cache = Cache {
        run,
        jobs: vec![],
    };
    let json = serde_json::to_string(&cache).unwrap();
    let back: Cache = serde_json::from_str(&json).unwrap();
    assert_eq!(back.run.run_id, cache.run.run_id);
}
