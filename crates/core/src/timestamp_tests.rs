// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;

#[test]
fn formats_with_millisecond_precision_and_z_suffix() {
    let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(format_timestamp(ts), "2024-01-02T03:04:05.000Z");
}

#[test]
fn round_trips_through_parse() {
    let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
    let formatted = format_timestamp(ts);
    let parsed = parse_timestamp(&formatted).unwrap();
    assert_eq!(parsed, ts);
}

#[test]
fn rejects_garbage() {
    assert!(parse_timestamp("not-a-timestamp").is_err());
}
