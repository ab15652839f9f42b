// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single fixed-precision UTC timestamp format, used for every persisted
//! field across the run store (spec.md §6: "the implementation must pick
//! one format string and use it everywhere").

use chrono::{DateTime, SecondsFormat, Utc};

/// Format string reference: `2024-01-02T03:04:05.678Z`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a timestamp previously produced by [`format_timestamp`].
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
