// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and timestamp-derived ids.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC3339 timestamp into UTC.
pub fn parse_utc_rfc3339(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Derive a record id from a creation time (milliseconds since the epoch).
///
/// `last` is the most recently issued id; the result is always strictly
/// greater so ids stay unique when two records share a millisecond.
pub fn timestamp_id(now: DateTime<Utc>, last: Option<&str>) -> String {
    let millis = now.timestamp_millis();
    let floor = last
        .and_then(|id| id.parse::<i64>().ok())
        .map(|prev| prev.saturating_add(1))
        .unwrap_or(i64::MIN);
    millis.max(floor).to_string()
}
