// ABOUTME: Maps timeline week buckets onto raw metric records, marking unmatched weeks as gaps
// ABOUTME: Malformed timestamps are treated as non-matches, never as fatal errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Week-bucket matching.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::calendar::{parse_timestamp, week_interval};
use crate::models::{RawMetricRecord, WeekPoint};

/// Match each timeline week onto a raw record, producing one [`WeekPoint`]
/// per bucket.
///
/// A record matches week `d` when its timestamp falls in
/// `[d 00:00:00, d+6 days 23:59:59]`. Weeks with no match become gaps
/// (`value == None`). When several records land in the same week, the first
/// encountered one wins.
#[must_use]
pub fn match_records(weeks: &[NaiveDate], records: &[RawMetricRecord]) -> Vec<WeekPoint> {
    let parsed: Vec<(NaiveDateTime, &RawMetricRecord)> = records
        .iter()
        .filter_map(|record| match parse_timestamp(&record.timestamp) {
            Some(timestamp) => Some((timestamp, record)),
            None => {
                debug!(timestamp = %record.timestamp, "skipping record with malformed timestamp");
                None
            }
        })
        .collect();

    let skipped = records.len() - parsed.len();
    if skipped > 0 {
        warn!(skipped, total = records.len(), "ignored records with malformed timestamps");
    }

    weeks
        .iter()
        .map(|&week| {
            let Some((bucket_start, bucket_end)) = week_interval(week) else {
                return WeekPoint::gap(week);
            };
            parsed
                .iter()
                .find(|(timestamp, _)| *timestamp >= bucket_start && *timestamp <= bucket_end)
                .map_or_else(
                    || WeekPoint::gap(week),
                    |(_, record)| WeekPoint::matched(week, record.value, record.issue_count),
                )
        })
        .collect()
}
