// ABOUTME: Resolves the period selector into a concrete (start Monday, end Monday) window
// ABOUTME: Applies the smart-start policy that trims leading all-gap weeks against available data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Period resolution.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::calendar::{monday_of, parse_timestamp, week_interval};
use crate::config::PeriodSelection;
use crate::constants::time::DAYS_PER_WEEK;
use crate::models::RawMetricRecord;

/// A concrete chart window: both bounds are Mondays, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPeriod {
    /// Effective start Monday (after smart-start trimming)
    pub start: NaiveDate,
    /// End Monday (the newest week bucket)
    pub end: NaiveDate,
}

/// Resolve a period selection into a concrete window.
///
/// The end Monday is the Monday of the week containing `today`; a custom end
/// date of today or later clamps to it so custom ranges stay consistent with
/// the fixed presets. A custom range with a missing start or end (or with
/// start after end) no-ops to the full available dataset instead of raising.
#[must_use]
pub fn resolve_period(
    selection: &PeriodSelection,
    today: NaiveDate,
    records: &[RawMetricRecord],
) -> ResolvedPeriod {
    let current_monday = monday_of(today);

    let (theoretical_start, end) = match selection.kind.weeks() {
        Some(weeks) => (
            current_monday - Duration::days(weeks * DAYS_PER_WEEK),
            current_monday,
        ),
        None => resolve_custom(selection, today, current_monday, records),
    };

    let start = smart_start(theoretical_start, end, records);
    ResolvedPeriod { start, end }
}

/// Resolve a custom range into (theoretical start Monday, end Monday).
fn resolve_custom(
    selection: &PeriodSelection,
    today: NaiveDate,
    current_monday: NaiveDate,
    records: &[RawMetricRecord],
) -> (NaiveDate, NaiveDate) {
    match (selection.custom_start, selection.custom_end) {
        (Some(custom_start), Some(custom_end)) if custom_start <= custom_end => {
            let end = if custom_end >= today {
                current_monday
            } else {
                monday_of(custom_end)
            };
            // A start beyond the clamped end collapses to the end week
            let start = monday_of(custom_start).min(end);
            (start, end)
        }
        _ => {
            debug!("custom range missing or invalid; falling back to full dataset");
            (earliest_record_week(records).unwrap_or(current_monday).min(current_monday), current_monday)
        }
    }
}

/// Monday of the earliest parseable record, if any.
fn earliest_record_week(records: &[RawMetricRecord]) -> Option<NaiveDate> {
    records
        .iter()
        .filter_map(|record| parse_timestamp(&record.timestamp))
        .min()
        .map(|earliest| monday_of(earliest.date()))
}

/// Smart-start policy: advance the window start to the first week that
/// actually contains data.
///
/// Restricts records to the candidate window; if the earliest match lands in
/// a later week than `theoretical_start`, the start advances to that week.
/// The start never moves earlier than requested and the window is never
/// extended. With no records in range the theoretical start stands; an
/// all-gap timeline is valid output.
#[must_use]
pub fn smart_start(
    theoretical_start: NaiveDate,
    end: NaiveDate,
    records: &[RawMetricRecord],
) -> NaiveDate {
    let Some(window_start) = theoretical_start.and_hms_opt(0, 0, 0) else {
        return theoretical_start;
    };
    let Some((_, window_end)) = week_interval(end) else {
        return theoretical_start;
    };

    let earliest_in_window = records
        .iter()
        .filter_map(|record| parse_timestamp(&record.timestamp))
        .filter(|timestamp| *timestamp >= window_start && *timestamp <= window_end)
        .min();

    match earliest_in_window {
        Some(earliest) => {
            let earliest_week = monday_of(earliest.date());
            if earliest_week > theoretical_start {
                debug!(%theoretical_start, effective = %earliest_week, "smart start trimmed leading empty weeks");
            }
            earliest_week.max(theoretical_start)
        }
        None => theoretical_start,
    }
}
