// ABOUTME: Calendar-week arithmetic shared by the timeline pipeline stages
// ABOUTME: Monday alignment, week intervals, label formatting, and lenient timestamp parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Calendar-week helpers.
//!
//! Every bucket in a trend timeline is one Monday-aligned, 7-day calendar
//! interval. All week math lives here so the pipeline stages agree on what
//! "the week containing a date" means. Bucketing is simple calendar-date
//! arithmetic: timestamps are taken at the wall-clock value they were written
//! with, without timezone conversion.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::constants::{chart, time};

/// Monday of the week containing `date`.
#[must_use]
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let days_from_monday = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(days_from_monday)
}

/// Human-readable label for a week bucket, e.g. "Jan 1, 2024".
///
/// The year is unconditionally included to disambiguate multi-year windows.
#[must_use]
pub fn week_label(week_start: NaiveDate) -> String {
    week_start.format(chart::WEEK_LABEL_FORMAT).to_string()
}

/// Inclusive datetime interval covered by the week starting at `week_start`:
/// `[Monday 00:00:00, Sunday 23:59:59]`.
#[must_use]
pub fn week_interval(week_start: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = week_start.and_hms_opt(0, 0, 0)?;
    let end = (week_start + Duration::days(time::LAST_DAY_OFFSET)).and_hms_opt(23, 59, 59)?;
    Some((start, end))
}

/// Parse a record timestamp leniently.
///
/// Accepts RFC 3339 (with offset), bare ISO date-times, and bare dates.
/// Returns `None` for anything unparsable; callers treat that as a
/// data-quality condition rather than an error.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(with_offset.naive_local());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

/// Monday of the week containing a raw timestamp, if it parses.
#[must_use]
pub fn week_of_timestamp(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw).map(|datetime| monday_of(datetime.date()))
}
