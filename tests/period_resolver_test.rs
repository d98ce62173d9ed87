// ABOUTME: Integration tests for period resolution, custom-range clamping, and smart start
// ABOUTME: Covers the no-op fallback for invalid custom ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;

use cadence_trends::config::{PeriodKind, PeriodSelection};
use cadence_trends::models::RawMetricRecord;
use cadence_trends::timeline::{resolve_period, ResolvedPeriod};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_fixed_period_window_ends_at_the_current_monday() {
    let today = date(2024, 1, 25); // a Thursday
    let period = resolve_period(&PeriodSelection::fixed(PeriodKind::Weeks4), today, &[]);
    assert_eq!(
        period,
        ResolvedPeriod {
            start: date(2023, 12, 25),
            end: date(2024, 1, 22),
        }
    );
}

#[test]
fn test_custom_end_in_the_future_clamps_to_the_current_monday() {
    let today = date(2024, 1, 25);
    let selection = PeriodSelection::custom(date(2024, 1, 1), date(2024, 3, 1));
    let period = resolve_period(&selection, today, &[]);
    assert_eq!(period.end, date(2024, 1, 22));
    assert_eq!(period.start, date(2024, 1, 1));
}

#[test]
fn test_custom_end_in_the_past_uses_its_own_week() {
    let today = date(2024, 1, 25);
    let selection = PeriodSelection::custom(date(2023, 11, 1), date(2023, 12, 14));
    let period = resolve_period(&selection, today, &[]);
    assert_eq!(period.start, date(2023, 10, 30));
    assert_eq!(period.end, date(2023, 12, 11));
}

#[test]
fn test_smart_start_advances_to_the_first_week_with_data() {
    let today = date(2024, 1, 22);
    let records = vec![
        RawMetricRecord::new("2024-01-03T09:00:00Z", 2.0),
        RawMetricRecord::new("2024-01-17T09:00:00Z", 3.0),
    ];
    let period = resolve_period(&PeriodSelection::fixed(PeriodKind::Weeks12), today, &records);
    assert_eq!(period.start, date(2024, 1, 1));
    assert_eq!(period.end, date(2024, 1, 22));
}

#[test]
fn test_smart_start_ignores_records_outside_the_window() {
    let today = date(2024, 1, 22);
    // Way before the 4-week window: must not drag the start backwards,
    // and must not trim either (no in-window data).
    let records = vec![RawMetricRecord::new("2022-05-01T09:00:00Z", 2.0)];
    let period = resolve_period(&PeriodSelection::fixed(PeriodKind::Weeks4), today, &records);
    assert_eq!(period.start, date(2023, 12, 25));
}

#[test]
fn test_missing_custom_dates_fall_back_to_the_full_dataset() {
    let today = date(2024, 1, 25);
    let records = vec![
        RawMetricRecord::new("2023-09-06T12:00:00Z", 1.0),
        RawMetricRecord::new("2024-01-03T12:00:00Z", 2.0),
    ];
    let selection = PeriodSelection {
        kind: PeriodKind::Custom,
        custom_start: None,
        custom_end: None,
        remove_empty_weeks: false,
    };
    let period = resolve_period(&selection, today, &records);
    assert_eq!(period.start, date(2023, 9, 4));
    assert_eq!(period.end, date(2024, 1, 22));
}

#[test]
fn test_inverted_custom_range_falls_back_to_the_full_dataset() {
    let today = date(2024, 1, 25);
    let records = vec![RawMetricRecord::new("2023-12-06T12:00:00Z", 1.0)];
    let selection = PeriodSelection::custom(date(2024, 1, 10), date(2023, 1, 10));
    let period = resolve_period(&selection, today, &records);
    assert_eq!(period.start, date(2023, 12, 4));
    assert_eq!(period.end, date(2024, 1, 22));
}

#[test]
fn test_custom_fallback_without_records_collapses_to_the_current_week() {
    let today = date(2024, 1, 25);
    let selection = PeriodSelection {
        kind: PeriodKind::Custom,
        custom_start: Some(date(2024, 1, 1)),
        custom_end: None,
        remove_empty_weeks: false,
    };
    let period = resolve_period(&selection, today, &[]);
    assert_eq!(period.start, date(2024, 1, 22));
    assert_eq!(period.end, date(2024, 1, 22));
}
