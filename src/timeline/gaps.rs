// ABOUTME: Gap policy for the assembled series: optionally drops all-gap week buckets
// ABOUTME: Forecast points always survive regardless of the flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Gap-week removal.

use tracing::debug;

use crate::models::WeekPoint;

/// Apply the "remove empty weeks" toggle.
///
/// When `remove_empty_weeks` is set, every point with no value is dropped,
/// except forecast points, which are always retained. When unset, the series
/// passes through unchanged and gaps remain as breaks in the rendered line.
#[must_use]
pub fn apply_gap_policy(points: Vec<WeekPoint>, remove_empty_weeks: bool) -> Vec<WeekPoint> {
    if !remove_empty_weeks {
        return points;
    }

    let before = points.len();
    let kept: Vec<WeekPoint> = points
        .into_iter()
        .filter(|point| point.value.is_some() || point.is_forecast)
        .collect();
    if kept.len() < before {
        debug!(removed = before - kept.len(), kept = kept.len(), "removed empty weeks");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn monday(d: u32) -> NaiveDate {
        // Mondays of January 2024: 1, 8, 15, 22, 29
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or_default()
    }

    #[test]
    fn test_pass_through_when_disabled() {
        let points = vec![WeekPoint::gap(monday(1)), WeekPoint::matched(monday(8), 4.0, None)];
        assert_eq!(apply_gap_policy(points.clone(), false), points);
    }

    #[test]
    fn test_gaps_dropped_when_enabled() {
        let points = vec![WeekPoint::gap(monday(1)), WeekPoint::matched(monday(8), 4.0, None)];
        let kept = apply_gap_policy(points, true);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].value, Some(4.0));
    }

    #[test]
    fn test_forecast_points_always_survive() {
        let points = vec![
            WeekPoint::gap(monday(1)),
            WeekPoint::forecast(monday(8), 6.0, (5.0, 7.0)),
        ];
        let kept = apply_gap_policy(points, true);
        assert_eq!(kept.len(), 1);
        assert!(kept[0].is_forecast);
    }
}
