// ABOUTME: Median and mean reference values over the valid historical series
// ABOUTME: Pure scalar outputs recomputed whenever the filtered series changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics
#![allow(clippy::cast_precision_loss)] // Safe: series lengths are small

//! Reference-line statistics.

use crate::models::{SeriesStats, WeekPoint};

/// Compute the median/mean reference values from valid historical points.
///
/// Gaps and forecast points are excluded. With no valid values both
/// statistics default to 0.0.
#[must_use]
pub fn compute_stats(points: &[WeekPoint]) -> SeriesStats {
    let mut values: Vec<f64> = points
        .iter()
        .filter(|point| !point.is_forecast)
        .filter_map(|point| point.value)
        .collect();

    if values.is_empty() {
        return SeriesStats::EMPTY;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    // Even counts take the element at n/2; the reference line never averages
    // the two middle values.
    let median = values[values.len() / 2];

    SeriesStats { median, mean }
}
