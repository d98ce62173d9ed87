// ABOUTME: Weekly trend timeline pipeline for the metrics dashboard chart
// ABOUTME: Orchestrates period resolution, bucketing, matching, gap policy, forecast bridging, and fitting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! # Timeline Pipeline
//!
//! Reconstructs a gap-aware, chronologically contiguous weekly timeline from
//! sparse, irregularly-timestamped metric records, merges an optional
//! forecast continuation without a visual seam, and derives a linear trend
//! line plus median/mean reference values.
//!
//! The pipeline is pure and synchronous: identical inputs always produce
//! identical output, and "today" is an explicit input rather than wall-clock
//! time. Stages run in order:
//!
//! 1. [`period::resolve_period`]: lookback selection to a concrete window
//! 2. [`builder::expand_weeks`]: window to contiguous Monday buckets
//! 3. [`matcher::match_records`]: buckets to week points (or gaps)
//! 4. [`gaps::apply_gap_policy`]: optional gap-week removal
//! 5. [`bridge::bridge_forecast`]: seamless forecast continuation
//! 6. [`trend::fit_trend`] / [`stats::compute_stats`]: overlays

use chrono::NaiveDate;
use tracing::debug;

use crate::config::PeriodSelection;
use crate::models::{ForecastRecord, RawMetricRecord, TrendChartData};

pub mod bridge;
pub mod builder;
pub mod gaps;
pub mod matcher;
pub mod period;
pub mod stats;
pub mod trend;

pub use bridge::bridge_forecast;
pub use builder::{apply_fifty_two_week_padding, expand_weeks};
pub use gaps::apply_gap_policy;
pub use matcher::match_records;
pub use period::{resolve_period, ResolvedPeriod};
pub use stats::compute_stats;
pub use trend::{fit_trend, TrendLine};

/// Build the complete chart series for one metric.
///
/// This is the single entry point the application controller calls whenever
/// raw data, forecast data, the period selection, or the gap-removal flag
/// change. Re-invoking with the same inputs (including the same `today`)
/// yields identical output.
#[must_use]
pub fn build_trend_chart(
    records: &[RawMetricRecord],
    forecast: &[ForecastRecord],
    selection: &PeriodSelection,
    today: NaiveDate,
) -> TrendChartData {
    let period = period::resolve_period(selection, today, records);
    debug!(start = %period.start, end = %period.end, "resolved chart window");

    let mut weeks = builder::expand_weeks(&period);
    builder::apply_fifty_two_week_padding(&mut weeks, selection.kind);

    let matched = matcher::match_records(&weeks, records);
    let filtered = gaps::apply_gap_policy(matched, selection.remove_empty_weeks);
    let combined = bridge::bridge_forecast(filtered, forecast);

    let trend = trend::fit_trend(&combined).map(|line| line.values);
    let stats = stats::compute_stats(&combined);
    debug!(
        points = combined.len(),
        has_trend = trend.is_some(),
        "assembled trend chart series"
    );

    TrendChartData {
        points: combined,
        trend,
        stats,
    }
}
