// ABOUTME: Expands a resolved window into contiguous Monday-aligned week buckets
// ABOUTME: Hosts the isolated 52-week label-padding exception for the x-axis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Timeline expansion.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::config::PeriodKind;
use crate::constants::chart::MAX_PADDED_WEEKS;
use crate::constants::time::DAYS_PER_WEEK;

use super::period::ResolvedPeriod;

/// Expand a resolved window into its week-start dates.
///
/// Inclusive on both ends, spaced exactly 7 days apart:
/// `floor((end - start) / 7 days) + 1` entries.
#[must_use]
pub fn expand_weeks(period: &ResolvedPeriod) -> Vec<NaiveDate> {
    let mut weeks = Vec::new();
    let mut current = period.start;
    while current <= period.end {
        weeks.push(current);
        current += Duration::days(DAYS_PER_WEEK);
    }
    weeks
}

/// 52-week label-padding exception.
///
/// The x-axis thins labels to every other bucket, anchored at index 0, so a
/// timeline with an even number of buckets leaves its newest week unlabeled.
/// For the 52-week preset only, an even-length timeline gets one extra
/// trailing week so the axis ends on a labeled bucket; the result is capped
/// at [`MAX_PADDED_WEEKS`] entries. This is a chart-label-density heuristic,
/// not a general rule; no other preset pads.
pub fn apply_fifty_two_week_padding(weeks: &mut Vec<NaiveDate>, kind: PeriodKind) {
    if kind != PeriodKind::Weeks52 {
        return;
    }
    if weeks.is_empty() || weeks.len() % 2 != 0 || weeks.len() >= MAX_PADDED_WEEKS {
        return;
    }
    if let Some(&last) = weeks.last() {
        weeks.push(last + Duration::days(DAYS_PER_WEEK));
        debug!(total = weeks.len(), "padded 52-week timeline for label alignment");
    }
}
