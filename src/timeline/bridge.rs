// ABOUTME: Appends the forecast continuation to the historical series without a visual seam
// ABOUTME: The last historical point becomes the single shared bridge vertex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Forecast bridging.

use chrono::Duration;
use tracing::debug;

use crate::calendar::week_of_timestamp;
use crate::constants::time::DAYS_PER_WEEK;
use crate::models::{ForecastRecord, WeekPoint};

/// Append a forecast continuation to the historical series.
///
/// When both segments exist, the last historical point becomes the bridge
/// point: it copies its own value into `forecast_value` (the forecast
/// anchor) while staying `is_forecast == false`, so the historical and
/// forecast lines share exactly one vertex and render as one continuous
/// shape. Forecast week-starts continue the weekly cadence from the last
/// historical week. With no historical points the forecast stands alone and
/// week-starts derive from the records' own timestamps.
///
/// Predicted values and confidence lower bounds are clamped to zero: the
/// supported metrics are durations and counts, which cannot be negative.
#[must_use]
pub fn bridge_forecast(
    mut historical: Vec<WeekPoint>,
    forecast: &[ForecastRecord],
) -> Vec<WeekPoint> {
    if forecast.is_empty() {
        return historical;
    }

    if let Some(last) = historical.last_mut() {
        last.forecast_value = last.value;
        let anchor_week = last.week_start;
        debug!(%anchor_week, points = forecast.len(), "bridging forecast onto historical series");

        historical.extend(forecast.iter().enumerate().map(|(offset, record)| {
            let week = anchor_week + Duration::days(DAYS_PER_WEEK * (offset as i64 + 1));
            forecast_point(week, record)
        }));
        historical
    } else {
        // No history: the forecast stands alone, no bridge
        forecast
            .iter()
            .filter_map(|record| {
                let week = week_of_timestamp(&record.timestamp)?;
                Some(forecast_point(week, record))
            })
            .collect()
    }
}

fn forecast_point(week: chrono::NaiveDate, record: &ForecastRecord) -> WeekPoint {
    WeekPoint::forecast(
        week,
        record.predicted_value.max(0.0),
        (record.confidence_low.max(0.0), record.confidence_high),
    )
}
