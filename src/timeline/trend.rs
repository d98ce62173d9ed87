// ABOUTME: Ordinary-least-squares trend fit over valid historical week points
// ABOUTME: Projects the fitted line across every timeline index, gaps and forecast included
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics
#![allow(clippy::cast_precision_loss)] // Safe: week indexes and metric values are small

//! Trend estimation.

use tracing::debug;

use crate::constants::trend::MIN_REGRESSION_POINTS;
use crate::models::WeekPoint;

/// A fitted trend line, index-aligned with the combined series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    /// Rate of change per week bucket
    pub slope: f64,
    /// Value at index 0
    pub intercept: f64,
    /// Projected trend value at every index of the combined series,
    /// including gap and forecast indexes
    pub values: Vec<f64>,
}

impl TrendLine {
    /// Projected value at one index.
    #[must_use]
    pub fn at(&self, index: usize) -> f64 {
        self.slope.mul_add(index as f64, self.intercept)
    }
}

/// Fit an ordinary-least-squares line over the valid historical points.
///
/// Samples are `(index, value)` pairs where the index is the point's true
/// position in the combined series (the visual x-axis), not a renumbered
/// compact index. Forecast points and gaps contribute no samples but do
/// receive projected values.
///
/// Returns `None` for fewer than 2 valid points or zero variance in x; the
/// caller omits the trend from rendering instead of defaulting it to zero.
#[must_use]
pub fn fit_trend(points: &[WeekPoint]) -> Option<TrendLine> {
    let samples: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .filter(|(_, point)| !point.is_forecast)
        .filter_map(|(index, point)| point.value.map(|value| (index as f64, value)))
        .collect();

    if samples.len() < MIN_REGRESSION_POINTS {
        debug!(valid = samples.len(), "not enough valid points for a trend line");
        return None;
    }

    let n = samples.len() as f64;
    let sum_x = samples.iter().map(|(x, _)| x).sum::<f64>();
    let sum_y = samples.iter().map(|(_, y)| y).sum::<f64>();
    let sum_xy = samples.iter().map(|(x, y)| x * y).sum::<f64>();
    let sum_xx = samples.iter().map(|(x, _)| x * x).sum::<f64>();

    let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
    if denominator.abs() < f64::EPSILON {
        debug!("zero variance in x; trend line undefined");
        return None;
    }

    let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
    let intercept = slope.mul_add(-sum_x, sum_y) / n;

    let values = (0..points.len())
        .map(|index| slope.mul_add(index as f64, intercept))
        .collect();

    Some(TrendLine {
        slope,
        intercept,
        values,
    })
}
