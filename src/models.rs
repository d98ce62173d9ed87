// ABOUTME: Common data models for metric records, week points, and chart output
// ABOUTME: Wire-compatible (camelCase JSON) types shared with the fetch and rendering layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! # Data Models
//!
//! Domain types exchanged with the data-fetch layer (inputs) and the chart
//! rendering layer (outputs). All types serialize with camelCase field names
//! to match the dashboard wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar;

/// One raw metric observation as delivered by the data-fetch layer.
///
/// The timestamp stays a string at this boundary: malformed values must
/// degrade to non-matches during week bucketing instead of failing
/// deserialization of an entire payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetricRecord {
    /// ISO-8601 timestamp of the observation
    pub timestamp: String,
    /// Metric value (a duration in hours or a count, depending on the metric)
    pub value: f64,
    /// Number of issues backing this observation, when the metric has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_count: Option<u32>,
}

impl RawMetricRecord {
    /// Create a record from parts
    #[must_use]
    pub fn new(timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            value,
            issue_count: None,
        }
    }

    /// Attach an issue count
    #[must_use]
    pub const fn with_issue_count(mut self, issue_count: u32) -> Self {
        self.issue_count = Some(issue_count);
        self
    }
}

/// One forecast observation returned by the forecasting service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    /// ISO-8601 timestamp of the predicted week
    pub timestamp: String,
    /// Predicted metric value
    pub predicted_value: f64,
    /// Lower bound of the confidence interval
    pub confidence_low: f64,
    /// Upper bound of the confidence interval
    pub confidence_high: f64,
}

/// One week bucket of the assembled timeline, ready to plot.
///
/// `value == None` means "no data this week" and must never be rendered as
/// zero. `forecast_value` carries the forecast overlay series: it is set on
/// every forecast point and, identically to `value`, on the single bridge
/// point where the historical and forecast segments share a vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPoint {
    /// Monday of this week bucket
    pub week_start: NaiveDate,
    /// Chart label, always including the year (e.g. "Jan 1, 2024")
    pub label: String,
    /// Historical value for this week, absent for gaps and forecast weeks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Issue count behind the value, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_count: Option<u32>,
    /// Whether this point belongs to the forecast continuation
    pub is_forecast: bool,
    /// Forecast overlay value (forecast points and the bridge anchor)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_value: Option<f64>,
    /// Confidence interval of a forecast point, `[low, high]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_range: Option<(f64, f64)>,
}

impl WeekPoint {
    /// A historical week bucket with no matching record.
    #[must_use]
    pub fn gap(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            label: calendar::week_label(week_start),
            value: None,
            issue_count: None,
            is_forecast: false,
            forecast_value: None,
            forecast_range: None,
        }
    }

    /// A historical week bucket backed by a matched record.
    #[must_use]
    pub fn matched(week_start: NaiveDate, value: f64, issue_count: Option<u32>) -> Self {
        Self {
            value: Some(value),
            issue_count,
            ..Self::gap(week_start)
        }
    }

    /// A forecast week bucket.
    #[must_use]
    pub fn forecast(week_start: NaiveDate, predicted: f64, range: (f64, f64)) -> Self {
        Self {
            is_forecast: true,
            forecast_value: Some(predicted),
            forecast_range: Some(range),
            ..Self::gap(week_start)
        }
    }

    /// Whether this bucket is a gap: a historical week with no data.
    #[must_use]
    pub const fn is_gap(&self) -> bool {
        self.value.is_none() && !self.is_forecast
    }
}

/// Scalar reference values derived from the historical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStats {
    /// Median of valid historical values (0.0 when none exist)
    pub median: f64,
    /// Arithmetic mean of valid historical values (0.0 when none exist)
    pub mean: f64,
}

impl SeriesStats {
    /// Stats for an all-gap series.
    pub const EMPTY: Self = Self {
        median: 0.0,
        mean: 0.0,
    };
}

/// Complete output of the trend pipeline, ready for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChartData {
    /// Combined historical + forecast series, oldest first
    pub points: Vec<WeekPoint>,
    /// Trend value per point index; `None` when the fit is undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Vec<f64>>,
    /// Median/mean reference lines
    pub stats: SeriesStats,
}

/// The engineering metric a series belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Time from first commit to production, in hours
    LeadTime,
    /// Time from work start to completion, in hours
    CycleTime,
    /// Deployments per week
    DeploymentFrequency,
    /// Share of deployments causing a failure, as a percentage
    ChangeFailureRate,
    /// Time to restore service after a failure, in hours
    TimeToRestore,
    /// Issues completed per week
    IssueThroughput,
}

impl MetricKind {
    /// Display name used in chart titles and CLI output
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::LeadTime => "Lead Time",
            Self::CycleTime => "Cycle Time",
            Self::DeploymentFrequency => "Deployment Frequency",
            Self::ChangeFailureRate => "Change Failure Rate",
            Self::TimeToRestore => "Time to Restore",
            Self::IssueThroughput => "Issue Throughput",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Scope of the series being charted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilters {
    /// Which metric to chart
    pub metric: MetricKind,
    /// Restrict to one team, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Restrict to one project, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl MetricFilters {
    /// Filters covering every team and project for one metric
    #[must_use]
    pub const fn for_metric(metric: MetricKind) -> Self {
        Self {
            metric,
            team: None,
            project: None,
        }
    }
}
