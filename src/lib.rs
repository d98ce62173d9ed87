// ABOUTME: Main library entry point for the Cadence trend engine
// ABOUTME: Weekly timeline reconstruction, forecast overlay, and trend fitting for metric charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

#![deny(unsafe_code)]

//! # Cadence Trends
//!
//! Weekly time-series reconstruction and forecast-overlay engine for the
//! Cadence engineering-metrics dashboard. Given sparse, irregularly
//! timestamped metric records and an optional forecast continuation, the
//! engine builds a gap-aware, chronologically contiguous weekly timeline,
//! merges historical and forecast segments without a visual seam, and
//! derives a linear trend line plus median/mean reference values.
//!
//! ## Features
//!
//! - **Monday-aligned week buckets**: simple calendar-date arithmetic, one
//!   bucket per week, no skipped weeks
//! - **Smart start**: leading all-gap weeks are trimmed against available
//!   data, never past the requested window
//! - **Seamless forecast bridging**: historical and forecast segments share
//!   exactly one vertex
//! - **Pure pipeline**: identical inputs always produce identical output;
//!   "today" is an explicit argument, never wall-clock time
//!
//! ## Example
//!
//! ```rust
//! use cadence_trends::config::{PeriodKind, PeriodSelection};
//! use cadence_trends::models::RawMetricRecord;
//! use cadence_trends::timeline::build_trend_chart;
//! use chrono::NaiveDate;
//!
//! let records = vec![RawMetricRecord::new("2024-01-01T09:00:00Z", 5.0)];
//! let selection = PeriodSelection::fixed(PeriodKind::Weeks4);
//! let today = NaiveDate::from_ymd_opt(2024, 1, 22).expect("valid date");
//!
//! let chart = build_trend_chart(&records, &[], &selection, today);
//! assert_eq!(chart.points.len(), 4);
//! assert_eq!(chart.points[0].value, Some(5.0));
//! ```
//!
//! ## Architecture
//!
//! The engine is a stateless, synchronous pipeline (see [`timeline`]):
//! period resolution → week expansion → record matching → gap policy →
//! forecast bridge → trend/statistics. Data fetching is the host's
//! asynchronous concern behind [`source::MetricsSource`]; rendering consumes
//! the serialized [`models::TrendChartData`].

/// Calendar-week arithmetic and lenient timestamp parsing
pub mod calendar;

/// Host-facing configuration (period selector, forecast service)
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Common data models for metric records and chart output
pub mod models;

/// Async seam to the external data-fetch layer
pub mod source;

/// The weekly trend timeline pipeline
pub mod timeline;
