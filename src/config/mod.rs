// ABOUTME: Host-facing configuration types for the trend chart
// ABOUTME: Period selection presets and forecast service configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! # Configuration
//!
//! Types the host UI owns and hands to the engine on every invocation: the
//! period selector state and the forecast configuration. The engine never
//! persists these; they are plain inputs.

/// Forecast model and horizon configuration
pub mod forecast;

/// Period selector state (fixed presets and custom ranges)
pub mod period;

pub use forecast::{ForecastConfig, ForecastModel};
pub use period::{PeriodKind, PeriodSelection};
