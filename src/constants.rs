// ABOUTME: Application constants for week arithmetic, chart labels, and trend fitting
// ABOUTME: Central place for values shared between the timeline pipeline and its tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Application-wide constants.

/// Calendar and week-bucket arithmetic
pub mod time {
    /// Length of one week bucket in days
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Offset from a week's Monday to its last day (Sunday)
    pub const LAST_DAY_OFFSET: i64 = 6;
}

/// Chart presentation constants
pub mod chart {
    /// Week label format, e.g. "Jan 1, 2024". The year is always included so
    /// multi-year windows stay unambiguous.
    pub const WEEK_LABEL_FORMAT: &str = "%b %-d, %Y";

    /// Upper bound on timeline length for the 52-week preset after the
    /// label-padding exception is applied
    pub const MAX_PADDED_WEEKS: usize = 53;
}

/// Trend fitting constants
pub mod trend {
    /// Minimum number of valid historical points for a least-squares fit
    pub const MIN_REGRESSION_POINTS: usize = 2;
}

/// Forecast service constants
pub mod forecast {
    /// Forecast horizons (in weeks) the external service supports
    pub const SUPPORTED_HORIZONS: [u8; 2] = [12, 24];
}

/// Service identifiers used in logs and error messages
pub mod service_names {
    /// Name of this engine as reported in structured logs
    pub const CADENCE_TRENDS: &str = "cadence-trends";

    /// Name used when reporting forecast-service failures
    pub const FORECAST_SERVICE: &str = "forecast-service";
}
