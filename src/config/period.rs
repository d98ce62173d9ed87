// ABOUTME: Period selector state shared between the host UI and the resolver
// ABOUTME: Six fixed week-count presets plus a custom inclusive date range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Period selection for the trend chart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookback presets offered by the period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodKind {
    /// Last 4 weeks
    #[serde(rename = "4W")]
    Weeks4,
    /// Last 12 weeks
    #[serde(rename = "12W")]
    Weeks12,
    /// Last 24 weeks
    #[serde(rename = "24W")]
    Weeks24,
    /// Last 52 weeks
    #[serde(rename = "52W")]
    Weeks52,
    /// Last 104 weeks
    #[serde(rename = "104W")]
    Weeks104,
    /// Last 260 weeks
    #[serde(rename = "260W")]
    Weeks260,
    /// Custom inclusive start/end dates
    Custom,
}

impl PeriodKind {
    /// Number of weeks a fixed preset spans; `None` for custom ranges.
    #[must_use]
    pub const fn weeks(&self) -> Option<i64> {
        match self {
            Self::Weeks4 => Some(4),
            Self::Weeks12 => Some(12),
            Self::Weeks24 => Some(24),
            Self::Weeks52 => Some(52),
            Self::Weeks104 => Some(104),
            Self::Weeks260 => Some(260),
            Self::Custom => None,
        }
    }

    /// All fixed presets, in selector order.
    pub const FIXED: [Self; 6] = [
        Self::Weeks4,
        Self::Weeks12,
        Self::Weeks24,
        Self::Weeks52,
        Self::Weeks104,
        Self::Weeks260,
    ];
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom => f.write_str("custom"),
            // Safe: every non-custom variant has a week count
            other => match other.weeks() {
                Some(weeks) => write!(f, "{weeks}w"),
                None => f.write_str("custom"),
            },
        }
    }
}

/// Period selector state, owned by the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSelection {
    /// Selected lookback preset
    pub kind: PeriodKind,
    /// Inclusive start date of a custom range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_start: Option<NaiveDate>,
    /// Inclusive end date of a custom range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_end: Option<NaiveDate>,
    /// Drop all-gap weeks from the rendered series
    #[serde(default)]
    pub remove_empty_weeks: bool,
}

impl PeriodSelection {
    /// A fixed-preset selection.
    #[must_use]
    pub const fn fixed(kind: PeriodKind) -> Self {
        Self {
            kind,
            custom_start: None,
            custom_end: None,
            remove_empty_weeks: false,
        }
    }

    /// A custom date-range selection (inclusive on both ends).
    #[must_use]
    pub const fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            kind: PeriodKind::Custom,
            custom_start: Some(start),
            custom_end: Some(end),
            remove_empty_weeks: false,
        }
    }

    /// Toggle gap-week removal.
    #[must_use]
    pub const fn with_remove_empty_weeks(mut self, remove: bool) -> Self {
        self.remove_empty_weeks = remove;
        self
    }
}

impl Default for PeriodSelection {
    fn default() -> Self {
        Self::fixed(PeriodKind::Weeks12)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_fixed_presets_expose_week_counts() {
        let counts: Vec<i64> = PeriodKind::FIXED
            .iter()
            .map(|kind| kind.weeks().unwrap())
            .collect();
        assert_eq!(counts, vec![4, 12, 24, 52, 104, 260]);
        assert_eq!(PeriodKind::Custom.weeks(), None);
    }

    #[test]
    fn test_selection_wire_format_matches_selector() {
        let json = serde_json::to_string(&PeriodSelection::fixed(PeriodKind::Weeks52)).unwrap();
        assert!(json.contains("\"kind\":\"52W\""));
    }
}
