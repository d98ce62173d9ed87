// ABOUTME: Forecast service configuration exposed to the host UI
// ABOUTME: Model selection, horizon validation, and the enabled toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Forecast configuration.
//!
//! The forecasting models themselves are an external service called by name;
//! this module only describes which model to ask for and how far ahead.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::forecast::SUPPORTED_HORIZONS;
use crate::errors::{AppError, AppResult};

/// Forecasting model offered by the external service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastModel {
    /// Straight-line extrapolation
    LinearRegression,
    /// Exponentially weighted extrapolation
    ExponentialSmoothing,
    /// Prophet (seasonal decomposition)
    Prophet,
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LinearRegression => "linear_regression",
            Self::ExponentialSmoothing => "exponential_smoothing",
            Self::Prophet => "prophet",
        };
        f.write_str(name)
    }
}

/// Forecast configuration owned by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastConfig {
    /// Which model the external service should run
    pub model: ForecastModel,
    /// How many weeks ahead to predict (12 or 24)
    pub horizon_weeks: u8,
    /// Whether the forecast overlay is shown at all
    pub enabled: bool,
}

impl ForecastConfig {
    /// Check the horizon against what the service supports.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for an unsupported horizon.
    pub fn validate(&self) -> AppResult<()> {
        if SUPPORTED_HORIZONS.contains(&self.horizon_weeks) {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "Unsupported forecast horizon {} weeks; supported: {SUPPORTED_HORIZONS:?}",
                self.horizon_weeks
            )))
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            model: ForecastModel::LinearRegression,
            horizon_weeks: 12,
            enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ForecastConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unsupported_horizon_is_rejected() {
        let config = ForecastConfig {
            horizon_weeks: 13,
            ..ForecastConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_model_names_match_service_contract() {
        assert_eq!(ForecastModel::Prophet.to_string(), "prophet");
        let json = serde_json::to_string(&ForecastModel::ExponentialSmoothing).unwrap();
        assert_eq!(json, "\"exponential_smoothing\"");
    }
}
