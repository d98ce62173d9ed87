// ABOUTME: Async seam to the external data-fetch layer (historical series and forecast service)
// ABOUTME: Ships a file-backed implementation used by the CLI and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! # Metric Sources
//!
//! The engine never fetches data itself: it consumes resolved, immutable
//! arrays. [`MetricsSource`] mirrors the host data layer so applications can
//! plug in an HTTP client while the CLI and tests use [`JsonFileSource`].
//! Fetch failures surface here as [`AppError`]s; by the time the pipeline
//! runs they have already been handled.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::ForecastConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::models::{ForecastRecord, MetricFilters, RawMetricRecord};

/// Asynchronous supplier of metric and forecast records.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Fetch the historical series for one metric scope.
    async fn historical_series(&self, filters: &MetricFilters) -> AppResult<Vec<RawMetricRecord>>;

    /// Ask the forecasting service for a continuation of `historical`.
    ///
    /// Implementations validate the configured horizon and call the model by
    /// name; the engine treats the result as opaque weekly records.
    async fn forecast(
        &self,
        config: &ForecastConfig,
        historical: &[RawMetricRecord],
        filters: &MetricFilters,
    ) -> AppResult<Vec<ForecastRecord>>;
}

/// File-backed [`MetricsSource`] reading JSON arrays from disk.
///
/// The metrics file holds a `RawMetricRecord` array already scoped to the
/// requested filters; the optional forecast file holds a `ForecastRecord`
/// array. Used by the `cadence-trends` CLI and by integration tests.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    metrics_path: PathBuf,
    forecast_path: Option<PathBuf>,
}

impl JsonFileSource {
    /// Create a source reading historical records from `metrics_path`.
    #[must_use]
    pub fn new(metrics_path: impl Into<PathBuf>) -> Self {
        Self {
            metrics_path: metrics_path.into(),
            forecast_path: None,
        }
    }

    /// Also read forecast records from `forecast_path`.
    #[must_use]
    pub fn with_forecast_file(mut self, forecast_path: impl Into<PathBuf>) -> Self {
        self.forecast_path = Some(forecast_path.into());
        self
    }

    async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<T> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|error| {
            AppError::storage(format!("could not read {}", path.display())).with_source(error)
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl MetricsSource for JsonFileSource {
    async fn historical_series(&self, filters: &MetricFilters) -> AppResult<Vec<RawMetricRecord>> {
        debug!(metric = %filters.metric, path = %self.metrics_path.display(), "loading historical series");
        Self::read_json(&self.metrics_path).await
    }

    async fn forecast(
        &self,
        config: &ForecastConfig,
        _historical: &[RawMetricRecord],
        filters: &MetricFilters,
    ) -> AppResult<Vec<ForecastRecord>> {
        config.validate()?;
        let Some(path) = self.forecast_path.as_deref() else {
            return Ok(Vec::new());
        };
        debug!(
            metric = %filters.metric,
            model = %config.model,
            horizon = config.horizon_weeks,
            path = %path.display(),
            "loading forecast records"
        );
        Self::read_json(path).await.map_err(|error| {
            AppError::external_service(service_names::FORECAST_SERVICE, error.to_string())
        })
    }
}
