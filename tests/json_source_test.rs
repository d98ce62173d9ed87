// ABOUTME: Integration tests for the file-backed MetricsSource implementation
// ABOUTME: Covers wire-format parsing, missing files, and forecast configuration validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use cadence_trends::config::{ForecastConfig, ForecastModel};
use cadence_trends::errors::ErrorCode;
use cadence_trends::models::{MetricFilters, MetricKind};
use cadence_trends::source::{JsonFileSource, MetricsSource};

fn filters() -> MetricFilters {
    MetricFilters::for_metric(MetricKind::LeadTime)
}

fn forecast_config() -> ForecastConfig {
    ForecastConfig {
        model: ForecastModel::LinearRegression,
        horizon_weeks: 12,
        enabled: true,
    }
}

#[tokio::test]
async fn test_reads_camel_case_metric_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");
    fs::write(
        &path,
        r#"[
            {"timestamp": "2024-01-01T09:00:00Z", "value": 42.5, "issueCount": 7},
            {"timestamp": "2024-01-10T09:00:00Z", "value": 38.0}
        ]"#,
    )
    .unwrap();

    let source = JsonFileSource::new(&path);
    let records = source.historical_series(&filters()).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].value, 42.5);
    assert_eq!(records[0].issue_count, Some(7));
    assert_eq!(records[1].issue_count, None);
}

#[tokio::test]
async fn test_missing_metrics_file_is_a_storage_error() {
    let source = JsonFileSource::new("/nonexistent/metrics.json");
    let error = source.historical_series(&filters()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_invalid_json_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");
    fs::write(&path, "{ not json ]").unwrap();

    let source = JsonFileSource::new(&path);
    let error = source.historical_series(&filters()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_forecast_without_a_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.json");
    fs::write(&path, "[]").unwrap();

    let source = JsonFileSource::new(&path);
    let forecast = source
        .forecast(&forecast_config(), &[], &filters())
        .await
        .unwrap();
    assert!(forecast.is_empty());
}

#[tokio::test]
async fn test_forecast_records_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let metrics = dir.path().join("metrics.json");
    let forecast = dir.path().join("forecast.json");
    fs::write(&metrics, "[]").unwrap();
    fs::write(
        &forecast,
        r#"[{"timestamp": "2024-01-29T00:00:00Z", "predictedValue": 40.0,
            "confidenceLow": 35.5, "confidenceHigh": 44.5}]"#,
    )
    .unwrap();

    let source = JsonFileSource::new(&metrics).with_forecast_file(&forecast);
    let records = source
        .forecast(&forecast_config(), &[], &filters())
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].predicted_value, 40.0);
    assert_eq!(records[0].confidence_low, 35.5);
}

#[tokio::test]
async fn test_unsupported_horizon_is_rejected_before_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let metrics = dir.path().join("metrics.json");
    fs::write(&metrics, "[]").unwrap();

    let config = ForecastConfig {
        horizon_weeks: 9,
        ..forecast_config()
    };
    let source = JsonFileSource::new(&metrics);
    let error = source.forecast(&config, &[], &filters()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
