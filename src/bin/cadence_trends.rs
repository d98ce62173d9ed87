// ABOUTME: Cadence Trends CLI - builds trend chart data from metric record files
// ABOUTME: End-to-end driver for the timeline pipeline with table and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Cadence Trends CLI.
//!
//! Usage:
//! ```bash
//! # 12-week lead-time chart from a metrics file
//! cadence-trends --metrics lead_time.json
//!
//! # 52-week window with gap weeks removed, JSON output
//! cadence-trends --metrics lead_time.json --period 52w --remove-empty-weeks --format json
//!
//! # Custom range with a forecast overlay
//! cadence-trends --metrics lead_time.json --forecast forecast.json \
//!     --period custom --start 2023-06-01 --end 2023-12-31
//!
//! # Reproducible output for a pinned "today"
//! cadence-trends --metrics lead_time.json --today 2024-01-22
//! ```

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use cadence_trends::config::{ForecastConfig, ForecastModel, PeriodKind, PeriodSelection};
use cadence_trends::logging::LoggingConfig;
use cadence_trends::models::{MetricFilters, MetricKind, TrendChartData};
use cadence_trends::source::{JsonFileSource, MetricsSource};
use cadence_trends::timeline::build_trend_chart;

#[derive(Parser)]
#[command(
    name = "cadence-trends",
    about = "Cadence Trends - weekly trend chart builder",
    long_about = "Builds the weekly trend timeline, forecast overlay, and reference statistics for one engineering metric."
)]
struct Cli {
    /// Path to a JSON file holding the historical metric records
    #[arg(long)]
    metrics: PathBuf,

    /// Path to a JSON file holding forecast records (enables the overlay)
    #[arg(long)]
    forecast: Option<PathBuf>,

    /// Metric being charted (affects labels only; records are pre-scoped)
    #[arg(long, value_enum, default_value_t = MetricArg::LeadTime)]
    metric: MetricArg,

    /// Lookback period
    #[arg(long, value_enum, default_value_t = PeriodArg::W12)]
    period: PeriodArg,

    /// Inclusive start date of a custom period
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Inclusive end date of a custom period
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Drop all-gap weeks from the series
    #[arg(long)]
    remove_empty_weeks: bool,

    /// Pin "today" for reproducible output (defaults to the local date)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Forecast model to request
    #[arg(long, value_enum, default_value_t = ModelArg::LinearRegression)]
    forecast_model: ModelArg,

    /// Forecast horizon in weeks (12 or 24)
    #[arg(long, default_value_t = 12)]
    forecast_horizon: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PeriodArg {
    #[value(name = "4w")]
    W4,
    #[value(name = "12w")]
    W12,
    #[value(name = "24w")]
    W24,
    #[value(name = "52w")]
    W52,
    #[value(name = "104w")]
    W104,
    #[value(name = "260w")]
    W260,
    Custom,
}

impl From<PeriodArg> for PeriodKind {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::W4 => Self::Weeks4,
            PeriodArg::W12 => Self::Weeks12,
            PeriodArg::W24 => Self::Weeks24,
            PeriodArg::W52 => Self::Weeks52,
            PeriodArg::W104 => Self::Weeks104,
            PeriodArg::W260 => Self::Weeks260,
            PeriodArg::Custom => Self::Custom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    LeadTime,
    CycleTime,
    DeploymentFrequency,
    ChangeFailureRate,
    TimeToRestore,
    IssueThroughput,
}

impl From<MetricArg> for MetricKind {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::LeadTime => Self::LeadTime,
            MetricArg::CycleTime => Self::CycleTime,
            MetricArg::DeploymentFrequency => Self::DeploymentFrequency,
            MetricArg::ChangeFailureRate => Self::ChangeFailureRate,
            MetricArg::TimeToRestore => Self::TimeToRestore,
            MetricArg::IssueThroughput => Self::IssueThroughput,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModelArg {
    LinearRegression,
    ExponentialSmoothing,
    Prophet,
}

impl From<ModelArg> for ForecastModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::LinearRegression => Self::LinearRegression,
            ModelArg::ExponentialSmoothing => Self::ExponentialSmoothing,
            ModelArg::Prophet => Self::Prophet,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let selection = build_selection(&cli);
    let filters = MetricFilters::for_metric(cli.metric.into());

    let mut source = JsonFileSource::new(&cli.metrics);
    if let Some(path) = &cli.forecast {
        source = source.with_forecast_file(path);
    }

    let records = source.historical_series(&filters).await?;
    info!(records = records.len(), metric = %filters.metric, "loaded historical series");

    let forecast_config = ForecastConfig {
        model: cli.forecast_model.into(),
        horizon_weeks: cli.forecast_horizon,
        enabled: cli.forecast.is_some(),
    };
    let forecast = if forecast_config.enabled {
        source.forecast(&forecast_config, &records, &filters).await?
    } else {
        Vec::new()
    };

    let chart = build_trend_chart(&records, &forecast, &selection, today);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
        OutputFormat::Table => print_table(&chart, &filters),
    }
    Ok(())
}

fn build_selection(cli: &Cli) -> PeriodSelection {
    PeriodSelection {
        kind: cli.period.into(),
        custom_start: cli.start,
        custom_end: cli.end,
        remove_empty_weeks: cli.remove_empty_weeks,
    }
}

fn print_table(chart: &TrendChartData, filters: &MetricFilters) {
    println!("{} - weekly trend", filters.metric);
    println!("{:<14} {:>10} {:>10} {:>10}", "Week", "Value", "Forecast", "Trend");

    for (index, point) in chart.points.iter().enumerate() {
        let value = point.value.map_or_else(|| "-".to_owned(), |v| format!("{v:.1}"));
        let forecast = point
            .forecast_value
            .map_or_else(|| "-".to_owned(), |v| format!("{v:.1}"));
        let trend = chart
            .trend
            .as_ref()
            .and_then(|values| values.get(index))
            .map_or_else(|| "-".to_owned(), |v| format!("{v:.1}"));
        println!("{:<14} {:>10} {:>10} {:>10}", point.label, value, forecast, trend);
    }

    println!();
    println!("mean: {:.2}  median: {:.2}", chart.stats.mean, chart.stats.median);
}
