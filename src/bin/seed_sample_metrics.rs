// ABOUTME: Sample data seeder for the Cadence trend engine
// ABOUTME: Generates realistic sparse weekly metric JSON fixtures for CLI and chart testing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Sample data seeder.
//!
//! Generates a deterministic, sparse weekly metric series (and optionally a
//! matching forecast continuation) as JSON files consumable by the
//! `cadence-trends` CLI.
//!
//! Usage:
//! ```bash
//! # 52 weeks of lead-time-shaped data
//! seed-sample-metrics --output lead_time.json
//!
//! # Reproducible sparse series with a 12-week forecast
//! seed-sample-metrics --weeks 24 --gap-probability 0.25 --seed 7 \
//!     --output metrics.json --forecast-output forecast.json
//! ```

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use cadence_trends::calendar::monday_of;
use cadence_trends::logging::LoggingConfig;
use cadence_trends::models::{ForecastRecord, RawMetricRecord};

#[derive(Parser)]
#[command(
    name = "seed-sample-metrics",
    about = "Cadence Trends sample data seeder",
    long_about = "Generate sparse weekly metric records (and optional forecast records) as JSON fixtures"
)]
struct SeedArgs {
    /// How many weeks of history to generate
    #[arg(long, default_value_t = 52)]
    weeks: usize,

    /// RNG seed; the same seed always produces the same files
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Baseline metric value (e.g. lead time in hours)
    #[arg(long, default_value_t = 48.0)]
    base: f64,

    /// Per-week drift added to the baseline
    #[arg(long, default_value_t = -0.3, allow_negative_numbers = true)]
    drift: f64,

    /// Probability that a week has no record at all
    #[arg(long, default_value_t = 0.15)]
    gap_probability: f64,

    /// Newest date covered by the series (defaults to the local date)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Where to write the metric records
    #[arg(long, default_value = "sample_metrics.json")]
    output: PathBuf,

    /// Also write a forecast continuation here
    #[arg(long)]
    forecast_output: Option<PathBuf>,

    /// Forecast horizon in weeks
    #[arg(long, default_value_t = 12)]
    forecast_weeks: u8,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let end_monday = monday_of(args.end.unwrap_or_else(|| Local::now().date_naive()));
    let start_monday = end_monday - Duration::weeks(args.weeks.saturating_sub(1) as i64);

    let records = generate_records(&args, &mut rng, start_monday);
    let json = serde_json::to_string_pretty(&records)?;
    fs::write(&args.output, json)
        .with_context(|| format!("could not write {}", args.output.display()))?;
    info!(
        records = records.len(),
        weeks = args.weeks,
        path = %args.output.display(),
        "wrote sample metric records"
    );

    if let Some(forecast_path) = &args.forecast_output {
        let last_value = records.last().map_or(args.base, |record| record.value);
        let forecast = generate_forecast(&args, &mut rng, end_monday, last_value);
        let json = serde_json::to_string_pretty(&forecast)?;
        fs::write(forecast_path, json)
            .with_context(|| format!("could not write {}", forecast_path.display()))?;
        info!(
            records = forecast.len(),
            path = %forecast_path.display(),
            "wrote forecast records"
        );
    }

    Ok(())
}

/// One record for most weeks, placed on a random workday with jitter, with
/// occasional whole-week gaps.
fn generate_records(
    args: &SeedArgs,
    rng: &mut ChaCha8Rng,
    start_monday: NaiveDate,
) -> Vec<RawMetricRecord> {
    let mut records = Vec::with_capacity(args.weeks);

    for week_index in 0..args.weeks {
        if rng.gen::<f64>() < args.gap_probability {
            continue;
        }

        let week = start_monday + Duration::weeks(week_index as i64);
        let day = week + Duration::days(rng.gen_range(0..5));
        let timestamp = format!(
            "{}T{:02}:{:02}:00Z",
            day.format("%Y-%m-%d"),
            rng.gen_range(8..18),
            rng.gen_range(0..60)
        );

        let noise = rng.gen_range(-8.0..8.0);
        let value = args
            .drift
            .mul_add(week_index as f64, args.base + noise)
            .max(0.5);

        records.push(
            RawMetricRecord::new(timestamp, (value * 10.0).round() / 10.0)
                .with_issue_count(rng.gen_range(3..25)),
        );
    }

    records
}

/// A forecast continuation starting the week after `end_monday`, drifting
/// from the last historical value with a widening confidence band.
fn generate_forecast(
    args: &SeedArgs,
    rng: &mut ChaCha8Rng,
    end_monday: NaiveDate,
    last_value: f64,
) -> Vec<ForecastRecord> {
    (1..=i64::from(args.forecast_weeks))
        .map(|offset| {
            let week = end_monday + Duration::weeks(offset);
            let predicted = args
                .drift
                .mul_add(offset as f64, last_value + rng.gen_range(-2.0..2.0))
                .max(0.0);
            let spread = 0.08 * offset as f64 * predicted + 2.0;
            ForecastRecord {
                timestamp: format!("{}T00:00:00Z", week.format("%Y-%m-%d")),
                predicted_value: (predicted * 10.0).round() / 10.0,
                confidence_low: ((predicted - spread).max(0.0) * 10.0).round() / 10.0,
                confidence_high: ((predicted + spread) * 10.0).round() / 10.0,
            }
        })
        .collect()
}
