// ABOUTME: Criterion benchmarks for the weekly trend pipeline
// ABOUTME: Measures full chart builds across window sizes and gap densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Cadence Metrics

//! Criterion benchmarks for the trend pipeline.
//!
//! Measures end-to-end chart assembly over the largest supported windows,
//! with and without gap removal and forecast bridging.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cadence_trends::config::{PeriodKind, PeriodSelection};
use cadence_trends::models::{ForecastRecord, RawMetricRecord};
use cadence_trends::timeline::build_trend_chart;

const TODAY: (i32, u32, u32) = (2024, 1, 22);

fn today() -> NaiveDate {
    let (y, m, d) = TODAY;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Deterministic sparse series: one record per week except every fifth week,
/// with a mild downward drift and a small oscillation.
fn generate_records(weeks: usize) -> Vec<RawMetricRecord> {
    let start = today() - Duration::weeks(weeks as i64);
    (0..weeks)
        .filter(|index| index % 5 != 3)
        .map(|index| {
            let day = start + Duration::weeks(index as i64) + Duration::days((index % 5) as i64);
            let value = 60.0 - 0.05 * index as f64 + 7.0 * ((index % 9) as f64 - 4.0);
            RawMetricRecord::new(
                format!("{}T10:30:00Z", day.format("%Y-%m-%d")),
                value.max(0.5),
            )
            .with_issue_count((index % 20) as u32 + 1)
        })
        .collect()
}

fn generate_forecast(weeks: u8) -> Vec<ForecastRecord> {
    let start = today();
    (1..=i64::from(weeks))
        .map(|offset| {
            let day = start + Duration::weeks(offset);
            ForecastRecord {
                timestamp: format!("{}T00:00:00Z", day.format("%Y-%m-%d")),
                predicted_value: 45.0 - 0.1 * offset as f64,
                confidence_low: 40.0 - 0.2 * offset as f64,
                confidence_high: 50.0 + 0.2 * offset as f64,
            }
        })
        .collect()
}

fn bench_window_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_trend_chart");
    for kind in [PeriodKind::Weeks52, PeriodKind::Weeks104, PeriodKind::Weeks260] {
        let weeks = kind.weeks().unwrap_or(52) as usize;
        let records = generate_records(weeks);
        let selection = PeriodSelection::fixed(kind);
        group.bench_with_input(BenchmarkId::new("window", kind), &records, |b, records| {
            b.iter(|| build_trend_chart(black_box(records), &[], &selection, today()));
        });
    }
    group.finish();
}

fn bench_gap_removal(c: &mut Criterion) {
    let records = generate_records(260);
    let keep = PeriodSelection::fixed(PeriodKind::Weeks260);
    let drop = keep.clone().with_remove_empty_weeks(true);

    c.bench_function("gap_removal_260w", |b| {
        b.iter(|| build_trend_chart(black_box(&records), &[], &drop, today()));
    });
    c.bench_function("gaps_kept_260w", |b| {
        b.iter(|| build_trend_chart(black_box(&records), &[], &keep, today()));
    });
}

fn bench_forecast_bridge(c: &mut Criterion) {
    let records = generate_records(52);
    let forecast = generate_forecast(24);
    let selection = PeriodSelection::fixed(PeriodKind::Weeks52);

    c.bench_function("forecast_overlay_52w", |b| {
        b.iter(|| {
            build_trend_chart(
                black_box(&records),
                black_box(&forecast),
                &selection,
                today(),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_window_sizes,
    bench_gap_removal,
    bench_forecast_bridge
);
criterion_main!(benches);
