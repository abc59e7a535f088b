// ABOUTME: Criterion benchmarks for the measurement preprocessing pipeline
// ABOUTME: Measures parsing, outlier filtering, smoothing, and the full pipeline by history length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the preprocessing pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use body_comp_tracker::intelligence::parser::parse_measurements;
use body_comp_tracker::intelligence::{
    process_measurements, OutlierFilter, PipelineConfig, WeightedSmoother,
};
use body_comp_tracker::models::{Metric, SortOrder};
use common::fixtures::{generate_history, HistoryLength};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const LENGTHS: [HistoryLength; 3] = [
    HistoryLength::Typical,
    HistoryLength::Long,
    HistoryLength::Huge,
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for length in LENGTHS {
        let records = generate_history(length);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse_measurements", length.count()),
            &records,
            |b, records| {
                b.iter(|| parse_measurements(black_box(records), false, SortOrder::Asc));
            },
        );
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    for length in LENGTHS {
        let points = parse_measurements(&generate_history(length), false, SortOrder::Asc);
        group.throughput(Throughput::Elements(points.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("outlier_filter", length.count()),
            &points,
            |b, points| {
                let filter = OutlierFilter::default();
                b.iter(|| filter.filter(black_box(points), &Metric::OUTLIER_MONITORED));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("weighted_smoother", length.count()),
            &points,
            |b, points| {
                let smoother = WeightedSmoother::default();
                b.iter(|| smoother.smooth(black_box(points), &Metric::ALL));
            },
        );
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let config = PipelineConfig::default();

    for length in LENGTHS {
        let records = generate_history(length);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("default_config", length.count()),
            &records,
            |b, records| {
                b.iter(|| process_measurements(black_box(records), &config));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_stages, bench_full_pipeline);
criterion_main!(benches);
