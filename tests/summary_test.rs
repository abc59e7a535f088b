// ABOUTME: Integration tests for date-range slicing and summary statistics
// ABOUTME: Inclusive ranges, per-metric min/max/avg, date-based earliest and latest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use body_comp_tracker::intelligence::summary::summarize_metric;
use body_comp_tracker::intelligence::{
    calculate_summary_stats, metrics_for_date_range, process_measurements, PipelineConfig,
};
use body_comp_tracker::models::{Metric, SortOrder};
use common::{day, weight_record, weight_series};

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_date_range_is_inclusive() {
    let points = weight_series(&[80.0, 80.5, 81.0, 81.5, 82.0]);

    let slice = metrics_for_date_range(&points, day(1), day(3));

    let dates: Vec<_> = slice.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![day(1), day(2), day(3)]);
}

#[test]
fn test_date_range_outside_series_is_empty() {
    let points = weight_series(&[80.0, 80.5]);
    assert!(metrics_for_date_range(&points, day(10), day(20)).is_empty());
}

#[test]
fn test_weight_summary() {
    let points = weight_series(&[82.0, 80.0, 81.0, 79.0]);

    let summary = summarize_metric(&points, Metric::Weight);

    assert_eq!(summary.count, 4);
    assert_close(summary.min, 79.0);
    assert_close(summary.max, 82.0);
    assert_close(summary.avg, 80.5);
    assert_close(summary.earliest, 82.0);
    assert_close(summary.latest, 79.0);
    assert_close(summary.change, -3.0);
}

#[test]
fn test_earliest_and_latest_follow_dates_not_order() {
    let mut points = weight_series(&[82.0, 80.0, 81.0, 79.0]);
    points.reverse();

    let summary = summarize_metric(&points, Metric::Weight);

    assert_close(summary.earliest, 82.0);
    assert_close(summary.latest, 79.0);
}

#[test]
fn test_same_day_readings_summarize_identically_in_both_orders() {
    let records = vec![
        weight_record("2024-01-01 07:00:00", "80"),
        weight_record("2024-01-02 07:00:00", "81"),
        weight_record("2024-01-02 21:00:00", "82"),
    ];

    for sort_order in [SortOrder::Asc, SortOrder::Desc] {
        let config = PipelineConfig {
            include_incomplete_data: true,
            sort_order,
            ..PipelineConfig::raw()
        };
        let points = process_measurements(&records, &config);

        let summary = summarize_metric(&points, Metric::Weight);

        assert_close(summary.earliest, 80.0);
        assert_close(summary.latest, 82.0);
        assert_close(summary.change, 2.0);
    }
}

#[test]
fn test_sparse_metric_summary() {
    let mut points = weight_series(&[80.0, 80.0, 80.0]);
    points[0].fat_mass = Some(12.0);
    points[2].fat_mass = Some(11.0);

    let stats = calculate_summary_stats(&points);

    let fat = stats.get(Metric::FatMass).unwrap();
    assert_eq!(fat.count, 2);
    assert_close(fat.avg, 11.5);
    assert_close(fat.change, -1.0);

    let hydration = stats.get(Metric::Hydration).unwrap();
    assert_eq!(hydration.count, 0);
    assert_eq!(hydration.avg, None);
    assert_eq!(hydration.change, None);
}

#[test]
fn test_summary_stats_shape() {
    let points = weight_series(&[80.0, 81.0]);

    let stats = calculate_summary_stats(&points);

    assert_eq!(stats.point_count, 2);
    assert_eq!(stats.first_date, Some(day(0)));
    assert_eq!(stats.last_date, Some(day(1)));
    assert_eq!(stats.metrics.len(), Metric::ALL.len());

    let empty = calculate_summary_stats(&[]);
    assert_eq!(empty.point_count, 0);
    assert_eq!(empty.first_date, None);
}
