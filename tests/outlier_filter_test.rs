// ABOUTME: Integration tests for the windowed Modified Z-Score outlier filter
// ABOUTME: Spike removal, edge windows, short-series pass-through, zero MAD, and sparse metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use body_comp_tracker::intelligence::OutlierFilter;
use body_comp_tracker::models::{Metric, ProcessedPoint};
use common::{init_test_logging, weight_series};

const NOISY_WEIGHTS: [f64; 12] = [
    80.0, 80.3, 79.9, 80.2, 80.1, 79.8, 80.2, 80.0, 80.3, 79.9, 80.1, 80.0,
];

fn weights(points: &[ProcessedPoint]) -> Vec<f64> {
    points.iter().map(|p| p.weight).collect()
}

#[test]
fn test_slow_trend_produces_no_false_positives() {
    init_test_logging();
    let series: Vec<f64> = (0..20).map(|i| 0.05_f64.mul_add(f64::from(i), 80.0)).collect();
    let points = weight_series(&series);

    let filtered = OutlierFilter::default().filter(&points, &[Metric::Weight]);

    assert_eq!(filtered, points);
}

#[test]
fn test_single_spike_removed() {
    let mut series: Vec<f64> = (0..20).map(|i| 0.05_f64.mul_add(f64::from(i), 80.0)).collect();
    series[10] = 95.0;
    let points = weight_series(&series);

    let filter = OutlierFilter::default();
    let filtered = filter.filter(&points, &[Metric::Weight]);

    assert_eq!(filtered.len(), 19);
    assert!(filtered.iter().all(|p| p.weight < 90.0));
    assert_eq!(filter.outlier_indices(&points, &[Metric::Weight]), vec![10]);
}

#[test]
fn test_spikes_at_series_edges_use_truncated_windows() {
    let filter = OutlierFilter::new(5, 3.5);

    let mut leading = NOISY_WEIGHTS;
    leading[0] = 90.0;
    let filtered = filter.filter(&weight_series(&leading), &[Metric::Weight]);
    assert_eq!(weights(&filtered), NOISY_WEIGHTS[1..].to_vec());

    let mut trailing = NOISY_WEIGHTS;
    trailing[11] = 70.0;
    let filtered = filter.filter(&weight_series(&trailing), &[Metric::Weight]);
    assert_eq!(weights(&filtered), NOISY_WEIGHTS[..11].to_vec());
}

#[test]
fn test_window_bounds_clamped() {
    let filter = OutlierFilter::new(5, 3.5);
    assert_eq!(filter.window_bounds(0, 12), (0, 2));
    assert_eq!(filter.window_bounds(6, 12), (4, 8));
    assert_eq!(filter.window_bounds(11, 12), (9, 11));
}

#[test]
fn test_series_not_longer_than_window_passes_through() {
    let mut series = NOISY_WEIGHTS;
    series[5] = 120.0;
    let points = weight_series(&series);

    let filtered = OutlierFilter::new(12, 3.5).filter(&points, &[Metric::Weight]);
    assert_eq!(filtered, points);

    let filtered = OutlierFilter::new(11, 3.5).filter(&points, &[Metric::Weight]);
    assert_eq!(filtered.len(), 11);
}

#[test]
fn test_zero_mad_never_flags() {
    let mut series = [80.0; 10];
    series[5] = 90.0;
    let points = weight_series(&series);

    let filtered = OutlierFilter::new(5, 3.5).filter(&points, &[Metric::Weight]);

    assert_eq!(filtered, points);
}

#[test]
fn test_sparse_metric_only_uses_present_values() {
    let fat = [
        Some(11.0),
        None,
        Some(11.1),
        None,
        Some(2.0),
        Some(11.0),
        None,
        Some(11.3),
        Some(11.1),
        None,
        Some(11.2),
        Some(11.0),
    ];
    let points: Vec<ProcessedPoint> = weight_series(&NOISY_WEIGHTS)
        .into_iter()
        .zip(fat)
        .map(|(mut point, fat_mass)| {
            point.fat_mass = fat_mass;
            point
        })
        .collect();

    let filter = OutlierFilter::new(5, 3.5);
    assert_eq!(filter.score(&points, 1, &Metric::FatMass), None);

    let filtered = filter.filter(&points, &[Metric::FatMass]);
    assert_eq!(filtered.len(), 11);
    assert!(filtered.iter().all(|p| p.fat_mass != Some(2.0)));
}

#[test]
fn test_any_monitored_metric_removes_whole_point() {
    let mut points = weight_series(&NOISY_WEIGHTS);
    for point in &mut points {
        point.muscle_mass = Some(point.weight - 15.0);
    }
    points[6].muscle_mass = Some(40.0);

    let filter = OutlierFilter::new(5, 3.5);

    let weight_only = filter.filter(&points, &[Metric::Weight]);
    assert_eq!(weight_only.len(), 12);

    let with_muscle = filter.filter(&points, &[Metric::Weight, Metric::MuscleMass]);
    assert_eq!(with_muscle.len(), 11);
    assert!(with_muscle.iter().all(|p| p.muscle_mass != Some(40.0)));
}

#[test]
fn test_closure_accessor_on_foreign_type() {
    let readings: Vec<(u32, f64)> = NOISY_WEIGHTS
        .iter()
        .zip(0_u32..)
        .map(|(&w, i)| (i, if i == 4 { 95.0 } else { w }))
        .collect();

    let accessor = |reading: &(u32, f64)| Some(reading.1);
    let filtered = OutlierFilter::new(5, 3.5).filter(&readings, &[accessor]);

    assert_eq!(filtered.len(), 11);
    assert!(filtered.iter().all(|reading| reading.0 != 4));
}
