// ABOUTME: Consumer-side helpers over processed series: date-range slicing and summary stats
// ABOUTME: Computes min, max, average, earliest, latest, and change per metric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bodycomp_core::models::{Metric, ProcessedPoint};

use crate::statistics::mean;

/// Points dated within `start..=end`, in their existing order
#[must_use]
pub fn metrics_for_date_range(
    points: &[ProcessedPoint],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ProcessedPoint> {
    points
        .iter()
        .filter(|point| point.date >= start && point.date <= end)
        .cloned()
        .collect()
}

/// Summary of one metric across a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Metric being summarized
    pub metric: Metric,
    /// Number of points carrying a value
    pub count: usize,
    /// Smallest value
    pub min: Option<f64>,
    /// Largest value
    pub max: Option<f64>,
    /// Arithmetic mean
    pub avg: Option<f64>,
    /// Value on the most recent date
    pub latest: Option<f64>,
    /// Value on the oldest date
    pub earliest: Option<f64>,
    /// `latest - earliest`
    pub change: Option<f64>,
}

/// Summary of every metric across a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of points summarized
    pub point_count: usize,
    /// Oldest date in the series
    pub first_date: Option<NaiveDate>,
    /// Most recent date in the series
    pub last_date: Option<NaiveDate>,
    /// Per-metric summaries in `Metric::ALL` order
    pub metrics: Vec<MetricSummary>,
}

impl SummaryStats {
    /// Summary for one metric
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<&MetricSummary> {
        self.metrics.iter().find(|summary| summary.metric == metric)
    }
}

/// True when the series runs newest first
///
/// Points sharing a date keep their relative timestamp order, so the
/// direction of the whole series breaks ties inside one day.
fn is_descending(points: &[ProcessedPoint]) -> bool {
    matches!((points.first(), points.last()), (Some(first), Some(last)) if first.date > last.date)
}

/// Summarize one metric; earliest and latest follow dates, not slice order
#[must_use]
pub fn summarize_metric(points: &[ProcessedPoint], metric: Metric) -> MetricSummary {
    let mut dated: Vec<(NaiveDate, f64)> = points
        .iter()
        .filter_map(|point| metric.value(point).map(|value| (point.date, value)))
        .collect();
    if is_descending(points) {
        dated.reverse();
    }
    let values: Vec<f64> = dated.iter().map(|(_, value)| *value).collect();

    let min = values
        .iter()
        .copied()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let max = values
        .iter()
        .copied()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    // chronological now: min_by_key keeps the first tie, max_by_key the last
    let earliest = dated
        .iter()
        .min_by_key(|(date, _)| *date)
        .map(|(_, value)| *value);
    let latest = dated
        .iter()
        .max_by_key(|(date, _)| *date)
        .map(|(_, value)| *value);

    MetricSummary {
        metric,
        count: values.len(),
        min,
        max,
        avg: mean(&values),
        latest,
        earliest,
        change: latest.zip(earliest).map(|(last, first)| last - first),
    }
}

/// Summarize every metric of a processed series
#[must_use]
pub fn calculate_summary_stats(points: &[ProcessedPoint]) -> SummaryStats {
    SummaryStats {
        point_count: points.len(),
        first_date: points.iter().map(|point| point.date).min(),
        last_date: points.iter().map(|point| point.date).max(),
        metrics: Metric::ALL
            .iter()
            .map(|&metric| summarize_metric(points, metric))
            .collect(),
    }
}
