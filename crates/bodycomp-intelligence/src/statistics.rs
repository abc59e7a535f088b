// ABOUTME: Robust statistics helpers shared by the outlier filter and summaries
// ABOUTME: Median, median absolute deviation, and the Modified Z-Score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use bodycomp_core::constants::pipeline::MODIFIED_Z_SCORE_SCALE;

/// Median of `values`, or `None` for an empty slice
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let len = sorted.len();
    if len.is_multiple_of(2) {
        Some(f64::midpoint(sorted[len / 2 - 1], sorted[len / 2]))
    } else {
        Some(sorted[len / 2])
    }
}

/// Median absolute deviation of `values` around `center`
#[must_use]
pub fn median_absolute_deviation(values: &[f64], center: f64) -> Option<f64> {
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    median(&deviations)
}

/// Modified Z-Score of `value` against a window's median and MAD
///
/// Returns `None` when the MAD is zero: every windowed value sits on the
/// median and no score can be formed.
#[must_use]
pub fn modified_z_score(value: f64, median: f64, mad: f64) -> Option<f64> {
    if mad == 0.0 {
        return None;
    }
    Some(MODIFIED_Z_SCORE_SCALE * (value - median) / mad)
}

/// Arithmetic mean, or `None` for an empty slice
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: measurement counts are small
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
