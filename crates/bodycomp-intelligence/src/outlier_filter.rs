// ABOUTME: Windowed Modified Z-Score outlier rejection for measurement series
// ABOUTME: Drops whole points whose value is implausible against its local neighborhood
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Outlier Filter stage
//!
//! Body composition drifts slowly over months, so a single global threshold
//! either misses spikes or flags the drift itself. Each point is instead
//! compared against a centered window of its neighbors using the Modified
//! Z-Score:
//!
//! `Mᵢ = 0.6745 × (xᵢ − median) / MAD`
//!
//! where MAD is the median absolute deviation of the window.
//!
//! # Scientific References
//!
//! - Iglewicz, B. & Hoaglin, D. (1993). "How to Detect and Handle Outliers."
//!   *ASQC Basic References in Quality Control*, 16.

use serde::{Deserialize, Serialize};
use tracing::debug;

use bodycomp_core::constants::pipeline::{
    DEFAULT_OUTLIER_THRESHOLD, DEFAULT_OUTLIER_WINDOW, MIN_WINDOW_SAMPLES,
};
use bodycomp_core::series::SeriesMetric;

use crate::statistics::{median, median_absolute_deviation, modified_z_score};

/// Windowed Modified Z-Score filter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlierFilter {
    /// Width of the centered window; its radius is `window_size / 2`
    pub window_size: usize,
    /// Absolute score above which a value is an outlier
    pub threshold: f64,
}

impl Default for OutlierFilter {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_OUTLIER_WINDOW,
            threshold: DEFAULT_OUTLIER_THRESHOLD,
        }
    }
}

impl OutlierFilter {
    /// Create a filter with explicit window and threshold
    #[must_use]
    pub const fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            window_size,
            threshold,
        }
    }

    /// Whether the series is long enough for the filter to run at all
    #[must_use]
    pub const fn applies_to(&self, len: usize) -> bool {
        len > self.window_size
    }

    /// Index range of the window centered on `index`, clamped to the series
    #[must_use]
    pub fn window_bounds(&self, index: usize, len: usize) -> (usize, usize) {
        let radius = self.window_size / 2;
        let start = index.saturating_sub(radius);
        let end = index.saturating_add(radius).min(len.saturating_sub(1));
        (start, end)
    }

    /// Modified Z-Score of `points[index]` for one metric
    ///
    /// `None` when the point has no value, the window holds fewer than three
    /// values, or the window's MAD is zero.
    pub fn score<P, M>(&self, points: &[P], index: usize, metric: &M) -> Option<f64>
    where
        M: SeriesMetric<P>,
    {
        let value = metric.extract(points.get(index)?)?;
        let (start, end) = self.window_bounds(index, points.len());

        let window: Vec<f64> = points[start..=end]
            .iter()
            .filter_map(|point| metric.extract(point))
            .collect();
        if window.len() < MIN_WINDOW_SAMPLES {
            return None;
        }

        let center = median(&window)?;
        let mad = median_absolute_deviation(&window, center)?;
        modified_z_score(value, center, mad)
    }

    /// Whether `points[index]` is an outlier in any of `metrics`
    pub fn is_outlier<P, M>(&self, points: &[P], index: usize, metrics: &[M]) -> bool
    where
        M: SeriesMetric<P>,
    {
        metrics.iter().any(|metric| {
            self.score(points, index, metric)
                .is_some_and(|score| score.abs() > self.threshold)
        })
    }

    /// Indices of every flagged point; empty when the series is too short
    pub fn outlier_indices<P, M>(&self, points: &[P], metrics: &[M]) -> Vec<usize>
    where
        M: SeriesMetric<P>,
    {
        if !self.applies_to(points.len()) {
            return Vec::new();
        }
        (0..points.len())
            .filter(|&index| self.is_outlier(points, index, metrics))
            .collect()
    }

    /// Points that are not outliers in any metric, in their original order
    ///
    /// Series no longer than the window pass through unchanged.
    pub fn filter<P, M>(&self, points: &[P], metrics: &[M]) -> Vec<P>
    where
        P: Clone,
        M: SeriesMetric<P>,
    {
        if !self.applies_to(points.len()) {
            debug!(
                points = points.len(),
                window = self.window_size,
                "series too short for outlier detection, passing through"
            );
            return points.to_vec();
        }

        let kept: Vec<P> = (0..points.len())
            .filter(|&index| !self.is_outlier(points, index, metrics))
            .map(|index| points[index].clone())
            .collect();

        debug!(
            input = points.len(),
            removed = points.len() - kept.len(),
            window = self.window_size,
            threshold = self.threshold,
            "outlier filter applied"
        );
        kept
    }
}
