// ABOUTME: Trailing linearly-weighted moving average over measurement series
// ABOUTME: Smooths each metric independently, weighting recent samples more heavily
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weighted Smoother stage
//!
//! Formula: `WMA = Σ(wᵢ × xᵢ) / Σ(wᵢ)` where `wᵢ` is the 1-based position of
//! the sample inside the window (oldest = 1, newest = N).
//!
//! The window trails the output point: the value emitted for input `i`
//! depends only on inputs `i - N + 1 ..= i`. Absent values contribute to
//! neither sum and do not shift the weights of the others.

use serde::{Deserialize, Serialize};
use tracing::debug;

use bodycomp_core::constants::pipeline::DEFAULT_SMOOTHING_WINDOW;
use bodycomp_core::series::{SeriesMetric, SmoothableMetric};

/// Trailing weighted moving average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedSmoother {
    /// Number of points in each window
    pub window_size: usize,
}

impl Default for WeightedSmoother {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_SMOOTHING_WINDOW,
        }
    }
}

impl WeightedSmoother {
    /// Create a smoother with the given window
    #[must_use]
    pub const fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Whether at least one full window fits in a series of `len` points
    #[must_use]
    pub const fn applies_to(&self, len: usize) -> bool {
        self.window_size > 0 && len >= self.window_size
    }

    /// Linearly weighted average of one metric over `window`
    ///
    /// Returns `None` when the metric is absent from every point.
    #[allow(clippy::cast_precision_loss)] // Safe: window positions are small
    pub fn weighted_average<P, M>(window: &[P], metric: &M) -> Option<f64>
    where
        M: SeriesMetric<P>,
    {
        let (weighted_sum, weight_total) = window
            .iter()
            .enumerate()
            .filter_map(|(position, point)| {
                metric
                    .extract(point)
                    .map(|value| (value, (position + 1) as f64))
            })
            .fold((0.0_f64, 0.0_f64), |(sum, total), (value, weight)| {
                (value.mul_add(weight, sum), total + weight)
            });

        if weight_total > 0.0 {
            Some(weighted_sum / weight_total)
        } else {
            None
        }
    }

    /// Smooth every metric in `metrics`, one output point per full window
    ///
    /// Each output point starts as a copy of its window's newest point, so it
    /// keeps that point's date, and every listed metric is then replaced by
    /// its weighted average. Series shorter than the window pass through
    /// unchanged.
    pub fn smooth<P, M>(&self, points: &[P], metrics: &[M]) -> Vec<P>
    where
        P: Clone,
        M: SmoothableMetric<P>,
    {
        if !self.applies_to(points.len()) {
            debug!(
                points = points.len(),
                window = self.window_size,
                "series shorter than smoothing window, passing through"
            );
            return points.to_vec();
        }

        let smoothed: Vec<P> = points
            .windows(self.window_size)
            .filter_map(|window| {
                let mut point = window.last()?.clone();
                for metric in metrics {
                    let value = Self::weighted_average(window, metric);
                    metric.assign(&mut point, value);
                }
                Some(point)
            })
            .collect();

        debug!(
            input = points.len(),
            output = smoothed.len(),
            window = self.window_size,
            "weighted smoothing applied"
        );
        smoothed
    }
}
