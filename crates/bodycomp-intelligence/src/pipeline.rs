// ABOUTME: Preprocessing pipeline composing parse, outlier filter, and weighted smoothing
// ABOUTME: Single configuration object selects which stages run and with which windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pipeline orchestration
//!
//! Stages always run in the order Parse → Outlier Filter → Weighted Smoother.
//! A disabled stage passes its input through unchanged.
//!
//! ```rust
//! use bodycomp_core::models::RawMeasurementRecord;
//! use bodycomp_intelligence::pipeline::{process_measurements, PipelineConfig};
//!
//! let records = vec![RawMeasurementRecord::from_fields([
//!     ("Date", "2024-01-15 07:30:00"),
//!     ("Weight (kg)", "80.4"),
//! ])];
//!
//! let config = PipelineConfig {
//!     include_incomplete_data: true,
//!     ..PipelineConfig::default()
//! };
//! let points = process_measurements(&records, &config);
//! assert_eq!(points.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use bodycomp_core::constants::pipeline::{
    DEFAULT_OUTLIER_THRESHOLD, DEFAULT_OUTLIER_WINDOW, DEFAULT_SMOOTHING_WINDOW,
};
use bodycomp_core::errors::{AppError, AppResult};
use bodycomp_core::models::{Metric, ProcessedPoint, RawMeasurementRecord, SortOrder};

use crate::outlier_filter::OutlierFilter;
use crate::parser::parse_measurements;
use crate::smoother::WeightedSmoother;

/// Stage selection and parameters for one pipeline run
///
/// Every field is optional when deserialized; both `snake_case` and the
/// `camelCase` names used by the web front end are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Keep rows that lack some body composition metrics
    #[serde(alias = "includeIncompleteData")]
    pub include_incomplete_data: bool,
    /// Output order by date
    #[serde(alias = "sortOrder")]
    pub sort_order: SortOrder,
    /// Run the windowed outlier filter
    #[serde(alias = "removeOutliers")]
    pub remove_outliers: bool,
    /// Outlier filter window width
    #[serde(alias = "outlierWindowSize")]
    pub outlier_window_size: usize,
    /// Outlier filter Modified Z-Score threshold
    #[serde(alias = "outlierThreshold")]
    pub outlier_threshold: f64,
    /// Run the trailing weighted average
    #[serde(alias = "useWeightedAverage")]
    pub use_weighted_average: bool,
    /// Weighted average window width
    #[serde(alias = "weightedAverageWindow")]
    pub weighted_average_window: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            include_incomplete_data: false,
            sort_order: SortOrder::Asc,
            remove_outliers: true,
            outlier_window_size: DEFAULT_OUTLIER_WINDOW,
            outlier_threshold: DEFAULT_OUTLIER_THRESHOLD,
            use_weighted_average: true,
            weighted_average_window: DEFAULT_SMOOTHING_WINDOW,
        }
    }
}

impl PipelineConfig {
    /// Configuration with both numeric stages disabled
    #[must_use]
    pub fn raw() -> Self {
        Self {
            remove_outliers: false,
            use_weighted_average: false,
            ..Self::default()
        }
    }

    /// Check window sizes and threshold
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a window is zero or the threshold is
    /// not a positive finite number.
    pub fn validate(&self) -> AppResult<()> {
        if self.outlier_window_size == 0 {
            return Err(AppError::config("outlier window size must be at least 1"));
        }
        if !self.outlier_threshold.is_finite() || self.outlier_threshold <= 0.0 {
            return Err(AppError::config(format!(
                "outlier threshold must be a positive number, got {}",
                self.outlier_threshold
            )));
        }
        if self.weighted_average_window == 0 {
            return Err(AppError::config(
                "weighted average window must be at least 1",
            ));
        }
        Ok(())
    }

    /// Outlier filter built from this configuration
    #[must_use]
    pub const fn outlier_filter(&self) -> OutlierFilter {
        OutlierFilter::new(self.outlier_window_size, self.outlier_threshold)
    }

    /// Smoother built from this configuration
    #[must_use]
    pub const fn smoother(&self) -> WeightedSmoother {
        WeightedSmoother::new(self.weighted_average_window)
    }
}

/// Configured pipeline with the metric streams each stage works on
#[derive(Debug, Clone)]
pub struct ProcessingPipeline {
    config: PipelineConfig,
    outlier_metrics: Vec<Metric>,
    smoothed_metrics: Vec<Metric>,
}

impl Default for ProcessingPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl ProcessingPipeline {
    /// Pipeline monitoring `Metric::OUTLIER_MONITORED` and smoothing every metric
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            outlier_metrics: Metric::OUTLIER_MONITORED.to_vec(),
            smoothed_metrics: Metric::ALL.to_vec(),
        }
    }

    /// Replace the metrics checked by the outlier filter
    #[must_use]
    pub fn with_outlier_metrics(mut self, metrics: &[Metric]) -> Self {
        self.outlier_metrics = metrics.to_vec();
        self
    }

    /// Replace the metrics smoothed by the weighted average
    #[must_use]
    pub fn with_smoothed_metrics(mut self, metrics: &[Metric]) -> Self {
        self.smoothed_metrics = metrics.to_vec();
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every enabled stage over raw rows
    #[must_use]
    pub fn run(&self, records: &[RawMeasurementRecord]) -> Vec<ProcessedPoint> {
        let parsed = parse_measurements(
            records,
            self.config.include_incomplete_data,
            self.config.sort_order,
        );
        self.process_points(&parsed)
    }

    /// Run the outlier filter and smoother over already-parsed points
    #[must_use]
    pub fn process_points(&self, points: &[ProcessedPoint]) -> Vec<ProcessedPoint> {
        let filtered = if self.config.remove_outliers {
            self.config
                .outlier_filter()
                .filter(points, &self.outlier_metrics)
        } else {
            points.to_vec()
        };

        let output = if self.config.use_weighted_average {
            self.config
                .smoother()
                .smooth(&filtered, &self.smoothed_metrics)
        } else {
            filtered
        };

        debug!(
            input = points.len(),
            output = output.len(),
            remove_outliers = self.config.remove_outliers,
            use_weighted_average = self.config.use_weighted_average,
            "measurement pipeline finished"
        );
        output
    }
}

/// Run the full pipeline with the default metric selection
#[must_use]
pub fn process_measurements(
    records: &[RawMeasurementRecord],
    config: &PipelineConfig,
) -> Vec<ProcessedPoint> {
    ProcessingPipeline::new(config.clone()).run(records)
}
