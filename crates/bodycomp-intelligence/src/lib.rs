// ABOUTME: Time-series preprocessing for body composition measurements
// ABOUTME: Parse and normalize, windowed outlier rejection, weighted smoothing, summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Composition Intelligence
//!
//! Turns noisy raw scale readings into a clean, chartable series. Every stage
//! is a pure function from an input slice to a new `Vec`; nothing is cached
//! or shared between calls, so independent datasets can be processed from
//! any number of threads.

/// Median, MAD, and Modified Z-Score helpers
pub mod statistics;

/// Raw row parsing, completeness filtering, and date sorting
pub mod parser;

/// Windowed Modified Z-Score outlier rejection
pub mod outlier_filter;

/// Trailing linearly-weighted moving average
pub mod smoother;

/// Stage composition and configuration
pub mod pipeline;

/// Date-range slicing and summary statistics
pub mod summary;

pub use outlier_filter::OutlierFilter;
pub use pipeline::{process_measurements, PipelineConfig, ProcessingPipeline};
pub use smoother::WeightedSmoother;
pub use summary::{calculate_summary_stats, metrics_for_date_range, MetricSummary, SummaryStats};
