// ABOUTME: Main library entry point for the body composition tracker
// ABOUTME: Wires storage, provider import, configuration, logging, and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Composition Tracker
//!
//! Keeps a local history of smart-scale readings and turns it into a clean
//! series for charting and summaries.
//!
//! ## Features
//!
//! - **CSV measurement store**: Raw readings kept newest first, deduplicated by timestamp
//! - **Withings import**: Decodes `getmeas` responses into store records
//! - **Preprocessing pipeline**: Outlier rejection and weighted smoothing
//! - **Output formats**: Text tables, JSON, and CSV
//!
//! ## Architecture
//!
//! - **`bodycomp-core`**: Errors, constants, and measurement models
//! - **`bodycomp-intelligence`**: Parser, outlier filter, smoother, pipeline, summaries
//! - **This crate**: Storage, providers, configuration, logging, formatters, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use body_comp_tracker::config::AppConfig;
//! use body_comp_tracker::errors::AppResult;
//! use body_comp_tracker::intelligence::process_measurements;
//! use body_comp_tracker::storage::{CsvMeasurementStore, MeasurementStore};
//!
//! fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let store = CsvMeasurementStore::new(config.measurements_path());
//!     let points = process_measurements(&store.load()?, &config.pipeline);
//!     println!("{} processed points", points.len());
//!     Ok(())
//! }
//! ```

/// Environment configuration for storage and the pipeline
pub mod config;

/// Output rendering for series and summaries
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Measurement import sources
pub mod providers;

/// Raw measurement persistence
pub mod storage;

pub use bodycomp_core::{constants, errors, models};
pub use bodycomp_intelligence as intelligence;
