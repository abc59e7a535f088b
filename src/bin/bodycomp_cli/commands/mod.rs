// ABOUTME: Command implementations for bodycomp-cli
// ABOUTME: Shared loading, date-range selection, and output options for process and summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod import;
pub mod process;
pub mod summary;

use std::path::PathBuf;
use std::time::Instant;

use body_comp_tracker::config::AppConfig;
use body_comp_tracker::errors::{AppError, AppResult};
use body_comp_tracker::formatters::{FormatError, FormattedOutput, OutputFormat};
use body_comp_tracker::intelligence::{metrics_for_date_range, process_measurements};
use body_comp_tracker::logging::AppLogger;
use body_comp_tracker::models::ProcessedPoint;
use body_comp_tracker::storage::{CsvMeasurementStore, MeasurementStore};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::helpers::display::print_output;

/// Date range and rendering choice shared by `process` and `summary`
pub struct OutputOptions {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Load the store, run the pipeline, and apply the requested date range
pub fn load_processed(config: &AppConfig, options: &OutputOptions) -> AppResult<Vec<ProcessedPoint>> {
    let store = CsvMeasurementStore::new(config.measurements_path());
    let records = store.load()?;
    if records.is_empty() {
        warn!(path = %store.path().display(), "no stored measurements");
    }

    let started = Instant::now();
    let points = process_measurements(&records, &config.pipeline);
    AppLogger::log_pipeline_run(records.len(), points.len(), started.elapsed().as_millis());

    match (options.start, options.end) {
        (None, None) => Ok(points),
        (start, end) => {
            let start = start.unwrap_or(NaiveDate::MIN);
            let end = end.unwrap_or(NaiveDate::MAX);
            if start > end {
                return Err(AppError::invalid_input(format!(
                    "start date {start} is after end date {end}"
                )));
            }
            Ok(metrics_for_date_range(&points, start, end))
        }
    }
}

/// Print rendered output, or save it when an output file was requested
pub fn emit(output: &FormattedOutput, options: &OutputOptions) -> AppResult<()> {
    match &options.output {
        Some(path) => {
            output.write_to(path)?;
            info!(path = %path.display(), format = %output.format, "output saved");
            println!("Saved {} output to {}", output.format, path.display());
        }
        None => print_output(output),
    }
    Ok(())
}

pub fn format_failed(error: &FormatError) -> AppError {
    AppError::serialization(error.to_string())
}
