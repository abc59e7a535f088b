// ABOUTME: Process command for bodycomp-cli
// ABOUTME: Prints the cleaned and smoothed measurement series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use body_comp_tracker::config::AppConfig;
use body_comp_tracker::errors::AppResult;
use body_comp_tracker::formatters::format_points;
use tracing::info;

use super::{emit, format_failed, load_processed, OutputOptions};

/// Run the pipeline over the store and print the series
pub fn run(config: &AppConfig, options: &OutputOptions) -> AppResult<()> {
    let points = load_processed(config, options)?;
    info!(points = points.len(), format = %options.format, "rendering processed series");

    let output = format_points(&points, options.format).map_err(|e| format_failed(&e))?;
    emit(&output, options)
}
