// ABOUTME: Summary command for bodycomp-cli
// ABOUTME: Prints per-metric statistics over the processed series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use body_comp_tracker::config::AppConfig;
use body_comp_tracker::errors::AppResult;
use body_comp_tracker::formatters::format_summary;
use body_comp_tracker::intelligence::calculate_summary_stats;

use super::{emit, format_failed, load_processed, OutputOptions};

/// Summarize the processed series and print the statistics
pub fn run(config: &AppConfig, options: &OutputOptions) -> AppResult<()> {
    let points = load_processed(config, options)?;
    let stats = calculate_summary_stats(&points);

    let output = format_summary(&stats, options.format).map_err(|e| format_failed(&e))?;
    emit(&output, options)
}
