// ABOUTME: bodycomp-cli - command-line tool for the body composition tracker
// ABOUTME: Processes stored measurements, prints summaries, and imports Withings exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Cleaned and smoothed series as a table
//! bodycomp-cli process
//!
//! # Raw series for January as JSON
//! bodycomp-cli process --no-outliers --no-smoothing --start 2024-01-01 --end 2024-01-31 --format json
//!
//! # Save the processed series to a file
//! bodycomp-cli process --format json --output measurements.json
//!
//! # Summary statistics over the processed series
//! bodycomp-cli summary --include-incomplete
//!
//! # Merge a saved Withings getmeas response into the store
//! bodycomp-cli import --file getmeas.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use body_comp_tracker::config::AppConfig;
use body_comp_tracker::errors::AppResult;
use body_comp_tracker::formatters::OutputFormat;
use body_comp_tracker::intelligence::PipelineConfig;
use body_comp_tracker::logging::LoggingConfig;
use body_comp_tracker::models::SortOrder;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "bodycomp-cli",
    about = "Body composition tracker CLI",
    long_about = "Cleans, smooths, and summarizes smart-scale measurements stored in a local CSV file."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Measurement file override (defaults to the configured data directory)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the preprocessing pipeline and print the series
    Process {
        #[command(flatten)]
        pipeline: PipelineArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print summary statistics over the processed series
    Summary {
        #[command(flatten)]
        pipeline: PipelineArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Merge a saved Withings measure response into the store
    Import {
        /// Path of the saved `getmeas` JSON response
        #[arg(long)]
        file: PathBuf,
    },
}

/// Per-run overrides of the environment pipeline settings
#[derive(Args)]
struct PipelineArgs {
    /// Keep rows lacking some body composition metrics
    #[arg(long)]
    include_incomplete: bool,

    /// Sort order by date
    #[arg(long, value_parser = ["asc", "desc"])]
    sort: Option<String>,

    /// Skip the outlier filter
    #[arg(long)]
    no_outliers: bool,

    /// Outlier filter window width
    #[arg(long)]
    outlier_window: Option<usize>,

    /// Outlier Modified Z-Score threshold
    #[arg(long)]
    outlier_threshold: Option<f64>,

    /// Skip the weighted moving average
    #[arg(long)]
    no_smoothing: bool,

    /// Weighted moving average window width
    #[arg(long)]
    smoothing_window: Option<usize>,
}

impl PipelineArgs {
    fn apply(&self, config: &mut PipelineConfig) {
        if self.include_incomplete {
            config.include_incomplete_data = true;
        }
        if let Some(sort) = &self.sort {
            config.sort_order = SortOrder::from_str_or_default(sort);
        }
        if self.no_outliers {
            config.remove_outliers = false;
        }
        if let Some(window) = self.outlier_window {
            config.outlier_window_size = window;
        }
        if let Some(threshold) = self.outlier_threshold {
            config.outlier_threshold = threshold;
        }
        if self.no_smoothing {
            config.use_weighted_average = false;
        }
        if let Some(window) = self.smoothing_window {
            config.weighted_average_window = window;
        }
    }
}

/// Date range and rendering options
#[derive(Args)]
struct OutputArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json", "csv"])]
    format: String,

    /// Write the rendered output to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

impl OutputArgs {
    fn to_options(&self) -> commands::OutputOptions {
        commands::OutputOptions {
            start: self.start,
            end: self.end,
            format: OutputFormat::from_str_param(&self.format),
            output: self.output.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "command failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("Body composition tracker CLI");

    let mut config = AppConfig::from_env()?;
    if let Some(path) = &cli.data_file {
        config.set_measurements_path(path)?;
    }

    match cli.command {
        Command::Process { pipeline, output } => {
            pipeline.apply(&mut config.pipeline);
            config.pipeline.validate()?;
            commands::process::run(&config, &output.to_options())
        }
        Command::Summary { pipeline, output } => {
            pipeline.apply(&mut config.pipeline);
            config.pipeline.validate()?;
            commands::summary::run(&config, &output.to_options())
        }
        Command::Import { file } => commands::import::run(&config, &file),
    }
}
