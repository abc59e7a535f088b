// ABOUTME: Environment configuration for the measurement store and preprocessing pipeline
// ABOUTME: Reads BODYCOMP_* variables, falling back to documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! Configuration comes only from environment variables; there is no config
//! file. Unparseable values fall back to their default with a warning rather
//! than aborting, and the resulting pipeline settings are validated once.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use bodycomp_core::errors::{AppError, AppResult};
use bodycomp_core::models::SortOrder;
use bodycomp_intelligence::pipeline::PipelineConfig;

/// Environment variable names
pub mod env_keys {
    /// Directory holding the measurement file
    pub const DATA_DIR: &str = "BODYCOMP_DATA_DIR";
    /// File name of the measurement CSV inside the data directory
    pub const MEASUREMENTS_FILE: &str = "BODYCOMP_MEASUREMENTS_FILE";
    /// Keep rows lacking some metrics (`true`/`false`)
    pub const INCLUDE_INCOMPLETE: &str = "BODYCOMP_INCLUDE_INCOMPLETE";
    /// `asc` or `desc`
    pub const SORT_ORDER: &str = "BODYCOMP_SORT_ORDER";
    /// Enable the outlier filter (`true`/`false`)
    pub const REMOVE_OUTLIERS: &str = "BODYCOMP_REMOVE_OUTLIERS";
    /// Outlier window width
    pub const OUTLIER_WINDOW: &str = "BODYCOMP_OUTLIER_WINDOW";
    /// Outlier Modified Z-Score threshold
    pub const OUTLIER_THRESHOLD: &str = "BODYCOMP_OUTLIER_THRESHOLD";
    /// Enable the weighted average (`true`/`false`)
    pub const WEIGHTED_AVERAGE: &str = "BODYCOMP_WEIGHTED_AVERAGE";
    /// Weighted average window width
    pub const WEIGHTED_WINDOW: &str = "BODYCOMP_WEIGHTED_WINDOW";
}

/// Default name of the measurement file
pub const DEFAULT_MEASUREMENTS_FILE: &str = "measurements.csv";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the measurement file
    pub data_dir: PathBuf,
    /// Measurement file name inside `data_dir`
    pub measurements_file: String,
    /// Preprocessing pipeline settings
    pub pipeline: PipelineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            measurements_file: DEFAULT_MEASUREMENTS_FILE.to_owned(),
            pipeline: PipelineConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the resulting pipeline settings fail
    /// validation (zero window, non-positive threshold).
    pub fn from_env() -> AppResult<Self> {
        let data_dir = env::var(env_keys::DATA_DIR).map_or_else(|_| default_data_dir(), PathBuf::from);
        let measurements_file = env_var_or(env_keys::MEASUREMENTS_FILE, DEFAULT_MEASUREMENTS_FILE);
        let pipeline = pipeline_from_env();
        pipeline.validate()?;

        let config = Self {
            data_dir,
            measurements_file,
            pipeline,
        };
        info!(
            data_dir = %config.data_dir.display(),
            measurements_file = %config.measurements_file,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Point the store at an explicit measurement file
    ///
    /// # Errors
    ///
    /// Returns a `ConfigMissing` error if `path` has no file name component
    /// (for example `..` or `/`).
    pub fn set_measurements_path(&mut self, path: &Path) -> AppResult<()> {
        let file_name = path.file_name().ok_or_else(|| {
            AppError::config_missing(format!(
                "measurement file path {} has no file name",
                path.display()
            ))
        })?;
        self.measurements_file = file_name.to_string_lossy().into_owned();
        self.data_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(())
    }

    /// Full path of the measurement file
    #[must_use]
    pub fn measurements_path(&self) -> PathBuf {
        self.data_dir.join(&self.measurements_file)
    }
}

/// Pipeline settings from environment variables, defaults for anything unset
#[must_use]
pub fn pipeline_from_env() -> PipelineConfig {
    let defaults = PipelineConfig::default();
    PipelineConfig {
        include_incomplete_data: env_bool(
            env_keys::INCLUDE_INCOMPLETE,
            defaults.include_incomplete_data,
        ),
        sort_order: env::var(env_keys::SORT_ORDER)
            .map_or(defaults.sort_order, |value| SortOrder::from_str_or_default(&value)),
        remove_outliers: env_bool(env_keys::REMOVE_OUTLIERS, defaults.remove_outliers),
        outlier_window_size: env_parse(env_keys::OUTLIER_WINDOW, defaults.outlier_window_size),
        outlier_threshold: env_parse(env_keys::OUTLIER_THRESHOLD, defaults.outlier_threshold),
        use_weighted_average: env_bool(env_keys::WEIGHTED_AVERAGE, defaults.use_weighted_average),
        weighted_average_window: env_parse(
            env_keys::WEIGHTED_WINDOW,
            defaults.weighted_average_window,
        ),
    }
}

/// `~/.body_comp_tracking/data`, or `./data` when no home directory is known
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir().map_or_else(
        || PathBuf::from("data"),
        |home| home.join(".body_comp_tracking").join("data"),
    )
}

/// Parse a boolean flag leniently
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => parse_bool(&value).unwrap_or_else(|| {
            warn!(key, value = %value, default, "invalid boolean, using default");
            default
        }),
        Err(_) => default,
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %value, default = %default, "invalid number, using default");
            default
        }),
        Err(_) => default,
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
