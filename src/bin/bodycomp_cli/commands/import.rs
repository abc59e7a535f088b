// ABOUTME: Import command for bodycomp-cli
// ABOUTME: Merges a saved Withings response into the store starting on the newest stored day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use body_comp_tracker::config::AppConfig;
use body_comp_tracker::errors::AppResult;
use body_comp_tracker::logging::AppLogger;
use body_comp_tracker::providers::withings::WithingsExport;
use body_comp_tracker::providers::{ImportPlan, MeasurementProvider};
use body_comp_tracker::storage::{CsvMeasurementStore, MeasurementStore};
use tracing::info;

use crate::helpers::display::display_import_result;

/// Import new measurements from `file` into the configured store
pub fn run(config: &AppConfig, file: &Path) -> AppResult<()> {
    let store = CsvMeasurementStore::new(config.measurements_path());
    let plan = ImportPlan::from_latest(store.latest_timestamp()?);
    println!("{}", plan.message());
    info!(start = %plan.start, source = %file.display(), "starting import");

    let provider = WithingsExport::new(file);
    let records = provider.fetch_since(plan.start)?;
    let added = store.merge(&records)?;

    AppLogger::log_import(provider.name(), records.len(), added);
    display_import_result(provider.name(), records.len(), added, store.path());
    Ok(())
}
