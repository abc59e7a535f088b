// ABOUTME: CSV file backend for raw measurement records
// ABOUTME: Reads by header name, tolerates malformed rows, writes header plus quoted dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use tracing::{debug, info, warn};

use bodycomp_core::constants::fields;
use bodycomp_core::errors::{AppError, AppResult};
use bodycomp_core::models::RawMeasurementRecord;

use super::MeasurementStore;

/// Measurement store backed by a single CSV file
///
/// Columns are matched by header name, so column order and extra columns do
/// not matter. A missing file loads as an empty store.
#[derive(Debug, Clone)]
pub struct CsvMeasurementStore {
    path: PathBuf,
}

impl CsvMeasurementStore {
    /// Store reading and writing `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self, file: File) -> AppResult<Vec<RawMeasurementRecord>> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| csv_error(&self.path, "read CSV headers", e))?
            .iter()
            .map(|header| header.trim().trim_start_matches('\u{feff}').to_owned())
            .collect();

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!(row = index + 1, error = %e, "skipping unreadable CSV row");
                    continue;
                }
            };
            let pairs = headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.as_str(), value));
            records.push(RawMeasurementRecord::from_fields(pairs));
        }
        Ok(records)
    }
}

impl MeasurementStore for CsvMeasurementStore {
    fn load(&self) -> AppResult<Vec<RawMeasurementRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "measurement file missing, loading empty store");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            AppError::storage(format!("failed to open {}", self.path.display())).with_source(e)
        })?;
        let records = self.read_records(file)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded measurement records");
        Ok(records)
    }

    fn save(&self, records: &[RawMeasurementRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target, then rename over it
        let staging = self.path.with_extension("csv.tmp");
        {
            let mut writer = WriterBuilder::new()
                .quote_style(QuoteStyle::NonNumeric)
                .from_path(&staging)
                .map_err(|e| csv_error(&staging, "create CSV file", e))?;

            writer
                .write_record(fields::HEADER)
                .map_err(|e| csv_error(&staging, "write CSV header", e))?;
            for record in records {
                writer
                    .write_record(record.to_row())
                    .map_err(|e| csv_error(&staging, "write CSV row", e))?;
            }
            writer.flush()?;
        }
        fs::rename(&staging, &self.path)?;

        info!(path = %self.path.display(), count = records.len(), "saved measurement records");
        Ok(())
    }
}

fn csv_error(path: &Path, action: &str, error: csv::Error) -> AppError {
    AppError::storage(format!("failed to {action} at {}", path.display())).with_source(error)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvMeasurementStore::new(dir.path().join("absent.csv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_extra_and_reordered_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("measurements.csv");
        fs::write(
            &path,
            "Fat mass (kg),Source,Date,Weight (kg)\n16.2,scale,\"2024-01-05 07:00:00\",80.4\n",
        )
        .unwrap();

        let records = CsvMeasurementStore::new(&path).load().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(fields::DATE), Some("2024-01-05 07:00:00"));
        assert_eq!(records[0].get(fields::WEIGHT), Some("80.4"));
        assert_eq!(records[0].get(fields::FAT_MASS), Some("16.2"));
    }
}
