// ABOUTME: Measurement storage abstraction for raw scale readings
// ABOUTME: Defines the MeasurementStore trait and merge rules shared by every backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Measurement storage
//!
//! Stores hold [`RawMeasurementRecord`]s exactly as imported. Records are
//! identified by their `Date` timestamp and kept newest first.

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use bodycomp_core::errors::AppResult;
use bodycomp_core::models::RawMeasurementRecord;
use bodycomp_intelligence::parser::parse_timestamp;

/// CSV file backend
pub mod csv_store;

pub use csv_store::CsvMeasurementStore;

/// Persistence for raw measurement records
pub trait MeasurementStore {
    /// Load every stored record, in stored order
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing data cannot be read
    fn load(&self) -> AppResult<Vec<RawMeasurementRecord>>;

    /// Replace the stored records
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing data cannot be written
    fn save(&self, records: &[RawMeasurementRecord]) -> AppResult<()>;

    /// Add records whose timestamp is not stored yet, returning how many were added
    ///
    /// # Errors
    ///
    /// Returns a storage error if loading or saving fails
    fn merge(&self, incoming: &[RawMeasurementRecord]) -> AppResult<usize> {
        let existing = self.load()?;
        let (merged, added) = merge_records(existing, incoming);
        if added > 0 {
            self.save(&merged)?;
        }
        debug!(added, total = merged.len(), "merged measurement records");
        Ok(added)
    }

    /// Newest stored timestamp, if any record has a parseable date
    ///
    /// # Errors
    ///
    /// Returns a storage error if loading fails
    fn latest_timestamp(&self) -> AppResult<Option<NaiveDateTime>> {
        Ok(self
            .load()?
            .iter()
            .filter_map(record_timestamp)
            .max())
    }
}

/// Parsed `Date` of a record
#[must_use]
pub fn record_timestamp(record: &RawMeasurementRecord) -> Option<NaiveDateTime> {
    record.date.as_deref().and_then(parse_timestamp)
}

/// Merge `incoming` into `existing`, skipping timestamps already present
///
/// Incoming rows without a parseable date are dropped. Existing rows are
/// always kept. The result is ordered newest first; rows with unparseable
/// dates go last in their original order.
#[must_use]
pub fn merge_records(
    existing: Vec<RawMeasurementRecord>,
    incoming: &[RawMeasurementRecord],
) -> (Vec<RawMeasurementRecord>, usize) {
    let mut seen: HashSet<NaiveDateTime> = existing.iter().filter_map(record_timestamp).collect();
    let mut keyed: Vec<(Option<NaiveDateTime>, RawMeasurementRecord)> = existing
        .into_iter()
        .map(|record| (record_timestamp(&record), record))
        .collect();

    let mut added = 0;
    for record in incoming {
        let Some(timestamp) = record_timestamp(record) else {
            warn!(date = ?record.date, "skipping imported record without a valid date");
            continue;
        };
        if seen.insert(timestamp) {
            keyed.push((Some(timestamp), record.clone()));
            added += 1;
        }
    }

    keyed.sort_by_key(|(timestamp, _)| Reverse(*timestamp));
    (keyed.into_iter().map(|(_, record)| record).collect(), added)
}
