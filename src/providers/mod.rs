// ABOUTME: Measurement providers feeding raw records into the store
// ABOUTME: Defines the import source trait and the incremental import window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Measurement import sources
//!
//! A provider turns data from an external service into
//! [`RawMeasurementRecord`]s in the store's column layout. Transport and
//! authentication are the caller's concern; providers only decode.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use bodycomp_core::constants::import::HISTORY_START;
use bodycomp_core::errors::AppResult;
use bodycomp_core::models::RawMeasurementRecord;

/// Withings `getmeas` response decoding
pub mod withings;

/// Source of raw measurement records
pub trait MeasurementProvider {
    /// Provider name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Records measured at or after `since`
    ///
    /// # Errors
    ///
    /// Returns an error if the provider data cannot be read or decoded
    fn fetch_since(&self, since: NaiveDateTime) -> AppResult<Vec<RawMeasurementRecord>>;
}

/// Where an import starts and how it is announced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportPlan {
    /// First timestamp requested from the provider
    pub start: NaiveDateTime,
    /// Day of the newest stored record, `None` on a first import
    pub last_stored: Option<NaiveDate>,
}

impl ImportPlan {
    /// Plan an import given the newest stored timestamp
    ///
    /// A first import requests the full history; later imports start at
    /// midnight of the newest stored day, so later weigh-ins from that day
    /// are fetched too. Already-stored rows are dropped by the merge.
    #[must_use]
    pub fn from_latest(latest: Option<NaiveDateTime>) -> Self {
        let history_start = history_start();
        match latest {
            Some(latest) => Self {
                start: latest.date().and_time(NaiveTime::MIN),
                last_stored: Some(latest.date()),
            },
            None => Self {
                start: history_start,
                last_stored: None,
            },
        }
    }

    /// Progress message shown before importing
    #[must_use]
    pub fn message(&self) -> String {
        self.last_stored.map_or_else(
            || "Importing all historical data...".to_owned(),
            |day| format!("Importing new data since {}...", day.format("%Y-%m-%d")),
        )
    }
}

fn history_start() -> NaiveDateTime {
    let (year, month, day) = HISTORY_START;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}
