// ABOUTME: Withings measure API response decoding into raw measurement records
// ABOUTME: Scales measure values, derives muscle mass, and maps status codes to errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Withings `getmeas` decoding
//!
//! Each measure group becomes one record. Measure values arrive as integer
//! mantissas with a base-10 exponent (`value * 10^unit`). Withings reports
//! fat-free mass rather than muscle mass, so muscle mass is derived as
//! fat-free mass minus bone mass.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime, TimeZone};
use serde::Deserialize;
use tracing::{debug, error};

use bodycomp_core::constants::import::DATE_TIME_FORMAT;
use bodycomp_core::constants::withings::{
    MEASURE_BONE_MASS, MEASURE_FAT_FREE_MASS, MEASURE_FAT_MASS, MEASURE_HYDRATION,
    MEASURE_WEIGHT, SERVICE_NAME, STATUS_INVALID_TOKEN, STATUS_OK,
};
use bodycomp_core::errors::{AppError, AppResult, ErrorCode};
use bodycomp_core::models::RawMeasurementRecord;

use super::MeasurementProvider;

/// Top-level `getmeas` response
#[derive(Debug, Clone, Deserialize)]
pub struct MeasureResponse {
    /// Zero on success
    pub status: i64,
    /// Payload, absent on most errors
    #[serde(default)]
    pub body: Option<MeasureBody>,
    /// Error text sent with some failures
    #[serde(default)]
    pub error: Option<String>,
}

/// Response payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeasureBody {
    /// Measure groups, one per weigh-in
    #[serde(default)]
    pub measuregrps: Vec<MeasureGroup>,
}

/// Measures taken together at one moment
#[derive(Debug, Clone, Deserialize)]
pub struct MeasureGroup {
    /// Unix timestamp in seconds
    pub date: i64,
    /// Individual measures
    #[serde(default)]
    pub measures: Vec<Measure>,
}

/// Single scaled measure
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Measure {
    /// Integer mantissa
    pub value: i64,
    /// Measure type code
    #[serde(rename = "type")]
    pub measure_type: i64,
    /// Base-10 exponent applied to `value`
    pub unit: i32,
}

impl Measure {
    /// Value in real units
    #[must_use]
    pub fn scaled_value(&self) -> f64 {
        self.value as f64 * 10_f64.powi(self.unit)
    }
}

impl MeasureResponse {
    /// Parse a JSON response body
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the response shape
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::external_service(SERVICE_NAME, "failed to parse measure response")
                .with_source(e)
        })
    }

    /// Check the status and decode every measure group
    ///
    /// # Errors
    ///
    /// Returns `ExternalAuthFailed` when the token was rejected,
    /// `ExternalServiceError` for any other non-zero status, and
    /// `InvalidInput` if a group carries an out-of-range timestamp.
    pub fn into_records(self) -> AppResult<Vec<RawMeasurementRecord>> {
        self.check_status()?;
        self.body
            .unwrap_or_default()
            .measuregrps
            .iter()
            .map(MeasureGroup::to_record)
            .collect()
    }

    fn check_status(&self) -> AppResult<()> {
        if self.status == STATUS_OK {
            return Ok(());
        }

        let detail = self.error.as_deref().unwrap_or("no error detail");
        error!(status = self.status, detail, "Withings API returned an error status");
        if self.status == STATUS_INVALID_TOKEN {
            return Err(AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("{SERVICE_NAME}: access token rejected ({detail})"),
            ));
        }
        Err(AppError::external_service(
            SERVICE_NAME,
            format!("API status {}: {detail}", self.status),
        ))
    }
}

impl MeasureGroup {
    /// Local time of the weigh-in
    #[must_use]
    pub fn local_time(&self) -> Option<NaiveDateTime> {
        Local
            .timestamp_opt(self.date, 0)
            .single()
            .map(|time| time.naive_local())
    }

    /// Decode into a raw record in the store's column layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the timestamp cannot be represented
    pub fn to_record(&self) -> AppResult<RawMeasurementRecord> {
        let timestamp = self
            .local_time()
            .ok_or_else(|| AppError::invalid_input(format!("invalid measure date {}", self.date)))?;

        let values: HashMap<i64, f64> = self
            .measures
            .iter()
            .map(|measure| (measure.measure_type, measure.scaled_value()))
            .collect();
        let get = |code: i64| values.get(&code).copied();

        Ok(RawMeasurementRecord {
            date: Some(timestamp.format(DATE_TIME_FORMAT).to_string()),
            weight: get(MEASURE_WEIGHT).map(format_kg),
            fat_mass: get(MEASURE_FAT_MASS).map(format_kg),
            bone_mass: get(MEASURE_BONE_MASS).map(format_kg),
            muscle_mass: muscle_mass(get(MEASURE_FAT_FREE_MASS), get(MEASURE_BONE_MASS))
                .map(format_kg),
            hydration: get(MEASURE_HYDRATION).map(format_kg),
            comments: None,
        })
    }
}

/// Muscle mass from fat-free and bone mass
///
/// Bone mass is subtracted when known; without fat-free mass there is no
/// muscle mass.
#[must_use]
pub fn muscle_mass(fat_free_mass: Option<f64>, bone_mass: Option<f64>) -> Option<f64> {
    let fat_free = fat_free_mass?;
    Some(bone_mass.map_or(fat_free, |bone| fat_free - bone))
}

fn format_kg(value: f64) -> String {
    format!("{value:.2}")
}

/// Saved `getmeas` response file, used as an offline import source
#[derive(Debug, Clone)]
pub struct WithingsExport {
    path: PathBuf,
}

impl WithingsExport {
    /// Source reading the response stored at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MeasurementProvider for WithingsExport {
    fn name(&self) -> &'static str {
        SERVICE_NAME
    }

    fn fetch_since(&self, since: NaiveDateTime) -> AppResult<Vec<RawMeasurementRecord>> {
        let json = fs::read_to_string(&self.path).map_err(|e| {
            AppError::storage(format!("failed to read {}", self.path.display())).with_source(e)
        })?;
        let mut response = MeasureResponse::from_json(&json)?;
        response.check_status()?;

        let total = response.body.as_ref().map_or(0, |body| body.measuregrps.len());
        if let Some(body) = response.body.as_mut() {
            body.measuregrps
                .retain(|group| group.local_time().is_some_and(|time| time >= since));
        }
        let records = response.into_records()?;
        debug!(
            provider = SERVICE_NAME,
            total,
            kept = records.len(),
            since = %since,
            "decoded measure groups"
        );
        Ok(records)
    }
}
