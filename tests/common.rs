// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging plus raw record and processed point builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `body_comp_tracker`

use std::sync::Once;

use body_comp_tracker::models::{ProcessedPoint, RawMeasurementRecord};
use chrono::{Days, NaiveDate};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// `2024-01-01` plus `offset` days
pub fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

/// Morning weigh-in timestamp on `day(offset)`
pub fn timestamp(offset: u64) -> String {
    format!("{} 07:30:00", day(offset).format("%Y-%m-%d"))
}

/// Raw record carrying every body composition column
pub fn complete_record(
    date: &str,
    weight: f64,
    fat_mass: f64,
    bone_mass: f64,
    muscle_mass: f64,
    hydration: f64,
) -> RawMeasurementRecord {
    RawMeasurementRecord {
        date: Some(date.to_owned()),
        weight: Some(weight.to_string()),
        fat_mass: Some(fat_mass.to_string()),
        bone_mass: Some(bone_mass.to_string()),
        muscle_mass: Some(muscle_mass.to_string()),
        hydration: Some(hydration.to_string()),
        comments: None,
    }
}

/// Raw record with only date and weight
pub fn weight_record(date: &str, weight: &str) -> RawMeasurementRecord {
    RawMeasurementRecord::from_fields([("Date", date), ("Weight (kg)", weight)])
}

/// Weight-only point on `day(offset)`
pub fn weight_point(offset: u64, weight: f64) -> ProcessedPoint {
    ProcessedPoint::new(day(offset), weight)
}

/// Consecutive daily weight-only points
pub fn weight_series(weights: &[f64]) -> Vec<ProcessedPoint> {
    weights
        .iter()
        .zip(0_u64..)
        .map(|(&weight, offset)| weight_point(offset, weight))
        .collect()
}
