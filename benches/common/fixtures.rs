// ABOUTME: Benchmark fixtures generating realistic scale measurement histories
// ABOUTME: Deterministic drift, noise, and occasional glitches for reproducible timings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating raw measurement rows.

use body_comp_tracker::models::RawMeasurementRecord;
use chrono::{Days, NaiveDate};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// About eight months of daily weigh-ins
    Typical,
    /// About three years
    Long,
    /// Stress size
    Huge,
}

impl HistoryLength {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Typical => 250,
            Self::Long => 1000,
            Self::Huge => 5000,
        }
    }
}

/// Daily complete records with slow drift, small noise, and a glitch every 37 days
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_history(length: HistoryLength) -> Vec<RawMeasurementRecord> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default();
    (0..length.count())
        .map(|index| {
            let date = start
                .checked_add_days(Days::new(index as u64))
                .unwrap_or(start);
            let noise = ((index * 7919) % 11) as f64 / 20.0 - 0.25;
            let weight = (index as f64).mul_add(-0.004, 84.0) + noise;
            let fat_mass = if index % 37 == 36 {
                weight * 0.04
            } else {
                weight.mul_add(0.18, noise / 2.0)
            };
            RawMeasurementRecord {
                date: Some(format!("{} 07:30:00", date.format("%Y-%m-%d"))),
                weight: Some(format!("{weight:.2}")),
                fat_mass: Some(format!("{fat_mass:.2}")),
                bone_mass: Some("3.40".to_owned()),
                muscle_mass: Some(format!("{:.2}", weight * 0.76)),
                hydration: Some(format!("{:.2}", weight * 0.55)),
                comments: None,
            }
        })
        .collect()
}
