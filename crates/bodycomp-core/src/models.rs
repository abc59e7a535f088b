// ABOUTME: Measurement data models flowing through the preprocessing pipeline
// ABOUTME: Raw string records from storage, normalized points, and metric selectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::fields;

/// One row of the measurement file, exactly as stored
///
/// Every value is a string or absent. An empty (or whitespace-only) string is
/// treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMeasurementRecord {
    /// Measurement timestamp as written by the importer
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    /// Body weight in kg
    #[serde(rename = "Weight (kg)", default)]
    pub weight: Option<String>,
    /// Fat mass in kg
    #[serde(rename = "Fat mass (kg)", default)]
    pub fat_mass: Option<String>,
    /// Bone mass in kg
    #[serde(rename = "Bone mass (kg)", default)]
    pub bone_mass: Option<String>,
    /// Muscle mass in kg
    #[serde(rename = "Muscle mass (kg)", default)]
    pub muscle_mass: Option<String>,
    /// Hydration in kg
    #[serde(rename = "Hydration (kg)", default)]
    pub hydration: Option<String>,
    /// Free-text comment
    #[serde(rename = "Comments", default)]
    pub comments: Option<String>,
}

impl RawMeasurementRecord {
    /// Build a record from `(field name, value)` pairs
    ///
    /// Unknown names are ignored and blank values are stored as absent.
    pub fn from_fields<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut record = Self::default();
        for (name, value) in pairs {
            let value = non_empty(Some(value)).map(str::to_owned);
            match name {
                fields::DATE => record.date = value,
                fields::WEIGHT => record.weight = value,
                fields::FAT_MASS => record.fat_mass = value,
                fields::BONE_MASS => record.bone_mass = value,
                fields::MUSCLE_MASS => record.muscle_mass = value,
                fields::HYDRATION => record.hydration = value,
                fields::COMMENTS => record.comments = value,
                _ => {}
            }
        }
        record
    }

    /// Look up a field by its column name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            fields::DATE => &self.date,
            fields::WEIGHT => &self.weight,
            fields::FAT_MASS => &self.fat_mass,
            fields::BONE_MASS => &self.bone_mass,
            fields::MUSCLE_MASS => &self.muscle_mass,
            fields::HYDRATION => &self.hydration,
            fields::COMMENTS => &self.comments,
            _ => return None,
        };
        non_empty(value.as_deref())
    }

    /// Field values in `fields::HEADER` order, absent fields as empty strings
    #[must_use]
    pub fn to_row(&self) -> [&str; 7] {
        fields::HEADER.map(|name| self.get(name).unwrap_or(""))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Normalized per-day measurement produced by the parser
///
/// `weight` is not optional: rows without a usable weight never become points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedPoint {
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Body weight in kg
    pub weight: f64,
    /// Fat mass in kg
    pub fat_mass: Option<f64>,
    /// Fat mass as a share of weight, in percent
    pub body_fat_percentage: Option<f64>,
    /// Bone mass in kg
    pub bone_mass: Option<f64>,
    /// Muscle mass in kg
    pub muscle_mass: Option<f64>,
    /// Hydration in kg
    pub hydration: Option<f64>,
}

impl ProcessedPoint {
    /// Create a point with only a weight; other metrics are absent
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64) -> Self {
        Self {
            date,
            weight,
            fat_mass: None,
            body_fat_percentage: None,
            bone_mass: None,
            muscle_mass: None,
            hydration: None,
        }
    }

    /// Convert back into a raw record that parses to an identical point
    #[must_use]
    pub fn to_raw_record(&self) -> RawMeasurementRecord {
        let text = |value: Option<f64>| value.map(|v| v.to_string());
        RawMeasurementRecord {
            date: Some(self.date.format("%Y-%m-%d").to_string()),
            weight: Some(self.weight.to_string()),
            fat_mass: text(self.fat_mass),
            bone_mass: text(self.bone_mass),
            muscle_mass: text(self.muscle_mass),
            hydration: text(self.hydration),
            comments: None,
        }
    }
}

/// Sort direction of the processed series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    #[default]
    Asc,
    /// Newest first
    Desc,
}

impl SortOrder {
    /// Parse a sort order (case-insensitive), defaulting to ascending
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "desc" | "descending" => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// The numeric streams carried by a [`ProcessedPoint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Body weight (kg)
    Weight,
    /// Fat mass (kg)
    FatMass,
    /// Body fat (%)
    BodyFatPercentage,
    /// Bone mass (kg)
    BoneMass,
    /// Muscle mass (kg)
    MuscleMass,
    /// Hydration (kg)
    Hydration,
}

impl Metric {
    /// Every metric, in display order
    pub const ALL: [Self; 6] = [
        Self::Weight,
        Self::FatMass,
        Self::BodyFatPercentage,
        Self::BoneMass,
        Self::MuscleMass,
        Self::Hydration,
    ];

    /// Metrics checked by the outlier filter unless the caller picks others
    pub const OUTLIER_MONITORED: [Self; 4] = [
        Self::Weight,
        Self::FatMass,
        Self::BodyFatPercentage,
        Self::MuscleMass,
    ];

    /// Read this metric from a point
    #[must_use]
    pub const fn value(self, point: &ProcessedPoint) -> Option<f64> {
        match self {
            Self::Weight => Some(point.weight),
            Self::FatMass => point.fat_mass,
            Self::BodyFatPercentage => point.body_fat_percentage,
            Self::BoneMass => point.bone_mass,
            Self::MuscleMass => point.muscle_mass,
            Self::Hydration => point.hydration,
        }
    }

    /// Write this metric into a point
    ///
    /// Weight cannot become absent, so assigning `None` to it is a no-op.
    pub fn assign(self, point: &mut ProcessedPoint, value: Option<f64>) {
        match self {
            Self::Weight => {
                if let Some(weight) = value {
                    point.weight = weight;
                }
            }
            Self::FatMass => point.fat_mass = value,
            Self::BodyFatPercentage => point.body_fat_percentage = value,
            Self::BoneMass => point.bone_mass = value,
            Self::MuscleMass => point.muscle_mass = value,
            Self::Hydration => point.hydration = value,
        }
    }

    /// Serialized key, matching the JSON field name of [`ProcessedPoint`]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::FatMass => "fatMass",
            Self::BodyFatPercentage => "bodyFatPercentage",
            Self::BoneMass => "boneMass",
            Self::MuscleMass => "muscleMass",
            Self::Hydration => "hydration",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::FatMass => "Fat Mass",
            Self::BodyFatPercentage => "Body Fat",
            Self::BoneMass => "Bone Mass",
            Self::MuscleMass => "Muscle Mass",
            Self::Hydration => "Hydration",
        }
    }

    /// Unit suffix for display
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::BodyFatPercentage => "%",
            _ => "kg",
        }
    }
}
