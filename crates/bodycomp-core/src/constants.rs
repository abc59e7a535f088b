// ABOUTME: Constants module with domain-separated organization
// ABOUTME: CSV field names, pipeline defaults, and Withings measure type codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Column names of the measurement CSV, shared by storage and provider import
pub mod fields {
    /// Measurement timestamp column
    pub const DATE: &str = "Date";
    /// Body weight column
    pub const WEIGHT: &str = "Weight (kg)";
    /// Fat mass column
    pub const FAT_MASS: &str = "Fat mass (kg)";
    /// Bone mass column
    pub const BONE_MASS: &str = "Bone mass (kg)";
    /// Muscle mass column
    pub const MUSCLE_MASS: &str = "Muscle mass (kg)";
    /// Hydration column
    pub const HYDRATION: &str = "Hydration (kg)";
    /// Free-text comment column
    pub const COMMENTS: &str = "Comments";

    /// Header order used when writing the measurement file
    pub const HEADER: [&str; 7] = [
        DATE,
        WEIGHT,
        FAT_MASS,
        BONE_MASS,
        MUSCLE_MASS,
        HYDRATION,
        COMMENTS,
    ];
}

/// Defaults for the preprocessing pipeline
pub mod pipeline {
    /// Width of the centered window used for outlier detection
    pub const DEFAULT_OUTLIER_WINDOW: usize = 15;
    /// Modified Z-Score above which a value is an outlier
    pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 3.5;
    /// Width of the trailing weighted-average window
    pub const DEFAULT_SMOOTHING_WINDOW: usize = 4;
    /// Consistency constant of the Modified Z-Score (Iglewicz & Hoaglin)
    pub const MODIFIED_Z_SCORE_SCALE: f64 = 0.6745;
    /// Fewest present values a window needs before it can flag anything
    pub const MIN_WINDOW_SAMPLES: usize = 3;
}

/// Withings measure API codes
pub mod withings {
    /// Service name used in error messages and logs
    pub const SERVICE_NAME: &str = "withings";
    /// `meastype` for body weight (kg)
    pub const MEASURE_WEIGHT: i64 = 1;
    /// `meastype` for fat-free mass (kg)
    pub const MEASURE_FAT_FREE_MASS: i64 = 5;
    /// `meastype` for fat mass weight (kg)
    pub const MEASURE_FAT_MASS: i64 = 8;
    /// `meastype` for hydration (kg)
    pub const MEASURE_HYDRATION: i64 = 77;
    /// `meastype` for bone mass (kg)
    pub const MEASURE_BONE_MASS: i64 = 88;
    /// Status value of a successful response
    pub const STATUS_OK: i64 = 0;
    /// Status value returned when the access token is rejected
    pub const STATUS_INVALID_TOKEN: i64 = 401;
}

/// Import bookkeeping
pub mod import {
    /// Start date of the very first import when the store is empty
    pub const HISTORY_START: (i32, u32, u32) = (2015, 1, 1);
    /// Timestamp layout written to the `Date` column
    pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}
