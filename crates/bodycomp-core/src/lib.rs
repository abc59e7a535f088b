// ABOUTME: Core types and constants for the body composition tracker
// ABOUTME: Foundation crate with measurement models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Composition Core
//!
//! Foundation crate providing shared types and constants for the body
//! composition tracker. It changes rarely, so the processing crate and the
//! application crate can build against it incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Field names, pipeline defaults, and provider measure codes
//! - **models**: Raw measurement records, processed points, and metric selectors

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Measurement data models (`RawMeasurementRecord`, `ProcessedPoint`, `Metric`)
pub mod models;

/// Metric accessor traits used by the processing stages
pub mod series;
