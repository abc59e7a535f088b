// ABOUTME: Accessor traits that let the pipeline stages read and write metric streams
// ABOUTME: Implemented for the built-in Metric enum, plain closures, and getter/setter pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric accessors
//!
//! The outlier filter only needs to read a nullable number from each point;
//! the smoother also needs to write its result back. Both are expressed as
//! traits so the stages work on any point type.
//!
//! ```rust
//! use bodycomp_core::models::{Metric, ProcessedPoint};
//! use bodycomp_core::series::{MetricAccessor, SeriesMetric, SmoothableMetric};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let mut point = ProcessedPoint::new(date, 80.0);
//!
//! assert_eq!(Metric::Weight.extract(&point), Some(80.0));
//!
//! let hydration = MetricAccessor::new(
//!     |p: &ProcessedPoint| p.hydration,
//!     |p: &mut ProcessedPoint, v: Option<f64>| p.hydration = v,
//! );
//! hydration.assign(&mut point, Some(48.5));
//! assert_eq!(hydration.extract(&point), Some(48.5));
//! ```

use crate::models::{Metric, ProcessedPoint};

/// Reads one nullable numeric stream from a point
pub trait SeriesMetric<P> {
    /// Value of this metric on `point`, `None` when absent
    fn extract(&self, point: &P) -> Option<f64>;
}

/// A metric that can also be written back into a point
pub trait SmoothableMetric<P>: SeriesMetric<P> {
    /// Store `value` as this metric on `point`
    fn assign(&self, point: &mut P, value: Option<f64>);
}

impl SeriesMetric<ProcessedPoint> for Metric {
    fn extract(&self, point: &ProcessedPoint) -> Option<f64> {
        self.value(point)
    }
}

impl SmoothableMetric<ProcessedPoint> for Metric {
    fn assign(&self, point: &mut ProcessedPoint, value: Option<f64>) {
        Metric::assign(*self, point, value);
    }
}

impl<P, F> SeriesMetric<P> for F
where
    F: Fn(&P) -> Option<f64>,
{
    fn extract(&self, point: &P) -> Option<f64> {
        self(point)
    }
}

/// Getter/setter pair describing a custom metric stream
#[derive(Debug, Clone, Copy)]
pub struct MetricAccessor<G, S> {
    /// Reads the value
    pub get: G,
    /// Writes the value
    pub set: S,
}

impl<G, S> MetricAccessor<G, S> {
    /// Pair a getter with a setter
    pub const fn new(get: G, set: S) -> Self {
        Self { get, set }
    }
}

impl<P, G, S> SeriesMetric<P> for MetricAccessor<G, S>
where
    G: Fn(&P) -> Option<f64>,
{
    fn extract(&self, point: &P) -> Option<f64> {
        (self.get)(point)
    }
}

impl<P, G, S> SmoothableMetric<P> for MetricAccessor<G, S>
where
    G: Fn(&P) -> Option<f64>,
    S: Fn(&mut P, Option<f64>),
{
    fn assign(&self, point: &mut P, value: Option<f64>) {
        (self.set)(point, value);
    }
}
