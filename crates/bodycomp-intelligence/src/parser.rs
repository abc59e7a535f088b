// ABOUTME: Parse and normalize raw measurement rows into processed points
// ABOUTME: Completeness filtering, numeric parsing, body fat derivation, and stable date sort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Parse & Normalize stage
//!
//! Turns string-valued rows into [`ProcessedPoint`]s. The stage never fails:
//! rows without a usable date or weight are skipped, and values that do not
//! parse as finite numbers become absent.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, trace};

use bodycomp_core::models::{ProcessedPoint, RawMeasurementRecord, SortOrder};

/// Timestamp layouts accepted in the `Date` column, tried in order
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a raw timestamp into local date and time
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]`, ISO `T`-separated times, bare dates, and
/// RFC 3339 timestamps with an offset (converted to local time). Surrounding
/// whitespace and double quotes are ignored.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim().trim_matches('"').trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parse a numeric field; empty, unparseable, and non-finite input is absent
///
/// Only the leading decimal number is read, so `"80.5 kg"` is `80.5`.
/// `"0"` parses to `Some(0.0)`: zero is a measurement, not a missing value.
#[must_use]
pub fn parse_value(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim().trim_matches('"').trim();
    let number = numeric_prefix(text);
    if number.is_empty() {
        return None;
    }
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Longest leading `[+-]digits[.digits][e[+-]digits]`, empty without a digit
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from =
        |start: usize| start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits_from(sign);
    let mut mantissa_digits = end - sign;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        mantissa_digits += fraction_end - end - 1;
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }
    &text[..end]
}

/// Body fat percentage from weight and fat mass
#[must_use]
pub fn body_fat_percentage(weight: f64, fat_mass: Option<f64>) -> Option<f64> {
    let fat_mass = fat_mass?;
    if weight == 0.0 {
        return None;
    }
    Some(fat_mass / weight * 100.0)
}

/// Convert one row, returning the full timestamp used as sort key
#[must_use]
pub fn parse_record(
    record: &RawMeasurementRecord,
    include_incomplete: bool,
) -> Option<(NaiveDateTime, ProcessedPoint)> {
    let timestamp = parse_timestamp(record.date.as_deref()?)?;
    let weight = parse_value(record.weight.as_deref())?;

    let fat_mass = parse_value(record.fat_mass.as_deref());
    let bone_mass = parse_value(record.bone_mass.as_deref());
    let muscle_mass = parse_value(record.muscle_mass.as_deref());
    let hydration = parse_value(record.hydration.as_deref());

    let complete =
        fat_mass.is_some() && bone_mass.is_some() && muscle_mass.is_some() && hydration.is_some();
    if !include_incomplete && !complete {
        return None;
    }

    let point = ProcessedPoint {
        date: timestamp.date(),
        weight,
        fat_mass,
        body_fat_percentage: body_fat_percentage(weight, fat_mass),
        bone_mass,
        muscle_mass,
        hydration,
    };
    Some((timestamp, point))
}

/// Parse, filter, and sort a batch of raw rows
///
/// Rows sharing a timestamp keep their input order in either sort direction.
#[must_use]
pub fn parse_measurements(
    records: &[RawMeasurementRecord],
    include_incomplete: bool,
    sort_order: SortOrder,
) -> Vec<ProcessedPoint> {
    let mut parsed: Vec<(NaiveDateTime, ProcessedPoint)> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let parsed = parse_record(record, include_incomplete);
            if parsed.is_none() {
                trace!(index, date = ?record.date, "skipping measurement row");
            }
            parsed
        })
        .collect();

    // sort_by is stable, so equal timestamps keep their input order
    match sort_order {
        SortOrder::Asc => parsed.sort_by(|a, b| a.0.cmp(&b.0)),
        SortOrder::Desc => parsed.sort_by(|a, b| b.0.cmp(&a.0)),
    }

    debug!(
        input = records.len(),
        accepted = parsed.len(),
        include_incomplete,
        ?sort_order,
        "parsed measurement rows"
    );

    parsed.into_iter().map(|(_, point)| point).collect()
}
