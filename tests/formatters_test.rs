// ABOUTME: Unit tests for series and summary output formatting
// ABOUTME: Table placeholders, JSON field names, CSV headers, and format selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use body_comp_tracker::formatters::{
    format_points, format_summary, format_value, OutputFormat, MISSING_VALUE,
};
use body_comp_tracker::intelligence::calculate_summary_stats;
use common::weight_series;

#[test]
fn test_format_selection() {
    assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str_param("csv"), OutputFormat::Csv);
    assert_eq!(OutputFormat::from_str_param("table"), OutputFormat::Table);
    assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Table);
    assert_eq!(OutputFormat::default(), OutputFormat::Table);
    assert_eq!(OutputFormat::Csv.to_string(), "csv");
}

#[test]
fn test_value_formatting() {
    assert_eq!(format_value(Some(80.456)), "80.46");
    assert_eq!(format_value(Some(0.0)), "0.00");
    assert_eq!(format_value(None), MISSING_VALUE);
}

#[test]
fn test_table_marks_absent_values() {
    let mut points = weight_series(&[80.0, 80.5]);
    points[0].fat_mass = Some(12.0);

    let output = format_points(&points, OutputFormat::Table).unwrap();

    let lines: Vec<&str> = output.data.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Date"));
    assert!(lines[1].starts_with("2024-01-01"));
    assert!(lines[1].contains("12.00"));
    assert!(lines[2].contains(MISSING_VALUE));
}

#[test]
fn test_json_uses_camel_case_and_null() {
    let points = weight_series(&[80.0]);

    let output = format_points(&points, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();

    assert_eq!(value[0]["date"], "2024-01-01");
    assert_eq!(value[0]["weight"], 80.0);
    assert!(value[0]["bodyFatPercentage"].is_null());
    assert_eq!(output.format, OutputFormat::Json);
}

#[test]
fn test_csv_has_header_and_one_row_per_point() {
    let points = weight_series(&[80.0, 80.5, 81.0]);

    let output = format_points(&points, OutputFormat::Csv).unwrap();

    let lines: Vec<&str> = output.data.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "date,weight,fatMass,bodyFatPercentage,boneMass,muscleMass,hydration"
    );
    assert_eq!(lines[1], "2024-01-01,80.0,,,,,");
}

#[test]
fn test_summary_renders_in_every_format() {
    let stats = calculate_summary_stats(&weight_series(&[80.0, 79.0]));

    let table = format_summary(&stats, OutputFormat::Table).unwrap();
    assert!(table.data.contains("Points: 2"));
    assert!(table.data.contains("-1.00"));

    let json = format_summary(&stats, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json.data).unwrap();
    assert_eq!(value["point_count"], 2);

    let csv = format_summary(&stats, OutputFormat::Csv).unwrap();
    assert_eq!(csv.data.lines().count(), 7);
    assert!(csv.data.starts_with("metric,count,"));
}

#[test]
fn test_rendered_output_saved_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("series.json");
    let output = format_points(&weight_series(&[80.0, 80.5]), OutputFormat::Json).unwrap();

    output.write_to(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}
