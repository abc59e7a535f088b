// ABOUTME: Output format abstraction for rendering processed series and summaries
// ABOUTME: Supports aligned text tables (default), JSON, and CSV
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Renders [`ProcessedPoint`] series and [`SummaryStats`] for the command
//! line. Tables show absent values as `N/A`; JSON uses `null` and CSV leaves
//! the cell empty.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use body_comp_tracker::formatters::{format_points, OutputFormat};
//!
//! let points = Vec::new();
//! if let Ok(output) = format_points(&points, OutputFormat::Json) {
//!     println!("{}", output.data);
//! }
//! ```

use std::fmt::{self, Write as _};
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use bodycomp_core::models::{Metric, ProcessedPoint};
use bodycomp_intelligence::summary::SummaryStats;

/// Placeholder for absent values in tables
pub const MISSING_VALUE: &str = "N/A";

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table (default)
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Table` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            _ => Self::Table,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used
    pub format: OutputFormat,
}

impl FormattedOutput {
    const fn new(data: String, format: OutputFormat) -> Self {
        Self { data, format }
    }

    /// Save the rendered data to `path`, ending with a newline
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        if self.data.ends_with('\n') {
            fs::write(path, &self.data)
        } else {
            fs::write(path, format!("{}\n", self.data))
        }
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Render a processed series
///
/// # Errors
///
/// Returns `FormatError` if JSON or CSV serialization fails
pub fn format_points(
    points: &[ProcessedPoint],
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Table => points_table(points),
        OutputFormat::Json => to_json(points, format)?,
        OutputFormat::Csv => to_csv(points, format)?,
    };
    Ok(FormattedOutput::new(data, format))
}

/// Render summary statistics
///
/// # Errors
///
/// Returns `FormatError` if JSON or CSV serialization fails
pub fn format_summary(
    stats: &SummaryStats,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Table => summary_table(stats),
        OutputFormat::Json => to_json(stats, format)?,
        OutputFormat::Csv => to_csv(&stats.metrics, format)?,
    };
    Ok(FormattedOutput::new(data, format))
}

/// Two decimals, or `N/A`
#[must_use]
pub fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_owned(), |v| format!("{v:.2}"))
}

fn to_json<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

fn to_csv<T: Serialize>(rows: &[T], format: OutputFormat) -> Result<String, FormatError> {
    let error = |message: String| FormatError { message, format };

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(|e| error(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| error(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| error(e.to_string()))
}

fn points_table(points: &[ProcessedPoint]) -> String {
    let mut out = format!("{:<12}", "Date");
    for metric in Metric::ALL {
        let _ = write!(out, "{:>18}", format!("{} ({})", metric.display_name(), metric.unit()));
    }
    out.push('\n');

    for point in points {
        let _ = write!(out, "{:<12}", point.date.format("%Y-%m-%d"));
        for metric in Metric::ALL {
            let _ = write!(out, "{:>18}", format_value(metric.value(point)));
        }
        out.push('\n');
    }
    out
}

fn summary_table(stats: &SummaryStats) -> String {
    let range = match (stats.first_date, stats.last_date) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => MISSING_VALUE.to_owned(),
    };
    let mut out = format!("Points: {}\nRange:  {range}\n\n", stats.point_count);
    let _ = writeln!(
        out,
        "{:<18}{:>7}{:>10}{:>10}{:>10}{:>10}{:>10}{:>10}",
        "Metric", "Count", "Min", "Max", "Avg", "Earliest", "Latest", "Change"
    );
    for summary in &stats.metrics {
        let _ = writeln!(
            out,
            "{:<18}{:>7}{:>10}{:>10}{:>10}{:>10}{:>10}{:>10}",
            format!("{} ({})", summary.metric.display_name(), summary.metric.unit()),
            summary.count,
            format_value(summary.min),
            format_value(summary.max),
            format_value(summary.avg),
            format_value(summary.earliest),
            format_value(summary.latest),
            format_value(summary.change),
        );
    }
    out
}
