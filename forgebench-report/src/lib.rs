#![warn(missing_docs)]
//! ForgeBench Report - Lifecycle Reporting and Aggregate Output
//!
//! Consumes the lifecycle events a benchmark harness emits and renders them
//! as deterministic text:
//! - [`Reporter`] — the six-operation lifecycle contract
//! - [`TextReporter`] / [`SilentReporter`] / [`VerboseReporter`] — one
//!   concrete type per rendering policy, selected at configuration time
//! - [`ResultFormatType`] + [`render_aggregate`] — pluggable end-of-run
//!   summary formats (text table, CSV, SCSV, JSON)

mod config;
mod csv;
mod json;
mod silent;
mod sink;
mod table;
mod text;
mod verbose;

pub use config::ReportConfig;
pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use silent::SilentReporter;
pub use sink::{reporter_for, ReportError, Reporter, Verbosity};
pub use table::generate_text_report;
pub use text::TextReporter;
pub use verbose::VerboseReporter;

use forgebench_core::RunResult;
use serde::{Deserialize, Serialize};

/// Aggregate report format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFormatType {
    /// Human-readable summary table
    Text,
    /// Comma-separated values
    Csv,
    /// Semicolon-separated values
    Scsv,
    /// Machine-readable JSON
    Json,
}

impl std::str::FromStr for ResultFormatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ResultFormatType::Text),
            "csv" => Ok(ResultFormatType::Csv),
            "scsv" => Ok(ResultFormatType::Scsv),
            "json" => Ok(ResultFormatType::Json),
            other => Err(format!("Unknown result format: {}", other)),
        }
    }
}

/// Render the end-of-run aggregate report in the requested format.
///
/// Invoked by [`Reporter::end_run`] with every benchmark's [`RunResult`]; an
/// empty collection still renders (headers only).
pub fn render_aggregate(
    kind: ResultFormatType,
    results: &[RunResult],
) -> Result<String, ReportError> {
    tracing::debug!(format = ?kind, benchmarks = results.len(), "rendering aggregate report");
    match kind {
        ResultFormatType::Text => Ok(generate_text_report(results)),
        ResultFormatType::Csv => Ok(generate_csv_report(results, ',')),
        ResultFormatType::Scsv => Ok(generate_csv_report(results, ';')),
        ResultFormatType::Json => Ok(generate_json_report(results)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<ResultFormatType>().unwrap(), ResultFormatType::Text);
        assert_eq!("CSV".parse::<ResultFormatType>().unwrap(), ResultFormatType::Csv);
        assert_eq!("scsv".parse::<ResultFormatType>().unwrap(), ResultFormatType::Scsv);
        assert_eq!("json".parse::<ResultFormatType>().unwrap(), ResultFormatType::Json);
        assert!("xml".parse::<ResultFormatType>().is_err());
    }

    #[test]
    fn test_render_aggregate_empty_input() {
        // The dispatcher is never skipped for an empty run
        for kind in [
            ResultFormatType::Text,
            ResultFormatType::Csv,
            ResultFormatType::Scsv,
            ResultFormatType::Json,
        ] {
            let rendered = render_aggregate(kind, &[]).unwrap();
            assert!(!rendered.is_empty());
        }
    }
}
