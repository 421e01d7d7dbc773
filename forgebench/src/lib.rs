#![warn(missing_docs)]
//! # ForgeBench
//!
//! Deterministic text reporting for benchmark harnesses.
//!
//! ForgeBench consumes the fixed sequence of lifecycle events a benchmark
//! harness emits — run start, per-benchmark headers, iteration labels and
//! results, per-benchmark aggregates, run end — and renders them as
//! human-readable text, handing the end-of-run summary to a pluggable
//! aggregate format (text table, CSV, SCSV, or JSON).
//!
//! The renderer is passive and single-pass: it never calls back into the
//! harness, holds no measurement state between calls, and flushes after
//! every event so interleaved workload output lands where it belongs.
//!
//! ## Quick Start
//!
//! ```
//! use forgebench::prelude::*;
//!
//! # fn main() -> Result<(), forgebench::ReportError> {
//! let mut reporter = TextReporter::new(std::io::stdout(), ResultFormatType::Text);
//! reporter.start_run()?;
//! // ... drive lifecycle events from the harness ...
//! reporter.end_run(&[])?;
//! # Ok(())
//! # }
//! ```

// Re-export value objects
pub use forgebench_core::{
    BenchmarkParams, IterationParams, IterationResult, IterationType, Metric, MetricStats, Mode,
    RunResult, TimeUnit, TimeValue,
};

// Re-export the reporting layer
pub use forgebench_report::{
    generate_csv_report, generate_json_report, generate_text_report, render_aggregate,
    reporter_for, ReportConfig, ReportError, Reporter, ResultFormatType, SilentReporter,
    TextReporter, Verbosity, VerboseReporter,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkParams, IterationParams, IterationResult, IterationType, Metric, Mode, Reporter,
        ResultFormatType, RunResult, TextReporter, TimeValue, Verbosity,
    };
}
