//! The lifecycle contract between a harness and a reporting policy.

use crate::{ResultFormatType, SilentReporter, TextReporter, VerboseReporter};
use forgebench_core::{
    BenchmarkParams, IterationParams, IterationResult, IterationType, RunResult,
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// Errors surfaced by a reporting policy
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output stream failed; propagated, never retried
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The harness violated the lifecycle call order; signals a defect in
    /// the driver, not a recoverable runtime condition
    #[error("protocol violation in {call}: {detail}")]
    Protocol {
        /// Offending lifecycle operation
        call: &'static str,
        /// What went wrong
        detail: String,
    },

    /// Aggregate JSON serialization failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Event sink a benchmark harness drives through one run.
///
/// Mandatory call order per run: `start_run`, then for each benchmark
/// `start_benchmark` followed by `iteration`/`iteration_result` pairs
/// (iteration numbers start at 1 and reset per phase), then `end_benchmark`;
/// finally one `end_run` with every benchmark's aggregate.
///
/// Calls are strictly sequential and non-overlapping; implementations assume
/// a single driver thread. Every operation that produces visible output ends
/// with a flush of the output stream.
pub trait Reporter {
    /// Marks run start. May be a no-op.
    fn start_run(&mut self) -> Result<(), ReportError>;

    /// Called once per benchmark, before any of its iterations.
    fn start_benchmark(&mut self, params: &BenchmarkParams) -> Result<(), ReportError>;

    /// Called before the measurement of one iteration is taken.
    fn iteration(
        &mut self,
        params: &BenchmarkParams,
        phase: &IterationParams,
        number: u32,
        kind: IterationType,
    ) -> Result<(), ReportError>;

    /// Called after the measurement, with the same number and phase as the
    /// preceding `iteration` call.
    fn iteration_result(
        &mut self,
        params: &BenchmarkParams,
        phase: &IterationParams,
        number: u32,
        kind: IterationType,
        result: &IterationResult,
    ) -> Result<(), ReportError>;

    /// Called exactly once per benchmark; `None` when the benchmark failed
    /// upstream before producing a result.
    fn end_benchmark(&mut self, result: Option<&RunResult>) -> Result<(), ReportError>;

    /// Called exactly once at process end, with every benchmark's aggregate
    /// (the collection may be empty).
    fn end_run(&mut self, results: &[RunResult]) -> Result<(), ReportError>;
}

/// Reporting verbosity, selecting the concrete policy at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// No per-event output at all
    Silent,
    /// Standard per-event text
    #[default]
    Normal,
    /// Standard text plus extra detail
    Extra,
}

impl std::str::FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "quiet" => Ok(Verbosity::Silent),
            "normal" => Ok(Verbosity::Normal),
            "extra" | "verbose" => Ok(Verbosity::Extra),
            other => Err(format!("Unknown verbosity: {}", other)),
        }
    }
}

/// Select the reporting policy for `verbosity`, writing to `out` and handing
/// end-of-run aggregates to the `format` dispatcher.
pub fn reporter_for<W: Write + 'static>(
    verbosity: Verbosity,
    format: ResultFormatType,
    out: W,
) -> Box<dyn Reporter> {
    tracing::debug!(?verbosity, ?format, "selecting reporter policy");
    match verbosity {
        Verbosity::Silent => Box::new(SilentReporter::new()),
        Verbosity::Normal => Box::new(TextReporter::new(out, format)),
        Verbosity::Extra => Box::new(VerboseReporter::new(out, format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_str() {
        assert_eq!("silent".parse::<Verbosity>().unwrap(), Verbosity::Silent);
        assert_eq!("quiet".parse::<Verbosity>().unwrap(), Verbosity::Silent);
        assert_eq!("normal".parse::<Verbosity>().unwrap(), Verbosity::Normal);
        assert_eq!("verbose".parse::<Verbosity>().unwrap(), Verbosity::Extra);
        assert!("loud".parse::<Verbosity>().is_err());
    }

    #[test]
    fn test_reporter_selection_is_usable() {
        let mut reporter = reporter_for(Verbosity::Silent, ResultFormatType::Text, Vec::new());
        reporter.start_run().unwrap();
        reporter.end_run(&[]).unwrap();
    }
}
