//! The quiet policy.

use crate::sink::{ReportError, Reporter};
use forgebench_core::{
    BenchmarkParams, IterationParams, IterationResult, IterationType, RunResult,
};

/// Reporting policy that swallows every event and writes nothing.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl SilentReporter {
    /// Create a silent reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentReporter {
    fn start_run(&mut self) -> Result<(), ReportError> {
        Ok(())
    }

    fn start_benchmark(&mut self, _params: &BenchmarkParams) -> Result<(), ReportError> {
        Ok(())
    }

    fn iteration(
        &mut self,
        _params: &BenchmarkParams,
        _phase: &IterationParams,
        _number: u32,
        _kind: IterationType,
    ) -> Result<(), ReportError> {
        Ok(())
    }

    fn iteration_result(
        &mut self,
        _params: &BenchmarkParams,
        _phase: &IterationParams,
        _number: u32,
        _kind: IterationType,
        _result: &IterationResult,
    ) -> Result<(), ReportError> {
        Ok(())
    }

    fn end_benchmark(&mut self, _result: Option<&RunResult>) -> Result<(), ReportError> {
        Ok(())
    }

    fn end_run(&mut self, _results: &[RunResult]) -> Result<(), ReportError> {
        Ok(())
    }
}
