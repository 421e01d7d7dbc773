//! The extra-detail policy.

use crate::sink::{ReportError, Reporter};
use crate::{ResultFormatType, TextReporter};
use forgebench_core::{
    BenchmarkParams, IterationParams, IterationResult, IterationType, RunResult,
};
use std::io::Write;

/// Text rendering plus extra detail: warmup iterations also show their
/// secondary results instead of suppressing them.
///
/// Layout rules are shared with [`TextReporter`] by delegation, so all
/// literal strings and widths match the standard policy.
pub struct VerboseReporter<W: Write> {
    inner: TextReporter<W>,
}

impl<W: Write> VerboseReporter<W> {
    /// Create a verbose reporter writing to `out`.
    pub fn new(out: W, format: ResultFormatType) -> Self {
        Self {
            inner: TextReporter::new(out, format),
        }
    }

    /// Consume the reporter and return the output stream.
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write> Reporter for VerboseReporter<W> {
    fn start_run(&mut self) -> Result<(), ReportError> {
        self.inner.start_run()
    }

    fn start_benchmark(&mut self, params: &BenchmarkParams) -> Result<(), ReportError> {
        self.inner.write_start_benchmark(params)
    }

    fn iteration(
        &mut self,
        _params: &BenchmarkParams,
        _phase: &IterationParams,
        number: u32,
        kind: IterationType,
    ) -> Result<(), ReportError> {
        self.inner.write_iteration(number, kind)
    }

    fn iteration_result(
        &mut self,
        _params: &BenchmarkParams,
        _phase: &IterationParams,
        number: u32,
        kind: IterationType,
        result: &IterationResult,
    ) -> Result<(), ReportError> {
        self.inner.write_iteration_result(number, kind, result, true)
    }

    fn end_benchmark(&mut self, result: Option<&RunResult>) -> Result<(), ReportError> {
        self.inner.write_end_benchmark(result)
    }

    fn end_run(&mut self, results: &[RunResult]) -> Result<(), ReportError> {
        self.inner.write_end_run(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgebench_core::Metric;

    #[test]
    fn warmup_secondary_results_are_rendered() {
        let mut reporter = VerboseReporter::new(Vec::new(), ResultFormatType::Text);
        reporter
            .inner
            .write_iteration(1, IterationType::Warmup)
            .unwrap();
        let result = IterationResult::new(Metric::new(1.0, "ops/s"))
            .with_secondary("gc.count", Metric::new(2.0, "counts"));
        reporter
            .inner
            .write_iteration_result(1, IterationType::Warmup, &result, true)
            .unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.contains("gc.count: 2.000 counts"));
    }
}
