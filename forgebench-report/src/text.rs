//! The standard per-event text renderer.

use crate::sink::{ReportError, Reporter};
use crate::{render_aggregate, ResultFormatType};
use forgebench_core::{
    BenchmarkParams, IterationParams, IterationResult, IterationType, RunResult,
};
use std::collections::BTreeMap;
use std::io::Write;

/// Renders each lifecycle event as one or more text lines on `out`.
///
/// The renderer is single-pass: every line is composed from the current
/// call's data alone, and the stream is flushed after each call so output
/// interleaved by the workload (e.g. a forked subprocess's stdout) lands
/// after the label it belongs to.
pub struct TextReporter<W: Write> {
    out: W,
    format: ResultFormatType,
    iteration_open: bool,
}

impl<W: Write> TextReporter<W> {
    /// Create a text reporter writing to `out`, handing the end-of-run
    /// aggregate to the `format` dispatcher.
    pub fn new(out: W, format: ResultFormatType) -> Self {
        Self {
            out,
            format,
            iteration_open: false,
        }
    }

    /// Consume the reporter and return the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn phase_line(prefix: &str, phase: &IterationParams) -> String {
        if phase.count > 0 {
            let batch = if phase.batch_size > 1 {
                format!(", {} calls per batch", phase.batch_size)
            } else {
                String::new()
            };
            format!(
                "{} {} iterations, {} each{}",
                prefix, phase.count, phase.time, batch
            )
        } else {
            format!("{} <none>", prefix)
        }
    }

    fn iteration_label(number: u32, kind: IterationType) -> String {
        match kind {
            IterationType::Warmup => format!("# Warmup Iteration {:3}: ", number),
            IterationType::Measurement => format!("Iteration {:3}: ", number),
        }
    }

    pub(crate) fn write_start_benchmark(
        &mut self,
        params: &BenchmarkParams,
    ) -> Result<(), ReportError> {
        writeln!(self.out, "{}", Self::phase_line("# Warmup:", &params.warmup))?;
        writeln!(
            self.out,
            "{}",
            Self::phase_line("# Measurement:", &params.measurement)
        )?;

        let threads_suffix = if params.synch_iterations {
            ", will synchronize iterations"
        } else if params.mode.is_single_shot() {
            ""
        } else {
            ", ***WARNING: Synchronize iterations are disabled!***"
        };
        writeln!(
            self.out,
            "# Threads: {} {}{}",
            params.threads,
            threads_word(params.threads),
            threads_suffix
        )?;

        writeln!(self.out, "# Benchmark mode: {}", params.mode.long_label())?;
        writeln!(self.out, "# Benchmark: {}", params.benchmark)?;
        if !params.params.is_empty() {
            writeln!(self.out, "# Parameters: {}", format_params(&params.params))?;
        }
        self.out.flush()?;
        self.iteration_open = false;
        Ok(())
    }

    pub(crate) fn write_iteration(
        &mut self,
        number: u32,
        kind: IterationType,
    ) -> Result<(), ReportError> {
        // No trailing newline: the result (or interleaved workload output)
        // continues on this line.
        write!(self.out, "{}", Self::iteration_label(number, kind))?;
        self.out.flush()?;
        self.iteration_open = true;
        Ok(())
    }

    pub(crate) fn write_iteration_result(
        &mut self,
        number: u32,
        kind: IterationType,
        result: &IterationResult,
        warmup_secondary: bool,
    ) -> Result<(), ReportError> {
        if !self.iteration_open {
            return Err(ReportError::Protocol {
                call: "iteration_result",
                detail: format!("no open iteration (got {:?} iteration {})", kind, number),
            });
        }
        self.iteration_open = false;

        let mut sb = result.primary.to_string();

        let show_secondary = kind == IterationType::Measurement || warmup_secondary;
        if show_secondary && !result.secondary.is_empty() {
            // Alignment is recomputed from this call's data alone: secondary
            // membership may differ between iterations.
            let prefix_len = Self::iteration_label(number, kind).len();
            let max_label_len = result.secondary.keys().map(|k| k.len()).max().unwrap_or(0);

            sb.push('\n');
            for (label, metric) in &result.secondary {
                sb.push_str(&" ".repeat(prefix_len));
                sb.push_str(&format!(
                    "  {:<width$} {}",
                    format!("{}:", label),
                    metric,
                    width = max_label_len + 1
                ));
                sb.push('\n');
            }
        }

        writeln!(self.out, "{}", sb)?;
        self.out.flush()?;
        Ok(())
    }

    pub(crate) fn write_end_benchmark(
        &mut self,
        result: Option<&RunResult>,
    ) -> Result<(), ReportError> {
        writeln!(self.out)?;
        if let Some(result) = result {
            writeln!(self.out, "{}", result.primary.extended_info(None))?;
            for (label, metric) in &result.secondary {
                writeln!(self.out, "{}", metric.extended_info(Some(label)))?;
            }
            writeln!(self.out)?;
        }
        self.out.flush()?;
        self.iteration_open = false;
        Ok(())
    }

    pub(crate) fn write_end_run(&mut self, results: &[RunResult]) -> Result<(), ReportError> {
        let rendered = render_aggregate(self.format, results)?;
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn start_run(&mut self) -> Result<(), ReportError> {
        Ok(())
    }

    fn start_benchmark(&mut self, params: &BenchmarkParams) -> Result<(), ReportError> {
        self.write_start_benchmark(params)
    }

    fn iteration(
        &mut self,
        _params: &BenchmarkParams,
        _phase: &IterationParams,
        number: u32,
        kind: IterationType,
    ) -> Result<(), ReportError> {
        self.write_iteration(number, kind)
    }

    fn iteration_result(
        &mut self,
        _params: &BenchmarkParams,
        _phase: &IterationParams,
        number: u32,
        kind: IterationType,
        result: &IterationResult,
    ) -> Result<(), ReportError> {
        self.write_iteration_result(number, kind, result, false)
    }

    fn end_benchmark(&mut self, result: Option<&RunResult>) -> Result<(), ReportError> {
        self.write_end_benchmark(result)
    }

    fn end_run(&mut self, results: &[RunResult]) -> Result<(), ReportError> {
        self.write_end_run(results)
    }
}

fn threads_word(n: u32) -> &'static str {
    if n > 1 {
        "threads"
    } else {
        "thread"
    }
}

pub(crate) fn format_params(params: &BTreeMap<String, String>) -> String {
    let entries: Vec<String> = params
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect();
    format!("({})", entries.join(", "))
}
