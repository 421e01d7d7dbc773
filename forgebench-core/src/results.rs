//! Measured results.
//!
//! All values here are computed upstream by the harness and its statistics
//! layer; this crate only carries and renders them.

use crate::BenchmarkParams;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Distribution statistics carried alongside a metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    /// Smallest observed value
    pub min: f64,
    /// Mean of observed values
    pub avg: f64,
    /// Largest observed value
    pub max: f64,
    /// Standard deviation
    pub stdev: f64,
    /// Number of observations
    pub n: u64,
}

/// A single measured value with its unit.
///
/// `Display` is the short one-line form printed next to iteration labels;
/// [`Metric::extended_info`] is the multi-line form printed when a benchmark
/// completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Display label, set for secondary metrics
    pub label: Option<String>,
    /// Measured score
    pub score: f64,
    /// Half-width of the 99.9% confidence interval, when known
    pub error: Option<f64>,
    /// Unit of the score (e.g. "ops/ms")
    pub unit: String,
    /// Distribution statistics, when the harness provides them
    pub stats: Option<MetricStats>,
}

impl Metric {
    /// Create a metric with no label, error, or statistics.
    pub fn new(score: f64, unit: impl Into<String>) -> Self {
        Self {
            label: None,
            score,
            error: None,
            unit: unit.into(),
            stats: None,
        }
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach the confidence-interval half-width.
    pub fn with_error(mut self, error: f64) -> Self {
        self.error = Some(error);
        self
    }

    /// Attach distribution statistics.
    pub fn with_stats(mut self, stats: MetricStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Multi-line form rendered after a benchmark completes.
    ///
    /// `label` overrides the metric's own label for the header line; with
    /// neither present the header is a bare `Result:`.
    pub fn extended_info(&self, label: Option<&str>) -> String {
        let label = label.or(self.label.as_deref());
        let mut out = match label {
            Some(l) => format!("Result \"{}\":\n", l),
            None => "Result:\n".to_string(),
        };
        out.push_str(&format!("  {}", self));
        if let Some(s) = &self.stats {
            out.push_str(&format!(
                "\n  (min, avg, max) = ({:.3}, {:.3}, {:.3}), stdev = {:.3}",
                s.min, s.avg, s.max, s.stdev
            ));
        }
        out
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            Some(error) => write!(f, "{:.3} ±(99.9%) {:.3} {}", self.score, error, self.unit),
            None => write!(f, "{:.3} {}", self.score, self.unit),
        }
    }
}

/// Result of a single iteration: one primary metric plus a variable set of
/// named secondary metrics. Secondary membership may differ per iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationResult {
    /// The principal measured metric
    pub primary: Metric,
    /// Auxiliary named metrics, keyed by label (unique per iteration)
    pub secondary: BTreeMap<String, Metric>,
}

impl IterationResult {
    /// Wrap a primary metric with no secondary results.
    pub fn new(primary: Metric) -> Self {
        Self {
            primary,
            secondary: BTreeMap::new(),
        }
    }

    /// Add a secondary metric under `label`. The metric inherits the label
    /// unless it already carries one.
    pub fn with_secondary(mut self, label: impl Into<String>, mut metric: Metric) -> Self {
        let label = label.into();
        if metric.label.is_none() {
            metric.label = Some(label.clone());
        }
        self.secondary.insert(label, metric);
        self
    }
}

/// Aggregate of all iterations for one benchmark configuration.
///
/// A benchmark that failed before producing output has no `RunResult` at
/// all; the absence is modeled as `Option<&RunResult>` at the contract
/// boundary, never as a partially filled value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Parameters of the benchmark this result aggregates
    pub params: BenchmarkParams,
    /// Aggregated primary metric
    pub primary: Metric,
    /// Aggregated secondary metrics, keyed by label
    pub secondary: BTreeMap<String, Metric>,
}

impl RunResult {
    /// Aggregate with no secondary metrics.
    pub fn new(params: BenchmarkParams, primary: Metric) -> Self {
        Self {
            params,
            primary,
            secondary: BTreeMap::new(),
        }
    }

    /// Add an aggregated secondary metric under `label`.
    pub fn with_secondary(mut self, label: impl Into<String>, mut metric: Metric) -> Self {
        let label = label.into();
        if metric.label.is_none() {
            metric.label = Some(label.clone());
        }
        self.secondary.insert(label, metric);
        self
    }

    /// Benchmark identity this result belongs to.
    pub fn benchmark(&self) -> &str {
        &self.params.benchmark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_display() {
        let metric = Metric::new(1047.538, "ops/ms");
        assert_eq!(metric.to_string(), "1047.538 ops/ms");

        let metric = Metric::new(4.361, "ops/ms").with_error(0.073);
        assert_eq!(metric.to_string(), "4.361 ±(99.9%) 0.073 ops/ms");
    }

    #[test]
    fn test_extended_info_with_label() {
        let metric = Metric::new(2.0, "counts");
        let info = metric.extended_info(Some("gc.count"));
        assert_eq!(info, "Result \"gc.count\":\n  2.000 counts");
    }

    #[test]
    fn test_extended_info_falls_back_to_own_label() {
        let metric = Metric::new(2.0, "counts").with_label("gc.count");
        assert!(metric.extended_info(None).starts_with("Result \"gc.count\":"));

        let unlabelled = Metric::new(2.0, "counts");
        assert!(unlabelled.extended_info(None).starts_with("Result:\n"));
    }

    #[test]
    fn test_extended_info_stats_line() {
        let metric = Metric::new(4.361, "ops/ms").with_error(0.073).with_stats(MetricStats {
            min: 4.236,
            avg: 4.361,
            max: 4.454,
            stdev: 0.081,
            n: 5,
        });
        let info = metric.extended_info(None);
        let lines: Vec<&str> = info.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  4.361 ±(99.9%) 0.073 ops/ms");
        assert_eq!(
            lines[2],
            "  (min, avg, max) = (4.236, 4.361, 4.454), stdev = 0.081"
        );
    }

    #[test]
    fn test_secondary_inherits_label() {
        let result = IterationResult::new(Metric::new(1.0, "ops/s"))
            .with_secondary("alloc.rate", Metric::new(20.787, "MB/sec"));
        assert_eq!(
            result.secondary["alloc.rate"].label.as_deref(),
            Some("alloc.rate")
        );
    }
}
