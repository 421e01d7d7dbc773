#![warn(missing_docs)]
//! ForgeBench Core - Benchmark Value Objects
//!
//! Pure data types shared between a benchmark harness and the reporting layer:
//! - `BenchmarkParams` / `IterationParams` describe what is about to run
//! - `Metric`, `IterationResult`, `RunResult` carry what was measured
//! - `Mode` and `IterationType` classify runs and phases
//!
//! Everything here is constructed and owned by the driving harness; the
//! reporting layer only reads these types for the duration of one call.

mod params;
mod results;

pub use params::{BenchmarkParams, IterationParams, TimeUnit, TimeValue};
pub use results::{IterationResult, Metric, MetricStats, RunResult};

use serde::{Deserialize, Serialize};

/// Benchmark execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Operations per unit of time
    Throughput,
    /// Average time per operation
    AverageTime,
    /// Sampled time per operation
    SampleTime,
    /// Time of a single invocation, no steady state
    SingleShot,
}

impl Mode {
    /// Short label used in aggregate tables and CSV output
    pub fn short_label(self) -> &'static str {
        match self {
            Mode::Throughput => "thrpt",
            Mode::AverageTime => "avgt",
            Mode::SampleTime => "sample",
            Mode::SingleShot => "ss",
        }
    }

    /// Human-readable label used in the per-benchmark header
    pub fn long_label(self) -> &'static str {
        match self {
            Mode::Throughput => "Throughput",
            Mode::AverageTime => "Average time",
            Mode::SampleTime => "Sampling time",
            Mode::SingleShot => "Single shot invocation time",
        }
    }

    /// Whether this mode runs the workload once instead of reaching a steady
    /// state; single-shot runs never synchronize iteration start.
    pub fn is_single_shot(self) -> bool {
        matches!(self, Mode::SingleShot)
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "thrpt" | "throughput" => Ok(Mode::Throughput),
            "avgt" | "average-time" => Ok(Mode::AverageTime),
            "sample" | "sample-time" => Ok(Mode::SampleTime),
            "ss" | "single-shot" => Ok(Mode::SingleShot),
            other => Err(format!("Unknown benchmark mode: {}", other)),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_label())
    }
}

/// Phase an iteration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IterationType {
    /// Un-recorded execution used to reach steady state
    Warmup,
    /// Recorded execution contributing to the benchmark's aggregate
    Measurement,
}
