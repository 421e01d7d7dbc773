//! Benchmark identity and iteration parameters.

use crate::Mode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Unit a `TimeValue` was configured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Nanoseconds
    Nanoseconds,
    /// Microseconds
    Microseconds,
    /// Milliseconds
    Milliseconds,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
}

impl TimeUnit {
    /// Abbreviation used when rendering (e.g. "200 ms")
    pub fn abbrev(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
        }
    }

    fn nanos(self) -> u64 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60_000_000_000,
        }
    }
}

/// Duration that remembers the unit it was configured in.
///
/// Rendering echoes the configured unit verbatim: a harness that asked for
/// "200 ms" sees "200 ms" in the report, not a normalized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    /// Amount in `unit`s
    pub amount: u64,
    /// Configured unit
    pub unit: TimeUnit,
}

impl TimeValue {
    /// Create a time value of `amount` `unit`s.
    pub fn new(amount: u64, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    /// `n` nanoseconds
    pub fn nanoseconds(n: u64) -> Self {
        Self::new(n, TimeUnit::Nanoseconds)
    }

    /// `n` microseconds
    pub fn microseconds(n: u64) -> Self {
        Self::new(n, TimeUnit::Microseconds)
    }

    /// `n` milliseconds
    pub fn milliseconds(n: u64) -> Self {
        Self::new(n, TimeUnit::Milliseconds)
    }

    /// `n` seconds
    pub fn seconds(n: u64) -> Self {
        Self::new(n, TimeUnit::Seconds)
    }

    /// `n` minutes
    pub fn minutes(n: u64) -> Self {
        Self::new(n, TimeUnit::Minutes)
    }

    /// Convert to a `std::time::Duration`, saturating on overflow.
    pub fn as_duration(self) -> Duration {
        Duration::from_nanos(self.amount.saturating_mul(self.unit.nanos()))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit.abbrev())
    }
}

impl std::str::FromStr for TimeValue {
    type Err = String;

    /// Parse a duration string (e.g. "3s", "500ms", "2min"). A bare number
    /// is taken as seconds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty duration string".to_string());
        }

        // Find where the number ends and the unit begins
        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let amount: u64 = num_part
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration number: {}", num_part))?;

        let unit = match unit_part.trim().to_lowercase().as_str() {
            "ns" => TimeUnit::Nanoseconds,
            "us" => TimeUnit::Microseconds,
            "ms" => TimeUnit::Milliseconds,
            "s" => TimeUnit::Seconds,
            "m" | "min" => TimeUnit::Minutes,
            other => return Err(format!("unknown duration unit: {}", other)),
        };

        Ok(TimeValue::new(amount, unit))
    }
}

/// Per-phase iteration configuration (warmup or measurement)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationParams {
    /// Number of iterations in this phase; 0 disables the phase
    pub count: u32,
    /// Duration of each iteration
    pub time: TimeValue,
    /// Workload invocations per iteration; 1 means no batching
    pub batch_size: u32,
}

impl IterationParams {
    /// Create phase parameters. Batch size is clamped to at least 1.
    pub fn new(count: u32, time: TimeValue, batch_size: u32) -> Self {
        Self {
            count,
            time,
            batch_size: batch_size.max(1),
        }
    }
}

/// Identity and configuration of one benchmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkParams {
    /// Fully qualified benchmark identity (e.g. "pkg.Bench.method")
    pub benchmark: String,
    /// Execution mode
    pub mode: Mode,
    /// Number of worker threads
    pub threads: u32,
    /// Whether the harness synchronizes iteration start across threads
    pub synch_iterations: bool,
    /// Benchmark parameters (name -> value); key order is rendering order
    pub params: BTreeMap<String, String>,
    /// Warmup phase configuration
    pub warmup: IterationParams,
    /// Measurement phase configuration
    pub measurement: IterationParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_value_display() {
        assert_eq!(TimeValue::milliseconds(200).to_string(), "200 ms");
        assert_eq!(TimeValue::seconds(1).to_string(), "1 s");
        assert_eq!(TimeValue::minutes(2).to_string(), "2 min");
        assert_eq!(TimeValue::nanoseconds(15).to_string(), "15 ns");
    }

    #[test]
    fn test_time_value_parse() {
        assert_eq!(
            "500ms".parse::<TimeValue>().unwrap(),
            TimeValue::milliseconds(500)
        );
        assert_eq!("3s".parse::<TimeValue>().unwrap(), TimeValue::seconds(3));
        assert_eq!("2min".parse::<TimeValue>().unwrap(), TimeValue::minutes(2));
        assert_eq!(
            "100us".parse::<TimeValue>().unwrap(),
            TimeValue::microseconds(100)
        );
        // Bare numbers default to seconds
        assert_eq!("7".parse::<TimeValue>().unwrap(), TimeValue::seconds(7));
        assert!("".parse::<TimeValue>().is_err());
        assert!("3parsecs".parse::<TimeValue>().is_err());
    }

    #[test]
    fn test_time_value_as_duration() {
        assert_eq!(
            TimeValue::milliseconds(200).as_duration(),
            Duration::from_millis(200)
        );
        assert_eq!(TimeValue::minutes(1).as_duration(), Duration::from_secs(60));
    }

    #[test]
    fn test_batch_size_clamped() {
        let phase = IterationParams::new(5, TimeValue::seconds(1), 0);
        assert_eq!(phase.batch_size, 1);
        let phase = IterationParams::new(5, TimeValue::seconds(1), 10);
        assert_eq!(phase.batch_size, 10);
    }
}
