//! Human-readable aggregate summary table.

use crate::text::format_params;
use forgebench_core::{Metric, RunResult};

struct Row {
    name: String,
    mode: &'static str,
    cnt: String,
    score: String,
    error: String,
    unit: String,
}

fn row(name: String, mode: &'static str, metric: &Metric) -> Row {
    Row {
        name,
        mode,
        cnt: metric.stats.map(|s| s.n.to_string()).unwrap_or_default(),
        score: format!("{:.3}", metric.score),
        error: metric
            .error
            .map(|e| format!("± {:.3}", e))
            .unwrap_or_default(),
        unit: metric.unit.clone(),
    }
}

/// Generate the end-of-run summary table.
///
/// One row per benchmark primary result and one `name:label` row per
/// secondary metric; column widths are derived from the data. An empty run
/// still produces the header row.
pub fn generate_text_report(results: &[RunResult]) -> String {
    let mut rows: Vec<Row> = Vec::new();
    for result in results {
        let mode = result.params.mode.short_label();
        let name = if result.params.params.is_empty() {
            result.benchmark().to_string()
        } else {
            format!(
                "{} {}",
                result.benchmark(),
                format_params(&result.params.params)
            )
        };

        rows.push(row(name.clone(), mode, &result.primary));
        for (label, metric) in &result.secondary {
            rows.push(row(format!("{}:{}", name, label), mode, metric));
        }
    }

    let name_w = width(rows.iter().map(|r| r.name.len()), "Benchmark");
    let mode_w = width(rows.iter().map(|r| r.mode.len()), "Mode");
    let cnt_w = width(rows.iter().map(|r| r.cnt.len()), "Cnt");
    let score_w = width(rows.iter().map(|r| r.score.len()), "Score");
    let error_w = width(rows.iter().map(|r| r.error.len()), "Error");

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_w$}  {:>mode_w$}  {:>cnt_w$}  {:>score_w$}  {:>error_w$}  {}\n",
        "Benchmark", "Mode", "Cnt", "Score", "Error", "Units"
    ));
    for r in &rows {
        output.push_str(&format!(
            "{:<name_w$}  {:>mode_w$}  {:>cnt_w$}  {:>score_w$}  {:>error_w$}  {}\n",
            r.name, r.mode, r.cnt, r.score, r.error, r.unit
        ));
    }

    output
}

fn width(lens: impl Iterator<Item = usize>, header: &str) -> usize {
    lens.max().unwrap_or(0).max(header.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgebench_core::{
        BenchmarkParams, IterationParams, Metric, MetricStats, Mode, TimeValue,
    };
    use std::collections::BTreeMap;

    fn run_result(benchmark: &str, score: f64) -> RunResult {
        let params = BenchmarkParams {
            benchmark: benchmark.to_string(),
            mode: Mode::Throughput,
            threads: 1,
            synch_iterations: true,
            params: BTreeMap::new(),
            warmup: IterationParams::new(0, TimeValue::seconds(1), 1),
            measurement: IterationParams::new(5, TimeValue::seconds(1), 1),
        };
        let primary = Metric::new(score, "ops/ms").with_error(0.073).with_stats(MetricStats {
            min: score,
            avg: score,
            max: score,
            stdev: 0.0,
            n: 5,
        });
        RunResult::new(params, primary)
    }

    #[test]
    fn empty_run_still_emits_header() {
        let report = generate_text_report(&[]);
        assert_eq!(report, "Benchmark  Mode  Cnt  Score  Error  Units\n");
    }

    #[test]
    fn one_row_per_primary_and_secondary() {
        let result =
            run_result("pkg.Bench.a", 4.361).with_secondary("gc.count", Metric::new(2.0, "counts"));
        let report = generate_text_report(&[result]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("pkg.Bench.a "));
        assert!(lines[1].contains("thrpt"));
        assert!(lines[1].contains("4.361"));
        assert!(lines[1].contains("± 0.073"));
        assert!(lines[1].ends_with("ops/ms"));
        assert!(lines[2].starts_with("pkg.Bench.a:gc.count"));
        assert!(lines[2].ends_with("counts"));
    }

    #[test]
    fn columns_align_across_rows() {
        let results = vec![run_result("short", 1.0), run_result("much.longer.name", 12345.678)];
        let report = generate_text_report(&results);
        let lines: Vec<&str> = report.lines().collect();
        let col = |line: &str| line.find("thrpt").unwrap();
        assert_eq!(col(lines[1]), col(lines[2]));
    }

    #[test]
    fn parameters_are_part_of_the_row_name() {
        let mut result = run_result("pkg.Bench.a", 1.0);
        result
            .params
            .params
            .insert("size".to_string(), "1024".to_string());
        let report = generate_text_report(&[result]);
        assert!(report.contains("pkg.Bench.a (size = 1024)"));
    }
}
