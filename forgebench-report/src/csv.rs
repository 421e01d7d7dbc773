//! CSV / SCSV aggregate output.

use forgebench_core::{Metric, RunResult};
use std::collections::BTreeSet;

/// Generate a delimiter-separated aggregate report.
///
/// `,` yields CSV, `;` yields SCSV. Parameter columns are the union of all
/// benchmark parameter names, sorted; benchmarks missing a parameter get an
/// empty field. Fields containing the delimiter, quotes, or newlines are
/// quoted.
pub fn generate_csv_report(results: &[RunResult], delimiter: char) -> String {
    let param_keys: BTreeSet<&str> = results
        .iter()
        .flat_map(|r| r.params.params.keys().map(String::as_str))
        .collect();

    let mut header: Vec<String> = [
        "Benchmark",
        "Mode",
        "Threads",
        "Samples",
        "Score",
        "Score Error (99.9%)",
        "Unit",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend(param_keys.iter().map(|k| format!("Param: {}", k)));

    let mut output = String::new();
    push_record(&mut output, &header, delimiter);

    for result in results {
        let record = record_for(result, result.benchmark().to_string(), &result.primary, &param_keys);
        push_record(&mut output, &record, delimiter);

        for (label, metric) in &result.secondary {
            let name = format!("{}:{}", result.benchmark(), label);
            let record = record_for(result, name, metric, &param_keys);
            push_record(&mut output, &record, delimiter);
        }
    }

    output
}

fn record_for(
    result: &RunResult,
    name: String,
    metric: &Metric,
    param_keys: &BTreeSet<&str>,
) -> Vec<String> {
    let mut record = vec![
        name,
        result.params.mode.short_label().to_string(),
        result.params.threads.to_string(),
        metric.stats.map(|s| s.n.to_string()).unwrap_or_default(),
        metric.score.to_string(),
        metric.error.map(|e| e.to_string()).unwrap_or_default(),
        metric.unit.clone(),
    ];
    record.extend(
        param_keys
            .iter()
            .map(|k| result.params.params.get(*k).cloned().unwrap_or_default()),
    );
    record
}

fn push_record(output: &mut String, fields: &[String], delimiter: char) {
    let escaped: Vec<String> = fields.iter().map(|f| field(f, delimiter)).collect();
    output.push_str(&escaped.join(&delimiter.to_string()));
    output.push('\n');
}

fn field(value: &str, delimiter: char) -> String {
    if value.contains(delimiter) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
