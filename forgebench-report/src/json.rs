//! JSON aggregate output.

use forgebench_core::RunResult;

/// Generate a prettified JSON report of the full run.
///
/// Serializes every benchmark's aggregate into machine-readable JSON.
pub fn generate_json_report(results: &[RunResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}
