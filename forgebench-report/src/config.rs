//! Report configuration.
//!
//! Reporting options can be specified in a `forge.toml` file; the driving
//! harness layers its own overrides on top before selecting a policy via
//! [`crate::reporter_for`].

use crate::{ResultFormatType, Verbosity};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reporting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Per-event verbosity: "silent", "normal", or "extra"
    #[serde(default)]
    pub verbosity: Verbosity,
    /// Aggregate report format: "text", "csv", "scsv", or "json"
    #[serde(default = "default_format")]
    pub format: ResultFormatType,
    /// Aggregate report destination (stdout if not specified)
    #[serde(default)]
    pub output: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            format: default_format(),
            output: None,
        }
    }
}

fn default_format() -> ResultFormatType {
    ResultFormatType::Text
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.format, ResultFormatType::Text);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            verbosity = "extra"
            format = "json"
        "#;

        let config: ReportConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.verbosity, Verbosity::Extra);
        assert_eq!(config.format, ResultFormatType::Json);
        // Defaults should still apply
        assert!(config.output.is_none());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: ReportConfig = toml::from_str("output = \"report.csv\"").unwrap();
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.format, ResultFormatType::Text);
        assert_eq!(config.output.as_deref(), Some("report.csv"));
    }
}
