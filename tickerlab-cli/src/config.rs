//! Optional TOML defaults for the CLI.
//!
//! Everything here can be overridden by command-line flags; the file only
//! saves retyping for users who always analyze with the same settings.
//!
//! ```toml
//! [analysis]
//! period = "1y"
//! chart = "line"
//!
//! [export]
//! output_dir = "exports"
//!
//! [fetch]
//! timeout_secs = 30
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tickerlab_core::domain::{ChartKind, Period};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub analysis: AnalysisDefaults,
    #[serde(default)]
    pub export: ExportDefaults,
    #[serde(default)]
    pub fetch: FetchDefaults,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisDefaults {
    pub period: Option<Period>,
    pub chart: Option<ChartKind>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportDefaults {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchDefaults {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Default for FetchDefaults {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CliConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = CliConfig::from_toml("").unwrap();
        assert_eq!(cfg.analysis.period, None);
        assert_eq!(cfg.analysis.chart, None);
        assert_eq!(cfg.export.output_dir, PathBuf::from("exports"));
        assert_eq!(cfg.fetch.timeout_secs, 30);
    }

    #[test]
    fn full_config_parses() {
        let cfg = CliConfig::from_toml(
            r#"
            [analysis]
            period = "6mo"
            chart = "candlestick"

            [export]
            output_dir = "out"

            [fetch]
            timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(cfg.analysis.period, Some(Period::SixMonths));
        assert_eq!(cfg.analysis.chart, Some(ChartKind::Candlestick));
        assert_eq!(cfg.export.output_dir, PathBuf::from("out"));
        assert_eq!(cfg.fetch.timeout_secs, 10);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(CliConfig::from_toml("[analysis]\nperiods = \"1y\"").is_err());
    }
}
