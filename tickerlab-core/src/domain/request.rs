//! AnalysisRequest — the immutable configuration for one analysis pass.

use super::Period;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which chart the frontend intends to draw.
///
/// The pipeline always produces every chart series; this only records the
/// user's selection so the frontend knows what to render first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Line,
    Candlestick,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Line => f.write_str("line"),
            ChartKind::Candlestick => f.write_str("candlestick"),
        }
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ChartKind::Line),
            "candlestick" => Ok(ChartKind::Candlestick),
            other => Err(format!("unknown chart kind '{other}'. Valid: line, candlestick")),
        }
    }
}

/// Everything one analysis pass needs to know, fixed at request time.
///
/// Requests own their inputs; nothing in the pipeline reads ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub symbol: String,
    pub period: Period,
    pub chart: ChartKind,
}

impl AnalysisRequest {
    /// Build a request, normalizing the symbol (trimmed, uppercased).
    pub fn new(symbol: &str, period: Period, chart: ChartKind) -> Self {
        Self {
            symbol: symbol.trim().to_uppercase(),
            period,
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_normalized() {
        let req = AnalysisRequest::new("  aapl ", Period::OneYear, ChartKind::Line);
        assert_eq!(req.symbol, "AAPL");
    }

    #[test]
    fn chart_kind_parses() {
        assert_eq!("line".parse::<ChartKind>().unwrap(), ChartKind::Line);
        assert_eq!(
            "candlestick".parse::<ChartKind>().unwrap(),
            ChartKind::Candlestick
        );
        assert!("pie".parse::<ChartKind>().is_err());
    }

    #[test]
    fn chart_kind_defaults_to_line() {
        assert_eq!(ChartKind::default(), ChartKind::Line);
    }
}
