//! Period — the fixed history-range vocabulary shared with the data source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// History range for one analysis request.
///
/// The label/code pairs are a fixed external contract with the market-data
/// source; `code()` is what goes on the wire, `label()` is what the user
/// sees in headers and exports. Serde uses the machine codes, so configs
/// and serialized requests read the same way the data source does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1wk")]
    OneWeek,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "max")]
    Max,
}

impl Period {
    /// All periods in display order.
    pub const ALL: [Period; 9] = [
        Period::OneDay,
        Period::OneWeek,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::TwoYears,
        Period::FiveYears,
        Period::Max,
    ];

    /// Human-readable label (e.g. "1 Year").
    pub fn label(&self) -> &'static str {
        match self {
            Period::OneDay => "1 Day",
            Period::OneWeek => "1 Week",
            Period::OneMonth => "1 Month",
            Period::ThreeMonths => "3 Months",
            Period::SixMonths => "6 Months",
            Period::OneYear => "1 Year",
            Period::TwoYears => "2 Years",
            Period::FiveYears => "5 Years",
            Period::Max => "Max",
        }
    }

    /// Machine code passed to the data source (e.g. "1y").
    pub fn code(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::OneWeek => "1wk",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
            Period::Max => "max",
        }
    }

    /// Parse a machine code back into a period.
    pub fn from_code(code: &str) -> Option<Period> {
        Period::ALL.iter().copied().find(|p| p.code() == code)
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::OneYear
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::from_code(s).ok_or_else(|| {
            let codes: Vec<&str> = Period::ALL.iter().map(|p| p.code()).collect();
            format!("unknown period '{s}'. Valid: {}", codes.join(", "))
        })
    }
}
