//! CompanyInfo — the per-symbol info record from the market-data source.

use serde::{Deserialize, Serialize};

/// Snapshot of company-level fields for one symbol.
///
/// Every field is optional: the upstream source populates whatever it has
/// for a given symbol, and absence is normal (ETFs have no EPS, many stocks
/// pay no dividend). Missing fields surface as `N/A` in the summary table,
/// never as errors. Immutable for the duration of one analysis request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub day_low: Option<f64>,
    pub day_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub volume: Option<u64>,
    pub average_volume: Option<u64>,
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub trailing_eps: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub beta: Option<f64>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

impl CompanyInfo {
    /// Display name for headers: short name, else long name, else the raw
    /// symbol. First non-empty wins.
    pub fn display_name(&self, symbol: &str) -> String {
        for name in [&self.short_name, &self.long_name].into_iter().flatten() {
            if !name.trim().is_empty() {
                return name.clone();
            }
        }
        symbol.to_string()
    }

    /// Percent change of the current price against the previous close.
    ///
    /// `None` unless both prices are present and the previous close is
    /// non-zero.
    pub fn price_change_percent(&self) -> Option<f64> {
        let current = self.current_price?;
        let previous = self.previous_close?;
        if previous == 0.0 {
            return None;
        }
        Some((current - previous) / previous * 100.0)
    }
}
