//! Bar — one row of the historical series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLCV record for a single trading date.
///
/// A series is an ascending-by-date, unique-date `Vec<Bar>` for one symbol.
/// Prices are non-negative decimals; volume is a non-negative share count.
/// The pipeline requires a non-empty series — emptiness is rejected upstream
/// as the no-data failure before the core runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    /// Returns true if any price field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLCV sanity check: high >= low, high/low bracket open and close,
    /// no negative prices.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.low >= 0.0
    }
}
