//! Period statistics — pure functions over the historical series.
//!
//! Every statistic is a pure function: series in, scalar out. Statistics
//! that need at least two observations (volatility, returns) are `Option`s;
//! `None` means "not available" and is rendered as such by frontends —
//! never an arithmetic fault.

use crate::domain::Bar;
use serde::{Deserialize, Serialize};

/// Trading days per year for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Aggregate statistics for one analysis period.
///
/// `period_high`, `period_low`, and `mean_volume` are defined for any
/// non-empty series. The three percent statistics are `None` when the
/// series is too short to define them. All percent values are stored as
/// percents (21.0 = +21%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStatistics {
    pub period_high: f64,
    pub period_low: f64,
    pub mean_volume: f64,
    pub annualized_volatility: Option<f64>,
    pub total_return: Option<f64>,
    pub mean_daily_return: Option<f64>,
}

impl PeriodStatistics {
    /// Compute all statistics in one pass over the series.
    ///
    /// The series must be non-empty (enforced upstream by the no-data
    /// check); an empty series yields inert zero/None values rather than a
    /// panic.
    pub fn compute(series: &[Bar]) -> Self {
        Self {
            period_high: period_high(series),
            period_low: period_low(series),
            mean_volume: mean_volume(series),
            annualized_volatility: annualized_volatility(series),
            total_return: total_return(series),
            mean_daily_return: mean_daily_return(series),
        }
    }
}

// ─── Individual statistic functions ─────────────────────────────────

/// Maximum of the High column.
pub fn period_high(series: &[Bar]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max)
}

/// Minimum of the Low column.
pub fn period_low(series: &[Bar]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().map(|b| b.low).fold(f64::INFINITY, f64::min)
}

/// Arithmetic mean of the Volume column.
pub fn mean_volume(series: &[Bar]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().map(|b| b.volume as f64).sum::<f64>() / series.len() as f64
}

/// Daily returns: `(close[i] / close[i-1]) - 1` for each adjacent pair.
///
/// A length-1 series yields an empty sequence. A zero previous close
/// contributes 0.0 rather than dividing by zero.
pub fn daily_returns(series: &[Bar]) -> Vec<f64> {
    if series.len() < 2 {
        return Vec::new();
    }
    series
        .windows(2)
        .map(|w| {
            if w[0].close > 0.0 {
                w[1].close / w[0].close - 1.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Sample standard deviation of daily returns × √252, as a percent.
///
/// `None` with fewer than 2 return observations (the sample deviation is
/// undefined there).
pub fn annualized_volatility(series: &[Bar]) -> Option<f64> {
    let returns = daily_returns(series);
    let std = sample_std_dev(&returns)?;
    Some(std * TRADING_DAYS_PER_YEAR.sqrt() * 100.0)
}

/// `(close[last] / close[first] - 1) × 100` over the series in date order.
///
/// `None` for a series shorter than 2 rows or a zero first close.
pub fn total_return(series: &[Bar]) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let first = series.first()?.close;
    let last = series.last()?.close;
    if first <= 0.0 {
        return None;
    }
    Some((last / first - 1.0) * 100.0)
}

/// Arithmetic mean of the daily returns × 100. `None` when there are none.
pub fn mean_daily_return(series: &[Bar]) -> Option<f64> {
    let returns = daily_returns(series);
    if returns.is_empty() {
        return None;
    }
    Some(mean_f64(&returns) * 100.0)
}

// ─── Helpers ────────────────────────────────────────────────────────

pub(crate) fn mean_f64(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n-1 denominator) standard deviation. `None` below 2 values.
pub(crate) fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean_f64(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}
