//! Shared test fixtures for the core crate.

use crate::domain::Bar;
use chrono::NaiveDate;

/// Create a synthetic series from close prices.
///
/// Generates plausible OHLV around each close: open = prev close (or close
/// for the first bar), high = max(open, close) + 1.0, low = min(open,
/// close) - 1.0 floored at zero, volume = 1000. Dates ascend daily from
/// 2024-01-02.
pub fn make_series(closes: &[f64]) -> Vec<Bar> {
    let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: (open.min(close) - 1.0).max(0.0),
                close,
                volume: 1000,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for statistics tests.
pub const DEFAULT_EPSILON: f64 = 1e-10;
