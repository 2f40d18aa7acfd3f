//! Chart-ready series — plain ordered sequences keyed by date.
//!
//! The core does not render charts. These extractors reshape the historical
//! series into the three sequences a rendering frontend consumes: closes
//! for a line chart, OHLC quadruples for a candlestick chart, volumes for a
//! volume chart. All three are always available regardless of which chart
//! the user selected; the frontend chooses what to draw.

use crate::domain::Bar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One close price on one trading date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// One OHLC quadruple on one trading date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One traded volume on one trading date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub date: NaiveDate,
    pub volume: u64,
}

/// Close-price series for line charts, in series order.
pub fn close_series(series: &[Bar]) -> Vec<PricePoint> {
    series
        .iter()
        .map(|b| PricePoint {
            date: b.date,
            close: b.close,
        })
        .collect()
}

/// OHLC series for candlestick charts, in series order.
pub fn ohlc_series(series: &[Bar]) -> Vec<OhlcPoint> {
    series
        .iter()
        .map(|b| OhlcPoint {
            date: b.date,
            open: b.open,
            high: b.high,
            low: b.low,
            close: b.close,
        })
        .collect()
}

/// Volume series for volume charts, in series order.
pub fn volume_series(series: &[Bar]) -> Vec<VolumePoint> {
    series
        .iter()
        .map(|b| VolumePoint {
            date: b.date,
            volume: b.volume,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_series;

    #[test]
    fn series_preserve_length_and_order() {
        let series = make_series(&[100.0, 101.0, 99.0, 103.0]);

        let closes = close_series(&series);
        let ohlc = ohlc_series(&series);
        let volumes = volume_series(&series);

        assert_eq!(closes.len(), series.len());
        assert_eq!(ohlc.len(), series.len());
        assert_eq!(volumes.len(), series.len());

        for (point, bar) in closes.iter().zip(&series) {
            assert_eq!(point.date, bar.date);
            assert_eq!(point.close, bar.close);
        }
        assert!(closes.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn ohlc_carries_all_four_prices() {
        let series = make_series(&[100.0, 105.0]);
        let ohlc = ohlc_series(&series);
        assert_eq!(ohlc[1].open, series[1].open);
        assert_eq!(ohlc[1].high, series[1].high);
        assert_eq!(ohlc[1].low, series[1].low);
        assert_eq!(ohlc[1].close, series[1].close);
    }

    #[test]
    fn empty_series_yield_empty_charts() {
        assert!(close_series(&[]).is_empty());
        assert!(ohlc_series(&[]).is_empty());
        assert!(volume_series(&[]).is_empty());
    }
}
