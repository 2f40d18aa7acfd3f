//! Summary extractor — the fixed 11-row metric table.

use crate::domain::CompanyInfo;
use crate::format;
use serde::Serialize;

/// Labels of the summary table, in display order. The table always has
/// exactly these rows, whatever subset of the info record is populated.
pub const SUMMARY_LABELS: [&str; 11] = [
    "Current Price",
    "Previous Close",
    "Day's Range",
    "52 Week Range",
    "Volume",
    "Average Volume",
    "Market Cap",
    "P/E Ratio",
    "EPS",
    "Dividend Yield",
    "Beta",
];

/// One labeled, pre-formatted metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// The 11-row metric table derived from a company info record.
///
/// Row order is fixed (`SUMMARY_LABELS`); values carry the shared `N/A`
/// fallback for anything the record does not populate. Building the table
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn from_info(info: &CompanyInfo) -> Self {
        let values = [
            format::money(info.current_price),
            format::money(info.previous_close),
            format::money_range(info.day_low, info.day_high),
            format::money_range(info.fifty_two_week_low, info.fifty_two_week_high),
            format::thousands(info.volume),
            format::thousands(info.average_volume),
            format::large_money(info.market_cap),
            format::plain(info.trailing_pe),
            format::money(info.trailing_eps),
            format::percent_of_fraction(info.dividend_yield),
            format::plain(info.beta),
        ];

        let rows = SUMMARY_LABELS
            .into_iter()
            .zip(values)
            .map(|(label, value)| SummaryRow { label, value })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_info() -> CompanyInfo {
        CompanyInfo {
            current_price: Some(175.5),
            previous_close: Some(173.2),
            day_low: Some(172.85),
            day_high: Some(176.82),
            fifty_two_week_low: Some(124.17),
            fifty_two_week_high: Some(199.62),
            volume: Some(52_164_500),
            average_volume: Some(58_857_180),
            market_cap: Some(2.75e12),
            trailing_pe: Some(28.91),
            trailing_eps: Some(6.07),
            dividend_yield: Some(0.0055),
            beta: Some(1.29),
            short_name: Some("Apple Inc.".into()),
            long_name: None,
        }
    }

    #[test]
    fn always_eleven_rows_in_fixed_order() {
        for info in [CompanyInfo::default(), populated_info()] {
            let table = SummaryTable::from_info(&info);
            assert_eq!(table.rows().len(), 11);
            let labels: Vec<&str> = table.rows().iter().map(|r| r.label).collect();
            assert_eq!(labels, SUMMARY_LABELS);
        }
    }

    #[test]
    fn empty_info_yields_all_not_available() {
        let table = SummaryTable::from_info(&CompanyInfo::default());
        assert!(table.rows().iter().all(|r| r.value == "N/A"));
    }

    #[test]
    fn populated_info_formats_every_row() {
        let table = SummaryTable::from_info(&populated_info());
        let values: Vec<&str> = table.rows().iter().map(|r| r.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "$175.50",
                "$173.20",
                "$172.85 - $176.82",
                "$124.17 - $199.62",
                "52,164,500",
                "58,857,180",
                "$2.75T",
                "28.91",
                "$6.07",
                "0.55%",
                "1.29",
            ]
        );
    }

    #[test]
    fn range_rows_need_both_endpoints() {
        let info = CompanyInfo {
            day_low: Some(172.85),
            fifty_two_week_high: Some(199.62),
            ..Default::default()
        };
        let table = SummaryTable::from_info(&info);
        assert_eq!(table.rows()[2].value, "N/A"); // Day's Range
        assert_eq!(table.rows()[3].value, "N/A"); // 52 Week Range
    }

    #[test]
    fn partial_info_mixes_values_and_fallbacks() {
        let info = CompanyInfo {
            current_price: Some(42.0),
            volume: Some(1_000),
            ..Default::default()
        };
        let table = SummaryTable::from_info(&info);
        assert_eq!(table.rows()[0].value, "$42.00");
        assert_eq!(table.rows()[4].value, "1,000");
        assert_eq!(table.rows()[1].value, "N/A");
        assert_eq!(table.rows()[10].value, "N/A");
    }
}
