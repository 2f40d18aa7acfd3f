//! Export rendering — the flat text document offered for download.
//!
//! One document per analysis: header lines, the summary table as CSV, then
//! the FULL historical series as CSV. Display surfaces may truncate the
//! series; the export never does.

use crate::domain::{Bar, Period};
use crate::summary::SummaryTable;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// MIME type the download should be served with.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

const SECTION_RULE_WIDTH: usize = 50;

/// Render the export document.
///
/// Structure: `Stock Symbol` / `Analysis Date` / `Time Period` header
/// lines, a blank line, the `SUMMARY METRICS` section, two blank lines,
/// then the `HISTORICAL DATA` section with every row of the series in
/// ascending date order, prices rounded to 2 decimals. The timestamp is an
/// input so the renderer stays pure.
pub fn render_export(
    symbol: &str,
    period: Period,
    summary: &SummaryTable,
    series: &[Bar],
    generated_at: NaiveDateTime,
) -> Result<String> {
    let mut doc = String::with_capacity(64 * (series.len() + 16));

    doc.push_str(&format!("Stock Symbol: {symbol}\n"));
    doc.push_str(&format!(
        "Analysis Date: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    doc.push_str(&format!("Time Period: {}\n\n", period.label()));

    doc.push_str("SUMMARY METRICS\n");
    doc.push_str(&"=".repeat(SECTION_RULE_WIDTH));
    doc.push('\n');
    doc.push_str(&summary_csv(summary)?);

    doc.push_str("\n\nHISTORICAL DATA\n");
    doc.push_str(&"=".repeat(SECTION_RULE_WIDTH));
    doc.push('\n');
    doc.push_str(&historical_csv(series)?);

    Ok(doc)
}

/// Suggested download filename: `<SYMBOL>_financial_data_<YYYYMMDD>.csv`.
pub fn suggested_filename(symbol: &str, date: NaiveDate) -> String {
    format!("{symbol}_financial_data_{}.csv", date.format("%Y%m%d"))
}

/// The summary table as `Metric,Value` CSV, rows in table order.
fn summary_csv(summary: &SummaryTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["Metric", "Value"])?;
    for row in summary.rows() {
        wtr.write_record([row.label, &row.value])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// The full series as `Date,Open,High,Low,Close,Volume` CSV.
fn historical_csv(series: &[Bar]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["Date", "Open", "High", "Low", "Close", "Volume"])?;
    for bar in series {
        wtr.write_record([
            &bar.date.to_string(),
            &format!("{:.2}", bar.open),
            &format!("{:.2}", bar.high),
            &format!("{:.2}", bar.low),
            &format!("{:.2}", bar.close),
            &bar.volume.to_string(),
        ])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CompanyInfo;
    use crate::testutil::make_series;

    fn sample_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(15, 30, 5)
            .unwrap()
    }

    fn sample_summary() -> SummaryTable {
        SummaryTable::from_info(&CompanyInfo {
            current_price: Some(175.5),
            ..Default::default()
        })
    }

    #[test]
    fn document_structure_and_section_order() {
        let series = make_series(&[100.0, 110.0, 121.0]);
        let doc = render_export(
            "AAPL",
            Period::OneYear,
            &sample_summary(),
            &series,
            sample_timestamp(),
        )
        .unwrap();

        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(lines[0], "Stock Symbol: AAPL");
        assert_eq!(lines[1], "Analysis Date: 2024-06-03 15:30:05");
        assert_eq!(lines[2], "Time Period: 1 Year");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "SUMMARY METRICS");
        assert_eq!(lines[5], "=".repeat(50));
        assert_eq!(lines[6], "Metric,Value");

        // Two blank lines between the sections.
        let hist = lines.iter().position(|l| *l == "HISTORICAL DATA").unwrap();
        assert_eq!(lines[hist - 1], "");
        assert_eq!(lines[hist - 2], "");
        assert_eq!(lines[hist + 1], "=".repeat(50));
        assert_eq!(lines[hist + 2], "Date,Open,High,Low,Close,Volume");
    }

    #[test]
    fn summary_rows_in_table_order() {
        let series = make_series(&[100.0]);
        let doc = render_export(
            "AAPL",
            Period::OneMonth,
            &sample_summary(),
            &series,
            sample_timestamp(),
        )
        .unwrap();

        assert!(doc.contains("Current Price,$175.50\n"));
        // Metric,Value header + 11 rows before the blank separator.
        let summary_section: Vec<&str> = doc
            .lines()
            .skip_while(|l| *l != "Metric,Value")
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(summary_section.len(), 12);
    }

    #[test]
    fn historical_section_roundtrips_full_series() {
        // 14 rows — more than the 10-row display window, to prove the
        // export is never truncated.
        let closes: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
        let series = make_series(&closes);
        let doc = render_export(
            "MSFT",
            Period::ThreeMonths,
            &sample_summary(),
            &series,
            sample_timestamp(),
        )
        .unwrap();

        let hist_start = doc.find("Date,Open,High,Low,Close,Volume").unwrap();
        let mut rdr = csv::Reader::from_reader(doc[hist_start..].as_bytes());

        let mut count = 0;
        for (record, bar) in rdr.records().zip(&series) {
            let record = record.unwrap();
            assert_eq!(&record[0], &bar.date.to_string());
            assert_eq!(&record[1], &format!("{:.2}", bar.open));
            assert_eq!(&record[2], &format!("{:.2}", bar.high));
            assert_eq!(&record[3], &format!("{:.2}", bar.low));
            assert_eq!(&record[4], &format!("{:.2}", bar.close));
            assert_eq!(&record[5], &bar.volume.to_string());
            count += 1;
        }
        assert_eq!(count, series.len());
        assert_eq!(count, 14);
    }

    #[test]
    fn prices_rounded_to_two_decimals() {
        let mut series = make_series(&[100.0]);
        series[0].open = 99.994;
        series[0].close = 100.004;
        let doc = render_export(
            "IBM",
            Period::OneDay,
            &sample_summary(),
            &series,
            sample_timestamp(),
        )
        .unwrap();
        let last = doc.lines().last().unwrap();
        assert_eq!(last, "2024-01-02,99.99,101.00,99.00,100.00,1000");
    }

    #[test]
    fn filename_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(
            suggested_filename("AAPL", date),
            "AAPL_financial_data_20240603.csv"
        );
    }

    #[test]
    fn mime_type_is_csv() {
        assert_eq!(EXPORT_MIME_TYPE, "text/csv");
    }
}
