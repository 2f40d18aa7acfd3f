//! Text rendering for the analyze command.
//!
//! Builds the terminal report: company header, key-metrics table, price
//! performance, charts, period statistics, and the recent-rows table. The
//! display table shows the most recent rows only; the export document
//! carries the full series.

use tickerlab_core::chart::{OhlcPoint, PricePoint, VolumePoint};
use tickerlab_core::domain::{Bar, ChartKind, CompanyInfo};
use tickerlab_core::format;
use tickerlab_core::report::AnalysisReport;

/// Chart geometry for a standard terminal.
const CHART_WIDTH: usize = 60;
const CHART_HEIGHT: usize = 12;
const VOLUME_BAR_WIDTH: usize = 40;
const VOLUME_ROWS: usize = 10;

/// Rows shown in the historical table. The export is never truncated.
pub const RECENT_ROWS: usize = 10;

/// Render the full terminal report for one analysis.
pub fn report_text(report: &AnalysisReport, info: &CompanyInfo, series: &[Bar]) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str(&format!(
        "=== {} ({}) ===\n",
        report.company_name, report.request.symbol
    ));
    out.push_str(&format!(
        "Period: {}    Chart: {}\n\n",
        report.request.period, report.request.chart
    ));

    // Key financial metrics
    out.push_str("--- Key Financial Metrics ---\n");
    for row in report.summary.rows() {
        out.push_str(&format!("{:<16} {}\n", row.label, row.value));
    }
    out.push('\n');

    // Price performance
    out.push_str("--- Price Performance ---\n");
    let change = match info.price_change_percent() {
        Some(pct) => format!(" ({})", format::signed_percent(pct, 2)),
        None => String::new(),
    };
    out.push_str(&format!(
        "Current Price:  {}{change}\n\n",
        format::money(info.current_price)
    ));

    // Price chart
    match report.request.chart {
        ChartKind::Line => {
            out.push_str("--- Close Price ---\n");
            out.push_str(&line_chart(&report.charts.close, CHART_WIDTH, CHART_HEIGHT));
        }
        ChartKind::Candlestick => {
            out.push_str("--- OHLC Candles ---\n");
            out.push_str(&candle_chart(&report.charts.ohlc, CHART_WIDTH, CHART_HEIGHT));
        }
    }
    out.push('\n');

    // Volume chart — shown for every chart kind.
    out.push_str("--- Trading Volume ---\n");
    out.push_str(&volume_chart(&report.charts.volume, VOLUME_ROWS));
    out.push('\n');

    // Period statistics
    let stats = &report.statistics;
    out.push_str("--- Additional Statistics ---\n");
    out.push_str(&format!("Period High:      ${:.2}\n", stats.period_high));
    out.push_str(&format!("Period Low:       ${:.2}\n", stats.period_low));
    out.push_str(&format!(
        "Average Volume:   {}\n",
        format::thousands_rounded(stats.mean_volume)
    ));
    out.push_str(&format!(
        "Volatility (Ann): {}\n",
        format::signed_percent_or_na(stats.annualized_volatility, 2)
    ));
    out.push_str(&format!(
        "Total Return:     {}\n",
        format::signed_percent_or_na(stats.total_return, 2)
    ));
    out.push_str(&format!(
        "Avg Daily Return: {}\n\n",
        format::signed_percent_or_na(stats.mean_daily_return, 3)
    ));

    // Recent rows — display truncates, export does not.
    out.push_str(&format!(
        "--- Historical Data (last {} trading days) ---\n",
        RECENT_ROWS.min(series.len())
    ));
    out.push_str(&recent_table(series, RECENT_ROWS));

    out
}

/// Sample a series down to at most `width` evenly spaced columns.
fn sample_indices(len: usize, width: usize) -> Vec<usize> {
    let cols = len.min(width);
    (0..cols)
        .map(|col| {
            if cols == 1 {
                0
            } else {
                col * (len - 1) / (cols - 1)
            }
        })
        .collect()
}

/// Scale a value into a row index, row 0 = top of the chart.
fn scale_row(value: f64, min: f64, max: f64, height: usize) -> usize {
    if max <= min {
        return height / 2;
    }
    let level = ((value - min) / (max - min) * (height - 1) as f64).round() as usize;
    height - 1 - level.min(height - 1)
}

/// Plot closes as a fixed-size character grid with a date/range footer.
pub fn line_chart(points: &[PricePoint], width: usize, height: usize) -> String {
    if points.is_empty() {
        return String::new();
    }

    let indices = sample_indices(points.len(), width);
    let closes: Vec<f64> = indices.iter().map(|&i| points[i].close).collect();
    let min = closes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut grid = vec![vec![' '; closes.len()]; height];
    for (col, &close) in closes.iter().enumerate() {
        grid[scale_row(close, min, max, height)][col] = '*';
    }

    let mut out = String::new();
    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&format!(
        "{} .. {}  low ${min:.2}  high ${max:.2}\n",
        points[0].date,
        points[points.len() - 1].date
    ));
    out
}

/// Plot OHLC bars: `█` for the open/close body, `|` for the high/low wick.
pub fn candle_chart(points: &[OhlcPoint], width: usize, height: usize) -> String {
    if points.is_empty() {
        return String::new();
    }

    let indices = sample_indices(points.len(), width);
    let sampled: Vec<&OhlcPoint> = indices.iter().map(|&i| &points[i]).collect();
    let min = sampled.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);
    let max = sampled
        .iter()
        .map(|p| p.high)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut grid = vec![vec![' '; sampled.len()]; height];
    for (col, point) in sampled.iter().enumerate() {
        let wick_top = scale_row(point.high, min, max, height);
        let wick_bottom = scale_row(point.low, min, max, height);
        let body_top = scale_row(point.open.max(point.close), min, max, height);
        let body_bottom = scale_row(point.open.min(point.close), min, max, height);

        for row in wick_top..=wick_bottom {
            grid[row][col] = '|';
        }
        for row in body_top..=body_bottom {
            grid[row][col] = '█';
        }
    }

    let mut out = String::new();
    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&format!(
        "{} .. {}  low ${min:.2}  high ${max:.2}\n",
        points[0].date,
        points[points.len() - 1].date
    ));
    out
}

/// Horizontal volume bars for the most recent rows.
pub fn volume_chart(points: &[VolumePoint], rows: usize) -> String {
    if points.is_empty() {
        return String::new();
    }

    let recent = &points[points.len().saturating_sub(rows)..];
    let max = recent.iter().map(|p| p.volume).max().unwrap_or(0);

    let mut out = String::new();
    for point in recent {
        let bar_len = if max == 0 {
            0
        } else {
            (point.volume as f64 / max as f64 * VOLUME_BAR_WIDTH as f64).round() as usize
        };
        out.push_str(&format!(
            "{}  {:<width$} {}\n",
            point.date,
            "#".repeat(bar_len),
            format::thousands(Some(point.volume)),
            width = VOLUME_BAR_WIDTH
        ));
    }
    out
}

/// Fixed-width table of the most recent series rows, oldest first.
pub fn recent_table(series: &[Bar], rows: usize) -> String {
    let recent = &series[series.len().saturating_sub(rows)..];

    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>14}\n",
        "Date", "Open", "High", "Low", "Close", "Volume"
    ));
    for bar in recent {
        out.push_str(&format!(
            "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>14}\n",
            bar.date.to_string(),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            format::group_thousands(bar.volume)
        ));
    }
    out
}
