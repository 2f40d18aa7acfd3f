//! Yahoo Finance market-data access.
//!
//! Two single-shot requests per analysis: the v8 chart API for the
//! historical series and the v10 quoteSummary API for the company info
//! record. No retries and no caching — a failed request surfaces
//! immediately as a `FetchError` with a remediation hint.
//!
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes; parse failures are reported as fetch failures with the
//! underlying message.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tickerlab_core::domain::{Bar, CompanyInfo, Period};

/// Boundary error taxonomy for the market-data fetch.
///
/// The pipeline core never fails; everything that can go wrong lives here.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network, HTTP, or response-format failure. No retry.
    #[error("error fetching data: {0}")]
    Fetch(String),

    /// The symbol resolved but has no historical rows for the period.
    #[error("no historical data found for {symbol}")]
    NoData { symbol: String },
}

impl FetchError {
    /// Remediation hint shown alongside the error message.
    pub fn hint(&self) -> &'static str {
        match self {
            FetchError::Fetch(_) => {
                "Please check the stock symbol and try again. \
                 Make sure the symbol is valid and actively traded."
            }
            FetchError::NoData { .. } => {
                "Please enter a valid stock ticker symbol from a major exchange."
            }
        }
    }
}

// ─── Chart API response (v8) ────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

// ─── quoteSummary response (v10) ────────────────────────────────────

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryResult,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    result: Option<Vec<QuoteModules>>,
    error: Option<ApiError>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteModules {
    price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetailModule>,
    #[serde(rename = "defaultKeyStatistics")]
    default_key_statistics: Option<KeyStatisticsModule>,
}

/// Yahoo wraps numbers as `{"raw": 175.5, "fmt": "175.50"}`.
#[derive(Debug, Default, Deserialize)]
struct RawNum {
    raw: Option<f64>,
}

impl RawNum {
    fn value(opt: Option<RawNum>) -> Option<f64> {
        opt.and_then(|n| n.raw)
    }

    fn count(opt: Option<RawNum>) -> Option<u64> {
        Self::value(opt).filter(|v| *v >= 0.0).map(|v| v as u64)
    }
}

#[derive(Debug, Default, Deserialize)]
struct PriceModule {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<RawNum>,
    #[serde(rename = "marketCap")]
    market_cap: Option<RawNum>,
    #[serde(rename = "shortName")]
    short_name: Option<String>,
    #[serde(rename = "longName")]
    long_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryDetailModule {
    #[serde(rename = "previousClose")]
    previous_close: Option<RawNum>,
    #[serde(rename = "dayLow")]
    day_low: Option<RawNum>,
    #[serde(rename = "dayHigh")]
    day_high: Option<RawNum>,
    #[serde(rename = "fiftyTwoWeekLow")]
    fifty_two_week_low: Option<RawNum>,
    #[serde(rename = "fiftyTwoWeekHigh")]
    fifty_two_week_high: Option<RawNum>,
    volume: Option<RawNum>,
    #[serde(rename = "averageVolume")]
    average_volume: Option<RawNum>,
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<RawNum>,
    #[serde(rename = "dividendYield")]
    dividend_yield: Option<RawNum>,
    beta: Option<RawNum>,
}

#[derive(Debug, Default, Deserialize)]
struct KeyStatisticsModule {
    #[serde(rename = "trailingEps")]
    trailing_eps: Option<RawNum>,
}

// ─── Client ─────────────────────────────────────────────────────────

/// Blocking Yahoo Finance client. One instance per process is plenty.
pub struct YahooClient {
    client: reqwest::blocking::Client,
}

impl YahooClient {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Fetch the info record and historical series for one request.
    ///
    /// The explicit success/failure pair consumed by the frontend: either
    /// both inputs to the pipeline, or one `FetchError`.
    pub fn fetch(&self, symbol: &str, period: Period) -> Result<(CompanyInfo, Vec<Bar>), FetchError> {
        let info = self.fetch_info(symbol)?;
        let series = self.fetch_history(symbol, period)?;
        Ok((info, series))
    }

    /// Fetch daily OHLCV bars for a symbol over a period.
    pub fn fetch_history(&self, symbol: &str, period: Period) -> Result<Vec<Bar>, FetchError> {
        let url = Self::chart_url(symbol, period);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Fetch(format!("HTTP {status} for {symbol}")));
        }

        let chart: ChartResponse = resp.json().map_err(|e| {
            FetchError::Fetch(format!("failed to parse chart response for {symbol}: {e}"))
        })?;

        parse_history(symbol, chart)
    }

    /// Fetch the company info record for a symbol.
    pub fn fetch_info(&self, symbol: &str) -> Result<CompanyInfo, FetchError> {
        let url = Self::quote_summary_url(symbol);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Fetch(format!("HTTP {status} for {symbol}")));
        }

        let summary: QuoteSummaryResponse = resp.json().map_err(|e| {
            FetchError::Fetch(format!("failed to parse quote summary for {symbol}: {e}"))
        })?;

        parse_info(symbol, summary)
    }

    /// Chart API URL for a symbol and period code.
    fn chart_url(symbol: &str, period: Period) -> String {
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?range={}&interval=1d",
            period.code()
        )
    }

    /// quoteSummary API URL for a symbol.
    fn quote_summary_url(symbol: &str) -> String {
        format!(
            "https://query2.finance.yahoo.com/v10/finance/quoteSummary/{symbol}\
             ?modules=price,summaryDetail,defaultKeyStatistics"
        )
    }
}

/// Parse the chart API response into ascending daily bars.
///
/// Rows with a missing price column (trading halts, partial sessions) are
/// skipped. An empty result is the no-data failure.
fn parse_history(symbol: &str, resp: ChartResponse) -> Result<Vec<Bar>, FetchError> {
    let result = match resp.chart.result {
        Some(result) => result,
        None => {
            return Err(match resp.chart.error {
                Some(err) if err.code == "Not Found" => FetchError::NoData {
                    symbol: symbol.to_string(),
                },
                Some(err) => FetchError::Fetch(format!("{}: {}", err.code, err.description)),
                None => FetchError::Fetch("empty chart result with no error".into()),
            });
        }
    };

    let data = result
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::NoData {
            symbol: symbol.to_string(),
        })?;

    let timestamps = data.timestamp.unwrap_or_default();
    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Fetch("no quote data in chart response".into()))?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let date = match chrono::DateTime::from_timestamp(ts, 0) {
            Some(dt) => dt.naive_utc().date(),
            None => return Err(FetchError::Fetch(format!("invalid timestamp: {ts}"))),
        };

        let open = quote.open.get(i).copied().flatten();
        let high = quote.high.get(i).copied().flatten();
        let low = quote.low.get(i).copied().flatten();
        let close = quote.close.get(i).copied().flatten();
        let volume = quote.volume.get(i).copied().flatten();

        let (open, high, low, close) = match (open, high, low, close) {
            (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
            _ => continue,
        };

        bars.push(Bar {
            date,
            open,
            high,
            low,
            close,
            volume: volume.unwrap_or(0),
        });
    }

    if bars.is_empty() {
        return Err(FetchError::NoData {
            symbol: symbol.to_string(),
        });
    }

    bars.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(bars)
}

/// Parse the quoteSummary response into a `CompanyInfo`.
fn parse_info(symbol: &str, resp: QuoteSummaryResponse) -> Result<CompanyInfo, FetchError> {
    let modules = match resp.quote_summary.result {
        Some(result) => result.into_iter().next().unwrap_or_default(),
        None => {
            return Err(match resp.quote_summary.error {
                Some(err) => FetchError::Fetch(format!("{}: {}", err.code, err.description)),
                None => FetchError::Fetch(format!("empty quote summary for {symbol}")),
            });
        }
    };

    let price = modules.price.unwrap_or_default();
    let detail = modules.summary_detail.unwrap_or_default();
    let key_stats = modules.default_key_statistics.unwrap_or_default();

    Ok(CompanyInfo {
        current_price: RawNum::value(price.regular_market_price),
        previous_close: RawNum::value(detail.previous_close),
        day_low: RawNum::value(detail.day_low),
        day_high: RawNum::value(detail.day_high),
        fifty_two_week_low: RawNum::value(detail.fifty_two_week_low),
        fifty_two_week_high: RawNum::value(detail.fifty_two_week_high),
        volume: RawNum::count(detail.volume),
        average_volume: RawNum::count(detail.average_volume),
        market_cap: RawNum::value(price.market_cap),
        trailing_pe: RawNum::value(detail.trailing_pe),
        trailing_eps: RawNum::value(key_stats.trailing_eps),
        dividend_yield: RawNum::value(detail.dividend_yield),
        beta: RawNum::value(detail.beta),
        short_name: price.short_name,
        long_name: price.long_name,
    })
}
