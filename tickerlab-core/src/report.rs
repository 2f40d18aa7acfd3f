//! Report assembly — one request in, one report out.

use crate::chart::{self, OhlcPoint, PricePoint, VolumePoint};
use crate::domain::{AnalysisRequest, Bar, CompanyInfo};
use crate::stats::PeriodStatistics;
use crate::summary::SummaryTable;
use serde::Serialize;

/// The three chart-ready sequences for one series.
///
/// Always fully populated, whatever chart the request asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub close: Vec<PricePoint>,
    pub ohlc: Vec<OhlcPoint>,
    pub volume: Vec<VolumePoint>,
}

impl ChartSeries {
    pub fn from_series(series: &[Bar]) -> Self {
        Self {
            close: chart::close_series(series),
            ohlc: chart::ohlc_series(series),
            volume: chart::volume_series(series),
        }
    }
}

/// Everything the pipeline derives for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub request: AnalysisRequest,
    pub company_name: String,
    pub summary: SummaryTable,
    pub statistics: PeriodStatistics,
    pub charts: ChartSeries,
}

/// Run the full pipeline: summary extraction, period statistics, chart
/// series. One synchronous pass; no failure path on a well-formed,
/// non-empty series.
pub fn analyze(request: &AnalysisRequest, info: &CompanyInfo, series: &[Bar]) -> AnalysisReport {
    AnalysisReport {
        request: request.clone(),
        company_name: info.display_name(&request.symbol),
        summary: SummaryTable::from_info(info),
        statistics: PeriodStatistics::compute(series),
        charts: ChartSeries::from_series(series),
    }
}
