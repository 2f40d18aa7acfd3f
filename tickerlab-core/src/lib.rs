//! TickerLab Core — the metrics pipeline behind the analyzer frontends.
//!
//! This crate contains the pure core:
//! - Domain types (bars, company info, periods, requests)
//! - Summary extractor (the fixed 11-row metric table)
//! - Period statistics (extremes, averages, return, volatility)
//! - Chart-ready series for rendering frontends
//! - Export document rendering
//!
//! The core performs no I/O and reads no clocks: it consumes an immutable
//! company-info record plus a historical series and produces plain values.
//! Fetching and presentation live in the frontend crates.

pub mod chart;
pub mod domain;
pub mod export;
pub mod format;
pub mod report;
pub mod stats;
pub mod summary;

#[cfg(test)]
mod testutil;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: pipeline inputs and outputs are Send + Sync.
    ///
    /// Frontends hand reports across threads (a worker fetches while the
    /// UI renders); if any type fails this check, the build breaks
    /// immediately.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();
        require_send::<domain::CompanyInfo>();
        require_sync::<domain::CompanyInfo>();
        require_send::<domain::Period>();
        require_sync::<domain::Period>();
        require_send::<domain::AnalysisRequest>();
        require_sync::<domain::AnalysisRequest>();

        require_send::<summary::SummaryTable>();
        require_sync::<summary::SummaryTable>();
        require_send::<stats::PeriodStatistics>();
        require_sync::<stats::PeriodStatistics>();
        require_send::<report::AnalysisReport>();
        require_sync::<report::AnalysisReport>();
        require_send::<report::ChartSeries>();
        require_sync::<report::ChartSeries>();
    }
}
