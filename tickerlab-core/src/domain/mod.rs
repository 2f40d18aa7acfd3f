//! Domain types for the metrics pipeline.

pub mod bar;
pub mod info;
pub mod period;
pub mod request;

pub use bar::Bar;
pub use info::CompanyInfo;
pub use period::Period;
pub use request::{AnalysisRequest, ChartKind};

/// Symbol type alias
pub type Symbol = String;
