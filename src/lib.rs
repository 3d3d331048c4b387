//! climecure_core — analysis core for climate/disease association studies.
//!
//! Ingests two time-indexed observational datasets — daily weather records
//! and monthly disease-incidence counts, both keyed by district — and
//! derives the analytical artifacts the surrounding dashboards display:
//! monthly weather aggregates, temporally aligned joins, correlation
//! rankings, geographic severity rankings, and coverage metrics.
//!
//! The crate is deliberately small in scope: it does not fetch, clean, or
//! persist data, and it computes statistical association, never causation.
//! Ingestion, export, and rendering are external collaborators that hand
//! record snapshots in and take plain value objects out. Every entry point
//! is a pure synchronous function, so callers are free to run per-location
//! work in parallel.

pub mod analysis;
pub mod config;
pub mod districts;
pub mod model;

pub use analysis::aggregate::{WindowSummary, aggregate_monthly, window_summary};
pub use analysis::correlate::{CaseCorrelation, CorrelationResult, Relationship, correlate};
pub use analysis::coverage::coverage;
pub use analysis::join::join_monthly;
pub use analysis::rank::{GeographicRanking, LocationRank, rank_locations};
pub use config::AnalysisConfig;
pub use model::{
    AnalysisError, CoverageResult, DateRange, DiseaseRecord, JoinedMonthlyRow,
    MonthlyWeatherAggregate, WeatherRecord, YearMonth,
};
