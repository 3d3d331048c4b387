/// Core data types for the climate/disease analysis core.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no analysis logic and no I/O — only types, field-name
/// constants, and the error taxonomy.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Numeric field names
// ---------------------------------------------------------------------------
//
// The canonical names of the numeric columns carried by a joined monthly row.
// These are the crate's stable export contract: the CSV-download collaborator
// serializes rows under exactly these names, and the correlation analyzer
// iterates them in this fixed order so its output is deterministic.

pub const FIELD_TEMPERATURE_MAX: &str = "temperature_max";
pub const FIELD_TEMPERATURE_MIN: &str = "temperature_min";
pub const FIELD_PRECIPITATION_SUM: &str = "precipitation_sum";
pub const FIELD_RAIN_SUM: &str = "rain_sum";
pub const FIELD_HUMIDITY_MAX: &str = "humidity_max";
pub const FIELD_HUMIDITY_MIN: &str = "humidity_min";
pub const FIELD_WINDSPEED_MAX: &str = "windspeed_max";

/// The designated outcome field for correlation ranking.
pub const FIELD_CASES: &str = "cases";

/// All weather fields, in canonical iteration order.
pub const WEATHER_FIELDS: &[&str] = &[
    FIELD_TEMPERATURE_MAX,
    FIELD_TEMPERATURE_MIN,
    FIELD_PRECIPITATION_SUM,
    FIELD_RAIN_SUM,
    FIELD_HUMIDITY_MAX,
    FIELD_HUMIDITY_MIN,
    FIELD_WINDSPEED_MAX,
];

// ---------------------------------------------------------------------------
// Temporal keys
// ---------------------------------------------------------------------------

/// A (year, month) pair used to align daily weather data with
/// monthly-granularity disease data.
///
/// Ordering is chronological, so a `BTreeMap<YearMonth, _>` iterates in
/// calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Extracts the year-month key from a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// An inclusive calendar-date window `[start, end]`.
///
/// Construction is validated: a reversed window is an input error, never a
/// negative day count. All analysis entry points take their window through
/// this type so the invalid-range check lives in exactly one place — which
/// is also why the type is `Serialize` but not `Deserialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a window, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AnalysisError> {
        if end < start {
            return Err(AnalysisError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive membership test.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Inclusive day count: `end - start + 1`. Always >= 1.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

// ---------------------------------------------------------------------------
// Raw record types
// ---------------------------------------------------------------------------

/// One day of weather observations for one location.
///
/// Supplied by the ingestion collaborator, one record per (location, date).
/// Dates need not be contiguous — missing days are allowed and reduce
/// coverage. Every measurement is `Option`: an absent value stays absent and
/// is never coerced to zero by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location: String,
    pub date: NaiveDate,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub precipitation_sum: Option<f64>,
    pub rain_sum: Option<f64>,
    pub humidity_max: Option<f64>,
    pub humidity_min: Option<f64>,
    pub windspeed_max: Option<f64>,
}

/// One month of reported cases for one disease in one district.
///
/// The date is month-granular; the day-of-month is a placeholder chosen by
/// the ingestion layer and only the year-month component is meaningful here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    pub district: String,
    pub disease: String,
    pub date: NaiveDate,
    pub cases: u64,
}

impl DiseaseRecord {
    /// The month this record reports on.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

// ---------------------------------------------------------------------------
// Derived value types
// ---------------------------------------------------------------------------

/// Monthly summary of one location's daily weather records.
///
/// Produced by `analysis::aggregate::aggregate_monthly`, recomputed on demand
/// and never persisted. Mean fields average the present daily values; sum
/// fields total them. A field no contributing record carried is `None`.
/// `day_count` is always > 0 — months with no records are omitted entirely
/// rather than emitted with placeholder values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyWeatherAggregate {
    pub location: String,
    pub year_month: YearMonth,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub precipitation_sum: Option<f64>,
    pub rain_sum: Option<f64>,
    pub humidity_max: Option<f64>,
    pub humidity_min: Option<f64>,
    pub windspeed_max: Option<f64>,
    pub day_count: usize,
}

/// The inner join of a monthly weather aggregate and a disease record
/// sharing the same (location, year-month).
///
/// Exists only when both sides matched; non-overlapping months are dropped,
/// never filled with zeros. Serialized field names are stable — the export
/// collaborator writes them as column headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedMonthlyRow {
    pub location: String,
    pub year_month: YearMonth,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
    pub precipitation_sum: Option<f64>,
    pub rain_sum: Option<f64>,
    pub humidity_max: Option<f64>,
    pub humidity_min: Option<f64>,
    pub windspeed_max: Option<f64>,
    pub day_count: usize,
    pub cases: u64,
}

impl JoinedMonthlyRow {
    /// Looks up a numeric field by its canonical name.
    ///
    /// Returns the outer `None` for an unknown field name; a known-but-absent
    /// measurement is `Some(None)`.
    pub fn numeric_field(&self, name: &str) -> Option<Option<f64>> {
        match name {
            FIELD_TEMPERATURE_MAX => Some(self.temperature_max),
            FIELD_TEMPERATURE_MIN => Some(self.temperature_min),
            FIELD_PRECIPITATION_SUM => Some(self.precipitation_sum),
            FIELD_RAIN_SUM => Some(self.rain_sum),
            FIELD_HUMIDITY_MAX => Some(self.humidity_max),
            FIELD_HUMIDITY_MIN => Some(self.humidity_min),
            FIELD_WINDSPEED_MAX => Some(self.windspeed_max),
            FIELD_CASES => Some(Some(self.cases as f64)),
            _ => None,
        }
    }
}

/// Completeness of a location's weather record over a requested window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageResult {
    /// Inclusive day count of the requested window.
    pub expected_days: i64,
    /// Distinct observation dates present within the window.
    pub actual_days: usize,
    /// `100 * actual / expected`, clamped to [0, 100].
    pub coverage_pct: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Data-shape conditions the analysis core reports to its caller.
///
/// These are structured results for the caller to display as warnings or
/// empty states, not fatal failures. Unknown locations and zero-variance
/// correlation pairs are deliberately *not* here — they are represented in
/// the result values (`coordinates: None`, `coefficient: None`) because they
/// only degrade part of an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The requested window ends before it starts.
    InvalidRange { start: NaiveDate, end: NaiveDate },
    /// Too few overlapping rows to compute the requested statistic.
    InsufficientData { rows: usize },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidRange { start, end } => {
                write!(f, "invalid date range: end {} is before start {}", end, start)
            }
            AnalysisError::InsufficientData { rows } => {
                write!(f, "insufficient data: {} overlapping row(s), need at least 2", rows)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
