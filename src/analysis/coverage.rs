/// Weather record coverage over a requested window.
///
/// Coverage is the fraction of calendar days in the window for which an
/// actual observation exists. It is the data-quality signal callers check
/// before trusting an aggregate: a month computed from three days of
/// readings deserves a warning banner.

use std::collections::BTreeSet;

use log::warn;

use crate::model::{CoverageResult, DateRange, WeatherRecord};

/// Measures how completely `records` cover `window`.
///
/// `expected_days` is the inclusive window length; `actual_days` counts
/// *distinct* in-window observation dates, so duplicate-date records cannot
/// push coverage past 100%. Duplicates are still a data-quality condition
/// worth surfacing, so they are logged rather than silently collapsed. The
/// percentage is clamped to [0, 100] as a final guard.
pub fn coverage(records: &[WeatherRecord], window: &DateRange) -> CoverageResult {
    let mut dates = BTreeSet::new();
    let mut duplicates = 0usize;
    for record in records {
        if !window.contains(record.date) {
            continue;
        }
        if !dates.insert(record.date) {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        warn!("{} duplicate-date weather record(s) ignored while computing coverage", duplicates);
    }

    let expected_days = window.day_count();
    let actual_days = dates.len();
    let coverage_pct = (100.0 * actual_days as f64 / expected_days as f64).clamp(0.0, 100.0);

    CoverageResult {
        expected_days,
        actual_days,
        coverage_pct,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
