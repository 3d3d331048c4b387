/// Temporal aggregation of daily weather records into monthly summaries.
///
/// The aggregator is the first pipeline stage: it collapses a location's
/// daily records over an inclusive window into one `MonthlyWeatherAggregate`
/// per calendar month, chronologically ordered. It holds no state — every
/// call recomputes from the records it is handed.
///
/// Absence rules:
/// - A month with no contributing records is absent from the output, never
///   emitted with NaN or zero placeholders.
/// - A field no contributing record carried is `None` in the aggregate.
///   Present values are averaged/summed over the days that have them.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use log::warn;

use crate::model::{DateRange, MonthlyWeatherAggregate, WeatherRecord, YearMonth};

// ---------------------------------------------------------------------------
// Field accumulators
// ---------------------------------------------------------------------------

/// Running mean over the values that are present.
#[derive(Default)]
struct MeanAcc {
    sum: f64,
    count: usize,
}

impl MeanAcc {
    fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Running sum over the values that are present. Distinguishes "no value all
/// month" (`None`) from a genuine total of zero.
#[derive(Default)]
struct SumAcc {
    sum: f64,
    any: bool,
}

impl SumAcc {
    fn add(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.any = true;
        }
    }

    fn total(&self) -> Option<f64> {
        if self.any { Some(self.sum) } else { None }
    }
}

#[derive(Default)]
struct MonthAcc {
    dates: BTreeSet<NaiveDate>,
    temperature_max: MeanAcc,
    temperature_min: MeanAcc,
    precipitation_sum: SumAcc,
    rain_sum: SumAcc,
    humidity_max: MeanAcc,
    humidity_min: MeanAcc,
    windspeed_max: MeanAcc,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Collapses daily weather records within `window` into monthly aggregates,
/// one per (month, location), in chronological order.
///
/// Records are expected one per (location, date). A duplicate date within a
/// month is a data-quality condition: the first record wins, the duplicate
/// is dropped and logged, and `day_count` stays equal to the number of
/// distinct dates.
///
/// An empty result is valid — downstream stages treat it as insufficient
/// data rather than an error.
pub fn aggregate_monthly(
    records: &[WeatherRecord],
    window: &DateRange,
) -> Vec<MonthlyWeatherAggregate> {
    let mut groups: BTreeMap<(YearMonth, String), MonthAcc> = BTreeMap::new();

    for record in records {
        if !window.contains(record.date) {
            continue;
        }
        let key = (YearMonth::from_date(record.date), record.location.clone());
        let acc = groups.entry(key).or_default();
        if !acc.dates.insert(record.date) {
            warn!(
                "duplicate weather record for {} on {} dropped",
                record.location, record.date
            );
            continue;
        }
        acc.temperature_max.add(record.temperature_max);
        acc.temperature_min.add(record.temperature_min);
        acc.precipitation_sum.add(record.precipitation_sum);
        acc.rain_sum.add(record.rain_sum);
        acc.humidity_max.add(record.humidity_max);
        acc.humidity_min.add(record.humidity_min);
        acc.windspeed_max.add(record.windspeed_max);
    }

    groups
        .into_iter()
        .map(|((year_month, location), acc)| MonthlyWeatherAggregate {
            location,
            year_month,
            temperature_max: acc.temperature_max.mean(),
            temperature_min: acc.temperature_min.mean(),
            precipitation_sum: acc.precipitation_sum.total(),
            rain_sum: acc.rain_sum.total(),
            humidity_max: acc.humidity_max.mean(),
            humidity_min: acc.humidity_min.mean(),
            windspeed_max: acc.windspeed_max.mean(),
            day_count: acc.dates.len(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Window summary
// ---------------------------------------------------------------------------

/// Headline numbers for a windowed slice of weather records.
///
/// These are the overview metrics (average max temperature, total rainfall)
/// that presentation collaborators display as KPI cards.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSummary {
    /// Records that fell inside the window.
    pub record_count: usize,
    pub mean_temperature_max: Option<f64>,
    pub total_precipitation: Option<f64>,
}

/// Computes overview metrics for the records inside `window`.
pub fn window_summary(records: &[WeatherRecord], window: &DateRange) -> WindowSummary {
    let mut temp = MeanAcc::default();
    let mut precip = SumAcc::default();
    let mut record_count = 0;

    for record in records {
        if !window.contains(record.date) {
            continue;
        }
        record_count += 1;
        temp.add(record.temperature_max);
        precip.add(record.precipitation_sum);
    }

    WindowSummary {
        record_count,
        mean_temperature_max: temp.mean(),
        total_precipitation: precip.total(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
