/// Inner join of monthly weather aggregates and monthly disease records.
///
/// Both inputs are expected pre-filtered by the caller — one location's
/// aggregates, one (district, disease) pair's records. Multi-disease or
/// multi-location joins are the caller's responsibility, invoked once per
/// combination.
///
/// The join is keyed on year-month and symmetric: neither side is
/// authoritative, a month present on only one side is silently dropped.
/// Iteration follows the weather sequence, so the output inherits its
/// chronological order.

use std::collections::HashMap;

use log::warn;

use crate::model::{DiseaseRecord, JoinedMonthlyRow, MonthlyWeatherAggregate, YearMonth};

/// Joins weather aggregates with disease records on year-month.
///
/// Guarantees `result.len() <= min(weather.len(), distinct disease months)`.
/// An empty result is a valid outcome, not an error — downstream analysis
/// reports it as insufficient data.
///
/// Disease records are one per month by contract; should duplicates appear,
/// the first occurrence wins and the rest are dropped with a warning.
pub fn join_monthly(
    weather: &[MonthlyWeatherAggregate],
    disease: &[DiseaseRecord],
) -> Vec<JoinedMonthlyRow> {
    let mut cases_by_month: HashMap<YearMonth, u64> = HashMap::with_capacity(disease.len());
    for record in disease {
        let month = record.year_month();
        if cases_by_month.contains_key(&month) {
            warn!(
                "duplicate disease record for {} in {} dropped",
                record.district, month
            );
            continue;
        }
        cases_by_month.insert(month, record.cases);
    }

    weather
        .iter()
        .filter_map(|agg| {
            let cases = *cases_by_month.get(&agg.year_month)?;
            Some(JoinedMonthlyRow {
                location: agg.location.clone(),
                year_month: agg.year_month,
                temperature_max: agg.temperature_max,
                temperature_min: agg.temperature_min,
                precipitation_sum: agg.precipitation_sum,
                rain_sum: agg.rain_sum,
                humidity_max: agg.humidity_max,
                humidity_min: agg.humidity_min,
                windspeed_max: agg.windspeed_max,
                day_count: agg.day_count,
                cases,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
