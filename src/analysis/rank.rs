/// Geographic severity ranking of disease case totals.
///
/// Sums reported cases per district over a date window and ranks districts
/// by total, highest first, using competition ranking: tied districts share
/// the minimum rank of their group and the next distinct total resumes at
/// `previous_rank + tie_group_size`.
///
/// Callers pre-filter the records to a single disease — ranking is
/// per-disease, matching the predominant usage of the dashboards this core
/// replaces.

use std::collections::BTreeMap;

use log::warn;

use crate::districts;
use crate::model::{DateRange, DiseaseRecord};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One district's position in the severity ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRank {
    pub location: String,
    pub total_cases: u64,
    /// 1 = highest total; tied districts share the lowest rank number.
    pub rank: usize,
    /// Resolved from the district registry; `None` for an unknown district,
    /// which keeps its rank but is excluded from spatial output.
    pub coordinates: Option<(f64, f64)>,
}

/// The full severity table, ordered by rank.
#[derive(Debug, Clone, PartialEq)]
pub struct GeographicRanking {
    pub entries: Vec<LocationRank>,
}

impl GeographicRanking {
    /// Number of ranked districts.
    pub fn total_locations(&self) -> usize {
        self.entries.len()
    }

    /// Grand total of cases across every ranked district.
    pub fn total_cases(&self) -> u64 {
        self.entries.iter().map(|e| e.total_cases).sum()
    }

    /// The designated district's `(rank, total_locations)`, matched
    /// case-insensitively. `None` when the district reported no cases in
    /// the window.
    pub fn rank_of(&self, location: &str) -> Option<(usize, usize)> {
        self.entries
            .iter()
            .find(|e| e.location.eq_ignore_ascii_case(location))
            .map(|e| (e.rank, self.total_locations()))
    }

    /// The subset with resolved coordinates, suitable for map rendering.
    pub fn spatial_entries(&self) -> Vec<&LocationRank> {
        self.entries
            .iter()
            .filter(|e| e.coordinates.is_some())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Ranks districts by total cases within `window`.
///
/// An empty result (no records in the window) is valid. A district missing
/// from the coordinate registry is logged and ranked without coordinates —
/// never an error.
pub fn rank_locations(records: &[DiseaseRecord], window: &DateRange) -> GeographicRanking {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        if !window.contains(record.date) {
            continue;
        }
        *totals.entry(record.district.clone()).or_default() += record.cases;
    }

    // Highest total first; equal totals ordered by name so tied groups are
    // deterministic.
    let mut ordered: Vec<(String, u64)> = totals.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut entries = Vec::with_capacity(ordered.len());
    let mut previous_total = None;
    let mut previous_rank = 0;
    for (position, (location, total_cases)) in ordered.into_iter().enumerate() {
        let rank = if previous_total == Some(total_cases) {
            previous_rank
        } else {
            position + 1
        };
        previous_total = Some(total_cases);
        previous_rank = rank;

        let coordinates = districts::coordinates(&location);
        if coordinates.is_none() {
            warn!("district '{}' not in coordinate registry, excluded from spatial output", location);
        }
        entries.push(LocationRank {
            location,
            total_cases,
            rank,
            coordinates,
        });
    }

    GeographicRanking { entries }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
