/// District coordinate registry for the climate/disease analysis core.
///
/// Defines the canonical list of districts with known coordinates, the
/// static reference data behind every spatial output. This is the single
/// source of truth for district geography — other modules should resolve
/// coordinates through here rather than hardcoding them.
///
/// A district missing from this registry is an "unknown location": it still
/// participates in non-spatial rankings but is excluded from any
/// spatially-resolved subset. Lookup misses are never errors.

// ---------------------------------------------------------------------------
// District metadata
// ---------------------------------------------------------------------------

/// Metadata for a single district with known coordinates.
pub struct District {
    /// Canonical district name as it appears in disease reports.
    pub name: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
}

/// All districts with known coordinates, ordered by reported population.
///
/// Coordinates are the district-center points used for case-intensity
/// heatmaps.
pub static DISTRICT_REGISTRY: &[District] = &[
    District { name: "Mumbai", latitude: 19.0760, longitude: 72.8777 },
    District { name: "Delhi", latitude: 28.7041, longitude: 77.1025 },
    District { name: "Bengaluru", latitude: 12.9716, longitude: 77.5946 },
    District { name: "Hyderabad", latitude: 17.3850, longitude: 78.4867 },
    District { name: "Ahmedabad", latitude: 23.0225, longitude: 72.5714 },
    District { name: "Chennai", latitude: 13.0827, longitude: 80.2707 },
    District { name: "Kolkata", latitude: 22.5726, longitude: 88.3639 },
    District { name: "Pune", latitude: 18.5204, longitude: 73.8567 },
    District { name: "Jaipur", latitude: 26.9124, longitude: 75.7873 },
    District { name: "Lucknow", latitude: 26.8467, longitude: 80.9462 },
];

/// Returns the canonical names of all registered districts.
pub fn all_district_names() -> Vec<&'static str> {
    DISTRICT_REGISTRY.iter().map(|d| d.name).collect()
}

/// Looks up a district by name, case-insensitively.
///
/// Disease reports and weather sources disagree on capitalization, so the
/// match ignores ASCII case. Returns `None` for an unknown district.
pub fn find_district(name: &str) -> Option<&'static District> {
    DISTRICT_REGISTRY
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}

/// Resolves a district name to `(latitude, longitude)`, if known.
pub fn coordinates(name: &str) -> Option<(f64, f64)> {
    find_district(name).map(|d| (d.latitude, d.longitude))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
