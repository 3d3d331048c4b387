/// Pearson correlation analysis over joined monthly rows.
///
/// Computes the correlation matrix for every pair of numeric fields in a
/// joined table and ranks the weather fields by association strength with
/// the case count. Coefficients live in [-1, 1]; a pair whose coefficient
/// cannot be computed (zero variance, or fewer than two months where both
/// fields are present) is *undefined* and carried as `None`. Undefined and
/// zero are distinct outcomes — an unknown association is never reported as
/// 0.0.

use std::collections::BTreeMap;

use crate::config::AnalysisConfig;
use crate::model::{AnalysisError, FIELD_CASES, JoinedMonthlyRow, WEATHER_FIELDS};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Direction of an association, derived from the coefficient's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    Positive,
    Negative,
    /// Coefficient within the configured epsilon of zero.
    NoRelationship,
    /// Coefficient could not be computed for this pair.
    Undefined,
}

/// One weather field's association with the case count.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseCorrelation {
    pub field: String,
    /// Pearson coefficient, or `None` when undefined.
    pub coefficient: Option<f64>,
    pub relationship: Relationship,
}

/// Full correlation output: the pairwise matrix plus the ranked
/// field-vs-cases list.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationResult {
    /// Coefficient per ordered field-name pair. Both orientations and the
    /// diagonal are present; `corr(a, b) == corr(b, a)` always.
    pub matrix: BTreeMap<(String, String), Option<f64>>,
    /// Weather fields ranked by descending `|coefficient|` against cases;
    /// ties break on field name, undefined entries sort after all defined
    /// ones.
    pub case_correlations: Vec<CaseCorrelation>,
}

impl CorrelationResult {
    /// The matrix entry for a field pair, if both names are known.
    pub fn coefficient(&self, a: &str, b: &str) -> Option<Option<f64>> {
        self.matrix.get(&(a.to_string(), b.to_string())).copied()
    }

    /// The most strongly associated weather field, or `None` when every
    /// pairing with cases came out undefined.
    pub fn strongest(&self) -> Option<&CaseCorrelation> {
        self.case_correlations
            .iter()
            .find(|c| c.coefficient.is_some())
    }

    /// Ranked entries whose defined coefficient magnitude meets `threshold`.
    pub fn case_correlations_above(&self, threshold: f64) -> Vec<&CaseCorrelation> {
        self.case_correlations
            .iter()
            .filter(|c| c.coefficient.is_some_and(|r| r.abs() >= threshold))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Correlates every numeric field pair across `rows`.
///
/// Fewer than two rows (or fewer than the configured minimum) cannot support
/// any coefficient and returns `AnalysisError::InsufficientData` — never a
/// partial or fabricated result. Two rows are accepted even though most
/// coefficients are numerically unstable at that size; callers wanting a
/// stricter floor raise `min_joined_rows`.
pub fn correlate(
    rows: &[JoinedMonthlyRow],
    config: &AnalysisConfig,
) -> Result<CorrelationResult, AnalysisError> {
    let floor = config.min_joined_rows.max(2);
    if rows.len() < floor {
        return Err(AnalysisError::InsufficientData { rows: rows.len() });
    }

    let fields: Vec<&str> = WEATHER_FIELDS
        .iter()
        .copied()
        .chain(std::iter::once(FIELD_CASES))
        .collect();

    let mut matrix = BTreeMap::new();
    for (i, a) in fields.iter().enumerate() {
        for b in &fields[i..] {
            let r = pearson(rows, a, b);
            matrix.insert((a.to_string(), b.to_string()), r);
            matrix.insert((b.to_string(), a.to_string()), r);
        }
    }

    let mut case_correlations: Vec<CaseCorrelation> = WEATHER_FIELDS
        .iter()
        .map(|field| {
            let coefficient = matrix[&(field.to_string(), FIELD_CASES.to_string())];
            CaseCorrelation {
                field: field.to_string(),
                coefficient,
                relationship: relationship(coefficient, config.zero_epsilon),
            }
        })
        .collect();

    case_correlations.sort_by(|a, b| match (a.coefficient, b.coefficient) {
        (Some(x), Some(y)) => y
            .abs()
            .partial_cmp(&x.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.field.cmp(&b.field)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.field.cmp(&b.field),
    });

    Ok(CorrelationResult {
        matrix,
        case_correlations,
    })
}

/// Classifies a coefficient's sign, treating anything within `epsilon` of
/// zero as no relationship.
fn relationship(coefficient: Option<f64>, epsilon: f64) -> Relationship {
    match coefficient {
        None => Relationship::Undefined,
        Some(r) if r.abs() <= epsilon => Relationship::NoRelationship,
        Some(r) if r > 0.0 => Relationship::Positive,
        Some(_) => Relationship::Negative,
    }
}

/// Sample Pearson coefficient for two fields over the rows where both are
/// present. Undefined (`None`) when fewer than two such rows exist or when
/// either field has zero variance across them.
fn pearson(rows: &[JoinedMonthlyRow], a: &str, b: &str) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|row| {
            let x = row.numeric_field(a).flatten()?;
            let y = row.numeric_field(b).flatten()?;
            Some((x, y))
        })
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    // Rounding can push a perfect correlation a hair past ±1.
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FIELD_HUMIDITY_MAX, FIELD_TEMPERATURE_MAX, YearMonth};

    /// A joined row where every weather field tracks a distinct linear
    /// pattern of `i`, so no pair is degenerate unless a test overrides it.
    fn row(i: usize, temperature_max: Option<f64>, cases: u64) -> JoinedMonthlyRow {
        let t = i as f64;
        JoinedMonthlyRow {
            location: "Delhi".to_string(),
            year_month: YearMonth { year: 2021, month: i as u32 + 1 },
            temperature_max,
            temperature_min: Some(10.0 + t),
            precipitation_sum: Some(50.0 - 2.0 * t),
            rain_sum: Some(40.0 - t),
            humidity_max: Some(60.0 + 3.0 * t),
            humidity_min: Some(30.0 + 2.0 * t),
            windspeed_max: Some(5.0 + 0.5 * t),
            day_count: 28,
            cases,
        }
    }

    fn rows_with_linear_cases() -> Vec<JoinedMonthlyRow> {
        // cases rises linearly with temperature_max: a perfect +1 pair.
        (0..6)
            .map(|i| row(i, Some(20.0 + i as f64), 100 + 10 * i as u64))
            .collect()
    }

    #[test]
    fn test_fewer_than_two_rows_is_insufficient_data() {
        let config = AnalysisConfig::default();
        let one_row = vec![row(0, Some(25.0), 50)];

        assert_eq!(
            correlate(&[], &config),
            Err(AnalysisError::InsufficientData { rows: 0 })
        );
        assert_eq!(
            correlate(&one_row, &config),
            Err(AnalysisError::InsufficientData { rows: 1 }),
            "a single row must never produce a coefficient"
        );
    }

    #[test]
    fn test_self_correlation_is_exactly_one_with_nonzero_variance() {
        let result = correlate(&rows_with_linear_cases(), &AnalysisConfig::default()).unwrap();
        assert_eq!(
            result.coefficient(FIELD_TEMPERATURE_MAX, FIELD_TEMPERATURE_MAX),
            Some(Some(1.0))
        );
        assert_eq!(result.coefficient(FIELD_CASES, FIELD_CASES), Some(Some(1.0)));
    }

    #[test]
    fn test_matrix_is_symmetric_for_all_pairs() {
        let result = correlate(&rows_with_linear_cases(), &AnalysisConfig::default()).unwrap();
        for ((a, b), r) in &result.matrix {
            let mirrored = result.matrix[&(b.clone(), a.clone())];
            assert_eq!(*r, mirrored, "corr({a}, {b}) must equal corr({b}, {a})");
        }
    }

    #[test]
    fn test_all_defined_coefficients_lie_in_unit_interval() {
        let result = correlate(&rows_with_linear_cases(), &AnalysisConfig::default()).unwrap();
        for ((a, b), r) in &result.matrix {
            if let Some(r) = r {
                assert!(
                    (-1.0..=1.0).contains(r),
                    "corr({a}, {b}) = {r} outside [-1, 1]"
                );
            }
        }
    }

    #[test]
    fn test_perfectly_linear_pair_has_unit_coefficient() {
        let result = correlate(&rows_with_linear_cases(), &AnalysisConfig::default()).unwrap();
        let r = result
            .coefficient(FIELD_TEMPERATURE_MAX, FIELD_CASES)
            .unwrap()
            .unwrap();
        assert!((r - 1.0).abs() < 1e-9, "perfect linear pair should give 1.0, got {r}");
    }

    #[test]
    fn test_inverse_pair_has_negative_relationship() {
        // precipitation_sum falls as cases rise in the fixture rows.
        let result = correlate(&rows_with_linear_cases(), &AnalysisConfig::default()).unwrap();
        let entry = result
            .case_correlations
            .iter()
            .find(|c| c.field == "precipitation_sum")
            .unwrap();
        assert!(entry.coefficient.unwrap() < 0.0);
        assert_eq!(entry.relationship, Relationship::Negative);
    }

    #[test]
    fn test_constant_field_is_undefined_not_zero() {
        // temperature_max pinned at 30.0 while cases vary: zero variance
        // makes the pair undefined. Reporting 0.0 here would fabricate a
        // "no relationship" finding.
        let rows: Vec<_> = (0..5)
            .map(|i| row(i, Some(30.0), 10 + 7 * i as u64))
            .collect();

        let result = correlate(&rows, &AnalysisConfig::default()).unwrap();
        assert_eq!(
            result.coefficient(FIELD_TEMPERATURE_MAX, FIELD_CASES),
            Some(None),
            "zero-variance pair must be undefined"
        );
        let entry = result
            .case_correlations
            .iter()
            .find(|c| c.field == FIELD_TEMPERATURE_MAX)
            .unwrap();
        assert_eq!(entry.relationship, Relationship::Undefined);
    }

    #[test]
    fn test_field_absent_in_most_rows_is_undefined() {
        // temperature_max present in only one row: fewer than two complete
        // pairs, so the coefficient is undefined even though the table has
        // plenty of rows.
        let rows: Vec<_> = (0..5)
            .map(|i| {
                let t = if i == 2 { Some(28.0) } else { None };
                row(i, t, 10 + i as u64)
            })
            .collect();

        let result = correlate(&rows, &AnalysisConfig::default()).unwrap();
        assert_eq!(result.coefficient(FIELD_TEMPERATURE_MAX, FIELD_CASES), Some(None));
    }

    #[test]
    fn test_ranking_sorted_by_descending_absolute_value() {
        let result = correlate(&rows_with_linear_cases(), &AnalysisConfig::default()).unwrap();
        let magnitudes: Vec<f64> = result
            .case_correlations
            .iter()
            .filter_map(|c| c.coefficient.map(f64::abs))
            .collect();
        for pair in magnitudes.windows(2) {
            assert!(
                pair[0] >= pair[1],
                "ranking not in descending |r| order: {:?}",
                magnitudes
            );
        }
    }

    #[test]
    fn test_tied_magnitudes_break_by_field_name() {
        // humidity_max and temperature_max carry identical values, so both
        // correlate with cases at exactly the same magnitude.
        let rows: Vec<_> = (0..5)
            .map(|i| {
                let mut r = row(i, Some(20.0 + i as f64), 100 + 10 * i as u64);
                r.humidity_max = r.temperature_max;
                r
            })
            .collect();

        let result = correlate(&rows, &AnalysisConfig::default()).unwrap();
        let hum_pos = result
            .case_correlations
            .iter()
            .position(|c| c.field == FIELD_HUMIDITY_MAX)
            .unwrap();
        let temp_pos = result
            .case_correlations
            .iter()
            .position(|c| c.field == FIELD_TEMPERATURE_MAX)
            .unwrap();
        assert!(
            hum_pos < temp_pos,
            "tie must break lexically: humidity_max before temperature_max"
        );
    }

    #[test]
    fn test_undefined_entries_rank_after_all_defined_ones() {
        let rows: Vec<_> = (0..5)
            .map(|i| row(i, Some(30.0), 10 + 7 * i as u64)) // constant temp
            .collect();

        let result = correlate(&rows, &AnalysisConfig::default()).unwrap();
        let positions: Vec<bool> = result
            .case_correlations
            .iter()
            .map(|c| c.coefficient.is_some())
            .collect();
        let first_undefined = positions.iter().position(|p| !p).unwrap();
        assert!(
            positions[first_undefined..].iter().all(|p| !p),
            "once undefined entries start, no defined entry may follow"
        );
    }

    #[test]
    fn test_strongest_returns_top_defined_entry() {
        let result = correlate(&rows_with_linear_cases(), &AnalysisConfig::default()).unwrap();
        let strongest = result.strongest().expect("fixture has defined coefficients");
        assert_eq!(strongest.coefficient.map(f64::abs), Some(1.0));
    }

    #[test]
    fn test_strongest_is_none_when_everything_is_undefined() {
        // Two rows sharing identical weather values: every weather field has
        // zero variance.
        let a = row(0, Some(30.0), 10);
        let mut b = a.clone();
        b.year_month = YearMonth { year: 2021, month: 2 };
        b.cases = 99;

        let result = correlate(&[a, b], &AnalysisConfig::default()).unwrap();
        assert!(result.strongest().is_none());
    }

    #[test]
    fn test_threshold_filter_keeps_only_strong_associations() {
        let result = correlate(&rows_with_linear_cases(), &AnalysisConfig::default()).unwrap();
        let strong = result.case_correlations_above(0.99);
        assert!(!strong.is_empty());
        for entry in &strong {
            assert!(entry.coefficient.unwrap().abs() >= 0.99);
        }
        let all = result.case_correlations_above(-1.0);
        assert_eq!(all.len(), result.case_correlations.iter().filter(|c| c.coefficient.is_some()).count());
    }

    #[test]
    fn test_epsilon_zone_reports_no_relationship() {
        let coefficient = Some(5e-10);
        assert_eq!(
            relationship(coefficient, 1e-9),
            Relationship::NoRelationship,
            "within epsilon of zero is neither positive nor negative"
        );
        assert_eq!(relationship(Some(0.3), 1e-9), Relationship::Positive);
        assert_eq!(relationship(Some(-0.3), 1e-9), Relationship::Negative);
        assert_eq!(relationship(None, 1e-9), Relationship::Undefined);
    }

    #[test]
    fn test_raised_row_floor_is_honored() {
        let config = AnalysisConfig {
            min_joined_rows: 4,
            ..AnalysisConfig::default()
        };
        let rows: Vec<_> = (0..3)
            .map(|i| row(i, Some(20.0 + i as f64), 10 + i as u64))
            .collect();
        assert_eq!(
            correlate(&rows, &config),
            Err(AnalysisError::InsufficientData { rows: 3 })
        );
    }

    #[test]
    fn test_two_rows_still_compute() {
        // Numerically unstable but explicitly allowed; thresholds are the
        // caller's concern.
        let rows: Vec<_> = (0..2)
            .map(|i| row(i, Some(20.0 + i as f64), 10 + i as u64))
            .collect();
        let result = correlate(&rows, &AnalysisConfig::default()).unwrap();
        assert!(result.strongest().is_some());
    }
}
