/// Analysis configuration.
///
/// Tunable thresholds for the analysis core, loadable from a TOML file by
/// the hosting application. Every field has a default, so an empty document
/// (or no file at all) yields the standard behavior.

use serde::Deserialize;

/// Tunable parameters for correlation analysis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Coefficients with absolute value at or below this are reported as
    /// "no relationship" rather than arbitrarily positive or negative.
    pub zero_epsilon: f64,
    /// Minimum joined rows required before correlating at all. The spec
    /// floor is 2; callers wanting numerically stabler output can raise it.
    pub min_joined_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            zero_epsilon: 1e-9,
            min_joined_rows: 2,
        }
    }
}

impl AnalysisConfig {
    /// Parses a configuration from TOML text. Missing keys take defaults;
    /// unknown keys are rejected so typos surface instead of silently
    /// falling back.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
