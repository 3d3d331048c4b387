/// Analysis pipeline for the climate/disease core.
///
/// Each submodule is a pure, synchronous function of its inputs: no shared
/// state, no I/O, results newly allocated. Callers own the record snapshots
/// and may run the per-location stages in parallel if they choose.
///
/// Submodules, in pipeline order:
/// - `aggregate` — collapses daily weather records into monthly summaries.
/// - `join` — aligns monthly weather with monthly disease records.
/// - `correlate` — Pearson correlation matrix and strength ranking.
/// - `rank` — per-district case totals with competition ranking.
/// - `coverage` — completeness of a weather record over a window.

pub mod aggregate;
pub mod correlate;
pub mod coverage;
pub mod join;
pub mod rank;
