//! Filter candidates by derived seniority band.
//!
//! Band selections combine with OR: a candidate passes if its score-derived
//! band is any one of the selected bands. This is deliberately the opposite
//! of the language filter's AND semantics.

use crate::context::ScreeningContext;
use crate::traits::Filter;
use candidate_store::Candidate;

/// Keeps candidates whose derived band is among the selected bands.
///
/// Candidates whose score derives no band (below 750) are excluded whenever
/// any band is selected.
pub struct SeniorityFilter;

impl Filter for SeniorityFilter {
    fn name(&self) -> &str {
        "SeniorityFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &ScreeningContext) -> Vec<Candidate> {
        if context.seniority_bands.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| {
                candidate
                    .seniority_band()
                    .is_some_and(|band| context.seniority_bands.contains(&band))
            })
            .collect()
    }
}
