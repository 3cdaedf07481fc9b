//! Filter candidates by username substring.

use crate::context::ScreeningContext;
use crate::traits::Filter;
use candidate_store::Candidate;

/// Keeps candidates whose username contains the query, case-insensitively.
///
/// ## Algorithm
/// 1. Trim and lowercase the query
/// 2. An empty query matches everyone
/// 3. Otherwise keep candidates whose lowercased username contains it
pub struct NameFilter;

impl Filter for NameFilter {
    fn name(&self) -> &str {
        "NameFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &ScreeningContext) -> Vec<Candidate> {
        let query = context.name_query.trim().to_lowercase();
        if query.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| candidate.username.to_lowercase().contains(&query))
            .collect()
    }
}
