//! Filter candidates down to the recruiter's favorites.

use crate::context::ScreeningContext;
use crate::traits::Filter;
use candidate_store::Candidate;

/// When favorites-only mode is active, keeps only favorited candidates.
///
/// Inactive mode is a pass-through; the favorites set itself is a snapshot
/// taken when the context was built.
pub struct FavoritesFilter;

impl Filter for FavoritesFilter {
    fn name(&self) -> &str {
        "FavoritesFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &ScreeningContext) -> Vec<Candidate> {
        if !context.favorites_only {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| context.favorites.contains(&candidate.username))
            .collect()
    }
}
