//! Filter candidates by required languages.
//!
//! Language selections combine with AND: each selected language is a
//! required skill, so a candidate must have every one of them. Seniority
//! bands use OR on the same surface; the asymmetry is intentional and must
//! be preserved.

use crate::context::ScreeningContext;
use crate::traits::Filter;
use candidate_store::Candidate;

/// Keeps candidates that have every selected language in their skill list.
///
/// Matching is case-insensitive; the context stores selections in lowercase
/// and `Candidate::has_language` ignores ASCII case.
pub struct LanguageFilter;

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &ScreeningContext) -> Vec<Candidate> {
        if context.languages.is_empty() {
            return candidates;
        }

        candidates
            .into_iter()
            .filter(|candidate| {
                context
                    .languages
                    .iter()
                    .all(|language| candidate.has_language(language))
            })
            .collect()
    }
}
