//! Screening context: the immutable snapshot filters evaluate against.
//!
//! The context-builder pattern: the composition layer gathers everything the
//! predicates need (filter values plus a favorites snapshot) once per
//! recompute, then each filter reads from the shared snapshot. Filters never
//! reach back into mutable session state.

use crate::state::FilterState;
use candidate_store::SeniorityBand;
use std::collections::HashSet;

/// Snapshot of filter values and favorites for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct ScreeningContext {
    pub name_query: String,
    pub seniority_bands: HashSet<SeniorityBand>,
    pub languages: HashSet<String>,
    pub favorites: HashSet<String>,
    pub favorites_only: bool,
}

impl ScreeningContext {
    /// Empty context: every candidate passes every filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from the current filter state and favorites set.
    pub fn from_state(state: &FilterState, favorites: &HashSet<String>) -> Self {
        Self {
            name_query: state.name_query.clone(),
            seniority_bands: state.seniority_bands.clone(),
            languages: state.languages.clone(),
            favorites: favorites.clone(),
            favorites_only: state.show_only_favorites,
        }
    }
}
