//! Filter state: the recruiter's currently selected filter values.
//!
//! State is mutated only through explicit setters/togglers; insertion order
//! inside the sets never matters, membership is all the predicates read.

use candidate_store::SeniorityBand;
use std::collections::HashSet;

/// The active filter selections for a candidate-list session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Substring match against usernames; empty/whitespace means "match all"
    pub name_query: String,
    /// Selected seniority bands, combined with OR
    pub seniority_bands: HashSet<SeniorityBand>,
    /// Selected languages, canonicalized to lowercase, combined with AND
    pub languages: HashSet<String>,
    /// When set, only favorited candidates pass
    pub show_only_favorites: bool,
}

impl FilterState {
    /// Initial state: all filters empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.name_query = query.into();
    }

    /// Flip a seniority band in or out of the selection.
    pub fn toggle_seniority_band(&mut self, band: SeniorityBand) {
        if !self.seniority_bands.remove(&band) {
            self.seniority_bands.insert(band);
        }
    }

    /// Flip a language in or out of the selection.
    ///
    /// Languages are canonicalized to lowercase so "Python" and "python"
    /// toggle the same entry.
    pub fn toggle_language(&mut self, language: &str) {
        let canonical = language.to_lowercase();
        if !self.languages.remove(&canonical) {
            self.languages.insert(canonical);
        }
    }

    pub fn set_show_only_favorites(&mut self, show: bool) {
        self.show_only_favorites = show;
    }

    /// Reset every filter to its initial empty value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when any filter dimension would narrow the candidate list.
    pub fn has_active_filters(&self) -> bool {
        !self.name_query.is_empty()
            || !self.seniority_bands.is_empty()
            || !self.languages.is_empty()
            || self.show_only_favorites
    }
}
