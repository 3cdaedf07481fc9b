//! # Candidate Session
//!
//! The composition layer for one candidate-list session. It wires together:
//! 1. The candidate store (raw list from the data source)
//! 2. The screening pipeline (name, seniority, language, favorites)
//! 3. The favorites registry (persisted toggles)
//! 4. Pagination over the filtered list
//!
//! and exposes the single read/write surface the presentation layer
//! consumes. State lives in `(FilterState, current_page)`; every
//! setter/toggler is a transition, and any transition that can change the
//! filtered list's composition recomputes it and puts the user back on
//! page 1, so nobody is ever left staring at an out-of-range empty page.

use candidate_store::{Candidate, CandidateStore, SeniorityBand};
use local_store::{FavoritesRegistry, KeyValueStore};
use screening::{FilterPipeline, FilterState, ScreeningContext};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::pagination::{self, PageEntry, DEFAULT_PAGE_SIZE};

/// One recruiter's view over the candidate list: filters, favorites, and
/// pagination, owned exclusively by this session (single writer).
pub struct CandidateSession<S: KeyValueStore> {
    store: CandidateStore,
    filters: FilterState,
    favorites: FavoritesRegistry<S>,
    pipeline: FilterPipeline,
    // Recomputed on every input change; always a subset of the store in
    // source order
    filtered: Vec<Candidate>,
    page_size: usize,
    current_page: usize,
}

impl<S: KeyValueStore> CandidateSession<S> {
    /// Create a session over `store`, with favorites persisted in
    /// `favorites_store`.
    pub fn new(store: CandidateStore, favorites_store: S) -> Self {
        Self::with_page_size(store, favorites_store, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(store: CandidateStore, favorites_store: S, page_size: usize) -> Self {
        let mut session = Self {
            store,
            filters: FilterState::new(),
            favorites: FavoritesRegistry::new(favorites_store),
            pipeline: FilterPipeline::standard(),
            filtered: Vec::new(),
            // A zero page size would make page math meaningless
            page_size: page_size.max(1),
            current_page: 1,
        };
        session.refresh();
        session
    }

    // ---------------------------------------------------------------------
    // Filter transitions (each one recomputes and resets to page 1)
    // ---------------------------------------------------------------------

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.filters.set_name_query(query);
        self.refresh();
    }

    pub fn toggle_seniority_band(&mut self, band: SeniorityBand) {
        self.filters.toggle_seniority_band(band);
        self.refresh();
    }

    pub fn toggle_language(&mut self, language: &str) {
        self.filters.toggle_language(language);
        self.refresh();
    }

    pub fn set_favorites_only(&mut self, show: bool) {
        self.filters.set_show_only_favorites(show);
        self.refresh();
    }

    /// Reset every filter to its initial empty value and go back to page 1.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.refresh();
    }

    /// Replace the candidate list wholesale (refetch semantics).
    pub fn replace_candidates(
        &mut self,
        candidates: Vec<Candidate>,
    ) -> candidate_store::Result<()> {
        self.store.replace_all(candidates)?;
        self.refresh();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Favorites
    // ---------------------------------------------------------------------

    /// Toggle a username in the favorites set.
    ///
    /// Returns `true` when the candidate was added (the caller's cue to
    /// show an "added to favorites" notification; removal stays silent).
    /// The filtered list only changes while favorites-only mode is active,
    /// so only then does this recompute and reset the page.
    pub fn toggle_favorite(&mut self, username: &str) -> bool {
        let added = self.favorites.toggle(username);
        if added {
            info!("Added {} to favorites", username);
        }
        if self.filters.show_only_favorites {
            self.refresh();
        }
        added
    }

    pub fn is_favorite(&mut self, username: &str) -> bool {
        self.favorites.is_favorite(username)
    }

    pub fn favorites(&mut self) -> &HashSet<String> {
        self.favorites.favorites()
    }

    // ---------------------------------------------------------------------
    // Pagination
    // ---------------------------------------------------------------------

    /// Navigate to `page` if it is in range; out-of-range requests are
    /// silently ignored.
    pub fn handle_page_change(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        } else {
            debug!("Ignoring out-of-range page change to {}", page);
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size)
    }

    /// The slice of the filtered list shown on the current page.
    pub fn current_page_items(&self) -> &[Candidate] {
        pagination::page_slice(&self.filtered, self.page_size, self.current_page)
    }

    /// Display sequence of page numbers and ellipsis markers.
    pub fn page_numbers(&self) -> Vec<PageEntry> {
        pagination::page_numbers(self.total_pages(), self.current_page)
    }

    // ---------------------------------------------------------------------
    // Read surface
    // ---------------------------------------------------------------------

    pub fn all_candidates(&self) -> &[Candidate] {
        self.store.candidates()
    }

    pub fn filtered_candidates(&self) -> &[Candidate] {
        &self.filtered
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active_filters()
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filters
    }

    /// Recompute the filtered list from the current inputs and reset
    /// pagination.
    ///
    /// Steps:
    /// 1. Snapshot filter values and favorites into a ScreeningContext
    /// 2. Run the standard pipeline over a fresh copy of the store
    /// 3. Reset to page 1
    fn refresh(&mut self) {
        let context = ScreeningContext::from_state(&self.filters, self.favorites.favorites());
        self.filtered = self
            .pipeline
            .apply(self.store.candidates().to_vec(), &context);
        self.current_page = 1;
        debug!(
            "Recomputed filtered list: {} of {} candidates",
            self.filtered.len(),
            self.store.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candidate_store::{Skill, SkillLevel};
    use local_store::MemoryStore;

    fn candidate(username: &str, score: u32, languages: &[&str]) -> Candidate {
        Candidate {
            username: username.to_string(),
            joined_at: "2024-01-01".to_string(),
            skills: languages
                .iter()
                .map(|language| Skill {
                    language: language.to_string(),
                    level: SkillLevel::Intermediate,
                })
                .collect(),
            score,
        }
    }

    fn session_with(candidates: Vec<Candidate>) -> CandidateSession<MemoryStore> {
        let mut store = CandidateStore::new();
        store.replace_all(candidates).unwrap();
        CandidateSession::new(store, MemoryStore::new())
    }

    #[test]
    fn test_initial_state() {
        let session = session_with(vec![candidate("ada", 1280, &["Rust"])]);

        assert_eq!(session.current_page(), 1);
        assert!(!session.has_active_filters());
        assert_eq!(session.filtered_candidates().len(), 1);
    }

    #[test]
    fn test_filter_edit_resets_page() {
        let roster = (0..30)
            .map(|i| candidate(&format!("dev_{:02}", i), 1000, &[]))
            .collect();
        let mut session = session_with(roster);

        session.handle_page_change(3);
        assert_eq!(session.current_page(), 3);

        session.set_name_query("dev_1");
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.filtered_candidates().len(), 10);
    }

    #[test]
    fn test_favorites_only_interacts_with_other_filters_via_and() {
        let mut session = session_with(vec![
            candidate("ada", 1280, &["Rust"]),
            candidate("grace", 1280, &["Rust"]),
            candidate("alan", 1280, &["Python"]),
        ]);

        session.toggle_favorite("ada");
        session.toggle_favorite("alan");
        session.set_favorites_only(true);
        session.toggle_language("rust");

        let usernames: Vec<&str> = session
            .filtered_candidates()
            .iter()
            .map(|c| c.username.as_str())
            .collect();
        assert_eq!(usernames, ["ada"]);
    }

    #[test]
    fn test_toggle_favorite_refreshes_only_in_favorites_mode() {
        let mut session = session_with(vec![
            candidate("ada", 1280, &[]),
            candidate("grace", 900, &[]),
        ]);

        // Not in favorites mode: list composition is unaffected
        assert!(session.toggle_favorite("ada"));
        assert_eq!(session.filtered_candidates().len(), 2);

        session.set_favorites_only(true);
        assert_eq!(session.filtered_candidates().len(), 1);

        // Removing the favorite while in favorites mode empties the view
        assert!(!session.toggle_favorite("ada"));
        assert!(session.filtered_candidates().is_empty());
        assert_eq!(session.total_pages(), 1);
    }

    #[test]
    fn test_replace_candidates_is_wholesale_and_refilters() {
        let mut session = session_with(vec![candidate("ada", 1280, &["Rust"])]);
        session.toggle_language("rust");
        assert_eq!(session.filtered_candidates().len(), 1);

        session
            .replace_candidates(vec![candidate("grace", 900, &["Python"])])
            .unwrap();

        assert_eq!(session.all_candidates().len(), 1);
        assert!(session.filtered_candidates().is_empty());
    }
}
