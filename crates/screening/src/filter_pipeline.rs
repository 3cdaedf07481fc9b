//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::context::ScreeningContext;
use crate::filters::{FavoritesFilter, LanguageFilter, NameFilter, SeniorityFilter};
use crate::traits::Filter;
use candidate_store::Candidate;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// Filters run in insertion order; because each predicate only removes
/// candidates, sequencing them is equivalent to combining them with AND.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(NameFilter)
///     .add_filter(SeniorityFilter);
///
/// let filtered = pipeline.apply(candidates, &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard candidate-list pipeline: the name, seniority, language,
    /// and favorites predicates, in that order.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(NameFilter)
            .add_filter(SeniorityFilter)
            .add_filter(LanguageFilter)
            .add_filter(FavoritesFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered list
    pub fn apply(&self, candidates: Vec<Candidate>, context: &ScreeningContext) -> Vec<Candidate> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candidate_store::{SeniorityBand, Skill, SkillLevel};

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

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let context = ScreeningContext::new();

        let candidates = vec![
            candidate("ada", 1280, &["Rust"]),
            candidate("grace", 820, &["COBOL"]),
        ];

        let filtered = pipeline.apply(candidates.clone(), &context);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_standard_pipeline_with_empty_context_passes_everyone() {
        let pipeline = FilterPipeline::standard();
        let context = ScreeningContext::new();

        let candidates = vec![
            candidate("ada", 1280, &["Rust"]),
            candidate("grace", 500, &[]),
        ];

        let filtered = pipeline.apply(candidates, &context);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let pipeline = FilterPipeline::standard();

        let mut context = ScreeningContext::new();
        context.name_query = "a".to_string();
        context.seniority_bands.insert(SeniorityBand::Senior);
        context.languages.insert("rust".to_string());

        let candidates = vec![
            candidate("ada", 1280, &["Rust"]),      // passes all three
            candidate("alan", 1280, &["Python"]),   // fails language
            candidate("grace", 1280, &["Rust"]),    // fails name
            candidate("aaron", 800, &["Rust"]),     // fails seniority
        ];

        let filtered = pipeline.apply(candidates, &context);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].username, "ada");
    }

    #[test]
    fn test_pipeline_preserves_source_order() {
        let pipeline = FilterPipeline::standard();
        let mut context = ScreeningContext::new();
        context.languages.insert("rust".to_string());

        let candidates = vec![
            candidate("zoe", 1280, &["Rust"]),
            candidate("ada", 900, &["Rust"]),
            candidate("mel", 1100, &["Python"]),
            candidate("kay", 1000, &["Rust"]),
        ];

        let filtered = pipeline.apply(candidates, &context);
        let usernames: Vec<&str> = filtered.iter().map(|c| c.username.as_str()).collect();
        assert_eq!(usernames, ["zoe", "ada", "kay"]);
    }
}
