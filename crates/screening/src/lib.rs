//! # Screening Crate
//!
//! Pipeline for filtering the candidate list.
//!
//! This crate provides:
//! - The Filter trait and concrete filters (name, seniority, language,
//!   favorites)
//! - FilterPipeline for composing filters
//! - FilterState (mutable selections) and ScreeningContext (the immutable
//!   snapshot filters evaluate against)
//!
//! ## Architecture
//! The four predicates combine with AND by running in sequence:
//! 1. Name: case-insensitive username substring
//! 2. Seniority: OR across selected score-derived bands
//! 3. Language: AND across selected languages (each one is a required skill)
//! 4. Favorites: membership check, only in favorites-only mode
//!
//! Filters are pure functions of (candidates, context); the composition
//! layer recomputes the filtered list whenever any input changes.
//!
//! ## Example Usage
//! ```ignore
//! use screening::{FilterPipeline, FilterState, ScreeningContext};
//!
//! let mut state = FilterState::new();
//! state.toggle_language("Rust");
//!
//! let context = ScreeningContext::from_state(&state, &favorites);
//! let filtered = FilterPipeline::standard().apply(candidates, &context);
//! ```

pub mod context;
pub mod filter_pipeline;
pub mod filters;
pub mod state;
pub mod traits;

// Re-export main types
pub use context::ScreeningContext;
pub use filter_pipeline::FilterPipeline;
pub use state::FilterState;
pub use traits::Filter;
