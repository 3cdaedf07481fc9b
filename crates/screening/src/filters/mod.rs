//! Filter implementations for the candidate screening pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod favorites;
pub mod language;
pub mod name;
pub mod seniority;

// Re-export for convenience
pub use favorites::FavoritesFilter;
pub use language::LanguageFilter;
pub use name::NameFilter;
pub use seniority::SeniorityFilter;
