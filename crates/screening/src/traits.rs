//! Core traits for the screening pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate lists.

use crate::context::ScreeningContext;
use candidate_store::Candidate;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filters are pure: no filter input is ever "invalid", so `apply` is
///   infallible and side-effect free
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - Snapshot of the active filter values and favorites
    ///
    /// # Returns
    /// The candidates that pass this filter, original order preserved
    fn apply(&self, candidates: Vec<Candidate>, context: &ScreeningContext) -> Vec<Candidate>;
}
