//! # Candidate Store Crate
//!
//! This crate handles loading and holding the candidate list fetched from
//! the external data source.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Candidate, Skill, SeniorityBand)
//! - **parser**: Parse candidate JSON into Rust structs
//! - **store**: The CandidateStore that owns the list for a session
//! - **error**: Error types for loading and validation
//!
//! ## Example Usage
//!
//! ```ignore
//! use candidate_store::CandidateStore;
//! use std::path::Path;
//!
//! let store = CandidateStore::load_from_file(Path::new("data/candidates.json"))?;
//!
//! let ada = store.get("ada").unwrap();
//! println!("{} scored {}", ada.username, ada.score);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use store::CandidateStore;
pub use types::{Candidate, SeniorityBand, Skill, SkillLevel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = CandidateStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get("anyone").is_none());
    }
}
