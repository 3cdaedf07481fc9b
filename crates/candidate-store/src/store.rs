//! The candidate store: owns the raw list fetched from the data source.
//!
//! The store holds candidates exactly as fetched, in source order. It does
//! no filtering; downstream layers consume `candidates()` and derive their
//! own views. The list is replaced wholesale on refetch.

use crate::error::{Result, StoreError};
use crate::parser;
use crate::types::Candidate;
use std::collections::HashMap;
use std::path::Path;

/// Owns the candidate list for one session.
#[derive(Debug, Default)]
pub struct CandidateStore {
    candidates: Vec<Candidate>,
    // Secondary index for O(1) username lookups
    by_username: HashMap<String, usize>,
}

impl CandidateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON candidate file.
    ///
    /// Steps:
    /// 1. Parse the JSON array
    /// 2. Validate usernames (non-empty, unique)
    /// 3. Build the username index
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let candidates = parser::parse_candidates(path)?;
        let mut store = Self::new();
        store.replace_all(candidates)?;
        Ok(store)
    }

    /// Replace the entire candidate list (refetch semantics).
    ///
    /// Validation failures leave the store unchanged.
    pub fn replace_all(&mut self, candidates: Vec<Candidate>) -> Result<()> {
        let by_username = validate_candidates(&candidates)?;
        self.candidates = candidates;
        self.by_username = by_username;
        Ok(())
    }

    /// All candidates in original source order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Look up a candidate by username.
    pub fn get(&self, username: &str) -> Option<&Candidate> {
        self.by_username
            .get(username)
            .map(|&idx| &self.candidates[idx])
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Check username invariants and build the lookup index.
fn validate_candidates(candidates: &[Candidate]) -> Result<HashMap<String, usize>> {
    let mut by_username = HashMap::with_capacity(candidates.len());

    for (position, candidate) in candidates.iter().enumerate() {
        if candidate.username.trim().is_empty() {
            return Err(StoreError::EmptyUsername { position });
        }
        if by_username
            .insert(candidate.username.clone(), position)
            .is_some()
        {
            return Err(StoreError::DuplicateUsername {
                username: candidate.username.clone(),
            });
        }
    }

    Ok(by_username)
}
