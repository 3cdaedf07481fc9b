//! Parser for candidate data files.
//!
//! Candidates arrive as a JSON array, the same shape the application's
//! one-shot `/userlist` fetch returns:
//!
//! ```json
//! [
//!   {
//!     "username": "ada",
//!     "joined_at": "2023-04-01",
//!     "skills": [{ "language": "Rust", "level": "advanced" }],
//!     "score": 1280
//!   }
//! ]
//! ```

use crate::error::{Result, StoreError};
use crate::types::Candidate;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a JSON candidate file into a list of candidates.
///
/// The file is read eagerly; the returned list is validated by the caller
/// (see `CandidateStore::replace_all` / `validate_candidates`).
pub fn parse_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let file = File::open(path).map_err(|_| StoreError::FileNotFound {
        path: path.display().to_string(),
    })?;
    let reader = BufReader::new(file);

    let candidates: Vec<Candidate> =
        serde_json::from_reader(reader).map_err(|err| StoreError::ParseError {
            file: path.display().to_string(),
            reason: err.to_string(),
        })?;

    Ok(candidates)
}

/// Parse candidates from an in-memory JSON string.
///
/// Used when the list comes from a network response rather than a file.
pub fn parse_candidates_str(data: &str) -> Result<Vec<Candidate>> {
    serde_json::from_str(data).map_err(|err| StoreError::ParseError {
        file: "<inline>".to_string(),
        reason: err.to_string(),
    })
}
