//! Error types for the candidate-store crate.

use thiserror::Error;

/// Errors that can occur while loading or validating candidate data
#[derive(Error, Debug)]
pub enum StoreError {
    /// Candidate file could not be found or opened
    #[error("Failed to open candidate file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Candidate JSON couldn't be deserialized
    #[error("Failed to parse candidate data in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// A candidate had an empty username
    #[error("Candidate at position {position} has an empty username")]
    EmptyUsername { position: usize },

    /// Two candidates share the same username
    #[error("Duplicate username: {username}")]
    DuplicateUsername { username: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
