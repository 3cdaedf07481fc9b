//! Error types for the local-store crate.

use thiserror::Error;

/// Errors that can occur in a key-value store implementation
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O error occurred while reading or writing a key
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The store's backing directory could not be created
    #[error("Failed to create storage directory: {path}")]
    DirectoryError { path: String },
}

/// Errors produced while validating a message draft
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MessageError {
    /// A required field was empty or whitespace-only
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// The role is not one of the accepted values
    #[error("Role must be one of: Frontend, Backend, Fullstack, DBA (got '{role}')")]
    InvalidRole { role: String },

    /// The email doesn't look like an address
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },
}

/// Convenience type alias for storage Results in this crate
pub type Result<T> = std::result::Result<T, StorageError>;
