//! # Local Store Crate
//!
//! Local persistence for recruiter-side state: the favorites registry and
//! the sent-message history, backed by a synchronous key-value contract.
//!
//! ## Main Components
//!
//! - **storage**: `KeyValueStore` trait plus `MemoryStore` and `FileStore`
//! - **favorites**: `FavoritesRegistry`, a lazily loaded, persisted set of
//!   favorited usernames
//! - **messages**: `MessageDraft` validation, `SentMessage`, and the
//!   persisted `MessageLog`
//! - **error**: storage and validation error types
//!
//! ## Error Philosophy
//! Reads degrade: missing or malformed persisted data becomes an empty
//! collection plus a `tracing` warning, never an error the presentation
//! layer has to handle. Write failures are logged and swallowed the same
//! way; the in-memory state stays authoritative for the session.

pub mod error;
pub mod favorites;
pub mod messages;
pub mod storage;

// Re-export commonly used types
pub use error::{MessageError, Result, StorageError};
pub use favorites::{FavoritesRegistry, FAVORITES_KEY};
pub use messages::{MessageDraft, MessageLog, SentMessage, ALLOWED_ROLES, MESSAGES_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
