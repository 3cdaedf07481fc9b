//! Local history of messages sent to candidates.
//!
//! Sent messages are appended to a JSON array under a fixed key, the same
//! shape the application keeps in browser storage. History reads come back
//! most-recent-first. Malformed persisted data degrades to an empty history
//! with a warning.

use crate::error::MessageError;
use crate::storage::KeyValueStore;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fixed storage key for the sent-message history.
pub const MESSAGES_KEY: &str = "sentMessages";

/// Roles the message form accepts.
pub const ALLOWED_ROLES: &[&str] = &["Frontend", "Backend", "Fullstack", "DBA"];

/// A message as recorded in local history after a successful send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub role: String,
    pub email: String,
    pub message: String,
    pub username: String,
    /// ISO-8601 timestamp; lexicographic order matches chronological order
    pub submitted_at: String,
    pub status: String,
}

/// An unsent message being composed for a candidate.
#[derive(Debug, Clone, Default)]
pub struct MessageDraft {
    pub role: String,
    pub email: String,
    pub message: String,
}

impl MessageDraft {
    /// True when every field has content (drives the form's submit button).
    pub fn is_complete(&self) -> bool {
        !self.role.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Validate the draft before sending.
    pub fn validate(&self) -> Result<(), MessageError> {
        if self.role.trim().is_empty() {
            return Err(MessageError::EmptyField { field: "role" });
        }
        if self.email.trim().is_empty() {
            return Err(MessageError::EmptyField { field: "email" });
        }
        if self.message.trim().is_empty() {
            return Err(MessageError::EmptyField { field: "message" });
        }
        if !ALLOWED_ROLES.contains(&self.role.as_str()) {
            return Err(MessageError::InvalidRole {
                role: self.role.clone(),
            });
        }
        // Minimal shape check; full validation belongs to the server
        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(MessageError::InvalidEmail {
                email: email.to_string(),
            });
        }
        Ok(())
    }

    /// Turn the draft into a history entry for `username`, stamped now.
    pub fn into_sent(self, username: &str) -> SentMessage {
        SentMessage {
            role: self.role,
            email: self.email,
            message: self.message,
            username: username.to_string(),
            submitted_at: Utc::now().to_rfc3339(),
            status: "received".to_string(),
        }
    }
}

/// Persisted log of sent messages.
#[derive(Debug)]
pub struct MessageLog<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> MessageLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a message to the history and persist it.
    ///
    /// An unreadable or malformed existing history degrades to empty, so
    /// the new message is never lost to someone else's corruption.
    pub fn append(&mut self, message: SentMessage) {
        let mut messages = self.read_raw();
        messages.push(message);

        match serde_json::to_string(&messages) {
            Ok(raw) => {
                if let Err(err) = self.store.set(MESSAGES_KEY, &raw) {
                    warn!("Failed to persist sent messages: {}", err);
                }
            }
            Err(err) => warn!("Failed to serialize sent messages: {}", err),
        }
    }

    /// The sent-message history, most recent first.
    pub fn load(&self) -> Vec<SentMessage> {
        let mut messages = self.read_raw();
        messages.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        messages
    }

    fn read_raw(&self) -> Vec<SentMessage> {
        let stored = match self.store.get(MESSAGES_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                warn!("Failed to read sent messages: {}", err);
                return Vec::new();
            }
        };

        let Some(raw) = stored else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(messages) => messages,
            Err(err) => {
                warn!("Malformed sent-message data, starting empty: {}", err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn sent(username: &str, submitted_at: &str) -> SentMessage {
        SentMessage {
            role: "Backend".to_string(),
            email: "recruiter@example.com".to_string(),
            message: "Hi!".to_string(),
            username: username.to_string(),
            submitted_at: submitted_at.to_string(),
            status: "received".to_string(),
        }
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = MessageDraft::default();
        assert!(!draft.is_complete());

        draft.role = "Backend".to_string();
        draft.email = "recruiter@example.com".to_string();
        draft.message = "   ".to_string();
        assert!(!draft.is_complete());

        draft.message = "Hi!".to_string();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_draft_validation() {
        let draft = MessageDraft {
            role: "Backend".to_string(),
            email: "recruiter@example.com".to_string(),
            message: "Hi!".to_string(),
        };
        assert!(draft.validate().is_ok());

        let bad_role = MessageDraft {
            role: "Wizard".to_string(),
            ..draft.clone()
        };
        assert_eq!(
            bad_role.validate(),
            Err(MessageError::InvalidRole {
                role: "Wizard".to_string()
            })
        );

        let bad_email = MessageDraft {
            email: "not-an-address".to_string(),
            ..draft.clone()
        };
        assert!(matches!(
            bad_email.validate(),
            Err(MessageError::InvalidEmail { .. })
        ));

        let empty = MessageDraft {
            message: "  ".to_string(),
            ..draft
        };
        assert_eq!(
            empty.validate(),
            Err(MessageError::EmptyField { field: "message" })
        );
    }

    #[test]
    fn test_into_sent_stamps_metadata() {
        let draft = MessageDraft {
            role: "DBA".to_string(),
            email: "recruiter@example.com".to_string(),
            message: "Hello".to_string(),
        };

        let message = draft.into_sent("ada");
        assert_eq!(message.username, "ada");
        assert_eq!(message.status, "received");
        assert!(!message.submitted_at.is_empty());
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut log = MessageLog::new(MemoryStore::new());
        log.append(sent("ada", "2024-01-01T10:00:00Z"));
        log.append(sent("grace", "2024-03-01T10:00:00Z"));
        log.append(sent("alan", "2024-02-01T10:00:00Z"));

        let history = log.load();
        let usernames: Vec<&str> = history.iter().map(|m| m.username.as_str()).collect();
        assert_eq!(usernames, ["grace", "alan", "ada"]);
    }

    #[test]
    fn test_malformed_history_degrades_to_empty() {
        let mut store = MemoryStore::new();
        store.set(MESSAGES_KEY, "[{broken").unwrap();

        let mut log = MessageLog::new(store);
        assert!(log.load().is_empty());

        // Appending over corrupted data starts a fresh history
        log.append(sent("ada", "2024-01-01T10:00:00Z"));
        assert_eq!(log.load().len(), 1);
    }
}
