//! The favorites registry: a persisted set of favorited usernames.
//!
//! Favorites survive across sessions. The in-memory set is the read path;
//! the persisted copy (a JSON string array under a fixed key) is only a
//! durability backstop, written synchronously on every mutation. Loading is
//! lazy: nothing touches storage until the first read or toggle.
//!
//! Single-threaded, single-writer; no locking needed.

use crate::storage::KeyValueStore;
use std::collections::HashSet;
use tracing::warn;

/// Fixed storage key for the favorites set.
pub const FAVORITES_KEY: &str = "user_favorites";

/// Persisted set of favorite candidate usernames.
#[derive(Debug)]
pub struct FavoritesRegistry<S: KeyValueStore> {
    store: S,
    favorites: HashSet<String>,
    // False until the first access (lazy load)
    loaded: bool,
}

impl<S: KeyValueStore> FavoritesRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            favorites: HashSet::new(),
            loaded: false,
        }
    }

    /// The current favorites set, loading it from storage on first access.
    ///
    /// Missing, unreadable, or malformed persisted data degrades to an
    /// empty set with a warning; it never surfaces as an error.
    pub fn favorites(&mut self) -> &HashSet<String> {
        self.ensure_loaded();
        &self.favorites
    }

    /// O(1) membership check against the in-memory set.
    pub fn is_favorite(&mut self, username: &str) -> bool {
        self.ensure_loaded();
        self.favorites.contains(username)
    }

    /// Flip a username in or out of the favorites set and persist the
    /// full set.
    ///
    /// # Returns
    /// `true` when the username was added, `false` when it was removed.
    /// Callers use this to emit an "added to favorites" notification on
    /// add only.
    pub fn toggle(&mut self, username: &str) -> bool {
        self.ensure_loaded();

        let added = if self.favorites.remove(username) {
            false
        } else {
            self.favorites.insert(username.to_string());
            true
        };

        self.persist();
        added
    }

    fn ensure_loaded(&mut self) {
        if self.loaded {
            return;
        }
        self.favorites = self.load();
        self.loaded = true;
    }

    fn load(&self) -> HashSet<String> {
        let stored = match self.store.get(FAVORITES_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                warn!("Failed to read favorites, starting empty: {}", err);
                return HashSet::new();
            }
        };

        let Some(raw) = stored else {
            return HashSet::new();
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(usernames) => usernames.into_iter().collect(),
            Err(err) => {
                warn!("Malformed favorites data, starting empty: {}", err);
                HashSet::new()
            }
        }
    }

    fn persist(&mut self) {
        // Sorted for a deterministic on-disk representation
        let mut usernames: Vec<&String> = self.favorites.iter().collect();
        usernames.sort();

        let raw = match serde_json::to_string(&usernames) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Failed to serialize favorites: {}", err);
                return;
            }
        };

        if let Err(err) = self.store.set(FAVORITES_KEY, &raw) {
            warn!("Failed to persist favorites: {}", err);
        }
    }
}
