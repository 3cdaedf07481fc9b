//! The key-value persistence contract.
//!
//! Everything this application persists locally (favorites, sent messages)
//! goes through the `KeyValueStore` trait: a synchronous get/set/remove
//! surface shaped like browser local storage. Two implementations:
//!
//! - `MemoryStore`: HashMap-backed, for tests and ephemeral sessions
//! - `FileStore`: one file per key under a directory, for the CLI

use crate::error::{Result, StorageError};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Synchronous key-value storage, local-storage-shaped.
///
/// Keys are short fixed constants; values are JSON strings. Consumers treat
/// every call as atomic and degrade to defaults when a call fails.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store. Contents vanish with the session.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed store: each key becomes `<dir>/<key>.json`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|_| StorageError::DirectoryError {
            path: dir.display().to_string(),
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));

        store.set("key", "other").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("other"));

        store.remove("key").unwrap();
        assert_eq!(store.get("key").unwrap(), None);

        // Removing a missing key is a no-op
        store.remove("key").unwrap();
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!(
            "talent-board-test-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let mut store = FileStore::open(&dir).unwrap();

        assert_eq!(store.get("missing").unwrap(), None);

        store.set("favorites", "[\"ada\"]").unwrap();
        assert_eq!(
            store.get("favorites").unwrap().as_deref(),
            Some("[\"ada\"]")
        );

        store.remove("favorites").unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);
        store.remove("favorites").unwrap();

        fs::remove_dir_all(&dir).unwrap();
    }
}
