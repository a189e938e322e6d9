//! Durable key-value persistence for the trip companion.
//!
//! The application's durable state lives in named slots with plain get/set
//! semantics. The production backend keeps one JSON file per slot inside the
//! tabi home directory; tests use an in-memory backend.

use crate::Result;
use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A process-wide durable key-value slot store.
///
/// `get` returns `None` when the slot has never been written. Implementations
/// must make a completed `set` visible to a subsequent `get` for the same key.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: each key is a `<key>.json` file under `root`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context(format!("Unable to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        std::fs::write(&path, value).context(format!("Unable to write {}", path.display()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_returns_none_for_missing_slot() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("ledger").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.set("ledger", "[1,2,3]").unwrap();
        assert_eq!(store.get("ledger").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(dir.path().join("ledger.json").is_file());
    }

    #[test]
    fn set_replaces_the_whole_slot() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        store.set("ledger", "first").unwrap();
        store.set("ledger", "second").unwrap();
        assert_eq!(store.get("ledger").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn get_fails_when_root_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("missing-subdir"));
        // Missing file (not directory error) maps to None; writing must fail.
        assert!(store.get("ledger").unwrap().is_none());
        assert!(store.set("ledger", "x").is_err());
    }
}
