// SPDX-License-Identifier: MPL-2.0
//! Directory-backed store, one file per key.
//!
//! Each key maps to a single file under the store's base directory holding
//! exactly the raw stored string. The directory is created on first write,
//! so constructing a store for a directory that does not exist yet is fine.

use super::Store;
use crate::error::Result;
use crate::paths;
use std::fs;
use std::path::PathBuf;

/// Extension used for entry files. Stored strings are JSON documents.
const ENTRY_EXT: &str = "json";

/// A store that keeps each entry in its own file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    ///
    /// The directory is not created until the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store in the platform data directory for `app_name`.
    ///
    /// Resolution follows [`paths::data_dir`]: the `STATEKIT_DATA_DIR`
    /// environment variable takes precedence over the platform default.
    /// Returns `None` if no data directory can be determined.
    pub fn for_app(app_name: &str) -> Option<Self> {
        paths::data_dir(app_name).map(Self::new)
    }

    /// Returns the base directory of this store.
    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// Returns the file path holding the entry for `key`.
    ///
    /// Keys are sanitized to a filesystem-safe form: any character outside
    /// `[A-Za-z0-9._-]` is replaced with `-`. Distinct keys that sanitize to
    /// the same name share a slot, so callers should stick to plain
    /// identifier-style keys.
    fn entry_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.{ENTRY_EXT}"))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                // Unreadable entries count as absent; the caller falls back
                // to its default value.
                log::debug!("failed to read store entry {}: {err}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_key_is_absent() {
        let dir = tempdir().expect("create temp dir");
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("nope"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempdir().expect("create temp dir");
        let mut store = FileStore::new(dir.path());

        store.set("window-layout", "{\"cols\":2}").expect("set");
        assert_eq!(store.get("window-layout"), Some("{\"cols\":2}".to_string()));
    }

    #[test]
    fn set_creates_missing_directories() {
        let dir = tempdir().expect("create temp dir");
        let nested = dir.path().join("nested").join("deeply");
        let mut store = FileStore::new(&nested);

        store.set("key", "value").expect("set");
        assert!(nested.exists());
        assert_eq!(store.get("key"), Some("value".to_string()));
    }

    #[test]
    fn entries_survive_a_fresh_store_for_the_same_directory() {
        let dir = tempdir().expect("create temp dir");

        {
            let mut store = FileStore::new(dir.path());
            store.set("key", "persisted").expect("set");
        }

        let store = FileStore::new(dir.path());
        assert_eq!(store.get("key"), Some("persisted".to_string()));
    }

    #[test]
    fn hostile_key_characters_are_sanitized() {
        let dir = tempdir().expect("create temp dir");
        let mut store = FileStore::new(dir.path());

        store.set("a/b:c", "value").expect("set");
        assert_eq!(store.get("a/b:c"), Some("value".to_string()));
        // The entry must not have escaped the base directory.
        assert!(dir.path().join("a-b-c.json").exists());
    }
}
