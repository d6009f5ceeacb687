//! Persistence of the selected theme.
//!
//! [`FileStorage`] keeps a flat JSON object of string keys and values, so the
//! same file can hold entries for several applications. [`MemoryStorage`]
//! keeps them in memory.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

use super::error::StorageError;

/// A string key/value store for the selected theme.
pub trait ThemeStorage: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: ThemeStorage + ?Sized> ThemeStorage for Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).store(key, value)
    }
}

/// In-memory storage, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.lock().insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a JSON object file.
///
/// A missing file reads as empty. Writes rewrite the whole file, keeping
/// the entries of other keys.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let source = match std::fs::read_to_string(&self.path) {
            Ok(source) => source,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        if source.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&source).map_err(|source| StorageError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ThemeStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    error = %err,
                    path = %self.path.display(),
                    "replacing unreadable theme storage"
                );
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(&entries).map_err(|source| StorageError::Format {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new().with_entry("k", "v");
        assert_eq!(storage.load("k").unwrap().as_deref(), Some("v"));
        storage.store("k", "w").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("w"));
        assert_eq!(storage.load("other").unwrap(), None);
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.load("merza-theme").unwrap(), None);
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"other": "1"}"#).unwrap();

        let storage = FileStorage::new(&path);
        storage.store("merza-theme", "dark-theme").unwrap();

        assert_eq!(storage.load("merza-theme").unwrap().as_deref(), Some("dark-theme"));
        assert_eq!(storage.load("other").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_file_storage_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("a/b/storage.json"));
        storage.store("k", "v").unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_file_storage_overwrites_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(&path);
        storage.store("merza-theme", "light").unwrap();
        assert_eq!(storage.load("merza-theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        let err = FileStorage::new(&path).load("k").unwrap_err();
        assert!(matches!(err, StorageError::Format { .. }));
    }
}
