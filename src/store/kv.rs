//! Key-value backends for the credential store.

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by persistent stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Minimal string key-value store, shaped like browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or replace a value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Process-local store. Used by tests and one-shot sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|r| r.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object on disk, rewritten on every mutation.
#[derive(Debug)]
pub struct FileStore {
    inner: DashMap<String, String>,
    path: PathBuf,
}

impl FileStore {
    /// Open the store at `path`, loading existing entries if the file exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let inner = DashMap::new();
        if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            let map: BTreeMap<String, String> = serde_json::from_reader(reader)?;
            for (k, v) in map {
                inner.insert(k, v);
            }
            tracing::debug!(path = %path.display(), entries = inner.len(), "Loaded store file");
        }
        Ok(Self { inner, path })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let map: BTreeMap<_, _> = self
            .inner
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        let mut writer = BufWriter::new(open_private(&self.path)?);
        serde_json::to_writer(&mut writer, &map)?;
        writer.flush()?;
        Ok(())
    }
}

/// Create or truncate `path` for writing, owner-only on unix.
fn open_private(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|r| r.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if self.inner.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_operations() {
        let store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));

        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("2"));

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_persistence() {
        let path = std::env::temp_dir().join("wallet_dashboard_test_store.json");
        let _ = std::fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        store.set("mywallet-username", "alice").unwrap();
        store.set("mywallet-password", "secret").unwrap();
        store.remove("mywallet-password").unwrap();

        let loaded = FileStore::open(&path).unwrap();
        assert_eq!(loaded.get("mywallet-username").as_deref(), Some("alice"));
        assert!(loaded.get("mywallet-password").is_none());

        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_file_store_reports_write_failure() {
        let store = FileStore {
            inner: DashMap::new(),
            path: PathBuf::from("/dev/full"),
        };

        let result = store.set("mywallet-username", "alice");
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test]
    #[cfg(unix)]
    fn test_file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let path = std::env::temp_dir().join("wallet_dashboard_test_mode.json");
        let _ = std::fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        store.set("mywallet-password", "secret").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let path = std::env::temp_dir().join("wallet_dashboard_test_garbage.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Format(_))));

        std::fs::remove_file(&path).unwrap_or_default();
    }
}
