// Storage module - string key/value persistence
//
// Stands in for browser local storage: a flat map of string keys to string
// values. The file-backed store keeps the whole map as one JSON object and
// rewrites it on every mutation, so the file is always a complete snapshot.
//
// Example file (~/.local/share/purrshop/local_storage.json):
//   {"sonu_user":"{\"id\":\"u1\",\"name\":\"Sonu\",\"email\":\"sonu@example.com\"}"}

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from the local store
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    Io(io::Error),
    /// The backing file exists but is not a JSON object of strings
    Corrupt(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Storage I/O error: {}", e),
            Self::Corrupt(msg) => write!(f, "Storage file is corrupt: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Key/value persistence, the local-storage contract
pub trait LocalStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store (tests, and fallback when the data dir is unusable)
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, loading existing entries
    ///
    /// A missing file is an empty store. A corrupt file is reported so the
    /// caller can decide whether to start fresh.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| StorageError::Corrupt(e.to_string()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            "Opened local store {} ({} keys)",
            path.display(),
            entries.len()
        );

        Ok(Self { path, entries })
    }

    /// Open the store, discarding a corrupt file instead of failing
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        match Self::open(&path) {
            Err(StorageError::Corrupt(msg)) => {
                tracing::warn!(
                    "Local store {} is corrupt ({}), starting empty",
                    path.display(),
                    msg
                );
                let store = Self {
                    path,
                    entries: BTreeMap::new(),
                };
                store.write_snapshot(&store.entries)?;
                Ok(store)
            }
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` as the complete file contents
    fn write_snapshot(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    // Memory only changes once the file has the new contents, so a failed
    // write leaves both in the old state

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value);
        self.write_snapshot(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.write_snapshot(&next)?;
        self.entries = next;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Unique scratch path under the system temp dir
    pub(crate) fn scratch_path(name: &str) -> PathBuf {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir()
            .join(format!("purrshop-test-{}-{}-{}", name, std::process::id(), nanos))
            .join("local_storage.json")
    }

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v".into()).unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let path = scratch_path("persist");
        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("sonu_user", "{}".into()).unwrap();
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("sonu_user").as_deref(), Some("{}"));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn file_store_remove_persists() {
        let path = scratch_path("remove");
        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1".into()).unwrap();
        store.remove("a").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a"), None);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn failed_write_leaves_memory_unchanged() {
        // A directory at the file path makes every write fail
        let path = scratch_path("unwritable");
        fs::create_dir_all(&path).unwrap();
        let mut store = FileStore {
            path: path.clone(),
            entries: BTreeMap::from([("sonu_user".to_string(), "{}".to_string())]),
        };
        assert_eq!(store.path(), path.as_path());

        assert!(matches!(store.remove("sonu_user"), Err(StorageError::Io(_))));
        assert_eq!(store.get("sonu_user").as_deref(), Some("{}"));

        assert!(store.set("other", "1".into()).is_err());
        assert_eq!(store.get("other"), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_is_reported_then_reset() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json at all").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(StorageError::Corrupt(_))
        ));

        let store = FileStore::open_or_reset(&path).unwrap();
        assert_eq!(store.get("anything"), None);
        assert!(FileStore::open(&path).is_ok());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
