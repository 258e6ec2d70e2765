use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const FAVOURITES_KEY: &str = "streambox_favourites";
pub const WATCH_LATER_KEY: &str = "streambox_watch_later";
pub const THEME_KEY: &str = "streambox_theme";
pub const USER_KEY: &str = "streambox_user";

/// Every key the application persists
pub const ALL_KEYS: [&str; 4] = [FAVOURITES_KEY, WATCH_LATER_KEY, THEME_KEY, USER_KEY];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    /// The entry exists but its bytes are not text
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, StorageError::Io { source, .. } if source.kind() == std::io::ErrorKind::InvalidData)
    }
}

/// Raw string storage keyed by name
///
/// Backends know nothing about JSON; [`Storage`] layers serialization and
/// corruption handling on top.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing an absent key is not an error
    fn delete(&self, key: &str) -> Result<(), StorageError>;
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// One `<key>.json` file per key inside a directory
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| io_error(key, e))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| io_error(key, e))?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value).map_err(|e| io_error(key, e))?;
        std::fs::rename(&temp_path, &path).map_err(|e| io_error(key, e))?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = std::fs::read_dir(&self.dir).map_err(|e| io_error("*", e))?;
        let mut keys = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| io_error("*", e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// In-process storage, lost when the process exits
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys: Vec<String> = self.entries().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// JSON key-value persistence shared by collections, theme and session
///
/// Cloning is cheap; every clone talks to the same backend.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
}

impl Storage {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileBackend::new(dir)))
    }

    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Serialize `value` and store it under `key`, replacing any previous value
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string_pretty(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.write(key, &json)?;
        debug!("Storage saved: {} ({} bytes)", key, json.len());
        Ok(())
    }

    /// Read and deserialize the value under `key`
    ///
    /// Never returns a corrupt value: data that fails to deserialize is
    /// deleted and reported as absent.
    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Storage miss: {}", key);
                return None;
            }
            Err(e) if e.is_corrupt_data() => {
                self.discard_corrupt(key, &e);
                return None;
            }
            Err(e) => {
                warn!("Failed to read storage entry {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                self.discard_corrupt(key, &e);
                None
            }
        }
    }

    fn discard_corrupt(&self, key: &str, reason: &dyn std::fmt::Display) {
        warn!(
            "Storage corruption detected for {}: {}. Deleting corrupted entry.",
            key, reason
        );
        if let Err(rm_err) = self.backend.delete(key) {
            warn!("Failed to delete corrupted storage entry {}: {}", key, rm_err);
        }
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.delete(key)?;
        debug!("Storage removed: {}", key);
        Ok(())
    }

    /// Raw stored text, bypassing deserialization
    pub fn read_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend.read(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        matches!(self.backend.read(key), Ok(Some(_)))
    }

    /// Remove every application key, returning how many were present
    pub fn clear(&self) -> Result<usize, StorageError> {
        let present = self.backend.keys()?;
        let mut removed = 0;
        for key in ALL_KEYS {
            if present.iter().any(|k| k == key) {
                self.backend.delete(key)?;
                removed += 1;
            }
        }
        info!("Cleared {} storage entr{}", removed, if removed == 1 { "y" } else { "ies" });
        Ok(removed)
    }
}
