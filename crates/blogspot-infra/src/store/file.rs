//! JSON-file key-value store - the on-disk stand-in for browser local storage.
//!
//! The whole store is one JSON object (`{"key": "value", ...}`). Every write
//! rewrites the file through a temporary sibling and a rename, so readers
//! never observe a half-written file. Nothing guards against a second
//! process writing the same file: last write wins.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use blogspot_core::StoreError;
use blogspot_core::ports::KeyValueStore;

type Entries = BTreeMap<String, String>;

pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_entries(&self) -> Result<Entries, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Entries::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(StoreError::Io(format!("{}: {e}", self.path.display()))),
        }
    }

    /// Entries to start a write from. A corrupt file is replaced rather than
    /// blocking every future write.
    async fn entries_for_write(&self) -> Result<Entries, StoreError> {
        match self.read_entries().await {
            Ok(entries) => Ok(entries),
            Err(StoreError::Serialization(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Replacing corrupt store file");
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        let io_err = |e: std::io::Error| StoreError::Io(format!("{}: {e}", self.path.display()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let body = serde_json::to_string_pretty(entries)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, body).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        match self.read_entries().await {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), key = %key, error = %e, "Store read failed");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }
}
