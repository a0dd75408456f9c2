//! In-memory key-value store - used by tests and as a fallback when no data file is usable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogspot_core::StoreError;
use blogspot_core::ports::KeyValueStore;

/// In-memory store using a simple HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Start with `key` already holding `value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut map = HashMap::new();
        map.insert(key.to_string(), value.to_string());
        Self {
            store: RwLock::new(map),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        let store = self.store.read().await;
        store.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
