//! Post collection persisted as one JSON array under [`POSTS_KEY`].

use std::sync::Arc;

use async_trait::async_trait;

use blogspot_core::ports::{KeyValueStore, POSTS_KEY, PostStore};
use blogspot_core::{Post, StoreError};

pub struct StoragePostStore {
    storage: Arc<dyn KeyValueStore>,
}

impl StoragePostStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl PostStore for StoragePostStore {
    /// Entries are decoded one by one; an unreadable entry is skipped so the
    /// rest of the collection still loads.
    async fn load(&self) -> Vec<Post> {
        let Some(raw) = self.storage.get(POSTS_KEY).await else {
            tracing::debug!(key = POSTS_KEY, "No persisted posts");
            return Vec::new();
        };

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(key = POSTS_KEY, error = %e, "Ignoring unreadable persisted posts");
                return Vec::new();
            }
        };

        let total = entries.len();
        let posts: Vec<Post> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Post>(entry) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!(key = POSTS_KEY, index, error = %e, "Skipping unreadable persisted post");
                    None
                }
            })
            .collect();

        tracing::debug!(key = POSTS_KEY, count = posts.len(), total, "Loaded persisted posts");
        posts
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(posts)?;
        self.storage.set(POSTS_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use blogspot_core::domain::builtin_posts;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn save_then_load_returns_the_same_posts() {
        let store = StoragePostStore::new(Arc::new(InMemoryStore::new()));
        store.save(&builtin_posts()).await.unwrap();
        assert_eq!(store.load().await, builtin_posts());
    }

    #[tokio::test]
    async fn corrupt_blob_loads_empty() {
        let storage = Arc::new(InMemoryStore::with_entry(POSTS_KEY, "[{\"id\": \"oops\"}"));
        let store = StoragePostStore::new(storage);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn reads_browser_written_blob() {
        let raw = r#"[{"title":"Beta","author":"X","content":"Y","status":"Draft","id":1729123456789,"date":"10/17/2024"},
                      {"id":1,"title":"Changed","author":"Priya Sharma","date":"2023-10-15","status":"Published","content":"c"}]"#;
        let store = StoragePostStore::new(Arc::new(InMemoryStore::with_entry(POSTS_KEY, raw)));

        let posts = store.load().await;

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id.0, 1_729_123_456_789);
        assert_eq!(posts[0].date.to_string(), "10/17/2024");
        assert_eq!(posts[1].title, "Changed");
    }

    #[tokio::test]
    async fn blob_uses_documented_shape() {
        let storage = Arc::new(InMemoryStore::new());
        let store = StoragePostStore::new(storage.clone());
        store.save(&builtin_posts()[..1]).await.unwrap();

        let raw = storage.get(POSTS_KEY).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value[0];
        assert!(first["id"].is_u64());
        for field in ["title", "author", "content", "status", "date"] {
            assert!(first[field].is_string(), "{field} should be a string");
        }
    }

    #[tokio::test]
    async fn unreadable_entry_is_skipped_not_the_whole_blob() {
        let raw = r#"[{"id":1,"title":"Kept","author":"A","date":"17/10/2026","status":"Draft","content":"c"},
                      {"id":"two","title":"Broken","author":"B","date":"2024-01-01","status":"Draft","content":"c"},
                      {"id":3,"title":"Bad status","author":"C","date":"2024-01-01","status":"Archived","content":"c"},
                      {"id":4,"title":"Last","author":"D","date":"2024-01-02","status":"Published","content":"c"}]"#;
        let store = StoragePostStore::new(Arc::new(InMemoryStore::with_entry(POSTS_KEY, raw)));

        let posts = store.load().await;

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Kept", "Last"]);
        assert_eq!(posts[0].date.to_string(), "17/10/2026");
    }
}
