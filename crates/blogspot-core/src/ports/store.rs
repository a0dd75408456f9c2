use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Key under which the whole post collection is stored.
pub const POSTS_KEY: &str = "posts";

/// Key-value store trait - abstraction over local storage backends (file, in-memory).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value from the store. Unreadable entries read as missing.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Persistence of the full post collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Load every persisted post. Missing or corrupt data yields an empty list.
    async fn load(&self) -> Vec<Post>;

    /// Replace the persisted collection with `posts`.
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError>;
}
