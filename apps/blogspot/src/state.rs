//! Application state - the session every command runs against.

use std::sync::Arc;

use blogspot_core::pagination::Pagination;
use blogspot_core::ports::{KeyValueStore, PostStore};
use blogspot_core::{AdminSession, PostRepository};
use blogspot_infra::{FileStore, InMemoryStore, StoragePostStore, SystemClock};

use crate::config::AppConfig;

/// Wire storage, clock and repository into an [`AdminSession`].
pub async fn build_session(config: &AppConfig) -> AdminSession {
    let storage: Arc<dyn KeyValueStore> = if config.uses_memory_store() {
        tracing::info!("Using in-memory storage; changes are discarded on exit");
        Arc::new(InMemoryStore::new())
    } else {
        tracing::debug!(path = %config.data_file.display(), "Using file storage");
        Arc::new(FileStore::new(&config.data_file))
    };

    let posts: Arc<dyn PostStore> = Arc::new(StoragePostStore::new(storage));
    let repo = PostRepository::init(posts, Arc::new(SystemClock)).await;

    tracing::info!(posts = repo.len(), "Application state initialized");

    AdminSession::with_pagination(repo, Pagination::new(config.page_size))
}
