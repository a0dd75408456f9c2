//! Post repository - the authoritative in-memory collection.
//!
//! The collection is seeded once from the persisted store merged with the
//! built-in posts, and written back in full after every change. Storage
//! failures are logged and remembered but never undo the in-memory change.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Post, PostFields, PostId, builtin_posts, merge_seed};
use crate::ports::{Clock, PostStore};

pub struct PostRepository {
    posts: Vec<Post>,
    store: Arc<dyn PostStore>,
    clock: Arc<dyn Clock>,
    persist_error: Option<String>,
}

impl PostRepository {
    /// Load persisted posts, merge in the built-in set and sync the result.
    pub async fn init(store: Arc<dyn PostStore>, clock: Arc<dyn Clock>) -> Self {
        let persisted = store.load().await;
        let persisted_count = persisted.len();
        let posts = merge_seed(persisted, builtin_posts());

        tracing::info!(
            persisted = persisted_count,
            total = posts.len(),
            "Post repository initialized"
        );

        let mut repo = Self {
            posts,
            store,
            clock,
            persist_error: None,
        };
        repo.sync().await;
        repo
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The last persistence failure, cleared by the next successful sync.
    pub fn persistence_error(&self) -> Option<&str> {
        self.persist_error.as_deref()
    }

    /// Create a post with a fresh id and today's date.
    pub async fn add(&mut self, fields: PostFields) -> Post {
        let post = Post::new(self.next_id(), self.clock.today(), fields);
        tracing::debug!(post_id = %post.id, "Adding post");

        self.posts.push(post.clone());
        self.sync().await;
        post
    }

    /// Replace the editable fields of post `id`. Unknown ids are ignored.
    pub async fn update(&mut self, id: PostId, fields: PostFields) -> Option<Post> {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(post_id = %id, "Update ignored, post not found");
            return None;
        };

        post.apply(fields);
        let updated = post.clone();
        self.sync().await;
        Some(updated)
    }

    /// Delete post `id`. Unknown ids are ignored.
    pub async fn remove(&mut self, id: PostId) -> Option<Post> {
        let Some(index) = self.posts.iter().position(|p| p.id == id) else {
            tracing::debug!(post_id = %id, "Remove ignored, post not found");
            return None;
        };

        let removed = self.posts.remove(index);
        self.sync().await;
        Some(removed)
    }

    /// Drop every edit and go back to the built-in posts.
    pub async fn reset(&mut self) {
        tracing::info!("Resetting posts to the built-in set");
        self.posts = builtin_posts();
        self.sync().await;
    }

    /// Time-derived id, bumped past the largest existing id when needed.
    fn next_id(&self) -> PostId {
        let now = u64::try_from(self.clock.now_millis()).unwrap_or(0);
        match self.posts.iter().map(|p| p.id.0).max() {
            None => PostId(now.max(1)),
            Some(max) => match max.checked_add(1) {
                Some(after_max) => PostId(now.max(after_max)),
                None => self.smallest_free_id(),
            },
        }
    }

    /// Lowest unused id, for when nothing is left above the largest one.
    fn smallest_free_id(&self) -> PostId {
        let taken: HashSet<u64> = self.posts.iter().map(|p| p.id.0).collect();
        let free = (1..=u64::MAX)
            .find(|id| !taken.contains(id))
            .expect("Fewer posts than ids");
        PostId(free)
    }

    async fn sync(&mut self) {
        match self.store.save(&self.posts).await {
            Ok(()) => self.persist_error = None,
            Err(e) => {
                tracing::warn!(error = %e, posts = self.posts.len(), "Failed to persist posts");
                self.persist_error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PostDate, PostStatus};
    use crate::test_support::{FailingStore, FixedClock, MemoryPostStore};
    use pretty_assertions::assert_eq;

    fn fields(title: &str) -> PostFields {
        PostFields::new(title, "X", "Y", PostStatus::Draft)
    }

    async fn repo_with(store: Arc<MemoryPostStore>, clock: FixedClock) -> PostRepository {
        PostRepository::init(store, Arc::new(clock)).await
    }

    #[tokio::test]
    async fn init_seeds_and_syncs() {
        let store = Arc::new(MemoryPostStore::default());
        let repo = repo_with(store.clone(), FixedClock::default()).await;

        assert_eq!(repo.len(), 11);
        assert_eq!(store.saved().len(), 11);
    }

    #[tokio::test]
    async fn add_assigns_fresh_id_and_today() {
        let store = Arc::new(MemoryPostStore::default());
        let clock = FixedClock::new(1_700_000_000_000, PostDate::ymd(2026, 10, 17));
        let mut repo = repo_with(store.clone(), clock).await;

        let post = repo.add(fields("Beta")).await;

        assert_eq!(post.id, PostId(1_700_000_000_000));
        assert_eq!(post.date, PostDate::ymd(2026, 10, 17));
        assert_eq!(repo.len(), 12);
        assert!(store.saved().iter().any(|p| p.id == post.id));
    }

    #[tokio::test]
    async fn add_never_collides_when_clock_stands_still() {
        let store = Arc::new(MemoryPostStore::default());
        let mut repo = repo_with(store, FixedClock::new(5, PostDate::ymd(2026, 1, 1))).await;

        let mut ids = HashSet::new();
        for i in 0..5 {
            let post = repo.add(fields(&format!("post {i}"))).await;
            assert!(ids.insert(post.id));
        }
        let all: HashSet<_> = repo.posts().iter().map(|p| p.id).collect();
        assert_eq!(all.len(), repo.len());
    }

    #[tokio::test]
    async fn add_reuses_a_free_id_when_the_largest_id_is_maxed() {
        let mut maxed = builtin_posts().remove(0);
        maxed.id = PostId(u64::MAX);
        let store = Arc::new(MemoryPostStore::with_posts(vec![maxed]));
        let mut repo = repo_with(store, FixedClock::default()).await;

        let post = repo.add(fields("after max")).await;

        // Built-in ids 1..=11 are taken, so 12 is the lowest free one.
        assert_eq!(post.id, PostId(12));
        let all: HashSet<_> = repo.posts().iter().map(|p| p.id).collect();
        assert_eq!(all.len(), repo.len());
    }

    #[tokio::test]
    async fn update_preserves_id_and_date_and_is_idempotent() {
        let store = Arc::new(MemoryPostStore::default());
        let mut repo = repo_with(store, FixedClock::default()).await;
        let before = repo.get(PostId(3)).cloned().unwrap();
        let new_fields = PostFields::new("T", "A", "C", PostStatus::Published);

        let once = repo.update(PostId(3), new_fields.clone()).await.unwrap();
        let twice = repo.update(PostId(3), new_fields.clone()).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.id, before.id);
        assert_eq!(once.date, before.date);
        assert_eq!(once.fields(), new_fields);
    }

    #[tokio::test]
    async fn update_unknown_id_is_noop() {
        let store = Arc::new(MemoryPostStore::default());
        let mut repo = repo_with(store.clone(), FixedClock::default()).await;
        let saves = store.save_count();

        assert!(repo.update(PostId(999), fields("nope")).await.is_none());
        assert_eq!(store.save_count(), saves);
        assert_eq!(repo.posts(), builtin_posts().as_slice());
    }

    #[tokio::test]
    async fn remove_twice_is_noop_second_time() {
        let store = Arc::new(MemoryPostStore::default());
        let mut repo = repo_with(store, FixedClock::default()).await;

        assert!(repo.remove(PostId(2)).await.is_some());
        let after_first = repo.posts().to_vec();
        assert!(repo.remove(PostId(2)).await.is_none());
        assert_eq!(repo.posts(), after_first.as_slice());
    }

    #[tokio::test]
    async fn persisted_posts_override_builtin() {
        let mut changed = builtin_posts().remove(0);
        changed.title = "Changed".to_string();
        let store = Arc::new(MemoryPostStore::with_posts(vec![changed]));

        let repo = repo_with(store, FixedClock::default()).await;

        assert_eq!(repo.get(PostId(1)).unwrap().title, "Changed");
        assert_eq!(repo.len(), 11);
    }

    #[tokio::test]
    async fn save_failure_keeps_memory_state() {
        let mut repo =
            PostRepository::init(Arc::new(FailingStore), Arc::new(FixedClock::default())).await;
        assert!(repo.persistence_error().is_some());

        let post = repo.add(fields("kept")).await;
        assert!(repo.get(post.id).is_some());
    }

    #[tokio::test]
    async fn reset_restores_builtin() {
        let store = Arc::new(MemoryPostStore::default());
        let mut repo = repo_with(store.clone(), FixedClock::default()).await;
        repo.add(fields("extra")).await;
        repo.remove(PostId(1)).await;

        repo.reset().await;

        assert_eq!(repo.posts(), builtin_posts().as_slice());
        assert_eq!(store.saved(), builtin_posts());
    }
}
