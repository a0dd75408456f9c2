//! In-crate test doubles for the storage and clock ports.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Post, PostDate};
use crate::error::StoreError;
use crate::ports::{Clock, PostStore};

#[derive(Default)]
pub(crate) struct MemoryPostStore {
    posts: Mutex<Vec<Post>>,
    saves: Mutex<usize>,
}

impl MemoryPostStore {
    pub(crate) fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            saves: Mutex::new(0),
        }
    }

    pub(crate) fn saved(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn load(&self) -> Vec<Post> {
        self.saved()
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        *self.posts.lock().unwrap() = posts.to_vec();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

pub(crate) struct FailingStore;

#[async_trait]
impl PostStore for FailingStore {
    async fn load(&self) -> Vec<Post> {
        Vec::new()
    }

    async fn save(&self, _posts: &[Post]) -> Result<(), StoreError> {
        Err(StoreError::Io("quota exceeded".to_string()))
    }
}

pub(crate) struct FixedClock {
    millis: i64,
    today: PostDate,
}

impl FixedClock {
    pub(crate) fn new(millis: i64, today: PostDate) -> Self {
        Self { millis, today }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(0, PostDate::ymd(2026, 10, 17))
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn today(&self) -> PostDate {
        self.today.clone()
    }
}
