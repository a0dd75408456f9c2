//! # Blog Spot Infrastructure
//!
//! Concrete implementations of the ports defined in `blogspot-core`:
//! key-value storage (JSON file, in-memory), the post store adapter on top
//! of it, and the system clock.

pub mod clock;
pub mod store;

pub use clock::SystemClock;
pub use store::{FileStore, InMemoryStore, StoragePostStore};
