//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clock;
mod store;

pub use clock::Clock;
pub use store::{KeyValueStore, POSTS_KEY, PostStore};
