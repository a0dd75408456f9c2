//! Storage implementations - JSON file and in-memory fallback.

mod file;
mod memory;
mod posts;

pub use file::FileStore;
pub use memory::InMemoryStore;
pub use posts::StoragePostStore;
