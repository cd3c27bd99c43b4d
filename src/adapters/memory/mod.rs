//! In-memory adapters for tests.

mod forum_store;

pub use forum_store::InMemoryForumStore;
