//! In-memory backing store.
//!
//! Provides a thread-safe store for single-process use and tests.

mod store;

pub use store::MemoryStore;
