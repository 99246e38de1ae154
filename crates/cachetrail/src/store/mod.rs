//! Backing store implementations.
//!
//! This module provides concrete implementations of the `BackingStore`
//! trait defined in `cachetrail_core::cache`. The implementations are
//! selected via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-memory store guarded by a `parking_lot` lock
//! - `redis` (default): Redis store using the redis crate

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No backing store selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p cachetrail --features memory"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(feature = "memory")]
pub use memory::MemoryStore;

#[cfg(feature = "redis")]
pub use redis_impl::RedisStore;
