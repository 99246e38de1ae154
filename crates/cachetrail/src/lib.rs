//! cachetrail - an instrumented key-value cache facade.
//!
//! `InstrumentedCache` stores values under generated keys in a backing store
//! and records how often `store` was called and with what arguments. The
//! recorded trail can be printed with [`replay::replay`].

pub mod cache;
pub mod cli;
pub mod config;
pub mod output;
pub mod replay;
pub mod store;

pub use cache::InstrumentedCache;
pub use cachetrail_core::cache::{CacheError, Key, Result, StoredValue, STORE_METHOD};
pub use config::Config;
