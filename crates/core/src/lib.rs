//! Pure core of cachetrail - types, traits and middleware, no concrete I/O.
//!
//! This crate provides:
//! - The `BackingStore` primitive contract and the values that pass through it
//! - `CountingMiddleware` and `HistoryMiddleware` for instrumenting operations
//! - `CallHistory` for reading an instrumentation trail back
//!
//! Concrete stores and the `Cache` facade live in the `cachetrail` crate.

pub mod cache;
pub mod instrument;
pub mod replay;
