//! Redis backing store.
//!
//! Delegates every primitive to a Redis server over a single synchronous
//! connection.

mod error;
mod store;

pub use error::map_redis_error;
pub use store::RedisStore;
