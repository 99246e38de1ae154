//! Redis store implementation.
//!
//! Each primitive maps to exactly one Redis command (`SET`, `GET`, `INCR`,
//! `RPUSH`, `LRANGE`, `EXISTS`, `FLUSHDB`), so each inherits Redis's own
//! atomicity. Access to the connection is serialized by a mutex.

use parking_lot::Mutex;
use redis::Commands;

use cachetrail_core::cache::{BackingStore, Result};

use super::error::map_redis_error;

/// Redis backing store over a single synchronous connection.
pub struct RedisStore {
    conn: Mutex<redis::Connection>,
}

impl RedisStore {
    /// Opens a Redis connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379/0")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be established.
    pub fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = client.get_connection().map_err(map_redis_error)?;
        tracing::debug!(url, "Connected to Redis");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl BackingStore for RedisStore {
    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.conn
            .lock()
            .set::<_, _, ()>(key, value)
            .map_err(map_redis_error)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.conn
            .lock()
            .get::<_, Option<Vec<u8>>>(key)
            .map_err(map_redis_error)
    }

    fn increment(&self, key: &str) -> Result<i64> {
        self.conn
            .lock()
            .incr::<_, _, i64>(key, 1)
            .map_err(map_redis_error)
    }

    fn append(&self, key: &str, value: &[u8]) -> Result<usize> {
        self.conn
            .lock()
            .rpush::<_, _, usize>(key, value)
            .map_err(map_redis_error)
    }

    fn range(&self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        self.conn
            .lock()
            .lrange::<_, Vec<Vec<u8>>>(key, start, stop)
            .map_err(map_redis_error)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        self.conn
            .lock()
            .exists::<_, bool>(key)
            .map_err(map_redis_error)
    }

    fn clear(&self) -> Result<()> {
        let mut conn = self.conn.lock();
        redis::cmd("FLUSHDB")
            .query::<()>(&mut *conn)
            .map_err(map_redis_error)
    }
}
