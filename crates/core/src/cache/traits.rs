use super::Result;

/// Minimal primitive set a key-value store must offer to back a `Cache`.
///
/// Each primitive is expected to be atomic on its own. Nothing here groups
/// primitives into transactions.
pub trait BackingStore: Send + Sync {
    /// Sets `key` to `value`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Gets the raw bytes stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Atomically increments the integer counter at `key` and returns the new
    /// value. A missing counter starts at 0.
    fn increment(&self, key: &str) -> Result<i64>;

    /// Atomically appends `value` to the right of the list at `key` and
    /// returns the new list length.
    fn append(&self, key: &str, value: &[u8]) -> Result<usize>;

    /// Returns the list elements between `start` and `stop`, both inclusive.
    ///
    /// Negative indices count from the end (`-1` is the last element), as
    /// with Redis `LRANGE`. A missing list reads as empty.
    fn range(&self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>>;

    /// Checks whether anything is stored under `key`.
    fn exists(&self, key: &str) -> Result<bool>;

    /// Discards every key in the store.
    fn clear(&self) -> Result<()>;
}

impl<S: BackingStore + ?Sized> BackingStore for std::sync::Arc<S> {
    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn increment(&self, key: &str) -> Result<i64> {
        (**self).increment(key)
    }

    fn append(&self, key: &str, value: &[u8]) -> Result<usize> {
        (**self).append(key, value)
    }

    fn range(&self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        (**self).range(key, start, stop)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        (**self).exists(key)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
