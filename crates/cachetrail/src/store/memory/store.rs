//! In-memory store implementation.
//!
//! Mirrors the Redis data model closely enough for the cache facade:
//! - Plain values and lists live in one keyspace
//! - Counters are plain values holding decimal text, as with `INCR`
//! - Using a key as the wrong kind fails instead of overwriting it

use std::collections::HashMap;

use parking_lot::RwLock;

use cachetrail_core::cache::{list_range, BackingStore, CacheError, Result};

/// A single keyspace slot.
#[derive(Debug, Clone)]
enum Slot {
    Value(Vec<u8>),
    List(Vec<Vec<u8>>),
}

fn wrong_type(key: &str) -> CacheError {
    CacheError::OperationFailed(format!(
        "key '{}' holds the wrong kind of value",
        key
    ))
}

/// In-memory backing store.
///
/// Every primitive takes the lock once, so each one is atomic with respect
/// to the others.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, Slot>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BackingStore for MemoryStore {
    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.slots
            .write()
            .insert(key.to_string(), Slot::Value(value.to_vec()));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.slots.read().get(key) {
            Some(Slot::Value(value)) => Ok(Some(value.clone())),
            Some(Slot::List(_)) => Err(wrong_type(key)),
            None => Ok(None),
        }
    }

    fn increment(&self, key: &str) -> Result<i64> {
        let mut slots = self.slots.write();

        let current = match slots.get(key) {
            Some(Slot::Value(raw)) => std::str::from_utf8(raw)
                .ok()
                .and_then(|text| text.parse::<i64>().ok())
                .ok_or_else(|| {
                    CacheError::OperationFailed(format!(
                        "value at '{}' is not an integer",
                        key
                    ))
                })?,
            Some(Slot::List(_)) => return Err(wrong_type(key)),
            None => 0,
        };

        let next = current.checked_add(1).ok_or_else(|| {
            CacheError::OperationFailed(format!("increment at '{}' would overflow", key))
        })?;
        slots.insert(key.to_string(), Slot::Value(next.to_string().into_bytes()));
        Ok(next)
    }

    fn append(&self, key: &str, value: &[u8]) -> Result<usize> {
        let mut slots = self.slots.write();

        match slots
            .entry(key.to_string())
            .or_insert_with(|| Slot::List(Vec::new()))
        {
            Slot::List(items) => {
                items.push(value.to_vec());
                Ok(items.len())
            }
            Slot::Value(_) => Err(wrong_type(key)),
        }
    }

    fn range(&self, key: &str, start: isize, stop: isize) -> Result<Vec<Vec<u8>>> {
        match self.slots.read().get(key) {
            Some(Slot::List(items)) => Ok(list_range(items, start, stop)),
            Some(Slot::Value(_)) => Err(wrong_type(key)),
            None => Ok(Vec::new()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.slots.read().contains_key(key))
    }

    fn clear(&self) -> Result<()> {
        let mut slots = self.slots.write();
        tracing::debug!(keys = slots.len(), "Clearing memory store");
        slots.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_memory_set_and_get() {
        let store = MemoryStore::new();

        store.set("key", b"hello world").unwrap();

        assert_eq!(store.get("key").unwrap(), Some(b"hello world".to_vec()));
    }

    #[test]
    fn test_memory_get_nonexistent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_memory_overwrite() {
        let store = MemoryStore::new();

        store.set("key", b"initial").unwrap();
        store.set("key", b"updated").unwrap();

        assert_eq!(store.get("key").unwrap(), Some(b"updated".to_vec()));
    }

    #[test]
    fn test_memory_binary_data() {
        let store = MemoryStore::new();
        let value: Vec<u8> = (0..=255).collect();

        store.set("binary", &value).unwrap();

        assert_eq!(store.get("binary").unwrap(), Some(value));
    }

    #[test]
    fn test_memory_increment() {
        let store = MemoryStore::new();

        assert_eq!(store.increment("counter").unwrap(), 1);
        assert_eq!(store.increment("counter").unwrap(), 2);
        assert_eq!(store.get("counter").unwrap(), Some(b"2".to_vec()));
    }

    #[test]
    fn test_memory_increment_existing_integer() {
        let store = MemoryStore::new();
        store.set("counter", b"41").unwrap();

        assert_eq!(store.increment("counter").unwrap(), 42);
    }

    #[test]
    fn test_memory_increment_non_integer_fails() {
        let store = MemoryStore::new();
        store.set("text", b"hello").unwrap();

        let result = store.increment("text");

        assert!(matches!(result, Err(CacheError::OperationFailed(_))));
        assert_eq!(store.get("text").unwrap(), Some(b"hello".to_vec()));
    }

    #[test]
    fn test_memory_increment_overflow_fails() {
        let store = MemoryStore::new();
        store.set("counter", i64::MAX.to_string().as_bytes()).unwrap();

        assert!(store.increment("counter").is_err());
    }

    #[test]
    fn test_memory_append_and_range() {
        let store = MemoryStore::new();

        assert_eq!(store.append("list", b"a").unwrap(), 1);
        assert_eq!(store.append("list", b"b").unwrap(), 2);
        assert_eq!(store.append("list", b"c").unwrap(), 3);

        assert_eq!(
            store.range("list", 0, -1).unwrap(),
            vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]
        );
        assert_eq!(store.range("list", 1, 1).unwrap(), vec![b"b".to_vec()]);
    }

    #[test]
    fn test_memory_range_missing_list_is_empty() {
        let store = MemoryStore::new();
        assert!(store.range("missing", 0, -1).unwrap().is_empty());
    }

    #[test]
    fn test_memory_wrong_type() {
        let store = MemoryStore::new();
        store.set("value", b"x").unwrap();
        store.append("list", b"y").unwrap();

        assert!(store.append("value", b"z").is_err());
        assert!(store.range("value", 0, -1).is_err());
        assert!(store.get("list").is_err());
        assert!(store.increment("list").is_err());
    }

    #[test]
    fn test_memory_exists() {
        let store = MemoryStore::new();
        store.set("value", b"x").unwrap();
        store.append("list", b"y").unwrap();

        assert!(store.exists("value").unwrap());
        assert!(store.exists("list").unwrap());
        assert!(!store.exists("missing").unwrap());
    }

    #[test]
    fn test_memory_clear() {
        let store = MemoryStore::new();
        store.set("value", b"x").unwrap();
        store.increment("counter").unwrap();
        store.append("list", b"y").unwrap();

        store.clear().unwrap();

        for key in ["value", "counter", "list"] {
            assert!(!store.exists(key).unwrap());
        }
        assert_eq!(store.get("value").unwrap(), None);
    }

    #[test]
    fn test_memory_concurrent_increments() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..100 {
                        store.increment("counter").unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get("counter").unwrap(), Some(b"800".to_vec()));
    }
}
