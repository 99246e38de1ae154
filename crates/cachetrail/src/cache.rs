//! Instrumented cache facade.
//!
//! `InstrumentedCache` writes every value under a freshly generated key and
//! instruments its `store` operation:
//!
//! - **Call counting**: `Cache.store` is incremented once per call, before
//!   the value is written
//! - **Call history**: the rendered argument is appended to
//!   `Cache.store:inputs` before the write and the returned key to
//!   `Cache.store:outputs` after it
//!
//! Reads are not instrumented. See `cachetrail_core::instrument` for the
//! non-atomicity window between those steps.

use std::fmt::Display;
use std::sync::Arc;

use cachetrail_core::cache::{
    counter_key, inputs_key, outputs_key, BackingStore, CacheError, Key, Result, StoredValue,
    STORE_METHOD,
};
use cachetrail_core::instrument::{CountingMiddleware, HistoryMiddleware, Operation};
use cachetrail_core::replay::CallHistory;

/// The uninstrumented body of `store`: generate a key, write the value.
pub struct StoreOperation<S> {
    store: Arc<S>,
}

impl<S: BackingStore> StoreOperation<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: BackingStore> Operation for StoreOperation<S> {
    type Args = StoredValue;
    type Output = Key;

    fn invoke(&self, data: StoredValue) -> Result<Key> {
        let key = Key::generate();
        self.store.set(key.as_str(), &data.to_bytes())?;
        tracing::trace!(key = %key, kind = data.kind(), "Value stored");
        Ok(key)
    }
}

type InstrumentedStore<S> = CountingMiddleware<HistoryMiddleware<StoreOperation<S>, S>, S>;

/// Instrumented facade over a backing store.
///
/// Constructing a cache clears the backing store, discarding every value,
/// counter and history written before.
///
/// # Example
///
/// ```
/// use cachetrail::cache::InstrumentedCache;
/// use cachetrail::store::MemoryStore;
///
/// let cache = InstrumentedCache::new(MemoryStore::new()).unwrap();
/// let key = cache.store("hello").unwrap();
/// assert_eq!(cache.get_str(&key).unwrap(), Some("hello".to_string()));
/// assert_eq!(cache.calls("Cache.store").unwrap(), 1);
/// ```
pub struct InstrumentedCache<S: BackingStore> {
    store: Arc<S>,
    store_op: InstrumentedStore<S>,
}

impl<S: BackingStore> InstrumentedCache<S> {
    /// Creates a cache owning `store`, clearing it first.
    ///
    /// # Errors
    ///
    /// Propagates the backing store's failure to clear.
    pub fn new(store: S) -> Result<Self> {
        Self::with_shared_store(Arc::new(store))
    }

    /// Creates a cache over a store shared with other handles, clearing it
    /// first.
    pub fn with_shared_store(store: Arc<S>) -> Result<Self> {
        store.clear()?;
        tracing::debug!("Backing store cleared for new cache");

        let store_op = CountingMiddleware::new(
            HistoryMiddleware::new(
                StoreOperation::new(Arc::clone(&store)),
                Arc::clone(&store),
                STORE_METHOD,
            ),
            Arc::clone(&store),
            STORE_METHOD,
        );

        Ok(Self { store, store_op })
    }

    /// Stores `data` unmodified under a fresh key and returns the key.
    pub fn store(&self, data: impl Into<StoredValue>) -> Result<Key> {
        self.store_op.invoke(data.into())
    }

    /// Gets the raw bytes stored under `key`, or `None` if it is absent.
    pub fn get(&self, key: impl AsRef<str>) -> Result<Option<Vec<u8>>> {
        let key = key.as_ref();
        let value = self.store.get(key)?;
        tracing::trace!(key, hit = value.is_some(), "Value read");
        Ok(value)
    }

    /// Gets the value under `key` and transforms it with `decode`.
    ///
    /// `decode` only runs on a present value; an absent key yields `None`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Decode` when `decode` fails.
    pub fn get_with<T, E, F>(&self, key: impl AsRef<str>, decode: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> std::result::Result<T, E>,
        E: Display,
    {
        self.get(key)?
            .map(|raw| decode(raw).map_err(|err| CacheError::Decode(err.to_string())))
            .transpose()
    }

    /// Gets the value under `key` as UTF-8 text.
    pub fn get_str(&self, key: impl AsRef<str>) -> Result<Option<String>> {
        self.get_with(key, String::from_utf8)
    }

    /// Gets the value under `key` as a decimal integer.
    pub fn get_int(&self, key: impl AsRef<str>) -> Result<Option<i64>> {
        self.get_with(key, |raw| parse_text::<i64>(&raw))
    }

    /// Gets the value under `key` as a decimal float.
    pub fn get_float(&self, key: impl AsRef<str>) -> Result<Option<f64>> {
        self.get_with(key, |raw| parse_text::<f64>(&raw))
    }

    /// Checks whether a value is stored under `key`.
    pub fn contains(&self, key: impl AsRef<str>) -> Result<bool> {
        self.store.exists(key.as_ref())
    }

    /// Returns how many times `method` has been invoked, 0 if never.
    pub fn calls(&self, method: &str) -> Result<u64> {
        Ok(self
            .get_with(counter_key(method), |raw| parse_text::<u64>(&raw))?
            .unwrap_or(0))
    }

    /// Reads the full instrumentation trail of `method`.
    pub fn history(&self, method: &str) -> Result<CallHistory> {
        let count = self.calls(method)?;
        let inputs = self.read_list(&inputs_key(method))?;
        let outputs = self.read_list(&outputs_key(method))?;
        Ok(CallHistory::from_lists(method, count, inputs, outputs))
    }

    fn read_list(&self, key: &str) -> Result<Vec<String>> {
        Ok(self
            .store
            .range(key, 0, -1)?
            .into_iter()
            .map(|raw| String::from_utf8_lossy(&raw).into_owned())
            .collect())
    }
}

fn parse_text<T>(raw: &[u8]) -> std::result::Result<T, String>
where
    T: std::str::FromStr,
    T::Err: Display,
{
    let text = std::str::from_utf8(raw).map_err(|err| err.to_string())?;
    text.parse::<T>().map_err(|err| format!("{}: {:?}", err, text))
}
