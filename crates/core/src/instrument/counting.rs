//! Invocation counting middleware.

use std::sync::Arc;

use crate::cache::{counter_key, BackingStore, Result};

use super::Operation;

/// Counts invocations of the wrapped operation in the backing store.
///
/// The counter is incremented before the inner operation runs, so a call
/// that fails is still counted.
pub struct CountingMiddleware<O, S> {
    inner: O,
    store: Arc<S>,
    counter_key: String,
}

impl<O, S> CountingMiddleware<O, S>
where
    O: Operation,
    S: BackingStore,
{
    /// Wraps `inner`, counting calls under the `method` identifier.
    pub fn new(inner: O, store: Arc<S>, method: &str) -> Self {
        Self {
            inner,
            store,
            counter_key: counter_key(method),
        }
    }
}

impl<O, S> Operation for CountingMiddleware<O, S>
where
    O: Operation,
    S: BackingStore,
{
    type Args = O::Args;
    type Output = O::Output;

    fn invoke(&self, args: Self::Args) -> Result<Self::Output> {
        let count = self.store.increment(&self.counter_key)?;
        tracing::trace!(counter = %self.counter_key, count, "Invocation counted");
        self.inner.invoke(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheError;
    use crate::instrument::test_support::{Echo, Failing, TestStore};

    #[test]
    fn test_counts_each_call() {
        let store = Arc::new(TestStore::default());
        let op = CountingMiddleware::new(Echo, Arc::clone(&store), "Echo.call");

        for i in 0..5 {
            assert_eq!(op.invoke(i).unwrap(), i);
        }

        assert_eq!(store.get("Echo.call").unwrap(), Some(b"5".to_vec()));
    }

    #[test]
    fn test_counts_failed_calls() {
        let store = Arc::new(TestStore::default());
        let op = CountingMiddleware::new(Failing, Arc::clone(&store), "Failing.call");

        let result = op.invoke(1);

        assert!(matches!(result, Err(CacheError::OperationFailed(_))));
        assert_eq!(store.get("Failing.call").unwrap(), Some(b"1".to_vec()));
    }

    #[test]
    fn test_counter_failure_propagates() {
        let store = Arc::new(TestStore::default());
        store.set("Echo.call", b"not a number").unwrap();
        let op = CountingMiddleware::new(Echo, Arc::clone(&store), "Echo.call");

        assert!(op.invoke(1).is_err());
    }

    #[test]
    fn test_counters_are_per_method() {
        let store = Arc::new(TestStore::default());
        let a = CountingMiddleware::new(Echo, Arc::clone(&store), "A.call");
        let b = CountingMiddleware::new(Echo, Arc::clone(&store), "B.call");

        a.invoke(1).unwrap();
        a.invoke(2).unwrap();
        b.invoke(3).unwrap();

        assert_eq!(store.get("A.call").unwrap(), Some(b"2".to_vec()));
        assert_eq!(store.get("B.call").unwrap(), Some(b"1".to_vec()));
    }
}
