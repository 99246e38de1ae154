//! Call history middleware.
//!
//! # Non-Atomicity
//!
//! Recording a call takes three separate store writes: the rendered
//! arguments are appended to `<method>:inputs`, the wrapped operation runs,
//! and the rendered result is appended to `<method>:outputs`. They are not
//! grouped in a transaction.
//!
//! - **Failed call**: the input stays recorded and no output is appended,
//!   so the two lists lose their index alignment from that point on.
//!   `CallHistory` reports the surplus as a count because nothing in the
//!   lists identifies which input failed.
//! - **Crash mid-call**: same as a failed call.
//! - **Concurrent callers**: appends from different callers can interleave,
//!   so the Nth input and the Nth output only correspond under
//!   single-threaded use.
//!
//! This window is accepted. Closing it needs MULTI/EXEC style wrapping in
//! the backing store, which the `BackingStore` contract does not offer.

use std::fmt::Display;
use std::sync::Arc;

use crate::cache::{inputs_key, outputs_key, BackingStore, Result};

use super::Operation;

/// Records the rendered arguments and result of every call to the wrapped
/// operation in two append-only lists.
pub struct HistoryMiddleware<O, S> {
    inner: O,
    store: Arc<S>,
    inputs_key: String,
    outputs_key: String,
}

impl<O, S> HistoryMiddleware<O, S>
where
    O: Operation,
    S: BackingStore,
{
    /// Wraps `inner`, recording calls under the `method` identifier.
    pub fn new(inner: O, store: Arc<S>, method: &str) -> Self {
        Self {
            inner,
            store,
            inputs_key: inputs_key(method),
            outputs_key: outputs_key(method),
        }
    }
}

impl<O, S> Operation for HistoryMiddleware<O, S>
where
    O: Operation,
    O::Args: Display,
    O::Output: Display,
    S: BackingStore,
{
    type Args = O::Args;
    type Output = O::Output;

    fn invoke(&self, args: Self::Args) -> Result<Self::Output> {
        let rendered = args.to_string();
        self.store.append(&self.inputs_key, rendered.as_bytes())?;

        let output = self.inner.invoke(args)?;

        self.store
            .append(&self.outputs_key, output.to_string().as_bytes())?;
        Ok(output)
    }
}
