//! Replay of a method's recorded call history.

use std::io::{self, Write};

use cachetrail_core::cache::BackingStore;

use crate::cache::InstrumentedCache;

/// Writes the call history of `method` to `out`.
///
/// Output is a summary line with the call count followed by one line per
/// call pairing its input with its output. When the history cannot be read
/// from the backing store nothing is written; only errors from `out` itself
/// are returned.
pub fn replay<S, W>(cache: &InstrumentedCache<S>, method: &str, out: &mut W) -> io::Result<()>
where
    S: BackingStore,
    W: Write,
{
    let history = match cache.history(method) {
        Ok(history) => history,
        Err(err) => {
            tracing::debug!(method, error = %err, "Replay skipped: history unavailable");
            return Ok(());
        }
    };

    writeln!(out, "{}", history)
}
