//! cachetrail CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cachetrail::cli::{Backend, Cli};
use cachetrail::output::{format_output, Report, StoredEntry};
use cachetrail::store::{MemoryStore, RedisStore};
use cachetrail::{InstrumentedCache, Key, StoredValue, STORE_METHOD};
use cachetrail_core::cache::BackingStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable with --format json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cachetrail=info,cachetrail_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.backend {
        Backend::Memory => {
            tracing::info!("Using in-memory store");
            run(InstrumentedCache::new(MemoryStore::new())?, &cli)
        }
        Backend::Redis => {
            let url = cli.config().redis_url();
            tracing::info!(url = %url, "Connecting to Redis");
            run(InstrumentedCache::new(RedisStore::new(&url)?)?, &cli)
        }
    }
}

/// Stores every value, reads each one back and prints the report.
fn run<S: BackingStore>(cache: InstrumentedCache<S>, cli: &Cli) -> Result<()> {
    let mut entries = Vec::with_capacity(cli.values.len());
    for raw in &cli.values {
        let value = StoredValue::parse(raw);
        let key = cache.store(value.clone())?;
        let read_back = read_back(&cache, &key, &value)?;
        entries.push(StoredEntry {
            key,
            value,
            read_back,
        });
    }

    let report = Report {
        entries,
        history: cache.history(STORE_METHOD)?,
    };
    println!("{}", format_output(&report, cli.format));
    Ok(())
}

/// Reads `key` back with the getter matching the kind of `value`.
fn read_back<S: BackingStore>(
    cache: &InstrumentedCache<S>,
    key: &Key,
    value: &StoredValue,
) -> Result<Option<StoredValue>> {
    let read = match value {
        StoredValue::Text(_) => cache.get_str(key)?.map(StoredValue::Text),
        StoredValue::Bytes(_) => cache.get(key)?.map(StoredValue::Bytes),
        StoredValue::Int(_) => cache.get_int(key)?.map(StoredValue::Int),
        StoredValue::Float(_) => cache.get_float(key)?.map(StoredValue::Float),
    };
    Ok(read)
}
