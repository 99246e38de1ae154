//! CLI command definitions.

use clap::{Parser, ValueEnum};

use crate::config::Config;

/// Store values in an instrumented cache and replay the call history.
#[derive(Debug, Parser)]
#[command(name = "cachetrail")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Redis host.
    #[arg(long, env = "REDIS_HOST", default_value = "localhost")]
    pub host: String,

    /// Redis port.
    #[arg(long, env = "REDIS_PORT", default_value_t = 6379)]
    pub port: u16,

    /// Redis database index. Cleared on startup.
    #[arg(long, env = "REDIS_DB", default_value_t = 0)]
    pub db: i64,

    /// Backing store.
    #[arg(long, default_value = "redis")]
    pub backend: Backend,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Values to store. Integers and floats are stored as numbers, anything
    /// else as text.
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

impl Cli {
    /// Connection configuration assembled from the flags.
    pub fn config(&self) -> Config {
        Config::new(self.host.clone(), self.port, self.db)
    }
}

/// Backing store options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Redis server at --host/--port/--db.
    #[default]
    Redis,
    /// In-process store, discarded on exit.
    Memory,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}
