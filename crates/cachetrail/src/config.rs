use std::env;

/// Backing store connection configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Redis host (default: "localhost")
    pub host: String,
    /// Redis port (default: 6379)
    pub port: u16,
    /// Redis database index (default: 0)
    pub db: i64,
}

impl Config {
    /// Creates a configuration from plain values.
    pub fn new(host: impl Into<String>, port: u16, db: i64) -> Self {
        Self {
            host: host.into(),
            port,
            db,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REDIS_HOST` - Redis host (default: "localhost")
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `REDIS_DB` - Redis database index (default: 0)
    pub fn from_env() -> Self {
        Self {
            host: env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6379),
            db: env::var("REDIS_DB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Get the Redis connection URL.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("localhost", 6379, 0)
    }
}
