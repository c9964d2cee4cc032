//! PostgreSQL connection settings.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for the connection pool backing the decision repository.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL; the only setting without a usable default.
    pub url: String,
    /// Connections the pool keeps warm.
    pub min_connections: u32,
    /// Pool ceiling.
    pub max_connections: u32,
    /// How long a checkout may wait for a free connection, in seconds.
    pub acquire_timeout_secs: u64,
    /// Apply pending migrations during startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: 2,
            max_connections: 10,
            acquire_timeout_secs: 30,
            run_migrations: false,
        }
    }
}

impl DatabaseConfig {
    /// Checkout wait budget as a `Duration`.
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::Missing("database.url"));
        }
        let is_postgres =
            self.url.starts_with("postgres://") || self.url.starts_with("postgresql://");
        if !is_postgres {
            return Err(ValidationError::DatabaseUrlScheme);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::PoolBounds);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolTooLarge);
        }
        Ok(())
    }
}
