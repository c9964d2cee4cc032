//! Typed configuration loaded from the environment.
//!
//! Every setting lives under the `PATHFINDER` prefix with `__` between
//! nesting levels, so `PATHFINDER__SERVER__PORT=8000` lands in
//! `server.port`. A `.env` file is honored in development. Loading and
//! validation are separate steps: `load()` only parses, `validate()`
//! decides whether the parsed values can actually run.

mod ai;
mod auth;
mod database;
mod error;
mod server;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root configuration, one field per section.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PATHFINDER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Runs every section's semantic checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ai.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // The process environment is shared; serialize tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_LOCK.lock().unwrap();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        for (key, _) in vars {
            env::remove_var(key);
        }
        result
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("PATHFINDER__DATABASE__URL", "postgresql://test@localhost/test"),
        ("PATHFINDER__AUTH__JWT_SECRET", "test-secret"),
    ];

    #[test]
    fn loads_and_validates_with_only_required_vars() {
        let config = load_with(REQUIRED).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
    }

    #[test]
    fn unset_sections_fall_back_to_defaults() {
        let config = load_with(REQUIRED).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.auth.leeway_secs, 30);
        assert!(!config.ai.has_api_key());
    }

    #[test]
    fn double_underscore_reaches_nested_fields() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PATHFINDER__SERVER__PORT", "3000"));
        let config = load_with(&vars).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn production_flag_follows_server_environment() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PATHFINDER__SERVER__ENVIRONMENT", "production"));
        let config = load_with(&vars).unwrap();
        assert!(config.is_production());
    }
}
