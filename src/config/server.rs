//! HTTP listener settings.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Deployment environment the service believes it is running in.
///
/// Only `Production` changes behavior (the auth secret becomes
/// mandatory); the other variants exist for log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Settings for the HTTP listener and its tower layers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    pub environment: Environment,
    /// Tracing filter directive applied at startup.
    pub log_level: String,
    /// Budget for a single request before the timeout layer cancels it.
    pub request_timeout_secs: u64,
    /// Comma-separated allowed CORS origins; permissive when unset.
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: Environment::default(),
            log_level: "info,pathfinder=debug,sqlx=warn".to_string(),
            request_timeout_secs: 60,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to.
    ///
    /// Panics on a host value that is not an IP address; `validate` runs
    /// before any bind, so a bad value fails startup either way.
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("server.host is not a valid bind address")
    }

    /// Per-request budget as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured CORS origins, split and trimmed.
    pub fn cors_origins_list(&self) -> Vec<String> {
        match &self.cors_origins {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::PortOutOfRange);
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(ValidationError::TimeoutOutOfRange);
        }
        Ok(())
    }
}
