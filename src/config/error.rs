//! Configuration failure types.
//!
//! Loading and validation fail separately: a `ConfigError` means the
//! environment could not be read into the typed sections at all, while a
//! `ValidationError` means the values parsed but do not make sense
//! together.

use thiserror::Error;

/// Failure while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration from the environment: {0}")]
    Read(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Semantic defects in parsed configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} is required but was not provided")]
    Missing(&'static str),

    #[error("server.port must be nonzero")]
    PortOutOfRange,

    #[error("server.request_timeout_secs must be between 1 and 300")]
    TimeoutOutOfRange,

    #[error("database.url must be a postgres:// or postgresql:// URL")]
    DatabaseUrlScheme,

    #[error("database pool minimum exceeds its maximum")]
    PoolBounds,

    #[error("database pool maximum exceeds the 100-connection cap")]
    PoolTooLarge,

    #[error("auth.jwt_secret must be set when running in production")]
    JwtSecretRequired,

    #[error("ai.base_url must use HTTPS")]
    ProviderUrlMustBeHttps,

    #[error("ai.models resolved to an empty candidate list")]
    NoModelCandidates,
}
