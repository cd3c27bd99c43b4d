//! Configuration errors.

use thiserror::Error;

/// Failure to read or check the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration is invalid: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that the server cannot start with.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("cannot bind to {0}")]
    InvalidBindAddress(String),

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("request body limit must be non-zero")]
    InvalidBodyLimit,

    #[error("database url must use the postgres:// or postgresql:// scheme")]
    InvalidDatabaseUrl,

    #[error("database pool needs at least one connection and min <= max")]
    InvalidPoolSize,

    #[error("database pool is capped at 100 connections")]
    PoolSizeTooLarge,

    #[error("access token key must be at least 32 bytes in production")]
    WeakAccessTokenKey,
}
