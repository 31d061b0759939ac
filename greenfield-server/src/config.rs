//! Server configuration, populated once at startup.

use std::env;

use axum::http::header::InvalidHeaderValue;
use greenfield::Environment;
use thiserror::Error;

/// Port the API listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3001;
/// Origin allowed by CORS when `CORS_ORIGIN` is unset.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("Invalid APP_ENV value '{value}': expected development, staging or production")]
    InvalidEnvironment { value: String },

    #[error("Invalid CORS_ORIGIN value '{value}': {source}")]
    InvalidCorsOrigin {
        value: String,
        source: InvalidHeaderValue,
    },
}

/// Recognized options, read from the process environment exactly once and
/// passed by parameter from then on. Unset variables fall back to documented
/// defaults; malformed values are startup errors.
#[derive(Debug, Clone)]
pub struct Config {
    /// `PORT`, default 3001.
    pub port: u16,
    /// `CORS_ORIGIN`, default `http://localhost:3000`.
    pub cors_origin: String,
    /// `APP_ENV`, default `development`.
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let environment = match lookup("APP_ENV") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvironment { value })?,
            None => Environment::default(),
        };

        Ok(Self {
            port,
            cors_origin,
            environment,
        })
    }
}
