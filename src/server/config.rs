//! Environment configuration for the server binary.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the server binds to when `BIND_ADDRESS` is unset.
pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration read from environment variables.
pub struct Config {
    /// Database connection URL (`DATABASE_URL`).
    pub database_url: String,
    /// Valkey/Redis URL backing the session store (`VALKEY_URL`).
    pub valkey_url: String,
    /// Socket address to serve HTTP on (`BIND_ADDRESS`).
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - `BIND_ADDRESS` is not a socket address
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let bind_address = lookup("BIND_ADDRESS")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address,
        })
    }
}
