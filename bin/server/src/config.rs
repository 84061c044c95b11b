//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables. Nested keys use
//! `__` as separator, e.g. `AUTH__ENDPOINT`.

use serde::Deserialize;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Authentication backend configuration.
    pub auth: AuthConfig,
}

/// Connection settings for the external authentication backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// URL that credentials are POSTed to.
    pub endpoint: String,

    /// Upper bound on one authentication call, in seconds.
    /// A call that exceeds it is reported to the visitor as a login error.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    10
}

impl AuthConfig {
    /// Creates a configuration with the default timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_seconds: default_timeout_seconds(),
        }
    }

    /// Returns the call timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::default())
    }

    fn from_source(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
