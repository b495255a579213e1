// server/config.rs - Server settings from the environment
//
// Read once at startup. `from_env` loads a `.env` file first (if present) so
// local development does not need exported variables.

use std::time::Duration;

use thiserror::Error;

pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
pub const PROXY_TIMEOUT_ENV: &str = "PROXY_TIMEOUT_SECS";

/// Where the REST backend listens in a default local setup
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServerConfigError {
    #[error("BACKEND_URL must be an http(s) URL, got {0:?}")]
    InvalidBackendUrl(String),
    #[error("PROXY_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Backend origin without a trailing slash
    pub backend_url: String,
    /// Upper bound for one proxied backend call
    pub proxy_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            proxy_timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(url) = read(BACKEND_URL_ENV) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ServerConfigError::InvalidBackendUrl(url));
            }
            config.backend_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = read(PROXY_TIMEOUT_ENV) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.proxy_timeout = Duration::from_secs(secs),
                _ => return Err(ServerConfigError::InvalidTimeout(raw)),
            }
        }

        Ok(config)
    }
}
