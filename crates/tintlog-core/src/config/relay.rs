//! Settings for relaying client-side logs to a server endpoint

use std::env;
use std::time::Duration;

use super::traits::{ConfigError, ConfigResult};

/// Path the relay endpoint is mounted at
pub const DEFAULT_RELAY_PATH: &str = "/api/log";

/// Environment variable holding the server base URL
pub const RELAY_URL_VAR: &str = "LOG_RELAY_URL";

/// Environment variable enabling delivery diagnostics
pub const RELAY_DEV_VAR: &str = "LOG_RELAY_DEV";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true")
}

/// Client-side relay configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Server origin, e.g. `https://app.example.com`
    pub base_url: String,
    /// Endpoint path appended to the base URL
    pub path: String,
    /// Print a local diagnostic when delivery fails
    pub dev_mode: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl RelayConfig {
    /// Create a config for a server origin with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: DEFAULT_RELAY_PATH.to_string(),
            dev_mode: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the endpoint path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Enable or disable delivery diagnostics
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `LOG_RELAY_URL` and `LOG_RELAY_DEV`
    pub fn from_env() -> ConfigResult<Self> {
        let base_url = env::var(RELAY_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing(RELAY_URL_VAR.to_string()))?;
        let dev_mode = env::var(RELAY_DEV_VAR).map(|v| parse_flag(&v)).unwrap_or(false);

        let config = Self::new(base_url.trim()).with_dev_mode(dev_mode);
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings can produce a request
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid("base_url", format!("expected an http(s) URL, got '{}'", self.base_url)));
        }
        if !self.path.starts_with('/') {
            return Err(ConfigError::invalid("path", "must start with '/'"));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::invalid("timeout", "must be greater than zero"));
        }
        Ok(())
    }

    /// Full URL the relay posts to
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}
