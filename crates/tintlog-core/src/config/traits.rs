//! Configuration source trait

use std::sync::Arc;

/// Source of the configured minimum level
///
/// Read on every filtering decision, so changes are visible immediately.
///
/// Implementations:
/// - `EnvLevelSource`: Reads an environment variable (`LOG_LEVEL` by default)
/// - `MemoryLevelSource`: In-memory value for tests and embedding applications
pub trait LevelSource: Send + Sync {
    /// The raw, unnormalized level name, if one is configured
    fn raw_level(&self) -> Option<String>;
}

/// Type alias for an Arc-wrapped level source
pub type SharedLevelSource = Arc<dyn LevelSource>;

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(String),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
