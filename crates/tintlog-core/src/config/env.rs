//! Environment variable level source

use std::env;

use super::traits::LevelSource;

/// Environment variable consulted by default
pub const DEFAULT_LEVEL_VAR: &str = "LOG_LEVEL";

/// Level source that reads an environment variable on every call
///
/// # Example
///
/// ```
/// use tintlog_core::config::{EnvLevelSource, LevelSource};
///
/// let source = EnvLevelSource::new();
/// assert_eq!(source.var_name(), "LOG_LEVEL");
/// ```
#[derive(Debug, Clone)]
pub struct EnvLevelSource {
    var: String,
}

impl Default for EnvLevelSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLevelSource {
    /// Read `LOG_LEVEL`
    pub fn new() -> Self {
        Self::with_var(DEFAULT_LEVEL_VAR)
    }

    /// Read a custom variable
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var_name(&self) -> &str {
        &self.var
    }
}

impl LevelSource for EnvLevelSource {
    fn raw_level(&self) -> Option<String> {
        env::var(&self.var).ok()
    }
}

/// Serializes unit tests that write or read the process environment
#[cfg(test)]
pub(crate) fn env_lock() -> parking_lot::MutexGuard<'static, ()> {
    static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
    ENV_LOCK.lock()
}
