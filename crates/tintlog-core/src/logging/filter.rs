//! Minimum-level filtering

use std::sync::Arc;

use crate::config::{EnvLevelSource, LevelSource, MemoryLevelSource, SharedLevelSource};
use crate::types::Level;

/// Decides whether a level is enabled
///
/// The configured value is read from the source on every decision and
/// normalized case-insensitively. Missing or unrecognized values mean
/// `info`; filtering never fails.
#[derive(Clone)]
pub struct LevelFilter {
    source: SharedLevelSource,
}

impl LevelFilter {
    /// Filter driven by `LOG_LEVEL`
    pub fn from_env() -> Self {
        Self::new(EnvLevelSource::new())
    }

    /// Filter driven by any level source
    pub fn new(source: impl LevelSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Filter sharing a source with other components
    pub fn from_shared(source: SharedLevelSource) -> Self {
        Self { source }
    }

    /// Filter with a fixed minimum level
    pub fn fixed(level: Level) -> Self {
        Self::new(MemoryLevelSource::with_value(level.as_str()))
    }

    /// The currently configured minimum level
    pub fn min_level(&self) -> Level {
        self.source
            .raw_level()
            .and_then(|raw| Level::parse_lenient(&raw))
            .unwrap_or_default()
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level()
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::from_env()
    }
}

impl std::fmt::Debug for LevelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelFilter")
            .field("min_level", &self.min_level())
            .finish()
    }
}
