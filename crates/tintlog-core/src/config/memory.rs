//! In-memory level source

use parking_lot::RwLock;

use super::traits::LevelSource;
use crate::types::Level;

/// In-memory level source
///
/// Useful for tests, and for applications that manage their own
/// configuration and want to change the threshold at runtime.
#[derive(Debug, Default)]
pub struct MemoryLevelSource {
    level: RwLock<Option<String>>,
}

impl MemoryLevelSource {
    /// Create a source with no level configured
    pub fn new() -> Self {
        Self {
            level: RwLock::new(None),
        }
    }

    /// Create a source with an initial raw value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            level: RwLock::new(Some(value.into())),
        }
    }

    /// Set the raw value (it need not be a valid level name)
    pub fn set(&self, value: impl Into<String>) {
        *self.level.write() = Some(value.into());
    }

    /// Set a level
    pub fn set_level(&self, level: Level) {
        self.set(level.as_str());
    }

    /// Remove the configured value
    pub fn clear(&self) {
        *self.level.write() = None;
    }
}

impl LevelSource for MemoryLevelSource {
    fn raw_level(&self) -> Option<String> {
        self.level.read().clone()
    }
}
