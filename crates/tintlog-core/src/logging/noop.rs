//! No-op sink implementation

use super::traits::LogSink;
use crate::types::Level;

/// A sink that does nothing
///
/// Useful for silencing a logger while keeping its call sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NoOpSink {
    fn write(&self, _level: Level, _line: &str) {}
}
