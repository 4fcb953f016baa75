//! Console sink implementation

use std::io::{self, Write};

use super::traits::LogSink;
use crate::types::Level;

/// A sink that writes to the console (stdout/stderr)
///
/// Debug and info lines go to stdout, warn and error lines to stderr.
/// Write errors (closed pipe, full disk) are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a new console sink
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, level: Level, line: &str) {
        let _ = match level {
            Level::Debug | Level::Info => writeln!(io::stdout().lock(), "{}", line),
            Level::Warn | Level::Error => writeln!(io::stderr().lock(), "{}", line),
        };
    }
}
