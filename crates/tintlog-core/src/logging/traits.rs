//! Output sink trait definition

use std::sync::Arc;

use crate::types::Level;

/// Destination for rendered log lines
///
/// Writes are fire-and-forget: a sink must not panic or block on failure.
///
/// Implementations:
/// - `ConsoleSink`: stdout for debug/info, stderr for warn/error
/// - `MemorySink`: Records lines for tests and inspection
/// - `NoOpSink`: Discards everything
pub trait LogSink: Send + Sync {
    /// Write one rendered line. `line` has no trailing newline.
    fn write(&self, level: Level, line: &str);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn LogSink>;

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, level: Level, line: &str) {
        (**self).write(level, line)
    }
}

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format!($($arg)*))
    };
}
