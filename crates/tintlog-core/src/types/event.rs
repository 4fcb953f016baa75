//! A single log record, alive only while it is being rendered

use chrono::{DateTime, Local};

use super::context::LogContext;
use super::level::Level;
use super::value::LogValue;

/// A log record as handed to the formatter
#[derive(Debug, Clone)]
pub struct LogEvent<'a> {
    pub level: Level,
    pub message: &'a str,
    pub data: Option<&'a LogValue>,
    pub context: &'a LogContext,
    pub timestamp: DateTime<Local>,
}

impl<'a> LogEvent<'a> {
    /// Create an event stamped with the current local time
    pub fn now(
        level: Level,
        message: &'a str,
        data: Option<&'a LogValue>,
        context: &'a LogContext,
    ) -> Self {
        Self {
            level,
            message,
            data,
            context,
            timestamp: Local::now(),
        }
    }

    /// Replace the timestamp
    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
