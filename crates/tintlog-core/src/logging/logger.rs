//! Context-bound logger

use std::sync::Arc;

use super::console::ConsoleSink;
use super::filter::LevelFilter;
use super::traits::{LogSink, SharedSink};
use crate::config::LevelSource;
use crate::format::Formatter;
use crate::types::{ChildOptions, Level, LogContext, LogEvent, LogValue, DEFAULT_MODULE};

/// A logger bound to a context (module, user id, extra fields)
///
/// Leveled calls check the level filter first; disabled levels return
/// without formatting or writing anything. Loggers are cheap to clone and
/// children never share context with their parent.
///
/// ```
/// use std::sync::Arc;
/// use tintlog_core::{ChildOptions, Level, LevelFilter, Logger, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let root = Logger::builder()
///     .module("app")
///     .filter(LevelFilter::fixed(Level::Info))
///     .sink(sink.clone())
///     .build();
///
/// root.child(ChildOptions::new("auth")).info("User logged in");
/// assert!(sink.last().unwrap().contains("[auth]"));
/// ```
#[derive(Clone)]
pub struct Logger {
    context: LogContext,
    filter: LevelFilter,
    formatter: Formatter,
    sink: SharedSink,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE)
    }
}

impl Logger {
    /// Console logger for `module`, filtered by `LOG_LEVEL`
    pub fn new(module: impl Into<String>) -> Self {
        Self::builder().module(module).build()
    }

    /// Start configuring a logger
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn filter(&self) -> &LevelFilter {
        &self.filter
    }

    /// Whether a call at `level` would be written
    pub fn is_enabled(&self, level: Level) -> bool {
        self.filter.is_enabled(level)
    }

    /// Log at `level` with optional data
    pub fn log(&self, level: Level, message: &str, data: Option<&LogValue>) -> &Self {
        if !self.filter.is_enabled(level) {
            return self;
        }
        let event = LogEvent::now(level, message, data, &self.context);
        let line = self.formatter.render(&event);
        self.sink.write(level, &line);
        self
    }

    /// Log at `level` with data, converting it only if the level is enabled
    pub fn log_with(&self, level: Level, message: &str, data: impl Into<LogValue>) -> &Self {
        if !self.filter.is_enabled(level) {
            return self;
        }
        let data = data.into();
        self.log(level, message, Some(&data))
    }

    pub fn debug(&self, message: impl AsRef<str>) -> &Self {
        self.log(Level::Debug, message.as_ref(), None)
    }

    pub fn debug_with(&self, message: impl AsRef<str>, data: impl Into<LogValue>) -> &Self {
        self.log_with(Level::Debug, message.as_ref(), data)
    }

    pub fn info(&self, message: impl AsRef<str>) -> &Self {
        self.log(Level::Info, message.as_ref(), None)
    }

    pub fn info_with(&self, message: impl AsRef<str>, data: impl Into<LogValue>) -> &Self {
        self.log_with(Level::Info, message.as_ref(), data)
    }

    pub fn warn(&self, message: impl AsRef<str>) -> &Self {
        self.log(Level::Warn, message.as_ref(), None)
    }

    pub fn warn_with(&self, message: impl AsRef<str>, data: impl Into<LogValue>) -> &Self {
        self.log_with(Level::Warn, message.as_ref(), data)
    }

    pub fn error(&self, message: impl AsRef<str>) -> &Self {
        self.log(Level::Error, message.as_ref(), None)
    }

    pub fn error_with(&self, message: impl AsRef<str>, data: impl Into<LogValue>) -> &Self {
        self.log_with(Level::Error, message.as_ref(), data)
    }

    /// Set or remove the user id on this logger
    ///
    /// Children created earlier keep the value they copied.
    pub fn set_user_id(&mut self, user_id: Option<&str>) -> &mut Self {
        self.context.set_user_id(user_id.map(str::to_string));
        self
    }

    /// Derive an independent logger with an extended context
    pub fn child(&self, options: impl Into<ChildOptions>) -> Logger {
        let options = options.into();
        self.with_context(self.context.overlay(&options))
    }

    /// Same filter, formatter and sink, different context
    pub fn with_context(&self, context: LogContext) -> Logger {
        Logger {
            context,
            filter: self.filter.clone(),
            formatter: self.formatter.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("context", &self.context)
            .field("filter", &self.filter)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`]
///
/// Defaults: module `app`, `LOG_LEVEL` filter, console sink.
#[derive(Default)]
pub struct LoggerBuilder {
    context: Option<LogContext>,
    filter: Option<LevelFilter>,
    formatter: Option<Formatter>,
    sink: Option<SharedSink>,
}

impl LoggerBuilder {
    /// Set the module, keeping any other context already configured
    pub fn module(mut self, module: impl Into<String>) -> Self {
        let module = module.into();
        let context = match self.context.take() {
            Some(mut context) => {
                context.insert(crate::types::MODULE_KEY, module);
                context
            }
            None => LogContext::new(module),
        };
        self.context = Some(context);
        self
    }

    /// Replace the whole context
    pub fn context(mut self, context: LogContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_user_id(user_id));
        self
    }

    pub fn filter(mut self, filter: LevelFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Filter on a custom level source
    pub fn level_source(self, source: impl LevelSource + 'static) -> Self {
        self.filter(LevelFilter::new(source))
    }

    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    pub fn shared_sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            context: self.context.unwrap_or_default(),
            filter: self.filter.unwrap_or_default(),
            formatter: self.formatter.unwrap_or_default(),
            sink: self.sink.unwrap_or_else(|| Arc::new(ConsoleSink::new())),
        }
    }
}
