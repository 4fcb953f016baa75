//! tintlog Core
//!
//! Colored, context-aware structured logging.
//! Each record renders as a single line:
//!
//! ```text
//! [03/07 09:05:02.045] INFO  [auth] [user-123] User logged in
//! ```
//!
//! with the module tag colored from a hash of its name, and optional
//! pretty-printed JSON payloads on the following lines.
//!
//! ## Loggers and context
//!
//! A [`Logger`] carries a context (module, user id, extra fields). Child
//! loggers copy and extend it:
//!
//! ```rust,ignore
//! use tintlog_core::{Logger, ChildOptions, LogValue};
//!
//! let root = Logger::new("app");
//! let auth = root.child(ChildOptions::new("auth").with("requestId", "r-1"));
//! auth.info("User logged in");
//! auth.error_with("Login failed", LogValue::object([("attempts", 3)]));
//! ```
//!
//! The minimum level comes from `LOG_LEVEL` (`debug|info|warn|error`,
//! default `info`) and is re-read on every call.
//!
//! ## Relaying client logs
//!
//! The `relay` module carries logs from untrusted code to a server
//! endpoint that replays them locally.

pub mod types;
pub mod config;
pub mod format;
pub mod logging;
pub mod relay;

// Re-export commonly used types
pub use types::{
    ChildOptions, ErrorValue, Level, LogContext, LogEvent, LogValue, ParseLevelError,
    DEFAULT_MODULE,
};

pub use config::{
    ConfigError, ConfigResult, EnvLevelSource, LevelSource, MemoryLevelSource, RelayConfig,
};

pub use format::{Formatter, SerializeError, CIRCULAR};

pub use logging::{
    init_root, root, ConsoleSink, LevelFilter, LogSink, Logger, LoggerBuilder, MemorySink,
    NoOpSink, SharedSink,
};

pub use relay::{
    HttpTransport, RelayContext, RelayEndpoint, RelayError, RelayPayload, RelayResponse,
    RelayResult, RelayTransport, RemoteLogger,
};
