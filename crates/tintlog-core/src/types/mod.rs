//! Core data types shared by the formatter, loggers and relay

mod context;
mod event;
mod level;
mod value;

pub use context::{ChildOptions, LogContext, DEFAULT_MODULE, MODULE_KEY, USER_ID_KEY};
pub use event::LogEvent;
pub use level::{Level, ParseLevelError};
pub use value::{ErrorValue, LogValue, SharedList, SharedMap};
