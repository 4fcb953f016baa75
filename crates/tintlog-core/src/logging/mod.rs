//! Loggers, level filtering and output sinks

mod traits;
mod console;
mod noop;
mod memory;
mod filter;
mod logger;
mod root;

pub use traits::{LogSink, SharedSink};
pub use console::ConsoleSink;
pub use noop::NoOpSink;
pub use memory::MemorySink;
pub use filter::LevelFilter;
pub use logger::{Logger, LoggerBuilder};
pub use root::{init_root, root};
