//! Process-wide root logger
//!
//! The root is set once, explicitly, at startup. Nothing initializes it
//! behind the caller's back; libraries should accept a `Logger` instead of
//! reaching for the root.

use once_cell::sync::OnceCell;

use super::logger::Logger;

static ROOT: OnceCell<Logger> = OnceCell::new();

/// Install the root logger. Fails, handing the logger back, if one is
/// already installed.
pub fn init_root(logger: Logger) -> Result<(), Logger> {
    ROOT.set(logger)
}

/// The root logger, if installed
pub fn root() -> Option<&'static Logger> {
    ROOT.get()
}
