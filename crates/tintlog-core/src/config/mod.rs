//! Configuration sources
//!
//! - `EnvLevelSource`: Minimum level from `LOG_LEVEL`
//! - `MemoryLevelSource`: In-memory minimum level for testing
//! - `RelayConfig`: Client-side relay transport settings

mod traits;
mod env;
mod memory;
mod relay;

pub use traits::{LevelSource, SharedLevelSource, ConfigError, ConfigResult};
pub use env::{EnvLevelSource, DEFAULT_LEVEL_VAR};
#[cfg(test)]
pub(crate) use env::env_lock;
pub use memory::MemoryLevelSource;
pub use relay::{RelayConfig, DEFAULT_RELAY_PATH, RELAY_URL_VAR, RELAY_DEV_VAR};
