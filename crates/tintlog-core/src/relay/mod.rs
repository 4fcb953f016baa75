//! Relay of client-side logs to a server endpoint
//!
//! Code running outside the trusted boundary logs through a
//! [`RemoteLogger`], which posts each record as JSON. The server mounts a
//! [`RelayEndpoint`] that rebuilds the client's context and replays the
//! record through its own [`Logger`](crate::Logger).
//!
//! ```rust,ignore
//! // client
//! let logger = RemoteLogger::from_config("checkout", &RelayConfig::from_env()?)?;
//! logger.info("Cart loaded");
//!
//! // server
//! let endpoint = RelayEndpoint::new(Logger::new("client"));
//! let response = endpoint.handle(&body);
//! ```

mod wire;
mod transport;
mod remote;
mod endpoint;

pub use wire::{RelayPayload, RelayContext};
pub use transport::{RelayTransport, HttpTransport, RelayError, RelayResult};
pub use remote::RemoteLogger;
pub use endpoint::{RelayEndpoint, RelayResponse, GENERIC_FAILURE};
