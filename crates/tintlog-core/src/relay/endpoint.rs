//! Server side of the relay: replays client records through a local logger

use serde_json::{json, Value};

use super::transport::RelayResult;
use super::wire::RelayPayload;
use crate::logging::Logger;
use crate::types::LogValue;

/// Message returned to the client on any processing failure
pub const GENERIC_FAILURE: &str = "Failed to process log";

/// Status and JSON body to answer a relay request with
#[derive(Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: Value,
}

impl RelayResponse {
    /// Empty acknowledgement
    pub fn ok() -> Self {
        Self {
            status: 200,
            body: json!({}),
        }
    }

    /// Sanitized failure; never carries internal error details
    pub fn failure() -> Self {
        Self {
            status: 400,
            body: json!({ "error": GENERIC_FAILURE }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Receives relay payloads and replays them through a server logger
///
/// The replayed record keeps the client's context; the server logger's
/// filter, formatter and sink decide what is written.
#[derive(Debug, Clone)]
pub struct RelayEndpoint {
    logger: Logger,
}

impl RelayEndpoint {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Handle a raw request body. Never fails; errors are logged locally
    /// and answered with [`RelayResponse::failure`].
    pub fn handle(&self, body: &[u8]) -> RelayResponse {
        match self.replay(body) {
            Ok(()) => RelayResponse::ok(),
            Err(err) => {
                self.logger.error_with(
                    "Failed to process relayed log",
                    LogValue::object([("error", LogValue::error(&err))]),
                );
                RelayResponse::failure()
            }
        }
    }

    /// Parse and replay a raw request body
    pub fn replay(&self, body: &[u8]) -> RelayResult<()> {
        let payload: RelayPayload = serde_json::from_slice(body)?;
        self.replay_payload(&payload);
        Ok(())
    }

    /// Replay an already parsed payload
    pub fn replay_payload(&self, payload: &RelayPayload) {
        let logger = self.logger.with_context(payload.context.to_log_context());
        let data = payload.data_value();
        logger.log(payload.level, &payload.message, data.as_ref());
    }
}
