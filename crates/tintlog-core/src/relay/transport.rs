//! Delivery of relay payloads to the server

use async_trait::async_trait;
use thiserror::Error;

use super::wire::RelayPayload;
use crate::config::{ConfigError, RelayConfig};

/// Errors that can occur while relaying a log
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Relay endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No async runtime available to deliver the log")]
    NoRuntime,
}

pub type RelayResult<T> = Result<T, RelayError>;

/// Transport for relay payloads
///
/// Implementations:
/// - `HttpTransport`: JSON POST with reqwest
/// - Test doubles and in-process loopbacks
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Deliver one payload; resolves once the server acknowledged it
    async fn send(&self, payload: &RelayPayload) -> RelayResult<()>;
}

/// Posts payloads as JSON to the relay endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Create a transport from validated settings
    pub fn new(config: &RelayConfig) -> RelayResult<Self> {
        config.validate()?;
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.endpoint_url(),
        })
    }

    /// URL payloads are posted to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RelayTransport for HttpTransport {
    async fn send(&self, payload: &RelayPayload) -> RelayResult<()> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_lock;

    #[test]
    fn test_http_transport_url() {
        let _env = env_lock();
        let transport = HttpTransport::new(&RelayConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(transport.url(), "http://localhost:8080/api/log");
    }

    #[test]
    fn test_http_transport_rejects_bad_config() {
        let _env = env_lock();
        let result = HttpTransport::new(&RelayConfig::new("ftp://example.com"));
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_an_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = RelayConfig::new(format!("http://127.0.0.1:{port}"));
        let transport = {
            let _env = env_lock();
            HttpTransport::new(&config).unwrap()
        };
        let payload = RelayPayload::from_parts(
            crate::types::Level::Info,
            "hello",
            None,
            &crate::types::LogContext::default(),
        );
        assert!(transport.send(&payload).await.is_err());
    }
}
