//! Client-side logger that relays records to a server endpoint

use std::io::{self, Write};
use std::sync::Arc;

use super::transport::{HttpTransport, RelayError, RelayResult, RelayTransport};
use super::wire::RelayPayload;
use crate::config::RelayConfig;
use crate::types::{ChildOptions, Level, LogContext, LogValue};

fn report_failure(err: &RelayError) {
    let _ = writeln!(io::stderr().lock(), "[tintlog] failed to relay log: {err}");
}

/// Logger for code running outside the trusted boundary
///
/// Each call is serialized and handed to the transport on the current
/// tokio runtime; the caller never waits for the server. Delivery failures
/// are swallowed, and reported on stderr only in dev mode.
#[derive(Clone)]
pub struct RemoteLogger {
    context: LogContext,
    transport: Arc<dyn RelayTransport>,
    dev_mode: bool,
}

impl RemoteLogger {
    /// Create a remote logger over any transport
    pub fn new(module: impl Into<String>, transport: impl RelayTransport + 'static) -> Self {
        Self {
            context: LogContext::new(module),
            transport: Arc::new(transport),
            dev_mode: false,
        }
    }

    /// Create a remote logger posting over HTTP
    pub fn from_config(module: impl Into<String>, config: &RelayConfig) -> RelayResult<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(module, transport).with_dev_mode(config.dev_mode))
    }

    /// Enable or disable failure diagnostics on stderr
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// Relay one call
    pub fn log(&self, level: Level, message: &str, data: Option<&LogValue>) -> &Self {
        let payload = RelayPayload::from_parts(level, message, data, &self.context);
        self.dispatch(payload);
        self
    }

    fn dispatch(&self, payload: RelayPayload) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                if self.dev_mode {
                    report_failure(&RelayError::NoRuntime);
                }
                return;
            }
        };

        let transport = self.transport.clone();
        let dev_mode = self.dev_mode;
        handle.spawn(async move {
            if let Err(err) = transport.send(&payload).await {
                if dev_mode {
                    report_failure(&err);
                }
            }
        });
    }

    pub fn debug(&self, message: impl AsRef<str>) -> &Self {
        self.log(Level::Debug, message.as_ref(), None)
    }

    pub fn debug_with(&self, message: impl AsRef<str>, data: impl Into<LogValue>) -> &Self {
        self.log(Level::Debug, message.as_ref(), Some(&data.into()))
    }

    pub fn info(&self, message: impl AsRef<str>) -> &Self {
        self.log(Level::Info, message.as_ref(), None)
    }

    pub fn info_with(&self, message: impl AsRef<str>, data: impl Into<LogValue>) -> &Self {
        self.log(Level::Info, message.as_ref(), Some(&data.into()))
    }

    pub fn warn(&self, message: impl AsRef<str>) -> &Self {
        self.log(Level::Warn, message.as_ref(), None)
    }

    pub fn warn_with(&self, message: impl AsRef<str>, data: impl Into<LogValue>) -> &Self {
        self.log(Level::Warn, message.as_ref(), Some(&data.into()))
    }

    pub fn error(&self, message: impl AsRef<str>) -> &Self {
        self.log(Level::Error, message.as_ref(), None)
    }

    pub fn error_with(&self, message: impl AsRef<str>, data: impl Into<LogValue>) -> &Self {
        self.log(Level::Error, message.as_ref(), Some(&data.into()))
    }

    /// Set or remove the user id sent with every record
    pub fn set_user_id(&mut self, user_id: Option<&str>) -> &mut Self {
        self.context.set_user_id(user_id.map(str::to_string));
        self
    }

    /// Derive an independent remote logger with an extended context
    pub fn child(&self, options: impl Into<ChildOptions>) -> RemoteLogger {
        RemoteLogger {
            context: self.context.overlay(&options.into()),
            transport: self.transport.clone(),
            dev_mode: self.dev_mode,
        }
    }
}

impl std::fmt::Debug for RemoteLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteLogger")
            .field("context", &self.context)
            .field("dev_mode", &self.dev_mode)
            .finish_non_exhaustive()
    }
}
