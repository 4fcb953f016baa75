//! Relay wire format
//!
//! ```json
//! { "level": "info", "message": "...", "data": { ... },
//!   "context": { "module": "checkout", "userId": "u-1", "extra": "..." } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format::to_json;
use crate::types::{Level, LogContext, LogValue};

fn json_or_diagnostic(value: &LogValue) -> Value {
    to_json(value).unwrap_or_else(|e| Value::String(format!("[Unserializable payload: {e}]")))
}

/// One client-side log call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayPayload {
    pub level: Level,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default)]
    pub context: RelayContext,
}

impl RelayPayload {
    /// Build a payload from a log call. Never fails: unserializable data
    /// is replaced by a diagnostic string.
    pub fn from_parts(level: Level, message: &str, data: Option<&LogValue>, context: &LogContext) -> Self {
        Self {
            level,
            message: message.to_string(),
            data: data.map(json_or_diagnostic),
            context: RelayContext::from(context),
        }
    }

    /// The data as a log value
    pub fn data_value(&self) -> Option<LogValue> {
        self.data.clone().map(LogValue::from)
    }
}

/// Context as sent on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelayContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RelayContext {
    /// Rebuild a logger context; a missing module becomes `app`
    pub fn to_log_context(&self) -> LogContext {
        let mut context = LogContext::new(self.module.clone().unwrap_or_default());
        context.set_user_id(self.user_id.clone());
        for (key, value) in &self.extra {
            context.insert(key.clone(), LogValue::from(value.clone()));
        }
        context
    }
}

impl From<&LogContext> for RelayContext {
    fn from(context: &LogContext) -> Self {
        Self {
            module: Some(context.module().to_string()),
            user_id: context.user_id().map(str::to_string),
            extra: context
                .extra()
                .iter()
                .map(|(key, value)| (key.clone(), json_or_diagnostic(value)))
                .collect(),
        }
    }
}
