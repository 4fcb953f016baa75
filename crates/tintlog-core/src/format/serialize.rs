//! Cycle-tolerant serialization of log payloads

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{Map, Number, Value};

use crate::types::{LogContext, LogValue};

/// Placeholder for a node that was already visited in the same serialization
pub const CIRCULAR: &str = "[Circular]";

/// Reasons a payload cannot be turned into JSON
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("non-finite number {0}")]
    NonFinite(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// Walks a value graph once. Each map or list node is emitted the first
/// time it is reached and replaced by [`CIRCULAR`] afterwards.
#[derive(Default)]
struct Walker {
    seen: HashSet<usize>,
}

impl Walker {
    fn first_visit<T>(&mut self, node: &Arc<T>) -> bool {
        self.seen.insert(Arc::as_ptr(node) as *const () as usize)
    }

    fn walk(&mut self, value: &LogValue) -> SerializeResult<Value> {
        Ok(match value {
            LogValue::Null => Value::Null,
            LogValue::Bool(b) => Value::Bool(*b),
            LogValue::Int(i) => Value::Number((*i).into()),
            LogValue::Float(x) => Value::Number(Number::from_f64(*x).ok_or(SerializeError::NonFinite(*x))?),
            LogValue::String(s) => Value::String(s.clone()),
            LogValue::Map(node) => {
                if !self.first_visit(node) {
                    return Ok(Value::String(CIRCULAR.to_string()));
                }
                let entries = node.read();
                let mut object = Map::with_capacity(entries.len());
                for (key, item) in entries.iter() {
                    object.insert(key.clone(), self.walk(item)?);
                }
                Value::Object(object)
            }
            LogValue::List(node) => {
                if !self.first_visit(node) {
                    return Ok(Value::String(CIRCULAR.to_string()));
                }
                let items = node.read();
                let mut array = Vec::with_capacity(items.len());
                for item in items.iter() {
                    array.push(self.walk(item)?);
                }
                Value::Array(array)
            }
            LogValue::Error(err) => {
                let mut object = Map::new();
                object.insert("message".to_string(), Value::String(err.message().to_string()));
                if let Some(stack) = err.stack() {
                    object.insert("stack".to_string(), Value::String(stack.to_string()));
                }
                Value::Object(object)
            }
        })
    }
}

/// Convert a value to JSON with a fresh visited set
pub fn to_json(value: &LogValue) -> SerializeResult<Value> {
    Walker::default().walk(value)
}

/// Pretty-printed JSON (2-space indentation)
pub fn to_pretty_json(value: &LogValue) -> SerializeResult<String> {
    Ok(serde_json::to_string_pretty(&to_json(value)?)?)
}

/// Text block for a payload. Never fails.
///
/// A value that is, or carries under `error`, a captured error renders as
/// its stack trace. Anything that cannot be serialized renders as a
/// bracketed diagnostic.
pub fn render_payload(value: &LogValue) -> String {
    if let Some(err) = value.carried_error() {
        return err.stack_or_message().to_string();
    }
    match to_pretty_json(value) {
        Ok(text) => text,
        Err(e) => format!("[Unserializable payload: {e}]"),
    }
}

/// Data merged with the context (minus `module`), as attached to error records
///
/// Data fields come first and win key conflicts; non-map data is kept
/// under `data`.
pub fn error_payload(data: Option<&LogValue>, context: &LogContext) -> LogValue {
    let combined = context.to_value_without_module();
    match data {
        Some(LogValue::Map(node)) => {
            for (key, item) in node.read().iter() {
                combined.insert(key.clone(), item.clone());
            }
        }
        Some(LogValue::Null) | None => {}
        Some(other) => {
            combined.insert("data", other.clone());
        }
    }
    combined
}
