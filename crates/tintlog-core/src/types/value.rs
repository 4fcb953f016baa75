//! Semi-structured values attached to log records
//!
//! `LogValue` is a closed set of shapes that can always be rendered:
//! scalars, maps, lists and captured errors. Maps and lists are shared,
//! interior-mutable nodes, so a value graph may reference itself. The
//! formatter detects such cycles instead of recursing forever.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Shared map node
pub type SharedMap = Arc<RwLock<BTreeMap<String, LogValue>>>;

/// Shared list node
pub type SharedList = Arc<RwLock<Vec<LogValue>>>;

/// A value that can be attached to a log record as data or context
#[derive(Clone, Default)]
pub enum LogValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Map(SharedMap),
    List(SharedList),
    Error(ErrorValue),
}

impl LogValue {
    /// Create an empty map node
    pub fn map() -> Self {
        LogValue::Map(Arc::new(RwLock::new(BTreeMap::new())))
    }

    /// Create an empty list node
    pub fn list() -> Self {
        LogValue::List(Arc::new(RwLock::new(Vec::new())))
    }

    /// Create a map node from key/value pairs
    ///
    /// ```
    /// use tintlog_core::LogValue;
    ///
    /// let data = LogValue::object([("route", LogValue::from("/login")), ("status", 200.into())]);
    /// assert!(data.get("route").is_some());
    /// ```
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<LogValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<BTreeMap<_, _>>();
        LogValue::Map(Arc::new(RwLock::new(map)))
    }

    /// Capture a Rust error, including its source chain
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        LogValue::Error(ErrorValue::from_error(err))
    }

    /// Insert a field into a map node. Returns false if this is not a map.
    ///
    /// The node is shared, so every clone of this value observes the insert.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<LogValue>) -> bool {
        match self {
            LogValue::Map(map) => {
                map.write().insert(key.into(), value.into());
                true
            }
            _ => false,
        }
    }

    /// Append an item to a list node. Returns false if this is not a list.
    pub fn push(&self, value: impl Into<LogValue>) -> bool {
        match self {
            LogValue::List(list) => {
                list.write().push(value.into());
                true
            }
            _ => false,
        }
    }

    /// Look up a field of a map node
    pub fn get(&self, key: &str) -> Option<LogValue> {
        match self {
            LogValue::Map(map) => map.read().get(key).cloned(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, LogValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LogValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            LogValue::Error(e) => Some(e),
            _ => None,
        }
    }

    /// The error carried by this value, either directly or under an `error` field
    pub fn carried_error(&self) -> Option<ErrorValue> {
        match self {
            LogValue::Error(e) => Some(e.clone()),
            LogValue::Map(map) => map.read().get("error").and_then(|v| v.as_error().cloned()),
            _ => None,
        }
    }
}

// Map and list nodes may be cyclic, so Debug never descends into them.
impl std::fmt::Debug for LogValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogValue::Null => f.write_str("Null"),
            LogValue::Bool(b) => write!(f, "Bool({b})"),
            LogValue::Int(i) => write!(f, "Int({i})"),
            LogValue::Float(x) => write!(f, "Float({x})"),
            LogValue::String(s) => write!(f, "String({s:?})"),
            LogValue::Map(map) => write!(f, "Map({:p})", Arc::as_ptr(map)),
            LogValue::List(list) => write!(f, "List({:p})", Arc::as_ptr(list)),
            LogValue::Error(e) => write!(f, "Error({:?})", e.message()),
        }
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::String(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::String(s)
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::String(s.clone())
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<u32> for LogValue {
    fn from(i: u32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<u64> for LogValue {
    fn from(i: u64) -> Self {
        i64::try_from(i).map(LogValue::Int).unwrap_or(LogValue::Float(i as f64))
    }
}

impl From<usize> for LogValue {
    fn from(i: usize) -> Self {
        LogValue::from(i as u64)
    }
}

impl From<f64> for LogValue {
    fn from(x: f64) -> Self {
        LogValue::Float(x)
    }
}

impl From<ErrorValue> for LogValue {
    fn from(e: ErrorValue) -> Self {
        LogValue::Error(e)
    }
}

impl<T: Into<LogValue>> From<Option<T>> for LogValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(LogValue::Null)
    }
}

impl<T: Into<LogValue>> From<Vec<T>> for LogValue {
    fn from(items: Vec<T>) -> Self {
        let items = items.into_iter().map(Into::into).collect::<Vec<_>>();
        LogValue::List(Arc::new(RwLock::new(items)))
    }
}

impl From<BTreeMap<String, LogValue>> for LogValue {
    fn from(map: BTreeMap<String, LogValue>) -> Self {
        LogValue::Map(Arc::new(RwLock::new(map)))
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => LogValue::Null,
            Value::Bool(b) => LogValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => LogValue::Int(i),
                None => LogValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => LogValue::String(s),
            Value::Array(items) => items.into_iter().map(LogValue::from).collect::<Vec<_>>().into(),
            Value::Object(fields) => fields
                .into_iter()
                .map(|(k, v)| (k, LogValue::from(v)))
                .collect::<BTreeMap<_, _>>()
                .into(),
        }
    }
}

/// A captured error: its message and, when available, a stack-like trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    message: String,
    stack: Option<String>,
}

impl ErrorValue {
    /// Create an error value from a message alone
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: None,
        }
    }

    /// Attach trace text
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Capture an error with its `source()` chain and, if enabled, a backtrace
    ///
    /// The backtrace is taken here, when the error is captured for logging,
    /// so it points at the capturing call site rather than where the error
    /// was raised. It is only recorded when `RUST_BACKTRACE` or
    /// `RUST_LIB_BACKTRACE` enables it.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let message = err.to_string();
        let mut trace = message.clone();
        let mut has_trace = false;

        let mut source = err.source();
        while let Some(cause) = source {
            trace.push_str("\n    Caused by: ");
            trace.push_str(&cause.to_string());
            has_trace = true;
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            trace.push('\n');
            trace.push_str(&backtrace.to_string());
            has_trace = true;
        }

        Self {
            message,
            stack: has_trace.then_some(trace),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// The trace if one was captured, otherwise the message
    pub fn stack_or_message(&self) -> &str {
        self.stack.as_deref().unwrap_or(&self.message)
    }
}

impl std::fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
