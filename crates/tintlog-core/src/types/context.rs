//! Logger context: module name, user id and extra fields

use std::collections::BTreeMap;

use super::value::LogValue;

/// Module name used when none is given
pub const DEFAULT_MODULE: &str = "app";

/// Reserved context key for the module name
pub const MODULE_KEY: &str = "module";

/// Reserved context key for the user id
pub const USER_ID_KEY: &str = "userId";

fn normalize_module(module: impl Into<String>) -> String {
    let module = module.into();
    if module.trim().is_empty() {
        DEFAULT_MODULE.to_string()
    } else {
        module
    }
}

/// Context carried by a logger and printed with each record
///
/// The module is never empty. A cleared user id is absent, not stored as
/// a null value.
#[derive(Debug, Clone)]
pub struct LogContext {
    module: String,
    user_id: Option<String>,
    extra: BTreeMap<String, LogValue>,
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE)
    }
}

impl LogContext {
    /// Create a context for a module
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: normalize_module(module),
            user_id: None,
            extra: BTreeMap::new(),
        }
    }

    /// Add a field (builder style)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<LogValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set the user id (builder style)
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Set or clear the user id
    pub fn set_user_id(&mut self, user_id: Option<String>) {
        self.user_id = user_id;
    }

    /// Insert a field. The reserved keys `module` and `userId` update the
    /// corresponding slots; a non-string `userId` clears it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<LogValue>) {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            MODULE_KEY => {
                if let Some(module) = value.as_str() {
                    self.module = normalize_module(module);
                }
            }
            USER_ID_KEY => self.user_id = value.as_str().map(str::to_string),
            _ => {
                self.extra.insert(key, value);
            }
        }
    }

    /// Look up an extra field
    pub fn get(&self, key: &str) -> Option<&LogValue> {
        self.extra.get(key)
    }

    /// Extra fields, excluding the reserved keys
    pub fn extra(&self) -> &BTreeMap<String, LogValue> {
        &self.extra
    }

    /// Copy of this context overlaid by child options
    pub fn overlay(&self, options: &ChildOptions) -> LogContext {
        let mut merged = self.clone();
        merged.module = normalize_module(options.module.clone());
        if let Some(user_id) = &options.user_id {
            merged.user_id = user_id.clone();
        }
        for (key, value) in &options.extra {
            merged.extra.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Whether there is anything besides the module
    pub fn is_bare(&self) -> bool {
        self.user_id.is_none() && self.extra.is_empty()
    }

    /// Fields other than `module` as a fresh map value
    pub fn to_value_without_module(&self) -> LogValue {
        let mut map = self.extra.clone();
        if let Some(user_id) = &self.user_id {
            map.insert(USER_ID_KEY.to_string(), LogValue::from(user_id));
        }
        LogValue::from(map)
    }

    /// All fields, including `module`, as a fresh map value
    pub fn to_value(&self) -> LogValue {
        let value = self.to_value_without_module();
        value.insert(MODULE_KEY, self.module.as_str());
        value
    }
}

/// Options for deriving a child logger
///
/// ```
/// use tintlog_core::ChildOptions;
///
/// let options = ChildOptions::new("auth").with("requestId", "r-42");
/// assert_eq!(options.module(), "auth");
/// ```
#[derive(Debug, Clone)]
pub struct ChildOptions {
    module: String,
    // None inherits the parent's user id, Some(None) clears it
    user_id: Option<Option<String>>,
    extra: BTreeMap<String, LogValue>,
}

impl ChildOptions {
    /// Options for a child bound to `module`
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            user_id: None,
            extra: BTreeMap::new(),
        }
    }

    /// Override the user id for the child
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(Some(user_id.into()));
        self
    }

    /// Remove the inherited user id from the child
    pub fn clear_user_id(mut self) -> Self {
        self.user_id = Some(None);
        self
    }

    /// Add a field to the child's context
    pub fn with(mut self, key: impl Into<String>, value: impl Into<LogValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            MODULE_KEY => {
                if let Some(module) = value.as_str() {
                    self.module = module.to_string();
                }
            }
            USER_ID_KEY => self.user_id = Some(value.as_str().map(str::to_string)),
            _ => {
                self.extra.insert(key, value);
            }
        }
        self
    }

    pub fn module(&self) -> &str {
        &self.module
    }
}

impl From<&str> for ChildOptions {
    fn from(module: &str) -> Self {
        ChildOptions::new(module)
    }
}

impl From<String> for ChildOptions {
    fn from(module: String) -> Self {
        ChildOptions::new(module)
    }
}
