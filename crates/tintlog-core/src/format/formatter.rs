//! Single-line rendering of log events

use super::color::{paint_level, paint_module, paint_timestamp, paint_user};
use super::serialize::{error_payload, render_payload};
use crate::types::{Level, LogEvent};

/// Width of the level column
pub const LABEL_WIDTH: usize = 5;

/// Timestamp layout: `MM/DD HH:MM:SS.mmm`, local time
pub const TIMESTAMP_FORMAT: &str = "%m/%d %H:%M:%S%.3f";

/// Renders log events as
/// `[MM/DD HH:MM:SS.mmm] LEVEL [module] [userId] message`,
/// followed by payload blocks on their own lines.
///
/// Rendering is pure and never fails. The output has no trailing newline.
#[derive(Debug, Clone)]
pub struct Formatter {
    label_width: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            label_width: LABEL_WIDTH,
        }
    }

    /// Use a different level column width. Longer labels are truncated.
    pub fn with_label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    /// Render one event
    pub fn render(&self, event: &LogEvent<'_>) -> String {
        let timestamp = event.timestamp.format(TIMESTAMP_FORMAT).to_string();
        let context = event.context;

        let mut line = format!(
            "{} {} {}",
            paint_timestamp(&timestamp),
            paint_level(event.level, &self.label(event.level)),
            paint_module(context.module()),
        );
        if let Some(user_id) = context.user_id() {
            line.push(' ');
            line.push_str(&paint_user(user_id).to_string());
        }
        line.push(' ');
        line.push_str(event.message);

        for block in self.payload_blocks(event) {
            line.push('\n');
            line.push_str(&block);
        }
        line
    }

    fn label(&self, level: Level) -> String {
        let label: String = level.label().chars().take(self.label_width).collect();
        format!("{label:<width$}", width = self.label_width)
    }

    fn payload_blocks(&self, event: &LogEvent<'_>) -> Vec<String> {
        let context = event.context;
        // Null data counts as absent
        let data = event.data.filter(|data| !data.is_null());
        match event.level {
            Level::Debug => {
                let mut blocks = Vec::new();
                if !context.is_bare() {
                    blocks.push(render_payload(&context.to_value_without_module()));
                }
                if let Some(data) = data {
                    blocks.push(render_payload(data));
                }
                blocks
            }
            Level::Error => {
                let block = match data.and_then(|data| data.carried_error()) {
                    Some(err) => err.stack_or_message().to_string(),
                    None => render_payload(&error_payload(data, context)),
                };
                vec![block]
            }
            Level::Info | Level::Warn => data.map(render_payload).into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CIRCULAR;
    use crate::types::{ErrorValue, LogContext, LogValue};
    use chrono::{Local, TimeZone};

    fn fixed_time() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap() + chrono::Duration::milliseconds(45)
    }

    fn render(level: Level, ctx: &LogContext, message: &str, data: Option<&LogValue>) -> String {
        let event = LogEvent::now(level, message, data, ctx).at(fixed_time());
        Formatter::new().render(&event)
    }

    #[test]
    fn test_prefix_parts() {
        let ctx = LogContext::new("auth");
        let line = render(Level::Info, &ctx, "User logged in", None);

        assert!(line.contains("[03/07 09:05:02.045]"));
        assert!(line.contains("INFO"));
        assert!(line.contains("[auth]"));
        assert!(line.ends_with("User logged in"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_label_width() {
        let formatter = Formatter::new();
        assert_eq!(formatter.label(Level::Info), "INFO ");
        assert_eq!(formatter.label(Level::Error), "ERROR");

        let narrow = Formatter::new().with_label_width(3);
        assert_eq!(narrow.label(Level::Debug), "DEB");
    }

    #[test]
    fn test_user_tag_only_when_present() {
        let ctx = LogContext::new("api").with_user_id("u-42");
        assert!(render(Level::Warn, &ctx, "slow", None).contains("[u-42]"));

        let ctx = LogContext::new("api");
        let line = render(Level::Warn, &ctx, "slow", None);
        assert!(!line.contains("[]"));
    }

    #[test]
    fn test_info_payload_only_with_data() {
        let ctx = LogContext::new("api").with_user_id("u-1");
        assert!(!render(Level::Info, &ctx, "hello", None).contains('\n'));

        let data = LogValue::object([("items", 3)]);
        let line = render(Level::Info, &ctx, "hello", Some(&data));
        assert!(line.contains("hello\n{\n  \"items\": 3\n}"));
        assert!(!line.contains("\"userId\""));
    }

    #[test]
    fn test_null_data_has_no_payload_block() {
        let ctx = LogContext::new("api");
        let none = LogValue::from(None::<LogValue>);

        assert!(!render(Level::Info, &ctx, "hello", Some(&none)).contains('\n'));
        assert!(!render(Level::Warn, &ctx, "hello", Some(&LogValue::Null)).contains('\n'));
        assert!(!render(Level::Debug, &ctx, "hello", Some(&none)).contains('\n'));
        assert!(render(Level::Error, &ctx, "hello", Some(&none)).ends_with("hello\n{}"));
    }

    #[test]
    fn test_debug_payload_includes_context_and_data() {
        let ctx = LogContext::new("api").with("requestId", "r-9");
        let data = LogValue::object([("query", "select 1")]);
        let line = render(Level::Debug, &ctx, "running", Some(&data));

        assert!(line.contains("\"requestId\": \"r-9\""));
        assert!(line.contains("\"query\": \"select 1\""));
        assert!(!line.contains("\"module\""));

        let bare = LogContext::new("api");
        assert!(!render(Level::Debug, &bare, "quiet", None).contains('\n'));
    }

    #[test]
    fn test_error_always_carries_context() {
        let ctx = LogContext::new("api").with_user_id("u-7");
        let line = render(Level::Error, &ctx, "failed", None);
        assert!(line.contains("\"userId\": \"u-7\""));
        assert!(!line.contains("\"module\""));

        let bare = LogContext::new("api");
        assert!(render(Level::Error, &bare, "failed", None).ends_with("failed\n{}"));
    }

    #[test]
    fn test_error_stack_replaces_payload() {
        let ctx = LogContext::new("api").with_user_id("u-7");
        let err = ErrorValue::new("boom").with_stack("Error: boom\n    at checkout (cart.rs:88)");
        let data = LogValue::object([("error", LogValue::from(err))]);

        let line = render(Level::Error, &ctx, "checkout failed", Some(&data));
        assert!(line.contains("at checkout (cart.rs:88)"));
    }

    #[test]
    fn test_cyclic_debug_data() {
        let ctx = LogContext::new("api");
        let data = LogValue::object([("id", 1)]);
        data.insert("parent", data.clone());

        let line = render(Level::Debug, &ctx, "graph", Some(&data));
        assert!(line.contains(CIRCULAR));
    }
}
