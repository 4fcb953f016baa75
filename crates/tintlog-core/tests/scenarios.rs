//! End-to-end logging scenarios driven by `LOG_LEVEL`

use std::sync::{Arc, Mutex, MutexGuard};

use tintlog_core::{ChildOptions, ErrorValue, Level, LogValue, Logger, MemorySink, CIRCULAR};

// Tests in this file share the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard(level: Option<&str>) -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    match level {
        Some(value) => std::env::set_var("LOG_LEVEL", value),
        None => std::env::remove_var("LOG_LEVEL"),
    }
    guard
}

fn env_logger(module: &str) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::builder().module(module).sink(sink.clone()).build();
    (logger, sink)
}

fn counts(sink: &MemorySink) -> [usize; 4] {
    Level::ALL.map(|level| sink.count(level))
}

fn log_sequence(logger: &Logger) {
    logger
        .debug("debug message")
        .info("info message")
        .warn("warn message")
        .error("error message");
}

/// Finds `[MM/DD HH:MM:SS.mmm]` anywhere in the line
fn has_timestamp(line: &str) -> bool {
    const PATTERN: &[u8] = b"[dd/dd dd:dd:dd.ddd]";
    line.as_bytes().windows(PATTERN.len()).any(|window| {
        window.iter().zip(PATTERN).all(|(&c, &p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
    })
}

#[test]
fn test_default_configuration() {
    let _guard = env_guard(None);
    let (logger, sink) = env_logger("app");
    log_sequence(&logger);
    assert_eq!(counts(&sink), [0, 1, 1, 1]);
}

#[test]
fn test_warn_configuration() {
    let _guard = env_guard(Some("warn"));
    let (logger, sink) = env_logger("app");
    log_sequence(&logger);
    assert_eq!(counts(&sink), [0, 0, 1, 1]);
}

#[test]
fn test_debug_configuration() {
    let _guard = env_guard(Some("debug"));
    let (logger, sink) = env_logger("app");
    log_sequence(&logger);
    assert_eq!(counts(&sink), [1, 1, 1, 1]);
}

#[test]
fn test_level_name_is_case_insensitive() {
    let upper = {
        let _guard = env_guard(Some("ERROR"));
        let (logger, sink) = env_logger("app");
        log_sequence(&logger);
        counts(&sink)
    };
    let lower = {
        let _guard = env_guard(Some("error"));
        let (logger, sink) = env_logger("app");
        log_sequence(&logger);
        counts(&sink)
    };
    assert_eq!(upper, [0, 0, 0, 1]);
    assert_eq!(upper, lower);
}

#[test]
fn test_unrecognized_level_behaves_like_info() {
    let _guard = env_guard(Some("chatty"));
    let (logger, sink) = env_logger("app");
    log_sequence(&logger);
    assert_eq!(counts(&sink), [0, 1, 1, 1]);
}

#[test]
fn test_threshold_change_without_restart() {
    let _guard = env_guard(Some("error"));
    let (logger, sink) = env_logger("app");

    logger.info("hidden");
    std::env::set_var("LOG_LEVEL", "info");
    logger.info("shown");

    assert_eq!(sink.len(), 1);
    assert!(sink.last().unwrap().contains("shown"));
}

#[test]
fn test_child_logger_scenario() {
    let _guard = env_guard(None);
    let (logger, sink) = env_logger("app");

    logger.child(ChildOptions::new("auth")).info("User logged in");

    assert_eq!(sink.len(), 1);
    assert!(sink.last().unwrap().contains("[auth]"));
}

#[test]
fn test_user_id_set_then_cleared() {
    let _guard = env_guard(None);
    let (mut logger, sink) = env_logger("app");

    logger.set_user_id(Some("user-77")).info("signed in");
    logger.set_user_id(None).info("signed out");

    let lines = sink.lines_at(Level::Info);
    assert!(lines[0].contains("[user-77]"));
    assert!(!lines[1].contains("[user-77]"));
}

#[test]
fn test_timestamp_pattern() {
    let _guard = env_guard(Some("debug"));
    let (logger, sink) = env_logger("app");
    log_sequence(&logger);

    for (_, line) in sink.lines() {
        assert!(has_timestamp(&line), "no timestamp in {line:?}");
    }
}

#[test]
fn test_cyclic_debug_data() {
    let _guard = env_guard(Some("debug"));
    let (logger, sink) = env_logger("graph");

    let node = LogValue::object([("id", 1)]);
    let children = LogValue::list();
    children.push(node.clone());
    node.insert("children", children);

    logger.debug_with("walking graph", node);
    assert!(sink.last().unwrap().contains(CIRCULAR));
}

#[test]
fn test_error_includes_exception_stack() {
    let _guard = env_guard(None);
    let (logger, sink) = env_logger("payments");

    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "gateway timed out");
    let wrapped = ErrorValue::from_error(&io).with_stack("gateway timed out\n    at charge (payments.rs:120)");
    logger.error_with("charge failed", LogValue::object([("error", LogValue::from(wrapped))]));

    let line = sink.last().unwrap();
    assert!(line.contains("charge failed"));
    assert!(line.contains("at charge (payments.rs:120)"));
}

#[test]
fn test_has_timestamp_helper() {
    assert!(has_timestamp("\u{1b}[2m[01/31 23:59:59.999]\u{1b}[0m INFO"));
    assert!(!has_timestamp("[1/31 23:59:59.999]"));
    assert!(!has_timestamp("[01/31 23:59:59]"));
}
