//! In-memory sink

use parking_lot::Mutex;

use super::traits::LogSink;
use crate::types::Level;

/// A sink that keeps every line it receives
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    /// Create an empty memory sink
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// All recorded lines, in write order
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().clone()
    }

    /// Lines written at `level`
    pub fn lines_at(&self, level: Level) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Number of writes at `level`
    pub fn count(&self, level: Level) -> usize {
        self.lines.lock().iter().filter(|(l, _)| *l == level).count()
    }

    /// Total number of writes
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// The most recent line, if any
    pub fn last(&self) -> Option<String> {
        self.lines.lock().last().map(|(_, line)| line.clone())
    }

    /// Forget all recorded lines
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: Level, line: &str) {
        self.lines.lock().push((level, line.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write(Level::Info, "one");
        sink.write(Level::Error, "two");
        sink.write(Level::Info, "three");

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.count(Level::Info), 2);
        assert_eq!(sink.lines_at(Level::Error), vec!["two".to_string()]);
        assert_eq!(sink.last().as_deref(), Some("three"));

        sink.clear();
        assert!(sink.is_empty());
    }
}
