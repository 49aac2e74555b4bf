//! Best-effort plugin logging
//!
//! Plugin messages are one line each: `[<tag>] <yyyyMMdd HHmmss.fff>: <message>`,
//! timestamped in UTC. Logging never fails and never affects control flow.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

/// Destination for plugin log messages
pub trait LogSink {
    /// Record one message. Must not panic.
    fn log(&self, message: &str);
}

/// Sink that drops everything
///
/// Default for hosts that have not set up a logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _message: &str) {}
}

/// Tag-prefixed, timestamped lines forwarded to the `log` facade at info level
///
/// When no logger backend is installed the facade discards the record.
#[derive(Debug, Clone)]
pub struct TaggedLogger {
    tag: String,
}

impl TaggedLogger {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Format a line for the given instant
    pub fn format_line(&self, timestamp: DateTime<Utc>, message: &str) -> String {
        format!(
            "[{}] {}: {}",
            self.tag,
            timestamp.format("%Y%m%d %H%M%S%.3f"),
            message
        )
    }
}

impl Default for TaggedLogger {
    fn default() -> Self {
        Self::new("SpaceCam")
    }
}

impl LogSink for TaggedLogger {
    fn log(&self, message: &str) {
        log::info!(target: "spacecam", "{}", self.format_line(Utc::now(), message));
    }
}

/// Sink that keeps raw messages in memory
///
/// Clones share the same buffer, so a host can keep a handle while the
/// plugin owns the sink.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Whether any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line.contains(needle))
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl LogSink for MemorySink {
    fn log(&self, message: &str) {
        // A re-entrant log call while the buffer is borrowed is dropped
        if let Ok(mut lines) = self.lines.try_borrow_mut() {
            lines.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let logger = TaggedLogger::new("CSL");
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(logger.format_line(ts, "Connecting device"), "[CSL] 20240307 090502.042: Connecting device");
    }

    #[test]
    fn test_default_tag() {
        assert_eq!(TaggedLogger::default().tag(), "SpaceCam");
    }

    #[test]
    fn test_tagged_logger_without_backend() {
        // No logger installed in unit tests; must not panic
        TaggedLogger::default().log("hello");
    }

    #[test]
    fn test_null_sink() {
        NullSink.log("ignored");
    }

    #[test]
    fn test_memory_sink_shared_between_clones() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.log("Creating device");
        sink.log("Connecting device");

        assert_eq!(handle.lines(), vec!["Creating device", "Connecting device"]);
        assert!(handle.contains("Connecting"));

        handle.clear();
        assert!(sink.lines().is_empty());
    }
}
