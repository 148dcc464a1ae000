use std::sync::Mutex;

/// Receives warnings produced while gating features.
///
/// The checker calls `warn` without holding its cache lock, so a sink may
/// query the checker again.
pub trait WarningSink {
    /// Record a single warning line
    fn warn(&self, message: &str);
}

/// Build the warning emitted when a feature path is unavailable
pub fn exclusion_notice(path: &str) -> String {
    format!("[WARNING] {} not found, this feature is excluded from this build.", path)
}

/// Sink that forwards warnings to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl WarningSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!(target: "featgate", "{}", message);
    }
}

/// Sink that keeps every warning in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded warnings, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
