//! Watch Event Port
//!
//! Reporting channel for the watch loop and dispatcher. Sinks render events
//! for humans, as NDJSON, or not at all; reporting never fails.

use serde::Serialize;

use crate::command::ChainMode;

/// Event emitted while watching and dispatching
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// A resolved chain link, reported once at startup
    CommandPlanned { index: usize, command: String },

    /// The watch source is registered
    WatchStarted {
        path: String,
        chain_mode: ChainMode,
        min_gap_ms: u64,
        sync: bool,
    },

    /// A write event passed the debounce gate
    WriteDetected { path: String },

    /// A chain link is being started
    CommandStarted { index: usize, command: String },

    /// A chain link failed to start or exited unsuccessfully
    CommandFailed {
        index: usize,
        command: String,
        error: String,
    },

    /// An `&&` chain stopped early; `skipped` links were never started
    ChainStopped { index: usize, skipped: usize },

    /// The watch source reported an error
    WatchError { message: String },

    /// The watch loop is exiting
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Trait for receiving watch events
///
/// Sinks are shared with background threads that reap unwaited commands, so
/// they must be `Send + Sync`. Any `Fn(WatchEvent)` closure is a sink.
pub trait WatchEventSink: Send + Sync {
    fn on_event(&self, event: WatchEvent);
}

impl<F> WatchEventSink for F
where
    F: Fn(WatchEvent) + Send + Sync,
{
    fn on_event(&self, event: WatchEvent) {
        self(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl WatchEventSink for NoopEventSink {
    fn on_event(&self, _event: WatchEvent) {}
}
