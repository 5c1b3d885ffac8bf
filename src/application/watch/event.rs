//! Change notifications and dispatch state

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Operation kind attached to a change notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Write,
    Create,
    Remove,
    Rename,
    /// Metadata, access, or anything the backend could not classify
    Other,
}

/// A change reported by the watch source for the watched path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotification {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl ChangeNotification {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn is_write(&self) -> bool {
        self.kind == ChangeKind::Write
    }
}

/// One item of the watch source's stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Change(ChangeNotification),
    Error(String),
}

/// Debounce gate state, owned by the dispatcher
///
/// `last_dispatch` never moves backwards, even if a caller hands in an
/// earlier instant than one already recorded.
#[derive(Debug, Clone)]
pub struct DispatchState {
    last_dispatch: Option<Instant>,
    min_gap: Duration,
}

impl DispatchState {
    pub fn new(min_gap: Duration) -> Self {
        Self {
            last_dispatch: None,
            min_gap,
        }
    }

    pub fn min_gap(&self) -> Duration {
        self.min_gap
    }

    pub fn last_dispatch(&self) -> Option<Instant> {
        self.last_dispatch
    }

    /// Whether an event at `now` is outside the debounce window
    pub fn is_open(&self, now: Instant) -> bool {
        match self.last_dispatch {
            Some(last) => now.saturating_duration_since(last) >= self.min_gap,
            None => true,
        }
    }

    /// Record `now` as the latest accepted dispatch
    pub fn record(&mut self, now: Instant) {
        self.last_dispatch = Some(match self.last_dispatch {
            Some(last) => last.max(now),
            None => now,
        });
    }

    /// Pass the gate and record the dispatch, or reject without side effects
    pub fn try_accept(&mut self, now: Instant) -> bool {
        if !self.is_open(now) {
            return false;
        }
        self.record(now);
        true
    }
}
