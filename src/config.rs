//! Watch configuration
//!
//! Built once at startup from the CLI flags and passed by value into the
//! watch use case. Nothing here changes after construction.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::watch::ExecutionPolicy;
use crate::command::ChainMode;
use crate::error::{WatchmanError, WatchmanResult};

/// Resolved configuration for one watch session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    file: PathBuf,
    command: String,
    chain_mode: ChainMode,
    min_gap: Duration,
    run_at_start: bool,
    sync: bool,
}

impl WatchConfig {
    /// Create a configuration for `file` and `command`; both must be non-empty.
    pub fn new(file: impl Into<PathBuf>, command: impl Into<String>) -> WatchmanResult<Self> {
        let file = file.into();
        let command = command.into();

        if file.as_os_str().is_empty() {
            return Err(WatchmanError::MissingFile);
        }
        if command.is_empty() {
            return Err(WatchmanError::MissingCommand);
        }

        Ok(Self {
            file,
            command,
            chain_mode: ChainMode::None,
            min_gap: Duration::ZERO,
            run_at_start: false,
            sync: false,
        })
    }

    /// Set the chain mode
    pub fn with_chain_mode(mut self, chain_mode: ChainMode) -> Self {
        self.chain_mode = chain_mode;
        self
    }

    /// Set the debounce window
    pub fn with_min_gap(mut self, min_gap: Duration) -> Self {
        self.min_gap = min_gap;
        self
    }

    /// Run the chain once before watching begins
    pub fn with_run_at_start(mut self, run_at_start: bool) -> Self {
        self.run_at_start = run_at_start;
        self
    }

    /// Enable the synchronous-blocking variant
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn chain_mode(&self) -> ChainMode {
        self.chain_mode
    }

    pub fn min_gap(&self) -> Duration {
        self.min_gap
    }

    pub fn run_at_start(&self) -> bool {
        self.run_at_start
    }

    pub fn sync(&self) -> bool {
        self.sync
    }

    pub fn policy(&self) -> ExecutionPolicy {
        ExecutionPolicy::new(self.chain_mode, self.sync)
    }
}
