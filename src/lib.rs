//! Watchman - run commands when a file is written
//!
//! Watchman watches a single file and, on every write, runs one or more
//! commands derived from a single command string. Links can be independent,
//! chained with `&&` (each needs the previous one to succeed) or with `;`
//! (each runs regardless), with optional debouncing and synchronous blocking.

pub mod application;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::watch::{
    ChangeKind, ChangeNotification, DispatchDecision, DispatchState, Dispatcher, ExecutionOutcome,
    ExecutionPolicy, Notification, WatchUseCase,
};
pub use command::{build_commands, split_chain, tokenize, ChainMode, CommandSpec};
pub use config::WatchConfig;
pub use domain::ports::{CommandRunner, NoopEventSink, WatchEvent, WatchEventSink};
pub use error::{WatchmanError, WatchmanResult};
pub use infrastructure::{NotifySource, StdCommandRunner};
