//! Watch Use Case
//!
//! Runs commands whenever the watched file is written. It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - A debounce gate (`--ms-gap`, off by default)
//! - Chain execution under an [`ExecutionPolicy`]
//!
//! ## Architecture
//!
//! - `WatchUseCase` - Builds the chain, registers the file, runs the loop
//! - `Dispatcher` - Decides per notification whether and how to run the chain
//! - `DispatchState` - Debounce gate, written only by the dispatcher
//!
//! ## Usage
//!
//! ```ignore
//! let config = WatchConfig::new("notes.txt", "make && make test")?
//!     .with_chain_mode(ChainMode::And);
//! let use_case = WatchUseCase::new(config);
//! use_case.start(running, Arc::new(StdCommandRunner), sink)?;
//! ```

mod dispatcher;
mod event;
mod use_case;


pub use dispatcher::{DispatchDecision, Dispatcher, ExecutionOutcome, ExecutionPolicy};
pub use event::{ChangeKind, ChangeNotification, DispatchState, Notification};
pub use use_case::{run_loop, WatchUseCase, POLL_INTERVAL_MS};
