//! Application Layer
//!
//! Use cases that orchestrate the watch flow.
//! This layer:
//! - Depends on the command module and the domain ports
//! - Coordinates between Infrastructure and the ports
//!
//! ## Use Cases
//!
//! - `WatchUseCase` - Watch one file and dispatch the command chain on writes

pub mod watch;

pub use watch::{Dispatcher, ExecutionPolicy, WatchUseCase};
