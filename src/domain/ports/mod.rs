//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the dispatcher.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod watch_events;

pub use command_runner::{ChildProcess, CommandRunner, ProcessExit};
pub use watch_events::{NoopEventSink, WatchEvent, WatchEventSink};
