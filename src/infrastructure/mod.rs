//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and the watch source.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process` - `CommandRunner` on top of `std::process`
//! - `watch_source` - single-file change notifications via `notify`

pub mod process;
pub mod watch_source;

// Re-export for convenience
pub use process::StdCommandRunner;
pub use watch_source::{change_kind, NotifySource};
