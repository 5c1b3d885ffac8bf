//! Command Runner Port
//!
//! The process execution capability the dispatcher depends on: start a
//! program from a [`CommandSpec`] and optionally wait for it to finish.

use std::io;

use crate::command::CommandSpec;

/// How a finished child process exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Whether the process reported success
    pub success: bool,
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failure(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

/// A started child process
pub trait ChildProcess: Send {
    /// Block until the process finishes
    fn wait(&mut self) -> io::Result<ProcessExit>;
}

/// Trait for starting processes
///
/// Implementations:
/// - StdCommandRunner: `std::process::Command` with the captured environment
/// - test doubles that script exit codes per program
pub trait CommandRunner: Send + Sync {
    /// Start the command without waiting for it
    fn spawn(&self, spec: &CommandSpec) -> io::Result<Box<dyn ChildProcess>>;
}
