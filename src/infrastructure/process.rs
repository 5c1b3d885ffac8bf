//! Process runner backed by `std::process`
//!
//! Children inherit stdio from the watcher and run with exactly the
//! environment snapshot stored in their [`CommandSpec`].

use std::io;
use std::process::{Child, Command};

use crate::command::CommandSpec;
use crate::domain::ports::{ChildProcess, CommandRunner, ProcessExit};

/// Runs commands as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct StdCommandRunner;

impl StdCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for StdCommandRunner {
    fn spawn(&self, spec: &CommandSpec) -> io::Result<Box<dyn ChildProcess>> {
        let child = Command::new(spec.program())
            .args(spec.args())
            .env_clear()
            .envs(spec.env().iter().map(|(key, value)| (key, value)))
            .spawn()?;

        tracing::debug!(pid = child.id(), program = spec.program(), "spawned");
        Ok(Box::new(StdChild(child)))
    }
}

struct StdChild(Child);

impl ChildProcess for StdChild {
    fn wait(&mut self) -> io::Result<ProcessExit> {
        let status = self.0.wait()?;
        Ok(ProcessExit {
            success: status.success(),
            code: status.code(),
        })
    }
}
