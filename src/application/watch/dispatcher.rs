//! Event dispatcher
//!
//! Decides for each change notification whether to run the command chain,
//! then runs it under the configured [`ExecutionPolicy`]:
//!
//! | chain mode | `sync` | waits on                | stops on failure |
//! |------------|--------|-------------------------|------------------|
//! | none       | no     | nothing                 | no               |
//! | none/then  | yes    | every link but the last | no               |
//! | and        | yes    | every link but the last | yes              |
//! | and/then   | no     | every link              | and: yes         |
//!
//! Links that are not waited on are handed to a detached reaper thread that
//! reports their failure when it happens. The process may exit while those
//! links are still running.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::command::{ChainMode, CommandSpec};
use crate::domain::ports::{ChildProcess, CommandRunner, ProcessExit, WatchEvent, WatchEventSink};

use super::event::{ChangeNotification, DispatchState};

/// Chain mode combined with the synchronous-blocking flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionPolicy {
    pub chain: ChainMode,
    /// Wait on every link except the last, which is never waited on
    pub sync: bool,
}

impl ExecutionPolicy {
    pub fn new(chain: ChainMode, sync: bool) -> Self {
        Self { chain, sync }
    }

    /// Whether link `index` of a `len`-link chain is waited on before moving on
    pub fn waits_on(&self, index: usize, len: usize) -> bool {
        if self.sync {
            index + 1 < len
        } else {
            self.chain.is_sequential()
        }
    }

    /// Whether a failed link stops the rest of the chain
    pub fn stops_on_failure(&self) -> bool {
        self.chain.stops_on_failure()
    }
}

/// Result of one chain link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Waited on and exited successfully
    Succeeded,
    /// Waited on and exited unsuccessfully
    Failed { code: Option<i32> },
    /// Could not be started, or waiting on it failed
    Error { message: String },
    /// Started without waiting; failures are reported by the reaper thread
    Detached,
}

impl ExecutionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Error { .. })
    }
}

/// What the dispatcher did with a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchDecision {
    /// Not a write event
    Ignored,
    /// A write inside the debounce window
    Debounced,
    /// The chain ran; one outcome per link that was started, in order
    Dispatched(Vec<ExecutionOutcome>),
}

/// The event handler: debounce gate plus chain execution
pub struct Dispatcher {
    commands: Vec<CommandSpec>,
    policy: ExecutionPolicy,
    state: DispatchState,
    runner: Arc<dyn CommandRunner>,
    sink: Arc<dyn WatchEventSink>,
}

impl Dispatcher {
    pub fn new(
        commands: Vec<CommandSpec>,
        policy: ExecutionPolicy,
        state: DispatchState,
        runner: Arc<dyn CommandRunner>,
        sink: Arc<dyn WatchEventSink>,
    ) -> Self {
        Self {
            commands,
            policy,
            state,
            runner,
            sink,
        }
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn policy(&self) -> ExecutionPolicy {
        self.policy
    }

    pub fn state(&self) -> &DispatchState {
        &self.state
    }

    /// Handle one change notification observed at `now`.
    pub fn handle(&mut self, notification: &ChangeNotification, now: Instant) -> DispatchDecision {
        if !notification.is_write() {
            tracing::trace!(kind = ?notification.kind, path = %notification.path.display(), "ignoring non-write event");
            return DispatchDecision::Ignored;
        }

        // The gate is closed before any link starts so a slow chain cannot
        // reopen it.
        if !self.state.try_accept(now) {
            tracing::debug!(path = %notification.path.display(), "write event inside debounce window");
            return DispatchDecision::Debounced;
        }

        self.sink.on_event(WatchEvent::WriteDetected {
            path: notification.path.display().to_string(),
        });

        DispatchDecision::Dispatched(self.run_chain())
    }

    /// Run the chain once without an event, recording `now` as a dispatch.
    pub fn dispatch_now(&mut self, now: Instant) -> Vec<ExecutionOutcome> {
        self.state.record(now);
        self.run_chain()
    }

    fn run_chain(&self) -> Vec<ExecutionOutcome> {
        let len = self.commands.len();
        let mut outcomes = Vec::with_capacity(len);

        for (index, spec) in self.commands.iter().enumerate() {
            let outcome = self.run_link(index, spec, self.policy.waits_on(index, len));
            let failed = outcome.is_failure();
            outcomes.push(outcome);

            if failed && self.policy.stops_on_failure() {
                let skipped = len - index - 1;
                if skipped > 0 {
                    self.sink.on_event(WatchEvent::ChainStopped { index, skipped });
                }
                break;
            }
        }

        outcomes
    }

    fn run_link(&self, index: usize, spec: &CommandSpec, wait: bool) -> ExecutionOutcome {
        let command = spec.to_string();
        self.sink.on_event(WatchEvent::CommandStarted {
            index,
            command: command.clone(),
        });

        let mut child = match self.runner.spawn(spec) {
            Ok(child) => child,
            Err(e) => {
                let message = format!("failed to start '{}': {}", spec.program(), e);
                report_failure(self.sink.as_ref(), index, &command, &message);
                return ExecutionOutcome::Error { message };
            }
        };

        if !wait {
            detach(child, index, command, Arc::clone(&self.sink));
            return ExecutionOutcome::Detached;
        }

        match child.wait() {
            Ok(exit) if exit.success => ExecutionOutcome::Succeeded,
            Ok(exit) => {
                report_failure(self.sink.as_ref(), index, &command, &describe_exit(exit));
                ExecutionOutcome::Failed { code: exit.code }
            }
            Err(e) => {
                let message = format!("failed to wait on '{}': {}", spec.program(), e);
                report_failure(self.sink.as_ref(), index, &command, &message);
                ExecutionOutcome::Error { message }
            }
        }
    }
}

fn report_failure(sink: &dyn WatchEventSink, index: usize, command: &str, error: &str) {
    sink.on_event(WatchEvent::CommandFailed {
        index,
        command: command.to_string(),
        error: error.to_string(),
    });
}

fn describe_exit(exit: ProcessExit) -> String {
    match exit.code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Reap an unwaited child in the background, reporting a failed exit.
fn detach(mut child: Box<dyn ChildProcess>, index: usize, command: String, sink: Arc<dyn WatchEventSink>) {
    let spawned = thread::Builder::new()
        .name(format!("watchman-link-{index}"))
        .spawn(move || match child.wait() {
            Ok(exit) if exit.success => {
                tracing::debug!(index, command = %command, "background command finished");
            }
            Ok(exit) => report_failure(sink.as_ref(), index, &command, &describe_exit(exit)),
            Err(e) => report_failure(sink.as_ref(), index, &command, &format!("failed to wait: {e}")),
        });

    if let Err(e) = spawned {
        tracing::warn!(index, "could not start reaper thread: {e}");
    }
}
