//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::command::{build_commands, split_chain};
use crate::config::WatchConfig;
use crate::domain::ports::{CommandRunner, WatchEvent, WatchEventSink};
use crate::error::{WatchmanError, WatchmanResult};
use crate::infrastructure::NotifySource;

use super::dispatcher::Dispatcher;
use super::event::{DispatchState, Notification};

/// How long the loop waits for a notification before re-checking `running`
pub const POLL_INTERVAL_MS: u64 = 50;

/// Watch Use Case
///
/// Builds the command chain, registers the watched file and feeds every
/// notification to the [`Dispatcher`]. This is the entry point for the
/// `watchman` binary.
pub struct WatchUseCase {
    config: WatchConfig,
}

impl WatchUseCase {
    pub fn new(config: WatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Report the resolved links and build the dispatcher.
    ///
    /// Parse errors are returned before anything is watched or started.
    pub fn prepare(
        &self,
        runner: Arc<dyn CommandRunner>,
        sink: Arc<dyn WatchEventSink>,
    ) -> WatchmanResult<Dispatcher> {
        for (index, link) in split_chain(self.config.command(), self.config.chain_mode())
            .into_iter()
            .enumerate()
        {
            sink.on_event(WatchEvent::CommandPlanned {
                index,
                command: link.to_string(),
            });
        }

        let commands = build_commands(self.config.command(), self.config.chain_mode())?;
        tracing::debug!(links = commands.len(), "built command chain");

        Ok(Dispatcher::new(
            commands,
            self.config.policy(),
            DispatchState::new(self.config.min_gap()),
            runner,
            sink,
        ))
    }

    /// Start watching (blocking)
    ///
    /// The startup run, if enabled, completes its waited links before the
    /// file is registered, so writes it makes are not seen as changes.
    /// Blocks until `running` is cleared or the watch source goes away.
    pub fn start(
        &self,
        running: Arc<AtomicBool>,
        runner: Arc<dyn CommandRunner>,
        sink: Arc<dyn WatchEventSink>,
    ) -> WatchmanResult<()> {
        let mut dispatcher = self.prepare(runner, Arc::clone(&sink))?;

        if self.config.run_at_start() {
            dispatcher.dispatch_now(Instant::now());
        }

        let source = NotifySource::new(self.config.file())?;

        sink.on_event(WatchEvent::WatchStarted {
            path: self.config.file().display().to_string(),
            chain_mode: self.config.chain_mode(),
            min_gap_ms: u64::try_from(self.config.min_gap().as_millis()).unwrap_or(u64::MAX),
            sync: self.config.sync(),
        });

        run_loop(source.receiver(), &mut dispatcher, &running, sink.as_ref())
    }
}

/// Feed notifications from `rx` to the dispatcher until `running` is cleared.
///
/// Source errors are reported and the loop continues; a disconnected channel
/// is fatal.
pub fn run_loop(
    rx: &Receiver<Notification>,
    dispatcher: &mut Dispatcher,
    running: &AtomicBool,
    sink: &dyn WatchEventSink,
) -> WatchmanResult<()> {
    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(Duration::from_millis(POLL_INTERVAL_MS)) {
            Ok(Notification::Change(change)) => {
                let decision = dispatcher.handle(&change, Instant::now());
                tracing::trace!(?decision, "handled notification");
            }
            Ok(Notification::Error(message)) => {
                sink.on_event(WatchEvent::WatchError { message });
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Err(WatchmanError::WatchChannelClosed),
        }
    }

    sink.on_event(WatchEvent::Shutdown);
    Ok(())
}
