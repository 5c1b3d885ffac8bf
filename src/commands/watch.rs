use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use watchman::{StdCommandRunner, WatchEvent, WatchEventSink, WatchUseCase};

use crate::cli::Cli;

pub fn cmd_watch(cli: &Cli) -> Result<()> {
    let config = cli.watch_config()?;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    let sink: Arc<dyn WatchEventSink> = if cli.json {
        Arc::new(|event: WatchEvent| crate::ui::json::emit(&event))
    } else {
        Arc::new(|event: WatchEvent| crate::ui::watch::log_watch_event(&event))
    };

    WatchUseCase::new(config)
        .start(running, Arc::new(StdCommandRunner::new()), sink)?;

    Ok(())
}
