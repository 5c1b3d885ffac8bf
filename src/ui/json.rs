use std::io::{self, Write};

use watchman::WatchEvent;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &WatchEvent) -> io::Result<()> {
    out.write_all(event.to_json().as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Write an event to stdout. A closed stdout is not fatal to the watcher.
pub fn emit(event: &WatchEvent) {
    let mut out = io::stdout().lock();
    if let Err(e) = write_event(&mut out, event) {
        tracing::debug!("could not write event to stdout: {e}");
    }
}
