use watchman::WatchEvent;

/// Log level a rendered event is written at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

pub fn render_watch_event(event: &WatchEvent) -> (Severity, String) {
    match event {
        WatchEvent::CommandPlanned { command, .. } => {
            (Severity::Info, format!("watchman will call: {}", command))
        }
        WatchEvent::WatchStarted {
            path,
            chain_mode,
            min_gap_ms,
            sync,
        } => (
            Severity::Info,
            format!(
                "watching {} (chain: {}, gap: {}ms, sync: {})",
                path,
                chain_mode,
                min_gap_ms,
                if *sync { "on" } else { "off" }
            ),
        ),
        WatchEvent::WriteDetected { path } => (
            Severity::Info,
            format!("got file write event on {}: calling command ...", path),
        ),
        WatchEvent::CommandStarted { index, command } => {
            (Severity::Info, format!("[{}] running: {}", index + 1, command))
        }
        WatchEvent::CommandFailed {
            index,
            command,
            error,
        } => (
            Severity::Warn,
            format!("[{}] failed to run '{}': {}", index + 1, command, error),
        ),
        WatchEvent::ChainStopped { index, skipped } => (
            Severity::Warn,
            format!(
                "chain stopped at command {}; skipped {} remaining",
                index + 1,
                skipped
            ),
        ),
        WatchEvent::WatchError { message } => (Severity::Error, format!("watch error: {}", message)),
        WatchEvent::Shutdown => (Severity::Info, "shutting down".to_string()),
    }
}

pub fn log_watch_event(event: &WatchEvent) {
    let (severity, line) = render_watch_event(event);
    match severity {
        Severity::Info => tracing::info!("{line}"),
        Severity::Warn => tracing::warn!("{line}"),
        Severity::Error => tracing::error!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchman::ChainMode;

    #[test]
    fn test_render_planned() {
        let (severity, line) = render_watch_event(&WatchEvent::CommandPlanned {
            index: 0,
            command: "make test".to_string(),
        });
        assert_eq!(severity, Severity::Info);
        insta::assert_snapshot!(line, @"watchman will call: make test");
    }

    #[test]
    fn test_render_started() {
        let (_, line) = render_watch_event(&WatchEvent::WatchStarted {
            path: "notes.txt".to_string(),
            chain_mode: ChainMode::And,
            min_gap_ms: 200,
            sync: true,
        });
        insta::assert_snapshot!(line, @"watching notes.txt (chain: and (&&), gap: 200ms, sync: on)");
    }

    #[test]
    fn test_render_failure_is_warning() {
        let (severity, line) = render_watch_event(&WatchEvent::CommandFailed {
            index: 1,
            command: "make test".to_string(),
            error: "exit status 2".to_string(),
        });
        assert_eq!(severity, Severity::Warn);
        insta::assert_snapshot!(line, @"[2] failed to run 'make test': exit status 2");
    }

    #[test]
    fn test_render_chain_stopped() {
        let (_, line) = render_watch_event(&WatchEvent::ChainStopped { index: 0, skipped: 2 });
        insta::assert_snapshot!(line, @"chain stopped at command 1; skipped 2 remaining");
    }

    #[test]
    fn test_render_watch_error() {
        let (severity, line) = render_watch_event(&WatchEvent::WatchError {
            message: "queue overflow".to_string(),
        });
        assert_eq!(severity, Severity::Error);
        insta::assert_snapshot!(line, @"watch error: queue overflow");
    }
}
