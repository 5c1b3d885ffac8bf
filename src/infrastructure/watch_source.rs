//! Single-file watch source backed by `notify`

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

use notify::event::ModifyKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::watch::{ChangeKind, ChangeNotification, Notification};
use crate::error::{WatchmanError, WatchmanResult};

/// Watches one path and exposes its notifications as a channel.
///
/// Dropping the source stops the watcher, which disconnects the channel.
pub struct NotifySource {
    _watcher: RecommendedWatcher,
    rx: Receiver<Notification>,
}

impl NotifySource {
    /// Register `path` with the platform watcher.
    pub fn new(path: &Path) -> WatchmanResult<Self> {
        let (tx, rx) = channel();
        let target = path.to_path_buf();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                for notification in notifications_from(res, &target) {
                    let _ = tx.send(notification);
                }
            },
            Config::default(),
        )
        .map_err(|e| watch_error(path, e))?;

        watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|e| watch_error(path, e))?;

        tracing::debug!(path = %path.display(), "registered watch");
        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    pub fn receiver(&self) -> &Receiver<Notification> {
        &self.rx
    }
}

fn watch_error(path: &Path, e: notify::Error) -> WatchmanError {
    WatchmanError::Watch {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Map a `notify` event kind to the operation kinds the dispatcher knows.
///
/// Content modifications are writes; renames arrive as `Modify(Name)`.
pub fn change_kind(kind: &EventKind) -> ChangeKind {
    match kind {
        EventKind::Modify(ModifyKind::Name(_)) => ChangeKind::Rename,
        EventKind::Modify(ModifyKind::Metadata(_)) => ChangeKind::Other,
        EventKind::Modify(_) => ChangeKind::Write,
        EventKind::Create(_) => ChangeKind::Create,
        EventKind::Remove(_) => ChangeKind::Remove,
        EventKind::Access(_) | EventKind::Any | EventKind::Other => ChangeKind::Other,
    }
}

/// One notification per path in the event, or one for `target` if the
/// backend did not attach a path.
fn notifications_from(res: Result<Event, notify::Error>, target: &Path) -> Vec<Notification> {
    match res {
        Ok(event) => {
            let kind = change_kind(&event.kind);
            let paths: Vec<PathBuf> = if event.paths.is_empty() {
                vec![target.to_path_buf()]
            } else {
                event.paths
            };
            paths
                .into_iter()
                .map(|path| Notification::Change(ChangeNotification::new(path, kind)))
                .collect()
        }
        Err(e) => vec![Notification::Error(e.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, MetadataKind, RemoveKind, RenameMode};

    #[test]
    fn test_change_kind_mapping() {
        assert_eq!(
            change_kind(&EventKind::Modify(ModifyKind::Data(DataChange::Content))),
            ChangeKind::Write
        );
        assert_eq!(change_kind(&EventKind::Modify(ModifyKind::Any)), ChangeKind::Write);
        assert_eq!(
            change_kind(&EventKind::Modify(ModifyKind::Name(RenameMode::From))),
            ChangeKind::Rename
        );
        assert_eq!(
            change_kind(&EventKind::Modify(ModifyKind::Metadata(MetadataKind::Permissions))),
            ChangeKind::Other
        );
        assert_eq!(change_kind(&EventKind::Create(CreateKind::File)), ChangeKind::Create);
        assert_eq!(change_kind(&EventKind::Remove(RemoveKind::File)), ChangeKind::Remove);
        assert_eq!(change_kind(&EventKind::Access(AccessKind::Any)), ChangeKind::Other);
    }

    #[test]
    fn test_notifications_use_target_when_event_has_no_paths() {
        let event = Event::new(EventKind::Modify(ModifyKind::Any));
        let notifications = notifications_from(Ok(event), Path::new("notes.txt"));
        assert_eq!(
            notifications,
            vec![Notification::Change(ChangeNotification::new(
                "notes.txt",
                ChangeKind::Write
            ))]
        );
    }

    #[test]
    fn test_notifications_one_per_path() {
        let event = Event::new(EventKind::Remove(RemoveKind::File))
            .add_path(PathBuf::from("a.txt"))
            .add_path(PathBuf::from("b.txt"));
        let notifications = notifications_from(Ok(event), Path::new("a.txt"));
        assert_eq!(notifications.len(), 2);
    }

    #[test]
    fn test_errors_become_error_notifications() {
        let notifications = notifications_from(
            Err(notify::Error::generic("queue overflow")),
            Path::new("notes.txt"),
        );
        assert!(matches!(&notifications[..], [Notification::Error(message)] if message.contains("queue overflow")));
    }

    #[test]
    fn test_new_fails_for_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = NotifySource::new(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(WatchmanError::Watch { .. })));
    }
}
