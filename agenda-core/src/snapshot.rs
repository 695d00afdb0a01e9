//! JSON snapshot of the user aggregate.
//!
//! The snapshot is a single document replaced as a whole on every save.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use crate::error::{AgendaError, AgendaResult};
use crate::user::User;

/// File-backed persistence for the `User` aggregate.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored user.
    ///
    /// A missing or blank file means no user has been created yet and yields
    /// `Ok(None)`.
    pub async fn load(&self) -> AgendaResult<Option<User>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot yet");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            debug!(path = %self.path.display(), "snapshot is empty");
            return Ok(None);
        }

        let user: User =
            serde_json::from_str(&content).map_err(|source| AgendaError::SnapshotFormat {
                path: self.path.clone(),
                source,
            })?;

        info!(
            path = %self.path.display(),
            events = user.events.len(),
            "loaded snapshot"
        );
        Ok(Some(user))
    }

    /// Replace the stored snapshot with `user`.
    ///
    /// Writes a sibling temporary file and renames it over the target, so a
    /// failed save leaves the previous snapshot intact.
    pub async fn save(&self, user: &User) -> AgendaResult<()> {
        let content =
            serde_json::to_string(user).map_err(|source| AgendaError::SnapshotFormat {
                path: self.path.clone(),
                source,
            })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content)
            .await
            .map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        info!(
            path = %self.path.display(),
            events = user.events.len(),
            "saved snapshot"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "snapshot".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> AgendaError {
        AgendaError::SnapshotIo {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, EventId};
    use crate::store::{EventStore, SequentialIds};

    fn draft() -> EventDraft {
        EventDraft {
            name: "Reunió".to_string(),
            description: "Trimestral".to_string(),
            location: "Sala 2".to_string(),
            start_date: "10/04/2024".parse().unwrap(),
            end_date: "12/04/2024".parse().unwrap(),
            start_time: "09:00".parse().unwrap(),
            end_time: "18:00".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn missing_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotStore::new(dir.path().join("db.json"));
        assert!(snapshot.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn blank_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "  \n").unwrap();

        assert!(SnapshotStore::new(path).load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotStore::new(dir.path().join("nested/db.json"));

        let mut store = EventStore::with_ids(User::new("Anna"), SequentialIds::starting_at(10));
        store.add_event(draft());
        snapshot.save(store.user()).await.unwrap();

        let loaded = snapshot.load().await.unwrap().unwrap();
        assert_eq!(loaded.user_id, store.user().user_id);
        assert_eq!(loaded.events, store.user().events);
        assert_eq!(loaded.events[0].id, EventId(10));
        assert!(!dir.path().join("nested/db.json.tmp").exists());
    }

    #[tokio::test]
    async fn save_replaces_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotStore::new(dir.path().join("db.json"));

        let mut store = EventStore::with_ids(User::new("Anna"), SequentialIds::starting_at(1));
        store.add_event(draft());
        snapshot.save(store.user()).await.unwrap();

        store.delete_event(EventId(1));
        snapshot.save(store.user()).await.unwrap();

        let loaded = snapshot.load().await.unwrap().unwrap();
        assert!(loaded.events.is_empty());
    }

    #[tokio::test]
    async fn malformed_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = SnapshotStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, AgendaError::SnapshotFormat { .. }));
    }

    #[tokio::test]
    async fn unwritable_target_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // The target path is an existing directory, so the rename fails.
        let target = dir.path().join("db.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let err = SnapshotStore::new(&target)
            .save(&User::new("Anna"))
            .await
            .unwrap_err();
        assert!(matches!(err, AgendaError::SnapshotIo { .. }));
    }
}
