//! A running session: the user's event store plus where it is saved.

use agenda_core::{EventStore, SnapshotStore, User};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::warn;

pub struct Session {
    pub store: EventStore,
    snapshot: SnapshotStore,
}

impl Session {
    pub fn new(user: User, snapshot: SnapshotStore) -> Self {
        Session {
            store: EventStore::new(user),
            snapshot,
        }
    }

    /// Load the saved user, or `None` on first run.
    pub async fn load_user(snapshot: &SnapshotStore) -> Result<Option<User>> {
        snapshot
            .load()
            .await
            .with_context(|| format!("Could not read your events from {}", snapshot.path().display()))
    }

    pub fn user(&self) -> &User {
        self.store.user()
    }

    /// Save the whole user after a mutation.
    ///
    /// A failed save is reported but the in-memory change stays applied.
    /// Returns whether the save succeeded.
    pub async fn persist(&self) -> bool {
        match self.snapshot.save(self.store.user()).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "snapshot save failed");
                eprintln!(
                    "  {}",
                    format!("No s'han pogut desar les dades: {}", e).red()
                );
                false
            }
        }
    }
}
