use agenda_core::{SnapshotStore, User};
use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::{info, warn};

use crate::prompt;

/// First run: ask for the user's name and create their (empty) agenda.
pub async fn run(snapshot: &SnapshotStore) -> Result<User> {
    println!();
    println!("{}", "  Bon dia! Benvingut/da a la teva agenda.  ".on_blue());
    println!();
    println!("  Organitza els teus esdeveniments i consulta el calendari del mes.");
    println!();

    let name = prompt::text("Per començar, ens podries dir el teu nom?")?;
    Ok(create_user(snapshot, &name).await)
}

/// Create and save a user named `name`.
///
/// A failed save is reported; the user is returned either way.
async fn create_user(snapshot: &SnapshotStore, name: &str) -> User {
    let user = User::new(name.trim());
    info!(user_id = %user.user_id, "created user");

    if let Err(e) = snapshot.save(&user).await {
        warn!(error = %e, "could not save new user");
        eprintln!(
            "  {}",
            format!("No s'han pogut desar les dades: {}", e).red()
        );
    }

    user
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_user_is_saved_with_trimmed_name() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotStore::new(dir.path().join("db.json"));

        let user = create_user(&snapshot, "  Jordi ").await;

        assert_eq!(user.user_name, "Jordi");
        let saved = snapshot.load().await.unwrap().unwrap();
        assert_eq!(saved.user_id, user.user_id);
        assert!(saved.events.is_empty());
    }

    #[tokio::test]
    async fn failed_save_still_returns_the_user() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("db.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let user = create_user(&SnapshotStore::new(&target), "Jordi").await;

        assert_eq!(user.user_name, "Jordi");
        assert!(user.user_id.starts_with("user#"));
        assert!(target.is_dir());
    }
}
