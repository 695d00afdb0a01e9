//! The user aggregate: one per installation, owning every event.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// The local user and their events, in creation order.
///
/// This is the whole snapshot document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId", alias = "userID")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "timeStamp", with = "epoch_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "userEvents", default)]
    pub events: Vec<Event>,
}

impl User {
    /// Create a user with a fresh id and no events.
    pub fn new(user_name: impl Into<String>) -> Self {
        let now = Utc::now();
        User {
            user_id: generate_user_id(now, &mut rand::rng()),
            user_name: user_name.into(),
            created_at: now,
            events: Vec::new(),
        }
    }
}

/// `user#` followed by the creation time in hex milliseconds and a random
/// hex suffix. Two users created in the same millisecond may collide.
pub fn generate_user_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: u32 = rng.random();
    format!("user#{:x}{:08x}", now.timestamp_millis(), suffix)
}

/// Epoch seconds with an optional fractional part.
mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(at.timestamp_millis() as f64 / 1000.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn user_id_has_prefix_and_hex_body() {
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let id = generate_user_id(now, &mut StdRng::seed_from_u64(1));

        let body = id.strip_prefix("user#").unwrap();
        assert!(body.starts_with(&format!("{:x}", now.timestamp_millis())));
        assert!(body.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(body.len(), format!("{:x}", now.timestamp_millis()).len() + 8);
    }

    #[test]
    fn new_user_starts_empty() {
        let user = User::new("Marta");
        assert_eq!(user.user_name, "Marta");
        assert!(user.user_id.starts_with("user#"));
        assert!(user.events.is_empty());
    }

    #[test]
    fn reads_snapshot_written_by_older_versions() {
        let json = r#"{"userID":"user#18f4a","userName":"Pau","timeStamp":1715000000.5,"userEvents":[]}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.user_id, "user#18f4a");
        assert_eq!(user.created_at.timestamp_millis(), 1_715_000_000_500);
    }

    #[test]
    fn writes_snapshot_field_names() {
        let user = User {
            user_id: "user#1".to_string(),
            user_name: "Pau".to_string(),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            events: Vec::new(),
        };
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["userId"], "user#1");
        assert_eq!(json["userName"], "Pau");
        assert_eq!(json["timeStamp"], 1_700_000_000.0);
        assert!(json["userEvents"].as_array().unwrap().is_empty());
    }
}
