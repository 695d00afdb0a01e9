//! Whole-day distance between two date/time points.
//!
//! Dates are resolved the way the event records have always been resolved:
//! the typed month number is used directly as a zero-based month index, so
//! `01/01/2024` lands on 1 February 2024 and `01/12/2024` on 1 January 2025.
//! Durations only compare points resolved the same way, so the shift cancels
//! out except where neighbouring month lengths differ. Out-of-range fields
//! (day 0, day 31 in a 30-day month, hour 25) roll over into the adjacent
//! unit instead of being rejected.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::event::{EventDate, EventTime};

/// Signed number of whole days from `(start_date, start_time)` to
/// `(end_date, end_time)`, truncated toward zero.
pub fn compute_duration_days(
    start_date: EventDate,
    end_date: EventDate,
    start_time: EventTime,
    end_time: EventTime,
) -> i64 {
    let start = resolve(start_date, start_time);
    let end = resolve(end_date, end_time);
    (end - start).num_days()
}

/// Absolute wall-clock instant for a typed date and time.
pub fn resolve(date: EventDate, time: EventTime) -> NaiveDateTime {
    // Two-digit years map onto the 1900s before month overflow is carried.
    let year = match date.year() {
        typed @ 0..=99 => typed + 1900,
        typed => typed,
    };
    let year = year + (date.month() / 12) as i32;
    let month = date.month() % 12 + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("token-width years are within chrono's range")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");

    first
        + TimeDelta::days(i64::from(date.day()) - 1)
        + TimeDelta::hours(i64::from(time.hour()))
        + TimeDelta::minutes(i64::from(time.minute()))
}

/// Duration as shown to the user and stored in the snapshot.
pub fn label(days: i64) -> String {
    format!("{} dies.", days)
}

/// Serde adapter storing a duration as its label.
///
/// Reading accepts the label or a bare integer. Anything else (`"NaN dies."`,
/// `null`, a fraction) reads as `None` so the caller can recompute it.
pub(crate) mod label_serde {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(days: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::label(*days))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Days(i64),
        Label(String),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        Ok(match Stored::deserialize(deserializer)? {
            Stored::Days(days) => Some(days),
            Stored::Label(label) => label.trim().trim_end_matches("dies.").trim().parse().ok(),
            Stored::Other(_) => None,
        })
    }
}
