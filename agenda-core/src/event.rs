//! Event record and the date/time tokens it is built from.
//!
//! Dates and times are kept exactly as the user typed them. A token only has
//! to match its pattern (`DD/MM/YYYY`, `HH:MM`); month 13 or hour 25 are
//! accepted and left to the date arithmetic to roll over.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::duration;
use crate::error::AgendaError;

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("valid date pattern"));

static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("valid time pattern"));

/// Identifier of an event within its owner's collection.
///
/// Ids are drawn at random and are not guaranteed to be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EventId)
    }
}

/// Largest value a two-digit token field can hold.
const MAX_TWO_DIGITS: u32 = 99;

/// Largest value a four-digit token field can hold.
const MAX_FOUR_DIGITS: i32 = 9999;

/// A calendar date as typed: day, month number and year.
///
/// Every field fits its token width, so a date always resolves to an
/// instant chrono can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDate {
    day: u32,
    month: u32,
    year: i32,
}

impl EventDate {
    /// Date from its parts, or `None` when a part does not fit `DD/MM/YYYY`.
    pub fn from_dmy_opt(day: u32, month: u32, year: i32) -> Option<Self> {
        let fits = day <= MAX_TWO_DIGITS
            && month <= MAX_TWO_DIGITS
            && (0..=MAX_FOUR_DIGITS).contains(&year);
        fits.then_some(EventDate { day, month, year })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether `s` is a well-formed `DD/MM/YYYY` token.
    pub fn is_token(s: &str) -> bool {
        DATE_PATTERN.is_match(s)
    }
}

impl FromStr for EventDate {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AgendaError::InvalidDate(s.to_string());
        let caps = DATE_PATTERN.captures(s).ok_or_else(invalid)?;

        // Each group is two or four ASCII digits, so the parses cannot overflow.
        let day = caps[1].parse().map_err(|_| invalid())?;
        let month = caps[2].parse().map_err(|_| invalid())?;
        let year = caps[3].parse().map_err(|_| invalid())?;

        Ok(EventDate { day, month, year })
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// A wall-clock time as typed: hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTime {
    hour: u32,
    minute: u32,
}

impl EventTime {
    /// Time from its parts, or `None` when a part does not fit `HH:MM`.
    pub fn from_hm_opt(hour: u32, minute: u32) -> Option<Self> {
        (hour <= MAX_TWO_DIGITS && minute <= MAX_TWO_DIGITS).then_some(EventTime { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Whether `s` is a well-formed `HH:MM` token.
    pub fn is_token(s: &str) -> bool {
        TIME_PATTERN.is_match(s)
    }
}

impl FromStr for EventTime {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AgendaError::InvalidTime(s.to_string());
        let caps = TIME_PATTERN.captures(s).ok_or_else(invalid)?;

        let hour = caps[1].parse().map_err(|_| invalid())?;
        let minute = caps[2].parse().map_err(|_| invalid())?;

        Ok(EventTime { hour, minute })
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// Both token types are stored in the snapshot as the string the user typed.

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse().map_err(serde::de::Error::custom)
    }
}

/// The user-supplied part of an event: everything except `id` and `duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    pub start_date: EventDate,
    pub end_date: EventDate,
    pub start_time: EventTime,
    pub end_time: EventTime,
}

impl EventDraft {
    /// Whole days from the start point to the end point of this draft.
    pub fn duration_days(&self) -> i64 {
        duration::compute_duration_days(
            self.start_date,
            self.end_date,
            self.start_time,
            self.end_time,
        )
    }
}

/// A stored event.
///
/// `duration` is cached: every constructor that takes date/time fields
/// computes it, and `recompute_duration` must be called after editing the
/// public date/time fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredEvent")]
pub struct Event {
    #[serde(rename = "idEvent")]
    pub id: EventId,
    #[serde(rename = "nameEvent")]
    pub name: String,
    #[serde(rename = "descriptionEvent", default)]
    pub description: String,
    #[serde(rename = "locationEvent", default)]
    pub location: String,
    #[serde(rename = "startEventDate")]
    pub start_date: EventDate,
    #[serde(rename = "endEventDate")]
    pub end_date: EventDate,
    #[serde(rename = "startEventTime")]
    pub start_time: EventTime,
    #[serde(rename = "endEventTime")]
    pub end_time: EventTime,
    #[serde(rename = "durationEvent", serialize_with = "duration::label_serde::serialize")]
    pub duration: i64,
}

/// An event as read from a snapshot.
///
/// Older snapshots may hold a duration that is not a number (`"NaN dies."`);
/// it is recomputed from the date/time fields on load.
#[derive(Deserialize)]
struct StoredEvent {
    #[serde(rename = "idEvent")]
    id: EventId,
    #[serde(rename = "nameEvent")]
    name: String,
    #[serde(rename = "descriptionEvent", default)]
    description: String,
    #[serde(rename = "locationEvent", default)]
    location: String,
    #[serde(rename = "startEventDate")]
    start_date: EventDate,
    #[serde(rename = "endEventDate")]
    end_date: EventDate,
    #[serde(rename = "startEventTime")]
    start_time: EventTime,
    #[serde(rename = "endEventTime")]
    end_time: EventTime,
    #[serde(
        rename = "durationEvent",
        default,
        deserialize_with = "duration::label_serde::deserialize"
    )]
    duration: Option<i64>,
}

impl From<StoredEvent> for Event {
    fn from(stored: StoredEvent) -> Self {
        let mut event = Event {
            id: stored.id,
            name: stored.name,
            description: stored.description,
            location: stored.location,
            start_date: stored.start_date,
            end_date: stored.end_date,
            start_time: stored.start_time,
            end_time: stored.end_time,
            duration: stored.duration.unwrap_or_default(),
        };
        if stored.duration.is_none() {
            event.recompute_duration();
        }
        event
    }
}

impl Event {
    /// Build an event from a draft, deriving its duration.
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        let duration = draft.duration_days();
        Event {
            id,
            name: draft.name,
            description: draft.description,
            location: draft.location,
            start_date: draft.start_date,
            end_date: draft.end_date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            duration,
        }
    }

    /// Replacement record for this event: same id, new fields, fresh duration.
    pub fn revise(&self, draft: EventDraft) -> Self {
        Event::from_draft(self.id, draft)
    }

    /// The editable fields of this event.
    pub fn draft(&self) -> EventDraft {
        EventDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    pub fn recompute_duration(&mut self) {
        self.duration = duration::compute_duration_days(
            self.start_date,
            self.end_date,
            self.start_time,
            self.end_time,
        );
    }

    /// Whether the cached duration agrees with the date/time fields.
    pub fn is_duration_consistent(&self) -> bool {
        self.duration == self.draft().duration_days()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(day: u32, month: u32, year: i32) -> EventDate {
        EventDate::from_dmy_opt(day, month, year).unwrap()
    }

    fn time(hour: u32, minute: u32) -> EventTime {
        EventTime::from_hm_opt(hour, minute).unwrap()
    }

    fn sample_draft() -> EventDraft {
        EventDraft {
            name: "Sopar".to_string(),
            description: "Amb la família".to_string(),
            location: String::new(),
            start_date: "01/01/2024".parse().unwrap(),
            end_date: "04/01/2024".parse().unwrap(),
            start_time: "20:00".parse().unwrap(),
            end_time: "21:30".parse().unwrap(),
        }
    }

    #[rstest]
    #[case("01/01/2024", date(1, 1, 2024))]
    #[case("31/12/1999", date(31, 12, 1999))]
    #[case("45/13/2024", date(45, 13, 2024))]
    #[case("00/00/0000", date(0, 0, 0))]
    fn parse_date_accepts_pattern(#[case] input: &str, #[case] expected: EventDate) {
        assert_eq!(input.parse::<EventDate>().unwrap(), expected);
    }

    #[rstest]
    #[case("1/01/2024")]
    #[case("01-01-2024")]
    #[case("01/01/24")]
    #[case("01/01/2024 ")]
    #[case("x01/01/2024")]
    #[case("")]
    fn parse_date_rejects_malformed(#[case] input: &str) {
        let err = input.parse::<EventDate>().unwrap_err();
        assert!(matches!(err, AgendaError::InvalidDate(_)));
        assert!(!EventDate::is_token(input));
    }

    #[rstest]
    #[case("00:00", time(0, 0))]
    #[case("09:05", time(9, 5))]
    #[case("25:61", time(25, 61))]
    fn parse_time_accepts_pattern(#[case] input: &str, #[case] expected: EventTime) {
        assert_eq!(input.parse::<EventTime>().unwrap(), expected);
    }

    #[rstest]
    #[case("9:05")]
    #[case("09.05")]
    #[case("09:055")]
    #[case("ab:cd")]
    fn parse_time_rejects_malformed(#[case] input: &str) {
        assert!(matches!(
            input.parse::<EventTime>(),
            Err(AgendaError::InvalidTime(_))
        ));
    }

    #[rstest]
    #[case("١٢/01/2024")]
    #[case("１２/01/2024")]
    #[case("12/01/２０２４")]
    fn non_ascii_digits_are_not_date_tokens(#[case] input: &str) {
        assert!(!EventDate::is_token(input));
        assert!(input.parse::<EventDate>().is_err());
    }

    #[test]
    fn non_ascii_digits_are_not_time_tokens() {
        assert!(!EventTime::is_token("١٢:00"));
        assert!("１２:００".parse::<EventTime>().is_err());
    }

    #[test]
    fn parts_must_fit_token_width() {
        assert!(EventDate::from_dmy_opt(99, 99, 9999).is_some());
        assert!(EventDate::from_dmy_opt(100, 1, 2024).is_none());
        assert!(EventDate::from_dmy_opt(1, 100, 2024).is_none());
        assert!(EventDate::from_dmy_opt(1, 1, 10_000).is_none());
        assert!(EventDate::from_dmy_opt(1, 1, -1).is_none());
        assert!(EventDate::from_dmy_opt(1, 1, i32::MAX).is_none());
        assert!(EventTime::from_hm_opt(99, 99).is_some());
        assert!(EventTime::from_hm_opt(u32::MAX, 0).is_none());
    }

    #[test]
    fn tokens_display_zero_padded() {
        assert_eq!(date(2, 3, 2024).to_string(), "02/03/2024");
        assert_eq!(time(7, 0).to_string(), "07:00");
    }

    #[test]
    fn from_draft_derives_duration() {
        let event = Event::from_draft(EventId(42), sample_draft());
        assert_eq!(event.id, EventId(42));
        assert_eq!(event.duration, 3);
        assert!(event.is_duration_consistent());
    }

    #[test]
    fn revise_keeps_id_and_recomputes() {
        let event = Event::from_draft(EventId(7), sample_draft());
        let mut draft = event.draft();
        draft.end_date = "01/01/2024".parse().unwrap();
        draft.end_time = "20:00".parse().unwrap();

        let revised = event.revise(draft);
        assert_eq!(revised.id, EventId(7));
        assert_eq!(revised.duration, 0);
    }

    #[test]
    fn recompute_after_direct_edit() {
        let mut event = Event::from_draft(EventId(1), sample_draft());
        event.end_date = "11/01/2024".parse().unwrap();
        assert!(!event.is_duration_consistent());

        event.recompute_duration();
        assert_eq!(event.duration, 10);
    }

    #[test]
    fn serializes_with_snapshot_field_names() {
        let event = Event::from_draft(EventId(5), sample_draft());
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["idEvent"], 5);
        assert_eq!(json["nameEvent"], "Sopar");
        assert_eq!(json["startEventDate"], "01/01/2024");
        assert_eq!(json["endEventTime"], "21:30");
        assert_eq!(json["durationEvent"], "3 dies.");
    }

    #[test]
    fn deserializes_integer_or_labelled_duration() {
        let labelled = r#"{"idEvent":3,"nameEvent":"a","descriptionEvent":"","locationEvent":"",
            "startEventDate":"01/01/2024","endEventDate":"02/01/2024",
            "startEventTime":"00:00","endEventTime":"00:00","durationEvent":"-2 dies."}"#;
        let bare = labelled.replace("\"-2 dies.\"", "-2");

        assert_eq!(serde_json::from_str::<Event>(labelled).unwrap().duration, -2);
        assert_eq!(serde_json::from_str::<Event>(&bare).unwrap().duration, -2);
    }

    #[test]
    fn non_numeric_duration_is_recomputed_on_load() {
        for stored in ["\"NaN dies.\"", "null", "1.5"] {
            let json = format!(
                r#"{{"idEvent":3,"nameEvent":"a","startEventDate":"01/01/2024",
                "endEventDate":"04/01/2024","startEventTime":"00:00","endEventTime":"00:00",
                "durationEvent":{stored}}}"#
            );
            let event: Event = serde_json::from_str(&json).unwrap();
            assert_eq!(event.duration, 3, "stored duration {stored}");
        }
    }

    #[test]
    fn missing_duration_is_recomputed_on_load() {
        let json = r#"{"idEvent":3,"nameEvent":"a","startEventDate":"01/01/2024",
            "endEventDate":"02/01/2024","startEventTime":"00:00","endEventTime":"00:00"}"#;
        assert_eq!(serde_json::from_str::<Event>(json).unwrap().duration, 1);
    }

    #[test]
    fn malformed_stored_date_is_rejected() {
        let json = r#"{"idEvent":3,"nameEvent":"a","startEventDate":"5/3/2024",
            "endEventDate":"02/01/2024","startEventTime":"00:00","endEventTime":"00:00",
            "durationEvent":"0 dies."}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn event_id_parses_trimmed() {
        assert_eq!(" 12 ".parse::<EventId>().unwrap(), EventId(12));
        assert!("doce".parse::<EventId>().is_err());
    }
}
