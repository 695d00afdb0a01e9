//! Core types for the agenda terminal calendar.
//!
//! This crate holds everything that is not terminal I/O:
//! - `Event` and the `DD/MM/YYYY` / `HH:MM` token types it is built from
//! - `duration` for the whole-day distance between two date/time points
//! - `grid` for the 6x7 month view
//! - `EventStore` and the `User` aggregate it operates on
//! - `SnapshotStore`, the JSON file the aggregate is persisted to

pub mod duration;
pub mod error;
pub mod event;
pub mod grid;
pub mod snapshot;
pub mod store;
pub mod user;

pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventDate, EventDraft, EventId, EventTime};
pub use grid::{CellKind, GridCell, MonthGrid};
pub use snapshot::SnapshotStore;
pub use store::{EventStore, IdGenerator, RandomIds, SequentialIds};
pub use user::User;
