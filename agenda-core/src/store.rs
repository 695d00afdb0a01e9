//! Create/read/update/delete over a user's events.
//!
//! The store only mutates memory. Callers persist the user through
//! `SnapshotStore` after every mutating call.

use rand::Rng;
use tracing::debug;

use crate::event::{Event, EventDraft};
use crate::user::User;

pub use crate::event::EventId;

/// Upper bound (exclusive) of randomly drawn event ids.
pub const ID_RANGE: u32 = 1000;

/// Source of ids for new events.
pub trait IdGenerator {
    fn next_id(&mut self) -> EventId;
}

/// Uniform ids in `0..ID_RANGE`. Collisions with existing events are not
/// checked; two events may end up sharing an id.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> EventId {
        EventId(rand::rng().random_range(0..ID_RANGE))
    }
}

/// Monotonic ids starting at a given value.
#[derive(Debug, Clone, Copy)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    pub fn starting_at(next: u32) -> Self {
        SequentialIds { next }
    }

    /// Continue after the highest id already used by `user`.
    pub fn after(user: &User) -> Self {
        let next = user
            .events
            .iter()
            .map(|e| e.id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        SequentialIds { next }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EventId {
        let id = EventId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// The event collection of a single user.
pub struct EventStore {
    user: User,
    ids: Box<dyn IdGenerator + Send>,
}

impl EventStore {
    /// Store drawing random ids for new events.
    pub fn new(user: User) -> Self {
        Self::with_ids(user, RandomIds)
    }

    pub fn with_ids(user: User, ids: impl IdGenerator + Send + 'static) -> Self {
        EventStore {
            user,
            ids: Box::new(ids),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn into_user(self) -> User {
        self.user
    }

    /// Append a new event built from `draft` and return the stored record.
    ///
    /// The draft is trusted as-is; only its duration is derived.
    pub fn add_event(&mut self, draft: EventDraft) -> &Event {
        let id = self.ids.next_id();
        let event = Event::from_draft(id, draft);
        debug!(id = %event.id, name = %event.name, duration = event.duration, "adding event");

        self.user.events.push(event);
        let last = self.user.events.len() - 1;
        &self.user.events[last]
    }

    /// All events in insertion order.
    pub fn list_events(&self) -> &[Event] {
        &self.user.events
    }

    /// First event carrying `id`.
    pub fn find_event(&self, id: EventId) -> Option<&Event> {
        self.user.events.iter().find(|e| e.id == id)
    }

    /// Replace the first event carrying `id` with `event`, wholesale.
    ///
    /// The replacement is stored as given: its duration is not recomputed, so
    /// build it with `Event::revise` or call `Event::recompute_duration` first.
    /// Returns `false`, leaving the collection untouched, when no event has `id`.
    pub fn update_event(&mut self, id: EventId, event: Event) -> bool {
        match self.user.events.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                debug!(%id, "updating event");
                *slot = event;
                true
            }
            None => {
                debug!(%id, "update skipped, no such event");
                false
            }
        }
    }

    /// Remove every event carrying `id`. Returns how many were removed.
    pub fn delete_event(&mut self, id: EventId) -> usize {
        let before = self.user.events.len();
        self.user.events.retain(|e| e.id != id);
        let removed = before - self.user.events.len();
        debug!(%id, removed, "deleted events");
        removed
    }
}
