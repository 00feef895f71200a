use std::sync::RwLock;

use crate::error::AppResult;
use crate::models::CalendarEvent;

pub mod sqlite;

pub use sqlite::SqliteEventStore;

/// Whole-set access to the stored calendar events.
///
/// The scheduling flow reads everything, reconciles in memory, and writes
/// the result back in one `set_all`, so the storage medium stays opaque to
/// the core.
pub trait EventRepository {
    fn get_all(&self) -> AppResult<Vec<CalendarEvent>>;
    fn set_all(&self, events: &[CalendarEvent]) -> AppResult<()>;
}

/// In-memory store used by tests and as a session-scoped fallback
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: RwLock<Vec<CalendarEvent>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }
}

impl EventRepository for MemoryEventStore {
    fn get_all(&self) -> AppResult<Vec<CalendarEvent>> {
        let events = self
            .events
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(events.clone())
    }

    fn set_all(&self, events: &[CalendarEvent]) -> AppResult<()> {
        let mut slot = self
            .events
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = events.to_vec();
        Ok(())
    }
}
