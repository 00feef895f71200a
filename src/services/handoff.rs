use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::CalendarEvent;

/// A projected batch handed from the scheduling context to the calendar
/// context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingSchedule {
    pub events: Vec<CalendarEvent>,
    /// Skip per-date prompts and replace the colliding plan outright
    pub force_replace: bool,
}

/// Single-slot, consume-once channel for pending schedules.
///
/// `publish` overwrites any unconsumed batch (last writer wins); `take`
/// removes the batch so a second reader sees nothing.
#[derive(Debug, Default)]
pub struct PendingScheduleSlot {
    slot: RwLock<Option<PendingSchedule>>,
}

impl PendingScheduleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, schedule: PendingSchedule) {
        debug!(
            target: "app::handoff",
            events = schedule.events.len(),
            force_replace = schedule.force_replace,
            "publishing pending schedule"
        );
        let mut slot = self.slot.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(schedule);
    }

    pub fn take(&self) -> Option<PendingSchedule> {
        let mut slot = self.slot.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.take()
    }

    pub fn is_empty(&self) -> bool {
        let slot = self.slot.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.is_none()
    }
}
