use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::CalendarEvent;

/// User decision for a single-date collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateResolution {
    /// Drop everything on that date, keep the candidate
    Replace,
    /// Drop every stored event of the colliding plan, keep the candidate
    ReplacePlan,
    /// Keep the candidate alongside the stored events
    Keep,
    /// Drop the candidate, leave the store untouched
    Cancel,
}

/// User decision for a whole-batch collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanResolution {
    KeepBoth,
    Replace,
}

/// A candidate event colliding with stored events on the same date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateConflict {
    pub candidate: CalendarEvent,
    pub existing: Vec<CalendarEvent>,
}

/// Interactive per-date reconciliation of a candidate batch against the
/// stored events.
///
/// The session surfaces one conflict at a time; conflict-free candidates
/// are accepted silently. Callers loop `next_conflict` / `resolve` until
/// no conflict remains, then commit the `finish` result in a single store
/// write.
#[derive(Debug)]
pub struct ReconcileSession {
    accepted: Vec<CalendarEvent>,
    pending: VecDeque<CalendarEvent>,
    current: Option<DateConflict>,
}

impl ReconcileSession {
    pub fn new(candidates: Vec<CalendarEvent>, existing: Vec<CalendarEvent>) -> Self {
        Self {
            accepted: existing,
            pending: candidates.into(),
            current: None,
        }
    }

    /// Advance to the next colliding candidate, auto-accepting candidates
    /// on free dates along the way. Returns the same conflict until it is
    /// resolved.
    pub fn next_conflict(&mut self) -> Option<&DateConflict> {
        if self.current.is_none() {
            while let Some(candidate) = self.pending.pop_front() {
                let colliders: Vec<CalendarEvent> = self
                    .accepted
                    .iter()
                    .filter(|event| event.date == candidate.date)
                    .cloned()
                    .collect();
                if colliders.is_empty() {
                    self.accepted.push(candidate);
                } else {
                    debug!(
                        target: "app::reconcile",
                        date = %candidate.date,
                        colliders = colliders.len(),
                        "date conflict detected"
                    );
                    self.current = Some(DateConflict {
                        candidate,
                        existing: colliders,
                    });
                    break;
                }
            }
        }
        self.current.as_ref()
    }

    /// Apply the user's decision to the conflict surfaced by
    /// `next_conflict`. Errors when no conflict is awaiting a decision.
    pub fn resolve(&mut self, choice: DateResolution) -> AppResult<()> {
        let DateConflict {
            candidate,
            existing,
        } = self
            .current
            .take()
            .ok_or_else(|| AppError::conflict("no conflict awaiting a decision"))?;

        debug!(
            target: "app::reconcile",
            date = %candidate.date,
            ?choice,
            "resolving date conflict"
        );

        match choice {
            DateResolution::Replace => {
                self.accepted.retain(|event| event.date != candidate.date);
                self.accepted.push(candidate);
            }
            DateResolution::ReplacePlan => {
                let plan_ids: Vec<String> = existing
                    .iter()
                    .filter_map(|event| event.template_id.clone())
                    .collect();
                if plan_ids.is_empty() {
                    // No plan to remove; degrade to a plain date replace
                    warn!(
                        target: "app::reconcile",
                        date = %candidate.date,
                        "replace-plan chosen but no collider carries a template id"
                    );
                    self.accepted.retain(|event| event.date != candidate.date);
                } else {
                    self.accepted.retain(|event| {
                        event
                            .template_id
                            .as_ref()
                            .map_or(true, |id| !plan_ids.contains(id))
                    });
                }
                self.accepted.push(candidate);
            }
            DateResolution::Keep => {
                self.accepted.push(candidate);
            }
            DateResolution::Cancel => {}
        }

        Ok(())
    }

    /// Consume the session and return the full post-resolution event set,
    /// ready for one `set_all`. Stored events keep their original order and
    /// accepted candidates follow in decision order, so cancelling every
    /// conflict hands back the store exactly as it was read. Errors when
    /// conflicts remain unresolved.
    pub fn finish(mut self) -> AppResult<Vec<CalendarEvent>> {
        if self.next_conflict().is_some() {
            return Err(AppError::conflict(
                "cannot finish reconciliation with unresolved conflicts",
            ));
        }
        Ok(self.accepted)
    }
}

/// Whole-batch collision between an incoming template schedule and a plan
/// already on the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConflict {
    /// Most frequent colliding template id; ties break arbitrarily
    pub template_id: String,
    pub collider_count: usize,
}

/// All-or-nothing reconciliation used when scheduling a whole template
pub struct PlanReconciler;

impl PlanReconciler {
    /// Detect stored events belonging to a different plan than the
    /// incoming batch. Returns the dominant colliding plan, if any.
    pub fn detect(
        candidates: &[CalendarEvent],
        existing: &[CalendarEvent],
    ) -> Option<PlanConflict> {
        let incoming_id = candidates
            .iter()
            .find_map(|event| event.template_id.as_deref());

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for event in existing {
            if let Some(id) = event.template_id.as_deref() {
                if Some(id) != incoming_id {
                    *counts.entry(id).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map(|(template_id, collider_count)| PlanConflict {
                template_id: template_id.to_string(),
                collider_count,
            })
    }

    /// Apply the user's whole-batch decision and return the merged event
    /// set for a single store write.
    pub fn apply(
        choice: PlanResolution,
        conflict: &PlanConflict,
        candidates: Vec<CalendarEvent>,
        existing: Vec<CalendarEvent>,
    ) -> Vec<CalendarEvent> {
        debug!(
            target: "app::reconcile",
            template_id = %conflict.template_id,
            ?choice,
            "resolving plan conflict"
        );

        let mut events = match choice {
            PlanResolution::KeepBoth => existing,
            PlanResolution::Replace => existing
                .into_iter()
                .filter(|event| event.template_id.as_deref() != Some(conflict.template_id.as_str()))
                .collect(),
        };
        events.extend(candidates);
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        events
    }
}
