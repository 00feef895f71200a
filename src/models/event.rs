use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How an event came to be on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Projected from a generated plan
    Scheduled,
    /// Projected from a catalog template
    Template,
}

/// Dominant focus of a session, derived from its exercise categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutFocus {
    Strength,
    Cardio,
    Flexibility,
    Rest,
}

impl WorkoutFocus {
    /// Cardio and HIIT days read as cardio, flexibility as flexibility,
    /// anything else as strength
    pub fn from_categories<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        let mut saw_any = false;
        for category in categories {
            saw_any = true;
            match category {
                "Cardio" | "HIIT" => return WorkoutFocus::Cardio,
                "Flexibility" => return WorkoutFocus::Flexibility,
                _ => {}
            }
        }
        if saw_any {
            WorkoutFocus::Strength
        } else {
            WorkoutFocus::Rest
        }
    }
}

/// One dated calendar entry; candidates share this shape until committed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub kind: EventKind,
    pub template_id: Option<String>,
    pub focus: WorkoutFocus,
}

impl CalendarEvent {
    pub fn new(date: NaiveDate, title: String, kind: EventKind, focus: WorkoutFocus) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            title,
            kind,
            template_id: None,
            focus,
        }
    }

    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }
}
