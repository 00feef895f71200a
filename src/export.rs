//! Calendar export as plain strings: a Google Calendar deep link for one
//! event and an ICS payload for many. Callers decide how to deliver them.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};

use crate::models::CalendarEvent;

const GOOGLE_CALENDAR_BASE: &str = "https://www.google.com/calendar/render?action=TEMPLATE";
const MAX_URL_LEN: usize = 2000;

/// Event shape shared by both export formats
#[derive(Debug, Clone, PartialEq)]
pub struct ExportEvent {
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    /// Session start, 17:00 when absent
    pub start_time: Option<NaiveTime>,
    /// Session length in hours, 1 when absent
    pub duration_hours: Option<u32>,
}

impl ExportEvent {
    pub fn new(date: NaiveDate, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            description: description.into(),
            start_time: None,
            duration_hours: None,
        }
    }

    pub fn from_calendar_event(event: &CalendarEvent) -> Self {
        Self::new(event.date, event.title.clone(), event.title.clone())
    }

    fn start_stamp(&self) -> String {
        let time = self
            .start_time
            .unwrap_or_else(|| NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default());
        self.date
            .and_time(time)
            .format("%Y%m%dT%H%M%SZ")
            .to_string()
    }

    fn end_stamp(&self) -> String {
        let time = self
            .start_time
            .unwrap_or_else(|| NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default());
        let duration = Duration::hours(i64::from(self.duration_hours.unwrap_or(1)));
        (self.date.and_time(time) + duration)
            .format("%Y%m%dT%H%M%SZ")
            .to_string()
    }
}

/// Build a Google Calendar "add event" link for one event.
///
/// Links longer than 2000 characters are rebuilt with the title standing
/// in for the full description so they stay clickable everywhere.
pub fn google_calendar_link(event: &ExportEvent) -> String {
    let dates = format!("{}/{}", event.start_stamp(), event.end_stamp());
    let title = urlencoding::encode(&event.title);
    let details = urlencoding::encode(&event.description);

    let url = format!("{GOOGLE_CALENDAR_BASE}&text={title}&dates={dates}&details={details}");
    if url.len() > MAX_URL_LEN {
        return format!("{GOOGLE_CALENDAR_BASE}&text={title}&dates={dates}&details={title}");
    }
    url
}

/// Build an ICS payload for a batch of events, CRLF line endings included
pub fn ics_file_content(events: &[ExportEvent]) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
    ];

    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    for event in events {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}@fitplan", uuid::Uuid::new_v4()));
        lines.push(format!("DTSTAMP:{stamp}"));
        lines.push(format!("DTSTART:{}", event.start_stamp()));
        lines.push(format!("DTEND:{}", event.end_stamp()));
        lines.push(format!("SUMMARY:{}", escape_ics(&event.title)));
        lines.push(format!("DESCRIPTION:{}", escape_ics(&event.description)));
        lines.push("STATUS:CONFIRMED".to_string());
        lines.push("SEQUENCE:0".to_string());
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\r\n")
}

fn escape_ics(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, description: &str) -> ExportEvent {
        ExportEvent::new(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            title,
            description,
        )
    }

    #[test]
    fn google_link_defaults_to_one_hour_at_five_pm() {
        let link = google_calendar_link(&event("Leg Day", "Squats and lunges"));
        assert!(link.starts_with(GOOGLE_CALENDAR_BASE));
        assert!(link.contains("dates=20250602T170000Z/20250602T180000Z"));
        assert!(link.contains("text=Leg%20Day"));
    }

    #[test]
    fn explicit_start_and_duration_are_respected() {
        let mut ev = event("Morning Run", "Easy pace");
        ev.start_time = NaiveTime::from_hms_opt(6, 30, 0);
        ev.duration_hours = Some(2);
        let link = google_calendar_link(&ev);
        assert!(link.contains("dates=20250602T063000Z/20250602T083000Z"));
    }

    #[test]
    fn oversized_details_fall_back_to_the_title() {
        let link = google_calendar_link(&event("Workout", &"x".repeat(3000)));
        assert!(link.len() <= MAX_URL_LEN);
        assert!(link.ends_with("details=Workout"));
    }

    #[test]
    fn ics_payload_has_crlf_and_escaped_text() {
        let content = ics_file_content(&[event("Push, Pull; Legs", "Line one\nLine two")]);
        assert!(content.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(content.ends_with("END:VCALENDAR"));
        assert!(content.contains("SUMMARY:Push\\, Pull\\; Legs"));
        assert!(content.contains("DESCRIPTION:Line one\\nLine two"));
        assert!(content.contains("DTSTART:20250602T170000Z"));
        assert_eq!(content.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn every_event_gets_a_distinct_uid() {
        let content = ics_file_content(&[event("A", "a"), event("B", "b")]);
        let uids: Vec<&str> = content
            .lines()
            .filter(|line| line.starts_with("UID:"))
            .collect();
        assert_eq!(uids.len(), 2);
        assert_ne!(uids[0], uids[1]);
    }
}
