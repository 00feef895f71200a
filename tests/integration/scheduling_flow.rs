use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

use fitplan_core::catalog::{ExerciseCatalog, TemplateCatalog};
use fitplan_core::export::{google_calendar_link, ics_file_content, ExportEvent};
use fitplan_core::models::{Difficulty, EventKind, PlanDuration, UserPreferences};
use fitplan_core::services::{
    CalendarProjector, PendingSchedule, PendingScheduleSlot, PlanGenerator, ReconcileSession,
};
use fitplan_core::store::{EventRepository, MemoryEventStore, SqliteEventStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn generate_project_and_commit_a_plan() {
    let catalog = ExerciseCatalog::builtin();
    let preferences = UserPreferences::new(
        Difficulty::Intermediate,
        vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
    )
    .with_goals(vec!["Strength".to_string()])
    .with_equipment(vec!["Dumbbells".to_string()])
    .with_plan_duration(PlanDuration::weeks(2));

    let mut rng = StdRng::seed_from_u64(2024);
    let plan = PlanGenerator::generate(&preferences, &catalog, &mut rng).expect("plan");
    assert!(plan.has_exercises());

    let today = date(2025, 6, 3); // a Tuesday
    let candidates = CalendarProjector::project_plan(&plan, preferences.plan_duration, today);

    // Two full weeks, three workout days each
    assert_eq!(candidates.len(), 6);
    for event in &candidates {
        assert!(event.date >= today);
        assert!(matches!(
            event.date.weekday(),
            Weekday::Mon | Weekday::Wed | Weekday::Fri
        ));
        assert_eq!(event.kind, EventKind::Scheduled);
    }

    let dir = tempdir().expect("temp dir");
    let store = SqliteEventStore::new(dir.path().join("events.sqlite")).expect("store");

    let mut session = ReconcileSession::new(candidates, store.get_all().expect("read"));
    assert!(session.next_conflict().is_none());
    let resolved = session.finish().expect("finish");
    store.set_all(&resolved).expect("commit");

    let stored = store.get_all().expect("re-read");
    assert_eq!(stored.len(), 6);
    assert!(stored.windows(2).all(|pair| pair[0].date <= pair[1].date));
}

#[test]
fn template_schedule_travels_through_the_handoff_slot() {
    let catalog = ExerciseCatalog::builtin();
    let template = TemplateCatalog::builtin()
        .lookup_by_id("strength-beginner")
        .expect("builtin template")
        .clone();

    let today = date(2025, 6, 2); // a Monday
    let weekdays = [Weekday::Mon, Weekday::Wed, Weekday::Fri];
    let candidates = CalendarProjector::project_template(&template, &weekdays, today, &catalog);
    assert!(!candidates.is_empty());
    assert!(candidates
        .iter()
        .all(|e| e.template_id.as_deref() == Some("strength-beginner")));

    let slot = PendingScheduleSlot::new();
    slot.publish(PendingSchedule {
        events: candidates.clone(),
        force_replace: false,
    });

    // The calendar context consumes the batch exactly once
    let pending = slot.take().expect("pending schedule");
    assert_eq!(pending.events, candidates);
    assert!(slot.take().is_none());

    let store = MemoryEventStore::new();
    let mut session = ReconcileSession::new(pending.events, store.get_all().expect("read"));
    assert!(session.next_conflict().is_none());
    store
        .set_all(&session.finish().expect("finish"))
        .expect("commit");
    assert_eq!(store.get_all().expect("re-read").len(), candidates.len());
}

#[test]
fn impossible_equipment_produces_an_empty_uncommittable_plan() {
    let catalog = ExerciseCatalog::new(vec![]);
    let preferences = UserPreferences::new(Difficulty::Beginner, vec![Weekday::Tue]);

    let mut rng = StdRng::seed_from_u64(5);
    let plan = PlanGenerator::generate(&preferences, &catalog, &mut rng).expect("plan");
    assert!(!plan.has_exercises());

    let candidates =
        CalendarProjector::project_plan(&plan, preferences.plan_duration, date(2025, 6, 2));
    assert!(candidates.is_empty());
}

#[test]
fn committed_events_export_to_both_formats() {
    let catalog = ExerciseCatalog::builtin();
    let preferences = UserPreferences::new(Difficulty::Beginner, vec![Weekday::Sat])
        .with_plan_duration(PlanDuration::weeks(1));

    let mut rng = StdRng::seed_from_u64(8);
    let plan = PlanGenerator::generate(&preferences, &catalog, &mut rng).expect("plan");
    let events = CalendarProjector::project_plan(&plan, preferences.plan_duration, date(2025, 6, 2));
    assert_eq!(events.len(), 1);

    let export: Vec<ExportEvent> = events.iter().map(ExportEvent::from_calendar_event).collect();

    let link = google_calendar_link(&export[0]);
    assert!(link.contains("dates=20250607T170000Z/20250607T180000Z"));

    let ics = ics_file_content(&export);
    assert!(ics.contains("DTSTART:20250607T170000Z"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
}
