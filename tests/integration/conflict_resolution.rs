use chrono::{NaiveDate, Weekday};
use tempfile::tempdir;

use fitplan_core::catalog::{ExerciseCatalog, TemplateCatalog};
use fitplan_core::models::{CalendarEvent, EventKind, WorkoutFocus};
use fitplan_core::services::{
    CalendarProjector, DateResolution, PendingSchedule, PendingScheduleSlot, PlanReconciler,
    PlanResolution, ReconcileSession,
};
use fitplan_core::store::{EventRepository, SqliteEventStore};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).expect("valid date")
}

fn manual_event(day: u32, title: &str) -> CalendarEvent {
    CalendarEvent::new(
        date(day),
        title.to_string(),
        EventKind::Scheduled,
        WorkoutFocus::Strength,
    )
}

fn plan_event(day: u32, title: &str, template_id: &str) -> CalendarEvent {
    CalendarEvent::new(
        date(day),
        title.to_string(),
        EventKind::Template,
        WorkoutFocus::Strength,
    )
    .with_template_id(template_id)
}

#[test]
fn per_date_choices_apply_one_at_a_time() {
    let dir = tempdir().expect("temp dir");
    let store = SqliteEventStore::new(dir.path().join("events.sqlite")).expect("store");
    store
        .set_all(&[
            manual_event(2, "existing run"),
            manual_event(4, "existing lift"),
            manual_event(6, "existing yoga"),
        ])
        .expect("seed");

    let candidates = vec![
        manual_event(2, "new workout a"),
        manual_event(4, "new workout b"),
        manual_event(6, "new workout c"),
        manual_event(8, "new workout d"),
    ];

    let mut session = ReconcileSession::new(candidates, store.get_all().expect("read"));

    let first = session.next_conflict().expect("first conflict").clone();
    assert_eq!(first.candidate.date, date(2));
    session.resolve(DateResolution::Replace).expect("replace");

    let second = session.next_conflict().expect("second conflict").clone();
    assert_eq!(second.candidate.date, date(4));
    session.resolve(DateResolution::Keep).expect("keep");

    let third = session.next_conflict().expect("third conflict").clone();
    assert_eq!(third.candidate.date, date(6));
    session.resolve(DateResolution::Cancel).expect("cancel");

    assert!(session.next_conflict().is_none());
    let resolved = session.finish().expect("finish");
    store.set_all(&resolved).expect("commit");

    let stored = store.get_all().expect("re-read");
    let titles_on = |d: u32| -> Vec<String> {
        stored
            .iter()
            .filter(|e| e.date == date(d))
            .map(|e| e.title.clone())
            .collect()
    };

    assert_eq!(titles_on(2), vec!["new workout a"]);
    let mut on_fourth = titles_on(4);
    on_fourth.sort();
    assert_eq!(on_fourth, vec!["existing lift", "new workout b"]);
    assert_eq!(titles_on(6), vec!["existing yoga"]);
    assert_eq!(titles_on(8), vec!["new workout d"]);
}

#[test]
fn replace_plan_clears_the_old_plan_everywhere() {
    let dir = tempdir().expect("temp dir");
    let store = SqliteEventStore::new(dir.path().join("events.sqlite")).expect("store");
    store
        .set_all(&[
            plan_event(2, "old plan day 1", "old-plan"),
            plan_event(4, "old plan day 2", "old-plan"),
            plan_event(6, "old plan day 3", "old-plan"),
            manual_event(4, "independent session"),
        ])
        .expect("seed");

    let mut session = ReconcileSession::new(
        vec![manual_event(4, "fresh workout")],
        store.get_all().expect("read"),
    );
    session.next_conflict().expect("conflict");
    session
        .resolve(DateResolution::ReplacePlan)
        .expect("replace plan");

    let resolved = session.finish().expect("finish");
    store.set_all(&resolved).expect("commit");

    let stored = store.get_all().expect("re-read");
    assert!(stored
        .iter()
        .all(|e| e.template_id.as_deref() != Some("old-plan")));
    assert!(stored.iter().any(|e| e.title == "fresh workout"));
    assert!(stored.iter().any(|e| e.title == "independent session"));
}

#[test]
fn cancelling_every_conflict_leaves_the_store_untouched() {
    let dir = tempdir().expect("temp dir");
    let store = SqliteEventStore::new(dir.path().join("events.sqlite")).expect("store");
    let seeded = vec![manual_event(2, "keep me"), manual_event(4, "me too")];
    store.set_all(&seeded).expect("seed");

    let mut session = ReconcileSession::new(
        vec![manual_event(2, "intruder"), manual_event(4, "intruder")],
        store.get_all().expect("read"),
    );
    while session.next_conflict().is_some() {
        session.resolve(DateResolution::Cancel).expect("cancel");
    }
    let resolved = session.finish().expect("finish");
    store.set_all(&resolved).expect("commit");

    assert_eq!(store.get_all().expect("re-read"), seeded);
}

#[test]
fn whole_plan_conflict_is_all_or_nothing() {
    let catalog = ExerciseCatalog::builtin();
    let templates = TemplateCatalog::builtin();
    let today = NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date");
    let weekdays = [Weekday::Mon, Weekday::Wed, Weekday::Fri];

    let old_template = templates.lookup_by_id("home-workout").expect("template");
    let existing = CalendarProjector::project_template(old_template, &weekdays, today, &catalog);

    let new_template = templates
        .lookup_by_id("strength-beginner")
        .expect("template");
    let candidates = CalendarProjector::project_template(new_template, &weekdays, today, &catalog);

    let conflict = PlanReconciler::detect(&candidates, &existing).expect("plan conflict");
    assert_eq!(conflict.template_id, "home-workout");

    let replaced = PlanReconciler::apply(
        PlanResolution::Replace,
        &conflict,
        candidates.clone(),
        existing.clone(),
    );
    assert!(replaced
        .iter()
        .all(|e| e.template_id.as_deref() == Some("strength-beginner")));
    assert_eq!(replaced.len(), candidates.len());

    let both = PlanReconciler::apply(PlanResolution::KeepBoth, &conflict, candidates, existing);
    assert!(both
        .iter()
        .any(|e| e.template_id.as_deref() == Some("home-workout")));
    assert!(both
        .iter()
        .any(|e| e.template_id.as_deref() == Some("strength-beginner")));
}

#[test]
fn force_replace_handoff_skips_per_date_prompts() {
    let catalog = ExerciseCatalog::builtin();
    let templates = TemplateCatalog::builtin();
    let today = NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date");
    let weekdays = [Weekday::Mon, Weekday::Thu];

    let dir = tempdir().expect("temp dir");
    let store = SqliteEventStore::new(dir.path().join("events.sqlite")).expect("store");
    let old_template = templates.lookup_by_id("home-workout").expect("template");
    store
        .set_all(&CalendarProjector::project_template(
            old_template,
            &weekdays,
            today,
            &catalog,
        ))
        .expect("seed");

    let new_template = templates
        .lookup_by_id("strength-beginner")
        .expect("template");
    let slot = PendingScheduleSlot::new();
    slot.publish(PendingSchedule {
        events: CalendarProjector::project_template(new_template, &weekdays, today, &catalog),
        force_replace: true,
    });

    let pending = slot.take().expect("pending");
    assert!(pending.force_replace);

    let existing = store.get_all().expect("read");
    let conflict = PlanReconciler::detect(&pending.events, &existing).expect("conflict");
    let merged =
        PlanReconciler::apply(PlanResolution::Replace, &conflict, pending.events, existing);
    store.set_all(&merged).expect("commit");

    let stored = store.get_all().expect("re-read");
    assert!(stored
        .iter()
        .all(|e| e.template_id.as_deref() == Some("strength-beginner")));
}
