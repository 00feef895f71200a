use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::warn;

use crate::catalog::ExerciseCatalog;
use crate::models::{
    CalendarEvent, EventKind, GeneratedPlan, PlanDay, PlanDuration, TemplateDay, WorkoutFocus,
    WorkoutTemplate,
};

/// Projects plans and templates onto concrete calendar dates.
///
/// Projection is pure. It never touches the event store; conflict handling
/// against stored events is the reconciler's job.
pub struct CalendarProjector;

impl CalendarProjector {
    /// First date on or after `from` falling on `weekday`. A `from` that
    /// already falls on `weekday` counts as the next occurrence.
    pub fn next_occurrence_on_or_after(from: NaiveDate, weekday: Weekday) -> NaiveDate {
        let offset = (weekday.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7;
        from + Duration::days(i64::from(offset))
    }

    /// Project a generated plan into dated candidate events.
    ///
    /// Each plan day anchors at its weekday's next occurrence and repeats
    /// weekly for the plan duration. Days without exercises produce no
    /// events.
    pub fn project_plan(
        plan: &GeneratedPlan,
        duration: PlanDuration,
        today: NaiveDate,
    ) -> Vec<CalendarEvent> {
        let mut events = Vec::new();
        for day in &plan.days {
            events.extend(Self::day_events(
                &PlanDay::Generated(day.clone()),
                day.weekday,
                duration,
                today,
                None,
            ));
        }
        events.sort_by_key(|event| event.date);
        events
    }

    /// Project a template onto the user's selected weekdays.
    ///
    /// Weekdays are taken in chronological order from `today` and mapped to
    /// template days cyclically, so a 3-day template on 4 weekdays wraps
    /// back to day one. Events carry the template id for plan-level
    /// conflict handling later.
    pub fn project_template(
        template: &WorkoutTemplate,
        selected_weekdays: &[Weekday],
        today: NaiveDate,
        catalog: &ExerciseCatalog,
    ) -> Vec<CalendarEvent> {
        if template.days.is_empty() || selected_weekdays.is_empty() {
            return Vec::new();
        }

        let mut ordered: Vec<Weekday> = selected_weekdays.to_vec();
        ordered.sort_by_key(|weekday| Self::next_occurrence_on_or_after(today, *weekday));
        ordered.dedup();

        let mut events = Vec::new();
        for (index, weekday) in ordered.iter().enumerate() {
            let day = &template.days[index % template.days.len()];
            events.extend(Self::day_events(
                &PlanDay::Template(day.clone()),
                *weekday,
                template.plan_duration,
                today,
                Some((template, catalog)),
            ));
        }
        events.sort_by_key(|event| event.date);
        events
    }

    /// Walk one day of work across its weekday's dates, dispatching on the
    /// day variant for title, kind, and focus.
    ///
    /// The window runs from the weekday's first occurrence, so a plan
    /// started mid-week still gets its full duration on every weekday.
    fn day_events(
        day: &PlanDay,
        weekday: Weekday,
        duration: PlanDuration,
        today: NaiveDate,
        template: Option<(&WorkoutTemplate, &ExerciseCatalog)>,
    ) -> Vec<CalendarEvent> {
        if day.exercise_count() == 0 {
            warn!(
                target: "app::projector",
                ?weekday,
                "skipping day with no exercises"
            );
            return Vec::new();
        }

        let (title, kind, focus, template_id) = match day {
            PlanDay::Generated(workout) => (
                format!("{} Exercise Workout", workout.exercises.len()),
                EventKind::Scheduled,
                WorkoutFocus::from_categories(
                    workout.exercises.iter().map(|e| e.exercise.category.as_str()),
                ),
                None,
            ),
            PlanDay::Template(template_day) => {
                let Some((template, catalog)) = template else {
                    warn!(
                        target: "app::projector",
                        day = %template_day.name,
                        "template day projected without its template"
                    );
                    return Vec::new();
                };
                (
                    format!("{} - {}", template.name, template_day.name),
                    EventKind::Template,
                    Self::template_day_focus(template_day, catalog, &template.name),
                    Some(template.id.clone()),
                )
            }
        };

        let anchor = Self::next_occurrence_on_or_after(today, weekday);
        let horizon = anchor + Duration::days(i64::from(duration.total_days()));
        let mut events = Vec::new();
        let mut date = anchor;
        while date < horizon {
            let mut event = CalendarEvent::new(date, title.clone(), kind, focus);
            event.template_id = template_id.clone();
            events.push(event);
            date += Duration::days(7);
        }
        events
    }

    fn template_day_focus(
        day: &TemplateDay,
        catalog: &ExerciseCatalog,
        template_name: &str,
    ) -> WorkoutFocus {
        let mut categories = Vec::new();
        for entry in &day.exercises {
            match catalog.lookup_by_id(&entry.exercise_id) {
                Some(exercise) => categories.push(exercise.category.as_str()),
                None => {
                    warn!(
                        target: "app::projector",
                        template = %template_name,
                        exercise_id = %entry.exercise_id,
                        "template day references unknown exercise"
                    );
                }
            }
        }
        WorkoutFocus::from_categories(categories)
    }
}
