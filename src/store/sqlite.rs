use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::models::{CalendarEvent, EventKind, WorkoutFocus};
use crate::store::EventRepository;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// SQLite-backed event store. Connections are opened per operation with
/// the schema bootstrapped on open.
#[derive(Clone, Debug)]
pub struct SqliteEventStore {
    path: PathBuf,
}

impl SqliteEventStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> AppResult<Self> {
        let path = path.into();
        info!(target: "app::store", db_path = %path.display(), "initializing event store");
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let store = Self { path };
        {
            store.get_connection()?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_connection(&self) -> AppResult<Connection> {
        let mut conn = Connection::open(&self.path)?;
        configure_connection(&mut conn)?;
        conn.execute_batch(SCHEMA_SQL)?;
        debug!(target: "app::store", db_path = %self.path.display(), "connection ready");
        Ok(conn)
    }
}

impl EventRepository for SqliteEventStore {
    fn get_all(&self) -> AppResult<Vec<CalendarEvent>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, event_date, title, kind, template_id, focus
             FROM calendar_events ORDER BY event_date, id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut events = Vec::new();
        for row in rows {
            let (id, date, title, kind, template_id, focus) = row?;
            // Rows that no longer parse are dropped, not fatal
            let Ok(date) = NaiveDate::parse_from_str(&date, "%Y-%m-%d") else {
                warn!(target: "app::store", %id, %date, "dropping event with malformed date");
                continue;
            };
            let (Some(kind), Some(focus)) = (parse_kind(&kind), parse_focus(&focus)) else {
                warn!(target: "app::store", %id, %kind, %focus, "dropping event with malformed fields");
                continue;
            };
            events.push(CalendarEvent {
                id,
                date,
                title,
                kind,
                template_id,
                focus,
            });
        }
        Ok(events)
    }

    fn set_all(&self, events: &[CalendarEvent]) -> AppResult<()> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM calendar_events", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO calendar_events (id, event_date, title, kind, template_id, focus)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for event in events {
                stmt.execute(params![
                    event.id,
                    event.date.format("%Y-%m-%d").to_string(),
                    event.title,
                    kind_str(event.kind),
                    event.template_id,
                    focus_str(event.focus),
                ])?;
            }
        }
        tx.commit()?;
        debug!(target: "app::store", count = events.len(), "event set replaced");
        Ok(())
    }
}

fn configure_connection(conn: &mut Connection) -> AppResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.pragma_update(None, "journal_mode", &"WAL")?;
    Ok(())
}

fn kind_str(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Scheduled => "scheduled",
        EventKind::Template => "template",
    }
}

fn parse_kind(value: &str) -> Option<EventKind> {
    match value {
        "scheduled" => Some(EventKind::Scheduled),
        "template" => Some(EventKind::Template),
        _ => None,
    }
}

fn focus_str(focus: WorkoutFocus) -> &'static str {
    match focus {
        WorkoutFocus::Strength => "strength",
        WorkoutFocus::Cardio => "cardio",
        WorkoutFocus::Flexibility => "flexibility",
        WorkoutFocus::Rest => "rest",
    }
}

fn parse_focus(value: &str) -> Option<WorkoutFocus> {
    match value {
        "strength" => Some(WorkoutFocus::Strength),
        "cardio" => Some(WorkoutFocus::Cardio),
        "flexibility" => Some(WorkoutFocus::Flexibility),
        "rest" => Some(WorkoutFocus::Rest),
        _ => None,
    }
}
