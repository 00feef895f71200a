pub mod event;
pub mod exercise;
pub mod preferences;
pub mod template;
pub mod workout;

pub use event::{CalendarEvent, EventKind, WorkoutFocus};
pub use exercise::{Difficulty, DifficultyProfile, Exercise};
pub use preferences::{DurationUnit, PlanDuration, UserPreferences};
pub use template::{TemplateDay, TemplateExercise, WorkoutTemplate};
pub use workout::{CustomWorkout, GeneratedPlan, PlanDay, WorkoutDay, WorkoutExercise};
