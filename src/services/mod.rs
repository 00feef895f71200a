pub mod calendar_projector;
pub mod conflict_resolver;
pub mod handoff;
pub mod plan_generator;
pub mod workout_builder;

pub use calendar_projector::CalendarProjector;
pub use conflict_resolver::{
    DateConflict, DateResolution, PlanConflict, PlanReconciler, PlanResolution, ReconcileSession,
};
pub use handoff::{PendingSchedule, PendingScheduleSlot};
pub use plan_generator::PlanGenerator;
pub use workout_builder::WorkoutBuilder;
