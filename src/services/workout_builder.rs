use tracing::warn;

use crate::catalog::ExerciseCatalog;
use crate::error::{AppError, AppResult};
use crate::models::{CustomWorkout, Difficulty, Exercise, WorkoutExercise, WorkoutTemplate};

/// Builds user-editable routines, including copies of catalog templates
pub struct WorkoutBuilder;

impl WorkoutBuilder {
    /// Flatten a template into one editable routine.
    ///
    /// Unknown exercise references become placeholders so the user can swap
    /// them out instead of losing the slot. A template yielding no
    /// exercises at all is rejected.
    pub fn from_template(
        template: &WorkoutTemplate,
        catalog: &ExerciseCatalog,
    ) -> AppResult<CustomWorkout> {
        let mut exercises = Vec::new();
        for day in &template.days {
            for entry in &day.exercises {
                let exercise = match catalog.lookup_by_id(&entry.exercise_id) {
                    Some(found) => found.clone(),
                    None => {
                        warn!(
                            target: "app::builder",
                            template = %template.name,
                            exercise_id = %entry.exercise_id,
                            "substituting placeholder for unknown exercise"
                        );
                        Self::placeholder(&entry.exercise_id)
                    }
                };
                exercises.push(WorkoutExercise {
                    exercise,
                    sets: entry.sets,
                    reps: entry.reps.clone(),
                    rest_seconds: entry.rest_seconds,
                });
            }
        }

        if exercises.is_empty() {
            return Err(AppError::validation(format!(
                "template '{}' contains no exercises to copy",
                template.name
            )));
        }

        Ok(CustomWorkout::new(format!("{} (Copy)", template.name), exercises)
            .with_description(template.description.clone()))
    }

    fn placeholder(exercise_id: &str) -> Exercise {
        Exercise {
            id: exercise_id.to_string(),
            name: "Unknown exercise".to_string(),
            description: "Exercise missing from the catalog".to_string(),
            category: "Strength".to_string(),
            equipment: vec!["None".to_string()],
            difficulty: Difficulty::Beginner,
            instructions: Vec::new(),
        }
    }
}
