use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::exercise::{DifficultyProfile, Exercise};
use super::template::TemplateDay;

/// One exercise inside a concrete workout, with its prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub exercise: Exercise,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
}

impl WorkoutExercise {
    /// Pair an exercise with the prescription of a difficulty tier
    pub fn with_profile(exercise: Exercise, profile: DifficultyProfile) -> Self {
        Self {
            exercise,
            sets: profile.sets,
            reps: profile.reps.to_string(),
            rest_seconds: profile.rest_seconds,
        }
    }
}

/// Exercises assigned to one weekday of a generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub weekday: Weekday,
    pub exercises: Vec<WorkoutExercise>,
}

/// A full generated plan, one entry per selected weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub days: Vec<WorkoutDay>,
}

impl GeneratedPlan {
    /// False when no exercise matched the user's equipment on any day
    pub fn has_exercises(&self) -> bool {
        self.days.iter().any(|day| !day.exercises.is_empty())
    }
}

/// A day of scheduled work, either produced by the generator or taken
/// from a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PlanDay {
    Generated(WorkoutDay),
    Template(TemplateDay),
}

impl PlanDay {
    pub fn exercise_count(&self) -> usize {
        match self {
            PlanDay::Generated(day) => day.exercises.len(),
            PlanDay::Template(day) => day.exercises.len(),
        }
    }
}

/// A user-assembled routine built in the workout builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomWorkout {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub created_at: DateTime<Utc>,
}

impl CustomWorkout {
    pub fn new(name: String, exercises: Vec<WorkoutExercise>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            description: None,
            exercises,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}
