use serde::{Deserialize, Serialize};

use super::exercise::Difficulty;
use super::preferences::PlanDuration;

/// Exercise reference inside a template; resolved against the catalog
/// at projection time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateExercise {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
}

/// One named session of a template, e.g. "Push Day"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDay {
    pub name: String,
    pub exercises: Vec<TemplateExercise>,
}

/// Pre-built workout program from the template catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub equipment: Vec<String>,
    pub session_minutes: u32,
    /// Recommended sessions per week
    pub frequency: u32,
    pub goal: Option<String>,
    pub plan_duration: PlanDuration,
    pub days: Vec<TemplateDay>,
}
