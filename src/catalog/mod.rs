pub mod data;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Exercise, WorkoutTemplate};

/// Immutable exercise reference data with id-based lookup
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
    by_id: HashMap<String, usize>,
}

impl ExerciseCatalog {
    pub fn new(exercises: Vec<Exercise>) -> Self {
        let by_id = exercises
            .iter()
            .enumerate()
            .map(|(index, exercise)| (exercise.id.clone(), index))
            .collect();
        Self { exercises, by_id }
    }

    /// Catalog seeded with the built-in exercise database
    pub fn builtin() -> Self {
        Self::new(data::builtin_exercises())
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn lookup_by_id(&self, id: &str) -> Option<&Exercise> {
        self.by_id.get(id).map(|index| &self.exercises[*index])
    }

    /// Distinct categories in catalog order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for exercise in &self.exercises {
            if !seen.contains(&exercise.category) {
                seen.push(exercise.category.clone());
            }
        }
        seen
    }

    /// Distinct equipment names in catalog order, excluding "None"
    pub fn equipment_options(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for exercise in &self.exercises {
            for item in &exercise.equipment {
                if item != "None" && !seen.contains(item) {
                    seen.push(item.clone());
                }
            }
        }
        seen
    }

    /// Apply a builder-style filter over the catalog
    pub fn filter(&self, filter: &ExerciseFilter) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|exercise| filter.matches(exercise))
            .collect()
    }
}

/// Search criteria for browsing the exercise catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseFilter {
    /// Case-insensitive substring over name and description
    pub search: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// Exercise must require this equipment item
    pub equipment: Option<String>,
}

impl ExerciseFilter {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !exercise.name.to_lowercase().contains(&needle)
                && !exercise.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &exercise.category != category {
                return false;
            }
        }
        if let Some(equipment) = &self.equipment {
            if !exercise.equipment.iter().any(|item| item == equipment) {
                return false;
            }
        }
        true
    }
}

/// Pre-built workout programs with id-based lookup
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<WorkoutTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<WorkoutTemplate>) -> Self {
        Self { templates }
    }

    /// Catalog seeded with the built-in templates
    pub fn builtin() -> Self {
        Self::new(data::builtin_templates())
    }

    pub fn all(&self) -> &[WorkoutTemplate] {
        &self.templates
    }

    pub fn lookup_by_id(&self, id: &str) -> Option<&WorkoutTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Warn about template exercise refs missing from the exercise catalog
    pub fn validate_against(&self, exercises: &ExerciseCatalog) -> Vec<String> {
        let mut missing = Vec::new();
        for template in &self.templates {
            for day in &template.days {
                for entry in &day.exercises {
                    if exercises.lookup_by_id(&entry.exercise_id).is_none()
                        && !missing.contains(&entry.exercise_id)
                    {
                        warn!(
                            target: "app::catalog",
                            template = %template.name,
                            exercise_id = %entry.exercise_id,
                            "template references unknown exercise"
                        );
                        missing.push(entry.exercise_id.clone());
                    }
                }
            }
        }
        missing
    }
}
