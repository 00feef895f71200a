use serde::{Deserialize, Serialize};

/// Difficulty tier used by exercises, preferences, and templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Default set/rep/rest prescription for this tier
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Beginner => DifficultyProfile {
                sets: 2,
                reps: "10-12",
                rest_seconds: 60,
            },
            Difficulty::Intermediate => DifficultyProfile {
                sets: 3,
                reps: "8-10",
                rest_seconds: 90,
            },
            Difficulty::Advanced => DifficultyProfile {
                sets: 4,
                reps: "6-8",
                rest_seconds: 120,
            },
        }
    }

    /// Maximum number of exercises assigned to a single workout day
    pub fn exercises_per_day(self) -> usize {
        match self {
            Difficulty::Beginner => 5,
            Difficulty::Intermediate => 6,
            Difficulty::Advanced => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Prescription attached to every generated exercise selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub sets: u32,
    pub reps: &'static str,
    pub rest_seconds: u32,
}

/// Immutable catalog entry describing one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub equipment: Vec<String>,
    pub difficulty: Difficulty,
    pub instructions: Vec<String>,
}

impl Exercise {
    /// True when the exercise needs no equipment at all
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty() || self.equipment.iter().all(|item| item == "None")
    }

    /// True when every required piece of equipment is available
    pub fn is_doable_with(&self, available_equipment: &[String]) -> bool {
        self.is_bodyweight()
            || self
                .equipment
                .iter()
                .all(|item| item == "None" || available_equipment.iter().any(|have| have == item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(equipment: &[&str]) -> Exercise {
        Exercise {
            id: "ex-1".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            category: "Strength".to_string(),
            equipment: equipment.iter().map(|s| s.to_string()).collect(),
            difficulty: Difficulty::Beginner,
            instructions: Vec::new(),
        }
    }

    #[test]
    fn bodyweight_exercise_is_always_doable() {
        assert!(exercise(&["None"]).is_doable_with(&[]));
        assert!(exercise(&[]).is_doable_with(&[]));
    }

    #[test]
    fn requires_every_listed_item() {
        let ex = exercise(&["Barbell", "Bench"]);
        assert!(!ex.is_doable_with(&["Barbell".to_string()]));
        assert!(ex.is_doable_with(&["Bench".to_string(), "Barbell".to_string()]));
    }

    #[test]
    fn difficulty_profiles_scale_with_tier() {
        assert_eq!(Difficulty::Beginner.profile().sets, 2);
        assert_eq!(Difficulty::Intermediate.profile().rest_seconds, 90);
        assert_eq!(Difficulty::Advanced.exercises_per_day(), 8);
    }
}
