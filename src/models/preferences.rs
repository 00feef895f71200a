use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::exercise::Difficulty;

/// Unit of a plan duration selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Weeks,
    Months,
}

/// Length of the generated plan; months are approximated as 30 days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDuration {
    pub value: u32,
    pub unit: DurationUnit,
}

impl PlanDuration {
    pub fn weeks(value: u32) -> Self {
        Self {
            value,
            unit: DurationUnit::Weeks,
        }
    }

    pub fn months(value: u32) -> Self {
        Self {
            value,
            unit: DurationUnit::Months,
        }
    }

    /// Total number of calendar days covered by the plan
    pub fn total_days(&self) -> u32 {
        match self.unit {
            DurationUnit::Weeks => self.value * 7,
            DurationUnit::Months => self.value * 30,
        }
    }
}

/// Everything the plan generator needs to know about the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub fitness_level: Difficulty,
    pub goals: Vec<String>,
    pub workout_environment: String,
    pub available_equipment: Vec<String>,
    pub time_per_session_minutes: u32,
    pub workout_days: Vec<Weekday>,
    pub plan_duration: PlanDuration,
}

impl UserPreferences {
    pub fn new(fitness_level: Difficulty, workout_days: Vec<Weekday>) -> Self {
        Self {
            fitness_level,
            goals: Vec::new(),
            workout_environment: "home".to_string(),
            available_equipment: Vec::new(),
            time_per_session_minutes: 45,
            workout_days,
            plan_duration: PlanDuration::weeks(4),
        }
    }

    pub fn with_goals(mut self, goals: Vec<String>) -> Self {
        self.goals = goals;
        self
    }

    pub fn with_equipment(mut self, available_equipment: Vec<String>) -> Self {
        self.available_equipment = available_equipment;
        self
    }

    pub fn with_plan_duration(mut self, plan_duration: PlanDuration) -> Self {
        self.plan_duration = plan_duration;
        self
    }
}
