use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::ExerciseCatalog;
use crate::error::{AppError, AppResult};
use crate::models::{Exercise, GeneratedPlan, UserPreferences, WorkoutDay, WorkoutExercise};

/// Mapping from a user goal to the exercise categories that serve it
fn categories_for_goal(goal: &str) -> Option<[&'static str; 2]> {
    match goal {
        "Strength" => Some(["Strength", "Core"]),
        "Muscle Gain" => Some(["Strength", "Core"]),
        "Weight Loss" => Some(["Cardio", "Core"]),
        "Endurance" => Some(["Cardio", "Strength"]),
        "Flexibility" => Some(["Core", "Strength"]),
        _ => None,
    }
}

/// Engine that turns user preferences into a per-weekday workout plan
pub struct PlanGenerator;

impl PlanGenerator {
    /// Generate one workout day per selected weekday, drawing random
    /// exercises the user can actually perform.
    ///
    /// The RNG is injected so callers can seed it for reproducible plans.
    pub fn generate(
        preferences: &UserPreferences,
        catalog: &ExerciseCatalog,
        rng: &mut impl Rng,
    ) -> AppResult<GeneratedPlan> {
        if preferences.workout_days.is_empty() {
            return Err(AppError::validation(
                "cannot generate a plan without selected workout days",
            ));
        }

        let eligible: Vec<&Exercise> = catalog
            .all()
            .iter()
            .filter(|exercise| exercise.is_doable_with(&preferences.available_equipment))
            .collect();

        let mut by_category: HashMap<&str, Vec<&Exercise>> = HashMap::new();
        for &exercise in &eligible {
            by_category
                .entry(exercise.category.as_str())
                .or_default()
                .push(exercise);
        }

        let categories = Self::relevant_categories(preferences, catalog, &by_category);
        let cap = preferences.fitness_level.exercises_per_day();
        let profile = preferences.fitness_level.profile();

        let mut days = Vec::with_capacity(preferences.workout_days.len());
        for &weekday in &preferences.workout_days {
            let exercises = Self::draw_day(&categories, &by_category, cap, rng)
                .into_iter()
                .map(|exercise| WorkoutExercise::with_profile(exercise.clone(), profile))
                .collect::<Vec<_>>();

            debug!(
                target: "app::generator",
                ?weekday,
                count = exercises.len(),
                "assigned exercises for weekday"
            );
            days.push(WorkoutDay { weekday, exercises });
        }

        Ok(GeneratedPlan { days })
    }

    /// Categories to draw from, in catalog order. Union over the user's
    /// goals; unknown or absent goals widen to every eligible category.
    fn relevant_categories(
        preferences: &UserPreferences,
        catalog: &ExerciseCatalog,
        by_category: &HashMap<&str, Vec<&Exercise>>,
    ) -> Vec<String> {
        let mut wanted: Vec<&str> = Vec::new();
        let mut widen = preferences.goals.is_empty();
        for goal in &preferences.goals {
            match categories_for_goal(goal) {
                Some(pair) => {
                    for category in pair {
                        if !wanted.contains(&category) {
                            wanted.push(category);
                        }
                    }
                }
                None => widen = true,
            }
        }

        catalog
            .categories()
            .into_iter()
            .filter(|category| by_category.contains_key(category.as_str()))
            .filter(|category| widen || wanted.contains(&category.as_str()))
            .collect()
    }

    /// Round-robin the categories, drawing one random unused exercise per
    /// visit, until the cap is reached or the rotation stalls.
    fn draw_day<'a>(
        categories: &[String],
        by_category: &HashMap<&str, Vec<&'a Exercise>>,
        cap: usize,
        rng: &mut impl Rng,
    ) -> Vec<&'a Exercise> {
        let mut pools: Vec<Vec<&Exercise>> = categories
            .iter()
            .filter_map(|category| by_category.get(category.as_str()))
            .map(|pool| {
                let mut shuffled = pool.clone();
                shuffled.shuffle(rng);
                shuffled
            })
            .collect();

        let stall_limit = pools.len() * 2;
        let mut picked = Vec::new();
        let mut cursor = 0usize;
        let mut fruitless = 0usize;

        while picked.len() < cap && !pools.is_empty() && fruitless < stall_limit {
            let slot = cursor % pools.len();
            match pools[slot].pop() {
                Some(exercise) => {
                    picked.push(exercise);
                    fruitless = 0;
                    if pools[slot].is_empty() {
                        pools.remove(slot);
                        cursor = slot;
                    } else {
                        cursor = slot + 1;
                    }
                }
                None => {
                    pools.remove(slot);
                    cursor = slot;
                    fruitless += 1;
                }
            }
        }

        picked
    }
}
