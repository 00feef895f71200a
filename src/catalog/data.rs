use crate::models::{
    Difficulty, Exercise, PlanDuration, TemplateDay, TemplateExercise, WorkoutTemplate,
};

fn exercise(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    equipment: &[&str],
    difficulty: Difficulty,
    instructions: &[&str],
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        equipment: equipment.iter().map(|s| s.to_string()).collect(),
        difficulty,
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
    }
}

fn template_exercise(exercise_id: &str, sets: u32, reps: &str, rest_seconds: u32) -> TemplateExercise {
    TemplateExercise {
        exercise_id: exercise_id.to_string(),
        sets,
        reps: reps.to_string(),
        rest_seconds,
    }
}

/// Built-in exercise reference data
pub fn builtin_exercises() -> Vec<Exercise> {
    use Difficulty::{Advanced, Beginner, Intermediate};

    vec![
        exercise(
            "bw1",
            "Push-ups",
            "Classic bodyweight exercise for chest, shoulders, and triceps",
            "Strength",
            &["None"],
            Beginner,
            &[
                "Start in plank position with hands shoulder-width apart",
                "Lower chest to ground while keeping elbows close to body",
                "Push back up to starting position",
            ],
        ),
        exercise(
            "bw2",
            "Squats",
            "Lower body exercise targeting quads, hamstrings and glutes",
            "Strength",
            &["None"],
            Beginner,
            &[
                "Stand with feet shoulder-width apart",
                "Lower hips down and back as if sitting in a chair",
                "Keep chest up and back straight",
                "Return to standing position",
            ],
        ),
        exercise(
            "bw3",
            "Lunges",
            "Unilateral lower body exercise for balance and strength",
            "Strength",
            &["None"],
            Beginner,
            &[
                "Step forward with one leg",
                "Lower body until both knees form 90-degree angles",
                "Push back to standing",
                "Repeat with other leg",
            ],
        ),
        exercise(
            "bw4",
            "Plank",
            "Core stability exercise that works the entire body",
            "Core",
            &["None"],
            Beginner,
            &[
                "Support your weight on forearms and toes",
                "Keep body in a straight line from head to heels",
                "Engage core and hold position for 30-60 seconds",
            ],
        ),
        exercise(
            "bw5",
            "Mountain Climbers",
            "Dynamic exercise for cardio and core",
            "Cardio",
            &["None"],
            Intermediate,
            &[
                "Start in a plank position",
                "Rapidly bring one knee toward chest, then switch legs",
                "Continue alternating legs at a quick pace for 30-60 seconds",
            ],
        ),
        exercise(
            "bw6",
            "Burpees",
            "Full-body exercise for strength and cardio",
            "Cardio",
            &["None"],
            Intermediate,
            &[
                "Start standing, then squat down and place hands on floor",
                "Jump feet back into plank position",
                "Jump feet forward to hands",
                "Jump up with arms overhead",
            ],
        ),
        exercise(
            "bw7",
            "Pull-ups",
            "Upper body pulling exercise for back and biceps",
            "Strength",
            &["Pull-up Bar"],
            Advanced,
            &[
                "Hang from bar with hands shoulder-width apart",
                "Pull body up until chin is over the bar",
                "Lower body back to starting position with control",
            ],
        ),
        exercise(
            "bw8",
            "Dips",
            "Upper body exercise for chest, shoulders, and triceps",
            "Strength",
            &["None", "Bench"],
            Intermediate,
            &[
                "Support body on parallel bars or bench with arms extended",
                "Lower body by bending elbows until upper arms are parallel to ground",
                "Push back up to starting position",
            ],
        ),
        exercise(
            "bw9",
            "Glute Bridges",
            "Lower body exercise targeting glutes and hamstrings",
            "Strength",
            &["None"],
            Beginner,
            &[
                "Lie on back with knees bent and feet flat on floor",
                "Push hips up toward ceiling while squeezing glutes",
                "Lower hips back to starting position",
            ],
        ),
        exercise(
            "bw10",
            "Russian Twists",
            "Core exercise focusing on obliques",
            "Core",
            &["None"],
            Intermediate,
            &[
                "Sit on floor with knees bent and feet slightly elevated",
                "Lean back slightly to engage core",
                "Twist torso from side to side, touching floor beside hips",
            ],
        ),
        exercise(
            "bw11",
            "Jump Squats",
            "Explosive lower body exercise for power and cardio",
            "Cardio",
            &["None"],
            Intermediate,
            &[
                "Stand with feet shoulder-width apart",
                "Perform a squat, then explode upward into a jump",
                "Land softly and immediately lower into next squat",
            ],
        ),
        exercise(
            "bw12",
            "Pike Push-ups",
            "Advanced push-up variation targeting shoulders",
            "Strength",
            &["None"],
            Advanced,
            &[
                "Start in a downward dog position with hips high",
                "Bend elbows to lower head toward floor",
                "Push back up to starting position",
            ],
        ),
        exercise(
            "bw13",
            "Superman",
            "Back strengthening exercise for lower back and core",
            "Core",
            &["None"],
            Beginner,
            &[
                "Lie face down with arms extended overhead",
                "Simultaneously lift arms, chest, and legs off floor",
                "Hold for 2-3 seconds, then lower back down",
            ],
        ),
        exercise(
            "bw14",
            "Pistol Squats",
            "Single-leg squat requiring strength and balance",
            "Strength",
            &["None"],
            Advanced,
            &[
                "Stand on one leg with other leg extended in front",
                "Lower into squat on standing leg",
                "Return to standing position without putting other foot down",
            ],
        ),
        exercise(
            "bw15",
            "Bird Dogs",
            "Core stability exercise for back health",
            "Core",
            &["None"],
            Beginner,
            &[
                "Start on hands and knees",
                "Simultaneously extend opposite arm and leg",
                "Return to starting position and repeat on other side",
            ],
        ),
        exercise(
            "db1",
            "Dumbbell Rows",
            "Upper body pulling exercise for back and biceps",
            "Strength",
            &["Dumbbells"],
            Intermediate,
            &[
                "Hinge at hips with dumbbell in hand",
                "Keep back flat and core engaged",
                "Pull dumbbell to hip",
                "Lower and repeat",
            ],
        ),
        exercise(
            "db2",
            "Dumbbell Bench Press",
            "Upper body pushing exercise for chest, shoulders, and triceps",
            "Strength",
            &["Dumbbells", "Bench"],
            Intermediate,
            &[
                "Lie on bench with dumbbells at chest level",
                "Press dumbbells upward until arms are extended",
                "Lower dumbbells back to chest",
            ],
        ),
        exercise(
            "db3",
            "Goblet Squats",
            "Weighted squat variation that targets quads and core",
            "Strength",
            &["Dumbbells", "Kettlebells"],
            Intermediate,
            &[
                "Hold dumbbell or kettlebell close to chest with both hands",
                "Perform squat while keeping weight close to body",
                "Push through heels to return to standing",
            ],
        ),
        exercise(
            "db4",
            "Dumbbell Lunges",
            "Lower body exercise with added resistance",
            "Strength",
            &["Dumbbells"],
            Intermediate,
            &[
                "Hold dumbbells at sides",
                "Step forward with one leg and lower until both knees are at 90 degrees",
                "Push back to standing and repeat with other leg",
            ],
        ),
        exercise(
            "db5",
            "Dumbbell Shoulder Press",
            "Upper body exercise targeting shoulders and triceps",
            "Strength",
            &["Dumbbells"],
            Intermediate,
            &[
                "Sit or stand with dumbbells at shoulder height",
                "Press dumbbells overhead until arms are extended",
                "Lower dumbbells back to shoulders",
            ],
        ),
        exercise(
            "db6",
            "Dumbbell Bicep Curls",
            "Isolation exercise for biceps",
            "Strength",
            &["Dumbbells"],
            Beginner,
            &[
                "Stand with dumbbells at sides",
                "Curl dumbbells toward shoulders while keeping elbows close to body",
                "Lower dumbbells back to sides",
            ],
        ),
        exercise(
            "db7",
            "Dumbbell Deadlifts",
            "Full-body exercise focusing on posterior chain",
            "Strength",
            &["Dumbbells"],
            Intermediate,
            &[
                "Stand with dumbbells in front of thighs",
                "Hinge at hips and lower dumbbells while keeping back straight",
                "Push through heels to return to standing",
            ],
        ),
        exercise(
            "db12",
            "Dumbbell Lateral Raises",
            "Shoulder exercise targeting medial deltoid",
            "Strength",
            &["Dumbbells"],
            Intermediate,
            &[
                "Stand with dumbbells at sides",
                "Raise dumbbells out to sides until arms are parallel to floor",
                "Lower back to starting position with control",
            ],
        ),
        exercise(
            "rb1",
            "Band Pull-Aparts",
            "Upper back and shoulder exercise for posture",
            "Strength",
            &["Resistance Bands"],
            Beginner,
            &[
                "Hold band with both hands at chest level",
                "Pull band apart until arms are extended to sides",
                "Control the return to starting position",
            ],
        ),
        exercise(
            "rb2",
            "Banded Squats",
            "Resistance squat for glute and leg activation",
            "Strength",
            &["Resistance Bands"],
            Beginner,
            &[
                "Place band just above knees",
                "Perform squat while pushing knees outward against band",
                "Return to standing while maintaining tension",
            ],
        ),
    ]
}

/// Built-in pre-made workout programs
pub fn builtin_templates() -> Vec<WorkoutTemplate> {
    vec![
        WorkoutTemplate {
            id: "strength-beginner".to_string(),
            name: "Beginner Strength Routine".to_string(),
            description: Some(
                "A simple full-body routine focused on building foundational strength for beginners"
                    .to_string(),
            ),
            difficulty: Difficulty::Beginner,
            equipment: vec!["Dumbbells".to_string(), "Bench".to_string()],
            session_minutes: 45,
            frequency: 3,
            goal: Some("Strength".to_string()),
            plan_duration: PlanDuration::weeks(8),
            days: vec![
                TemplateDay {
                    name: "Day 1 - Full Body".to_string(),
                    exercises: vec![
                        template_exercise("db3", 3, "10-12", 90),
                        template_exercise("db1", 3, "10-12", 90),
                        template_exercise("db2", 3, "10-12", 90),
                        template_exercise("bw4", 3, "30 sec", 60),
                        template_exercise("bw5", 3, "30 sec", 60),
                    ],
                },
                TemplateDay {
                    name: "Day 2 - Full Body".to_string(),
                    exercises: vec![
                        template_exercise("bw2", 3, "12-15", 60),
                        template_exercise("db6", 3, "10-12", 60),
                        template_exercise("db5", 3, "10-12", 90),
                        template_exercise("bw13", 3, "12", 60),
                        template_exercise("bw11", 3, "10", 60),
                    ],
                },
                TemplateDay {
                    name: "Day 3 - Full Body".to_string(),
                    exercises: vec![
                        template_exercise("db7", 3, "10-12", 90),
                        template_exercise("bw8", 3, "8-10", 90),
                        template_exercise("db12", 3, "10-12", 60),
                        template_exercise("bw10", 3, "12 each side", 60),
                        template_exercise("bw5", 3, "30 sec", 60),
                    ],
                },
            ],
        },
        WorkoutTemplate {
            id: "home-workout".to_string(),
            name: "No Equipment Home Workout".to_string(),
            description: Some(
                "A bodyweight-only routine perfect for home training with no equipment".to_string(),
            ),
            difficulty: Difficulty::Beginner,
            equipment: vec!["None".to_string()],
            session_minutes: 30,
            frequency: 3,
            goal: Some("General Fitness".to_string()),
            plan_duration: PlanDuration::weeks(6),
            days: vec![
                TemplateDay {
                    name: "Day 1 - Push Focus".to_string(),
                    exercises: vec![
                        template_exercise("bw1", 3, "8-12", 60),
                        template_exercise("bw2", 3, "15", 60),
                        template_exercise("bw12", 3, "8-10", 60),
                        template_exercise("bw4", 3, "30 sec", 45),
                        template_exercise("bw6", 2, "10", 60),
                    ],
                },
                TemplateDay {
                    name: "Day 2 - Pull & Core Focus".to_string(),
                    exercises: vec![
                        template_exercise("bw15", 3, "10 each side", 45),
                        template_exercise("bw13", 3, "12", 45),
                        template_exercise("bw9", 3, "15", 45),
                        template_exercise("bw10", 3, "12 each side", 45),
                        template_exercise("bw5", 3, "30 sec", 45),
                    ],
                },
                TemplateDay {
                    name: "Day 3 - Legs & Cardio".to_string(),
                    exercises: vec![
                        template_exercise("bw11", 3, "12", 60),
                        template_exercise("bw3", 3, "10 each leg", 60),
                        template_exercise("bw9", 3, "15", 45),
                        template_exercise("bw6", 3, "8", 60),
                        template_exercise("bw4", 3, "30 sec", 45),
                    ],
                },
            ],
        },
    ]
}
