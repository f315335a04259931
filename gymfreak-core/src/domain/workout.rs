use serde::{Deserialize, Serialize};
use std::fmt;

/// Workout ID (stable slug, unique within the built-in catalog)
pub type WorkoutId = String;

/// Difficulty tier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All tiers in display order
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Catalog filter: everything, or a single tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Pure filter predicate over catalog entries
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => *wanted == difficulty,
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyFilter::All => write!(f, "All"),
            DifficultyFilter::Only(difficulty) => difficulty.fmt(f),
        }
    }
}

/// One exercise type from the fixed catalog
///
/// Entries are immutable: the catalog is defined once and never mutated at
/// runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Stable slug (e.g. "pushups")
    pub id: WorkoutId,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Icon glyph shown on the card
    pub icon: String,
    /// Difficulty tier
    pub difficulty: Difficulty,
    /// Target rep count, or target seconds for hold exercises
    pub target: u32,
}

impl Workout {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        difficulty: Difficulty,
        target: u32,
    ) -> Self {
        Workout {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            difficulty,
            target,
        }
    }

    /// Human-readable target. Targets of 60 and above are hold durations in
    /// seconds, everything below is a rep count.
    pub fn target_label(&self) -> String {
        if self.target >= 60 {
            format!("{} sec", self.target)
        } else {
            format!("{} reps", self.target)
        }
    }
}

/// The fixed list of available workouts
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutCatalog {
    workouts: Vec<Workout>,
}

impl Default for WorkoutCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WorkoutCatalog {
    /// The six built-in workouts, in display order
    pub fn builtin() -> Self {
        WorkoutCatalog {
            workouts: vec![
                Workout::new(
                    "pushups",
                    "Push-ups",
                    "Classic chest and triceps builder",
                    "💪",
                    Difficulty::Beginner,
                    20,
                ),
                Workout::new(
                    "squats",
                    "Squats",
                    "Build those legs with intensity",
                    "🦵",
                    Difficulty::Beginner,
                    25,
                ),
                Workout::new(
                    "plank",
                    "Plank",
                    "Core strength and stability",
                    "📏",
                    Difficulty::Intermediate,
                    60,
                ),
                Workout::new(
                    "burpees",
                    "Burpees",
                    "Full body explosive movement",
                    "🔥",
                    Difficulty::Advanced,
                    15,
                ),
                Workout::new(
                    "lunges",
                    "Lunges",
                    "Leg strength and balance",
                    "🚶",
                    Difficulty::Intermediate,
                    20,
                ),
                Workout::new(
                    "situps",
                    "Sit-ups",
                    "Abdominal and core training",
                    "⬆️",
                    Difficulty::Beginner,
                    30,
                ),
            ],
        }
    }

    /// All workouts in display order
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Look up a workout by its slug
    pub fn get(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id == id)
    }

    /// Entries matching the filter, catalog order preserved
    pub fn filtered(&self, filter: DifficultyFilter) -> Vec<&Workout> {
        self.workouts
            .iter()
            .filter(|workout| filter.matches(workout.difficulty))
            .collect()
    }
}
