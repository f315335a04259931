pub mod athlete;
pub mod session;
pub mod workout;

pub use athlete::{Athlete, AthleteError};
pub use session::{
    estimate_calories, SessionError, SessionPhase, SessionSummary, WorkoutSession, ACCURACY_FLOOR,
    ACCURACY_START, CALORIES_PER_REP, CALORIES_PER_SECOND, MAX_REP_DECAY,
};
pub use workout::{Difficulty, DifficultyFilter, Workout, WorkoutCatalog, WorkoutId};
