//! # Gym Freak Core
//!
//! Framework-free domain and application layer for the Gym Freak workout
//! demo: the fixed workout catalog, the athlete identity, and the workout
//! session state machine with its command/event loop. No UI or wasm
//! dependencies live here; the crate compiles and tests natively.

pub mod application;
pub mod domain;

pub use application::{SessionCommand, SessionEvent, SessionEventLoop};
pub use domain::{
    estimate_calories, Athlete, AthleteError, Difficulty, DifficultyFilter, SessionError,
    SessionPhase, SessionSummary, Workout, WorkoutCatalog, WorkoutId, WorkoutSession,
    ACCURACY_FLOOR, ACCURACY_START, MAX_REP_DECAY,
};
