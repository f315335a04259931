use crate::domain::Workout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form accuracy a session starts with
pub const ACCURACY_START: f64 = 95.0;

/// Form accuracy never drops below this
pub const ACCURACY_FLOOR: f64 = 85.0;

/// Upper bound on the accuracy decay of a single rep
pub const MAX_REP_DECAY: f64 = 2.0;

/// Calories credited per rep in the end-of-session estimate
pub const CALORIES_PER_REP: f64 = 2.5;

/// Calories credited per elapsed second in the end-of-session estimate
pub const CALORIES_PER_SECOND: f64 = 0.1;

/// Lifecycle state of a workout session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the camera permission prompt
    AcquiringCamera,
    /// Camera live, timer ticking, reps counted
    Active,
    /// Ticking suspended, rep counting disabled
    Paused,
    /// Metrics frozen into a summary
    Finished,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::AcquiringCamera => write!(f, "acquiring camera"),
            SessionPhase::Active => write!(f, "active"),
            SessionPhase::Paused => write!(f, "paused"),
            SessionPhase::Finished => write!(f, "finished"),
        }
    }
}

/// Errors that can occur when driving a session
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Camera stream has not been granted yet")]
    CameraNotReady,

    #[error("Session is paused")]
    Paused,

    #[error("Camera is already active")]
    AlreadyActive,

    #[error("Session is already finished")]
    AlreadyFinished,
}

/// Immutable metrics of a completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub reps: u32,
    pub duration_secs: u32,
    pub calories: u32,
    /// Final form accuracy, rounded to a whole percentage
    pub form_accuracy: u32,
}

/// Fixed linear calorie estimate, computed once at session end
pub fn estimate_calories(reps: u32, duration_secs: u32) -> u32 {
    (f64::from(reps) * CALORIES_PER_REP + f64::from(duration_secs) * CALORIES_PER_SECOND).floor()
        as u32
}

/// One timed attempt at a workout
///
/// The phase is a closed set of mutually exclusive modes with explicit
/// transition methods; every mutation is guarded by the current phase:
///
/// ```text
/// acquiring-camera --camera_ready--> active <--toggle_pause--> paused
///                                      \________finish________/
///                                               |
///                                            finished
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    workout: Workout,
    phase: SessionPhase,
    reps: u32,
    duration_secs: u32,
    form_accuracy: f64,
    summary: Option<SessionSummary>,
}

impl WorkoutSession {
    /// Start a new session for the given workout, waiting for the camera
    pub fn new(workout: Workout) -> Self {
        tracing::debug!(workout = %workout.id, "starting workout session");
        WorkoutSession {
            workout,
            phase: SessionPhase::AcquiringCamera,
            reps: 0,
            duration_secs: 0,
            form_accuracy: ACCURACY_START,
            summary: None,
        }
    }

    // ===== Getters =====

    pub fn workout(&self) -> &Workout {
        &self.workout
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn form_accuracy(&self) -> f64 {
        self.form_accuracy
    }

    /// Frozen metrics, present once the session is finished
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    // ===== Transitions =====

    /// The camera stream was granted: start the session
    pub fn camera_ready(&mut self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::AcquiringCamera => {
                self.phase = SessionPhase::Active;
                tracing::debug!(workout = %self.workout.id, "camera live, session active");
                Ok(())
            }
            SessionPhase::Finished => Err(SessionError::AlreadyFinished),
            SessionPhase::Active | SessionPhase::Paused => Err(SessionError::AlreadyActive),
        }
    }

    /// One elapsed second while active. Pausing halts this; resuming does not
    /// catch up on missed seconds.
    pub fn tick(&mut self) -> Result<u32, SessionError> {
        match self.phase {
            SessionPhase::Active => {
                self.duration_secs += 1;
                Ok(self.duration_secs)
            }
            SessionPhase::AcquiringCamera => Err(SessionError::CameraNotReady),
            SessionPhase::Paused => Err(SessionError::Paused),
            SessionPhase::Finished => Err(SessionError::AlreadyFinished),
        }
    }

    /// Count one rep and decay the form accuracy by the supplied amount
    ///
    /// The decay sample is clamped to `[0, MAX_REP_DECAY]` and the score
    /// never drops below [`ACCURACY_FLOOR`].
    pub fn record_rep(&mut self, decay: f64) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::Active => {
                self.reps += 1;
                let decay = decay.clamp(0.0, MAX_REP_DECAY);
                self.form_accuracy = (self.form_accuracy - decay).max(ACCURACY_FLOOR);
                Ok(())
            }
            SessionPhase::AcquiringCamera => Err(SessionError::CameraNotReady),
            SessionPhase::Paused => Err(SessionError::Paused),
            SessionPhase::Finished => Err(SessionError::AlreadyFinished),
        }
    }

    /// Suspend or resume ticking
    pub fn toggle_pause(&mut self) -> Result<SessionPhase, SessionError> {
        match self.phase {
            SessionPhase::Active => {
                self.phase = SessionPhase::Paused;
                Ok(self.phase)
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Active;
                Ok(self.phase)
            }
            SessionPhase::AcquiringCamera => Err(SessionError::CameraNotReady),
            SessionPhase::Finished => Err(SessionError::AlreadyFinished),
        }
    }

    /// Complete the session, freezing all metrics into a summary
    pub fn finish(&mut self) -> Result<SessionSummary, SessionError> {
        match self.phase {
            SessionPhase::Active | SessionPhase::Paused => {
                let summary = SessionSummary {
                    reps: self.reps,
                    duration_secs: self.duration_secs,
                    calories: estimate_calories(self.reps, self.duration_secs),
                    form_accuracy: self.form_accuracy.round() as u32,
                };
                self.phase = SessionPhase::Finished;
                self.summary = Some(summary);
                tracing::debug!(
                    workout = %self.workout.id,
                    reps = summary.reps,
                    duration_secs = summary.duration_secs,
                    calories = summary.calories,
                    "workout finished"
                );
                Ok(summary)
            }
            SessionPhase::AcquiringCamera => Err(SessionError::CameraNotReady),
            SessionPhase::Finished => Err(SessionError::AlreadyFinished),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkoutCatalog;

    fn pushups_session() -> WorkoutSession {
        let catalog = WorkoutCatalog::default();
        WorkoutSession::new(catalog.get("pushups").unwrap().clone())
    }

    fn active_session() -> WorkoutSession {
        let mut session = pushups_session();
        session.camera_ready().unwrap();
        session
    }

    #[test]
    fn new_session_starts_with_initial_metrics() {
        let session = pushups_session();

        assert_eq!(session.phase(), SessionPhase::AcquiringCamera);
        assert_eq!(session.reps(), 0);
        assert_eq!(session.duration_secs(), 0);
        assert_eq!(session.form_accuracy(), ACCURACY_START);
        assert!(session.summary().is_none());
    }

    #[test]
    fn camera_grant_activates_the_session() {
        let mut session = pushups_session();

        session.camera_ready().unwrap();
        assert_eq!(session.phase(), SessionPhase::Active);

        assert_eq!(session.camera_ready(), Err(SessionError::AlreadyActive));
    }

    #[test]
    fn nothing_runs_before_the_camera_is_granted() {
        let mut session = pushups_session();

        assert_eq!(session.tick(), Err(SessionError::CameraNotReady));
        assert_eq!(session.record_rep(1.0), Err(SessionError::CameraNotReady));
        assert_eq!(session.toggle_pause(), Err(SessionError::CameraNotReady));
        assert_eq!(
            session.finish().unwrap_err(),
            SessionError::CameraNotReady
        );
    }

    #[test]
    fn each_tick_adds_exactly_one_second() {
        let mut session = active_session();

        for expected in 1..=5 {
            assert_eq!(session.tick().unwrap(), expected);
        }
        assert_eq!(session.duration_secs(), 5);
    }

    #[test]
    fn pausing_halts_ticking_without_catch_up() {
        let mut session = active_session();
        session.tick().unwrap();
        session.tick().unwrap();

        assert_eq!(session.toggle_pause().unwrap(), SessionPhase::Paused);
        assert_eq!(session.tick(), Err(SessionError::Paused));
        assert_eq!(session.duration_secs(), 2);

        assert_eq!(session.toggle_pause().unwrap(), SessionPhase::Active);
        session.tick().unwrap();
        assert_eq!(session.duration_secs(), 3);
    }

    #[test]
    fn rep_increments_and_decays_accuracy() {
        let mut session = active_session();

        session.record_rep(1.5).unwrap();
        assert_eq!(session.reps(), 1);
        assert_eq!(session.form_accuracy(), 93.5);

        session.record_rep(0.0).unwrap();
        assert_eq!(session.reps(), 2);
        assert_eq!(session.form_accuracy(), 93.5);
    }

    #[test]
    fn oversized_decay_is_clamped() {
        let mut session = active_session();

        session.record_rep(100.0).unwrap();
        assert_eq!(session.form_accuracy(), ACCURACY_START - MAX_REP_DECAY);

        session.record_rep(-5.0).unwrap();
        assert_eq!(session.form_accuracy(), ACCURACY_START - MAX_REP_DECAY);
    }

    #[test]
    fn accuracy_never_drops_below_the_floor() {
        let mut session = active_session();

        for _ in 0..200 {
            session.record_rep(1.99).unwrap();
        }

        assert_eq!(session.reps(), 200);
        assert_eq!(session.form_accuracy(), ACCURACY_FLOOR);
    }

    #[test]
    fn reps_are_rejected_while_paused() {
        let mut session = active_session();
        session.toggle_pause().unwrap();

        assert_eq!(session.record_rep(1.0), Err(SessionError::Paused));
        assert_eq!(session.reps(), 0);
    }

    #[test]
    fn finish_computes_the_calorie_estimate() {
        let mut session = active_session();
        for _ in 0..20 {
            session.record_rep(0.0).unwrap();
        }
        for _ in 0..120 {
            session.tick().unwrap();
        }

        let summary = session.finish().unwrap();

        // floor(20 * 2.5 + 120 * 0.1) = floor(50 + 12) = 62
        assert_eq!(summary.reps, 20);
        assert_eq!(summary.duration_secs, 120);
        assert_eq!(summary.calories, 62);
        assert_eq!(summary.form_accuracy, 95);
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert_eq!(session.summary(), Some(&summary));
    }

    #[test]
    fn finish_rounds_the_accuracy() {
        let mut session = active_session();
        session.record_rep(1.4).unwrap(); // 93.6

        let summary = session.finish().unwrap();
        assert_eq!(summary.form_accuracy, 94);
    }

    #[test]
    fn finish_is_allowed_while_paused() {
        let mut session = active_session();
        session.tick().unwrap();
        session.toggle_pause().unwrap();

        let summary = session.finish().unwrap();
        assert_eq!(summary.duration_secs, 1);
    }

    #[test]
    fn finished_session_is_frozen() {
        let mut session = active_session();
        session.finish().unwrap();

        assert_eq!(session.tick(), Err(SessionError::AlreadyFinished));
        assert_eq!(session.record_rep(1.0), Err(SessionError::AlreadyFinished));
        assert_eq!(session.toggle_pause(), Err(SessionError::AlreadyFinished));
        assert_eq!(
            session.finish().unwrap_err(),
            SessionError::AlreadyFinished
        );
    }

    #[test]
    fn a_fresh_session_resets_all_metrics() {
        let mut session = active_session();
        session.record_rep(1.5).unwrap();
        session.tick().unwrap();
        session.finish().unwrap();

        let fresh = pushups_session();
        assert_eq!(fresh.reps(), 0);
        assert_eq!(fresh.duration_secs(), 0);
        assert_eq!(fresh.form_accuracy(), ACCURACY_START);
    }

    #[test]
    fn calorie_estimate_examples() {
        assert_eq!(estimate_calories(0, 0), 0);
        assert_eq!(estimate_calories(20, 120), 62);
        assert_eq!(estimate_calories(1, 9), 3); // floor(2.5 + 0.9)
    }

    #[test]
    fn summary_serialization_round_trip() {
        let summary = SessionSummary {
            reps: 20,
            duration_secs: 120,
            calories: 62,
            form_accuracy: 91,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: SessionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, summary);
    }

    #[test]
    fn phase_display() {
        assert_eq!(SessionPhase::AcquiringCamera.to_string(), "acquiring camera");
        assert_eq!(SessionPhase::Active.to_string(), "active");
        assert_eq!(SessionPhase::Paused.to_string(), "paused");
        assert_eq!(SessionPhase::Finished.to_string(), "finished");
    }
}
