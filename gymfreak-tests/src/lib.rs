use cucumber::World;
use gymfreak_core::{
    Athlete, SessionCommand, SessionEvent, SessionEventLoop, WorkoutCatalog, WorkoutSession,
};

/// Shared state for the BDD scenarios
#[derive(Debug, Default, World)]
pub struct GymWorld {
    /// The fixed workout catalog
    pub catalog: WorkoutCatalog,

    /// Captured identity, if sign-in succeeded
    pub athlete: Option<Athlete>,

    /// Whether the last sign-in attempt was rejected
    pub login_rejected: bool,

    /// Workout names produced by the last catalog filter
    pub filtered_names: Vec<String>,

    /// Session under test
    pub engine: Option<SessionEventLoop>,

    /// Last event emitted (for assertions)
    pub last_event: Option<SessionEvent>,
}

impl GymWorld {
    /// Execute a session command and store the resulting event
    pub fn execute(&mut self, command: SessionCommand) -> &SessionEvent {
        let engine = self.engine.as_mut().expect("No session started yet");
        self.last_event = Some(engine.handle_command(command));
        self.last_event.as_ref().unwrap()
    }

    /// Current session state (panics if no session was started)
    pub fn session(&self) -> &WorkoutSession {
        self.engine
            .as_ref()
            .expect("No session started yet")
            .session()
    }

    /// Get the last event (panics if none)
    pub fn last_event(&self) -> &SessionEvent {
        self.last_event.as_ref().expect("No command executed yet")
    }
}
