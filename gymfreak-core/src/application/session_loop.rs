use crate::application::{SessionCommand, SessionEvent};
use crate::domain::{SessionError, SessionPhase, Workout, WorkoutSession};

/// Event loop that processes session commands and emits events
///
/// Owns exactly one [`WorkoutSession`]; rejected commands become
/// [`SessionEvent::CommandFailed`] instead of panicking, so stray timer
/// fires or double clicks are harmless.
#[derive(Debug, Clone)]
pub struct SessionEventLoop {
    session: WorkoutSession,
}

impl SessionEventLoop {
    /// Start a loop for one attempt at the given workout
    pub fn new(workout: Workout) -> Self {
        SessionEventLoop {
            session: WorkoutSession::new(workout),
        }
    }

    /// Current session state
    pub fn session(&self) -> &WorkoutSession {
        &self.session
    }

    /// Process a single command and return the resulting event
    pub fn handle_command(&mut self, command: SessionCommand) -> SessionEvent {
        let name = command.name();
        let result = match command {
            SessionCommand::CameraReady => self
                .session
                .camera_ready()
                .map(|()| SessionEvent::CameraActivated),

            SessionCommand::Tick => self
                .session
                .tick()
                .map(|duration_secs| SessionEvent::DurationTicked { duration_secs }),

            SessionCommand::RecordRep { decay } => {
                self.session.record_rep(decay).map(|()| {
                    SessionEvent::RepRecorded {
                        reps: self.session.reps(),
                        form_accuracy: self.session.form_accuracy(),
                    }
                })
            }

            SessionCommand::TogglePause => self.session.toggle_pause().map(|phase| match phase {
                SessionPhase::Paused => SessionEvent::Paused,
                _ => SessionEvent::Resumed,
            }),

            SessionCommand::Finish => self
                .session
                .finish()
                .map(|summary| SessionEvent::Finished { summary }),
        };

        match result {
            Ok(event) => event,
            Err(error) => self.command_failed(name, error),
        }
    }

    fn command_failed(&self, command: &str, error: SessionError) -> SessionEvent {
        tracing::warn!(command, %error, phase = %self.session.phase(), "session command rejected");
        SessionEvent::CommandFailed {
            command: command.to_string(),
            reason: error.to_string(),
        }
    }
}
