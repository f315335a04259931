use crate::domain::SessionSummary;

/// Events emitted after processing a session command
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Camera stream granted, session now active
    CameraActivated,

    /// Duration advanced by one second
    DurationTicked { duration_secs: u32 },

    /// A rep was counted
    RepRecorded { reps: u32, form_accuracy: f64 },

    /// Ticking suspended
    Paused,

    /// Ticking resumed
    Resumed,

    /// Session completed, metrics frozen
    Finished { summary: SessionSummary },

    /// Command rejected in the current phase
    CommandFailed { command: String, reason: String },
}
