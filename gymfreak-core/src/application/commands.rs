/// Commands that drive a workout session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// The camera permission was granted
    CameraReady,

    /// One second of the recurring timer elapsed
    Tick,

    /// Manual rep event with a pseudo-random accuracy decay sample
    RecordRep { decay: f64 },

    /// Suspend or resume the timer
    TogglePause,

    /// Complete the workout and freeze the metrics
    Finish,
}

impl SessionCommand {
    /// Command name for logging and failure events
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::CameraReady => "CameraReady",
            SessionCommand::Tick => "Tick",
            SessionCommand::RecordRep { .. } => "RecordRep",
            SessionCommand::TogglePause => "TogglePause",
            SessionCommand::Finish => "Finish",
        }
    }
}
