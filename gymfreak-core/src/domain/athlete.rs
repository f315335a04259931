use serde::{Deserialize, Serialize};

/// Errors that can occur when capturing an identity
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AthleteError {
    #[error("Name cannot be empty")]
    EmptyName,
}

/// Identity of the signed-in athlete
///
/// The name is kept exactly as typed; only its trimmed form must be
/// non-empty. Logging out simply drops the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    name: String,
}

impl Athlete {
    /// Capture an identity, rejecting names that trim to nothing
    pub fn new(name: impl Into<String>) -> Result<Self, AthleteError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AthleteError::EmptyName);
        }
        Ok(Athlete { name })
    }

    /// The display name, verbatim as entered
    pub fn name(&self) -> &str {
        &self.name
    }
}
