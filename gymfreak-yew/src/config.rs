/// Camera acquisition preferences
///
/// Width and height are "ideal" constraints; the browser may deliver a
/// different resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraConfig {
    pub facing_mode: String,
    pub ideal_width: u32,
    pub ideal_height: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            facing_mode: "user".to_string(),
            ideal_width: 1280,
            ideal_height: 720,
        }
    }
}
