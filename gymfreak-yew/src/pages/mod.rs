mod login_screen;
mod session_screen;
mod workout_screen;

pub use login_screen::LoginScreen;
pub use session_screen::SessionScreen;
pub use workout_screen::WorkoutScreen;
