//! # Gym Freak Yew Front-end
//!
//! Three-screen flow over [`gymfreak_core`]: identity capture, workout
//! catalog, and the camera-backed session runner.

pub mod app;
pub mod camera;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;

// Re-exports for convenience
pub use app::App;
pub use components::{LiveStats, SummaryView, WorkoutCard};
pub use hooks::{use_session_engine, SessionEngineHandle};
pub use pages::{LoginScreen, SessionScreen, WorkoutScreen};
