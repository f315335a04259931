pub mod catalog_steps;
pub mod identity_steps;
pub mod session_steps;
