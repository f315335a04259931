mod commands;
mod events;
mod session_loop;

pub use commands::SessionCommand;
pub use events::SessionEvent;
pub use session_loop::SessionEventLoop;
