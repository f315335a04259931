mod use_session_engine;

pub use use_session_engine::{use_session_engine, SessionEngineHandle};
