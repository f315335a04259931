use gymfreak_core::{SessionCommand, SessionEvent, SessionEventLoop, Workout, WorkoutSession};
use std::rc::Rc;
use yew::prelude::*;

/// Handle to the session engine of the current workout attempt
#[derive(Clone)]
pub struct SessionEngineHandle {
    /// Latest session snapshot; re-renders on every applied command
    pub snapshot: WorkoutSession,

    /// Apply a command to the engine. Rejected commands are logged by the
    /// loop and never panic, so timer callbacks can call this blindly.
    pub apply: Rc<dyn Fn(SessionCommand)>,
}

impl PartialEq for SessionEngineHandle {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot == other.snapshot
    }
}

/// Hook owning a [`SessionEventLoop`] for one workout attempt
///
/// The engine lives in a shared mutable cell so interval callbacks created
/// in earlier renders always mutate the current state; the snapshot state
/// drives re-rendering. Dropping the component discards the session.
#[hook]
pub fn use_session_engine(workout: Workout) -> SessionEngineHandle {
    let engine = use_mut_ref(|| SessionEventLoop::new(workout));
    let snapshot = use_state(|| engine.borrow().session().clone());

    let apply = {
        let engine = engine.clone();
        let snapshot = snapshot.clone();
        Rc::new(move |command: SessionCommand| {
            let event = engine.borrow_mut().handle_command(command);
            if let SessionEvent::Finished { summary } = &event {
                tracing::info!(
                    reps = summary.reps,
                    calories = summary.calories,
                    "session finished"
                );
            }
            snapshot.set(engine.borrow().session().clone());
        }) as Rc<dyn Fn(SessionCommand)>
    };

    SessionEngineHandle {
        snapshot: (*snapshot).clone(),
        apply,
    }
}
