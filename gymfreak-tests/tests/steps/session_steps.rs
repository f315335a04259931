use cucumber::{given, then, when};
use gymfreak_core::{SessionCommand, SessionEvent};
use gymfreak_tests::GymWorld;

// ===== Given Steps =====

#[given(expr = "a session for the {string} workout")]
async fn session_for_workout(world: &mut GymWorld, id: String) {
    let workout = world
        .catalog
        .get(&id)
        .unwrap_or_else(|| panic!("Unknown workout: {id}"))
        .clone();
    world.engine = Some(gymfreak_core::SessionEventLoop::new(workout));
    world.last_event = None;
}

#[given("the camera stream has been granted")]
async fn camera_granted(world: &mut GymWorld) {
    let event = world.execute(SessionCommand::CameraReady).clone();
    assert_eq!(event, SessionEvent::CameraActivated);
}

// ===== When Steps =====

#[when(expr = "{int} second(s) elapse(s)")]
async fn seconds_elapse(world: &mut GymWorld, seconds: u32) {
    for _ in 0..seconds {
        world.execute(SessionCommand::Tick);
    }
}

#[when("a timer tick arrives")]
async fn timer_tick_arrives(world: &mut GymWorld) {
    world.execute(SessionCommand::Tick);
}

#[when("the session is paused")]
async fn pause_session(world: &mut GymWorld) {
    let event = world.execute(SessionCommand::TogglePause).clone();
    assert_eq!(event, SessionEvent::Paused);
}

#[when("the session is resumed")]
async fn resume_session(world: &mut GymWorld) {
    let event = world.execute(SessionCommand::TogglePause).clone();
    assert_eq!(event, SessionEvent::Resumed);
}

#[when(expr = "the athlete performs {int} rep(s)")]
async fn perform_reps(world: &mut GymWorld, count: u32) {
    for _ in 0..count {
        world.execute(SessionCommand::RecordRep { decay: 1.0 });
    }
}

#[when(expr = "the athlete performs a rep with decay {float}")]
async fn perform_rep_with_decay(world: &mut GymWorld, decay: f64) {
    world.execute(SessionCommand::RecordRep { decay });
}

#[when("the workout is finished")]
async fn finish_workout(world: &mut GymWorld) {
    world.execute(SessionCommand::Finish);
}

// ===== Then Steps =====

#[then(expr = "the duration is {int} second(s)")]
async fn duration_is(world: &mut GymWorld, expected: u32) {
    assert_eq!(world.session().duration_secs(), expected);
}

#[then(expr = "the rep count is {int}")]
async fn rep_count_is(world: &mut GymWorld, expected: u32) {
    assert_eq!(world.session().reps(), expected);
}

#[then("the command is rejected")]
async fn command_is_rejected(world: &mut GymWorld) {
    assert!(
        matches!(world.last_event(), SessionEvent::CommandFailed { .. }),
        "expected CommandFailed, got {:?}",
        world.last_event()
    );
}

#[then(expr = "the form accuracy is exactly {float}")]
async fn accuracy_is_exactly(world: &mut GymWorld, expected: f64) {
    let accuracy = world.session().form_accuracy();
    assert!(
        (accuracy - expected).abs() < f64::EPSILON,
        "expected accuracy {expected}, got {accuracy}"
    );
}

#[then(expr = "the form accuracy is between {float} and {float}")]
async fn accuracy_is_between(world: &mut GymWorld, low: f64, high: f64) {
    let accuracy = world.session().form_accuracy();
    assert!(
        (low..=high).contains(&accuracy),
        "accuracy {accuracy} outside [{low}, {high}]"
    );
}

#[then(expr = "the summary shows {int} reps, {int} seconds and {int} calories")]
async fn summary_shows(world: &mut GymWorld, reps: u32, seconds: u32, calories: u32) {
    let summary = world
        .session()
        .summary()
        .expect("Session has no summary yet");
    assert_eq!(summary.reps, reps);
    assert_eq!(summary.duration_secs, seconds);
    assert_eq!(summary.calories, calories);
}
