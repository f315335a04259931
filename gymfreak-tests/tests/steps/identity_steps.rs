use cucumber::{then, when};
use gymfreak_core::Athlete;
use gymfreak_tests::GymWorld;

#[when(expr = "the athlete signs in as {string}")]
async fn sign_in(world: &mut GymWorld, name: String) {
    match Athlete::new(name) {
        Ok(athlete) => {
            world.athlete = Some(athlete);
            world.login_rejected = false;
        }
        Err(_) => {
            world.athlete = None;
            world.login_rejected = true;
        }
    }
}

#[then("the sign-in succeeds")]
async fn sign_in_succeeds(world: &mut GymWorld) {
    assert!(!world.login_rejected);
    assert!(world.athlete.is_some());
}

#[then(expr = "the displayed name is {string}")]
async fn displayed_name_is(world: &mut GymWorld, expected: String) {
    let athlete = world.athlete.as_ref().expect("No athlete signed in");
    assert_eq!(athlete.name(), expected);
}

#[then("the sign-in is rejected")]
async fn sign_in_rejected(world: &mut GymWorld) {
    assert!(world.login_rejected);
    assert!(world.athlete.is_none());
}
