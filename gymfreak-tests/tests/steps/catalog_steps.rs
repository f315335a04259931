use cucumber::{then, when};
use gymfreak_core::{Difficulty, DifficultyFilter};
use gymfreak_tests::GymWorld;

fn parse_filter(name: &str) -> DifficultyFilter {
    match name {
        "All" => DifficultyFilter::All,
        "Beginner" => DifficultyFilter::Only(Difficulty::Beginner),
        "Intermediate" => DifficultyFilter::Only(Difficulty::Intermediate),
        "Advanced" => DifficultyFilter::Only(Difficulty::Advanced),
        other => panic!("Unknown difficulty filter: {other}"),
    }
}

#[when(expr = "the catalog is filtered by {string}")]
async fn filter_catalog(world: &mut GymWorld, filter: String) {
    world.filtered_names = world
        .catalog
        .filtered(parse_filter(&filter))
        .iter()
        .map(|workout| workout.name.clone())
        .collect();
}

#[then(expr = "the listed workouts are {string}")]
async fn listed_workouts_are(world: &mut GymWorld, expected: String) {
    assert_eq!(world.filtered_names.join(", "), expected);
}
