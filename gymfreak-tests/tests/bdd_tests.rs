mod steps;

use cucumber::World;
use gymfreak_tests::GymWorld;

#[tokio::main]
async fn main() {
    GymWorld::cucumber()
        .max_concurrent_scenarios(1)
        .run_and_exit("tests/features")
        .await;
}
