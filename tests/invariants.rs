mod common;

use arkanoid::game::{BALLS_MAX, SCREEN_WIDTH};
use common::*;
use lib_game::InputModel;
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = InputModel> {
    (
        any::<bool>(),
        any::<bool>(),
        prop::bool::weighted(0.05),
        prop::bool::weighted(0.01),
    )
        .prop_map(|(left, right, launch, pause)| InputModel {
            left_movement_down: left,
            right_movement_down: right,
            launch_requested: launch,
            pause_requested: pause,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn session_invariants(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let mut world = start_game(seed);
        let mut score = world.score;
        let mut bricks = world.bricks;

        for input in inputs {
            world.update(&input, DT);

            let paddle = world.paddle;
            prop_assert!(paddle.pos.x >= 0.0);
            prop_assert!(paddle.pos.x <= SCREEN_WIDTH - paddle.size.x);

            prop_assert_eq!(world.score % 100, 0);
            prop_assert!(world.score >= score);

            let broken = bricks
                .iter()
                .flatten()
                .zip(world.bricks.iter().flatten())
                .filter(|(old, new)| old.active && !new.active)
                .count() as u32;
            for (old, new) in bricks.iter().flatten().zip(world.bricks.iter().flatten()) {
                prop_assert!(old.active || !new.active, "a brick came back");
            }
            prop_assert_eq!(world.score - score, 100 * broken);

            prop_assert!(world.balls.active_count() <= BALLS_MAX);
            for ball in world.balls.iter().filter(|ball| !ball.active) {
                prop_assert_eq!(ball.vel, glam::Vec2::ZERO);
            }

            score = world.score;
            bricks = world.bricks;
        }
    }
}
