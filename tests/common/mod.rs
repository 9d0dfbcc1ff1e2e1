use arkanoid::game::{Ball, GameCfg, GameWorld};
use glam::Vec2;
use lib_game::{AppState, InputModel};

pub const DT: f32 = 1.0 / 60.0;

#[allow(dead_code)]
pub fn idle() -> InputModel {
    InputModel::default()
}

#[allow(dead_code)]
pub fn confirm() -> InputModel {
    InputModel {
        confirmation_detected: true,
        ..Default::default()
    }
}

/// What Space does: it both confirms and launches.
#[allow(dead_code)]
pub fn space() -> InputModel {
    InputModel {
        confirmation_detected: true,
        launch_requested: true,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn pause() -> InputModel {
    InputModel {
        pause_requested: true,
        ..Default::default()
    }
}

/// A world that just left the title screen.
#[allow(dead_code)]
pub fn start_game(seed: u64) -> GameWorld {
    let mut world = GameWorld::new(GameCfg::default(), seed);
    world.update(&confirm(), DT);
    assert_eq!(world.state, AppState::Active { paused: false });

    world
}

/// Puts an active ball into `slot`.
#[allow(dead_code)]
pub fn put_ball(world: &mut GameWorld, slot: usize, pos: Vec2, vel: Vec2) {
    world.balls[slot] = Ball {
        pos,
        vel,
        radius: world.cfg.ball.radius,
        active: true,
    };
    world.waiting_for_launch = false;
}
