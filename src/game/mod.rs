mod cfg;
mod debug;
mod physics;
mod pool;
mod powerup;
mod render;
mod world;

pub use cfg::*;
pub use pool::*;
pub use powerup::*;
pub use world::*;

use lib_game::{AppState, DebugCommand, DrawList, Game, InputModel};
use quad_dbg::dump;

impl Game for GameWorld {
    fn debug_commands(&self) -> &[DebugCommand<Self>] {
        &debug::DEBUG_COMMANDS
    }

    fn state(&self) -> AppState {
        self.state
    }

    fn update(&mut self, input: &InputModel, dt: f32) {
        GameWorld::update(self, input, dt)
    }

    fn render_export(&mut self, draw: &mut DrawList) {
        GameWorld::render_export(self, draw)
    }

    fn debug_dump(&self) {
        dump!("score: {}", self.score);
        dump!("lives: {}", self.paddle.lives);
        dump!("balls: {}", self.balls.active_count());
        dump!("bricks: {}", self.active_bricks());
        dump!("powerups: {}", self.powerups.active_count());
        dump!("waiting for launch: {}", self.waiting_for_launch);
        if self.paddle.expanded {
            dump!("expand timer: {:.2}", self.paddle.expand_timer);
        }
    }
}
