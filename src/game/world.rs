use glam::{vec2, Vec2};
use lib_col::{Aabb, Circle};
use lib_game::{AppState, InputModel};
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::cfg::GameCfg;
use super::pool::{Pool, PoolSlot};
use super::powerup::PowerupKind;

pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 720.0;
pub const LINES_OF_BRICKS: usize = 5;
pub const BRICKS_PER_LINE: usize = 10;
pub const BRICK_CELL_WIDTH: f32 = SCREEN_WIDTH / BRICKS_PER_LINE as f32;
pub const BALLS_MAX: usize = 5;
pub const POWERUPS_MAX: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paddle {
    /// Top-left corner.
    pub pos: Vec2,
    pub size: Vec2,
    pub lives: u32,
    pub speed: f32,
    pub expanded: bool,
    pub expand_timer: f32,
}

impl Paddle {
    pub fn new(cfg: &GameCfg) -> Self {
        let size = vec2(cfg.paddle.width, cfg.paddle.height);

        Paddle {
            pos: vec2(
                SCREEN_WIDTH / 2.0 - size.x / 2.0,
                SCREEN_HEIGHT - cfg.paddle.bottom_offset,
            ),
            size,
            lives: cfg.paddle.max_lives,
            speed: cfg.paddle.speed,
            expanded: false,
            expand_timer: 0.0,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Where a ball waiting for launch sits.
    pub fn rest_point(&self, cfg: &GameCfg) -> Vec2 {
        vec2(
            self.center_x(),
            self.pos.y - cfg.ball.radius - cfg.ball.rest_gap,
        )
    }

    pub fn clamp_to_screen(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, SCREEN_WIDTH - self.size.x);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Ball {
    /// Center.
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Ball {
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.vel = Vec2::ZERO;
    }
}

impl PoolSlot for Ball {
    fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Brick {
    pub rect: Aabb,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Powerup {
    /// Center.
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: PowerupKind,
    pub active: bool,
}

impl Powerup {
    pub fn pickup_box(&self, cfg: &GameCfg) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(cfg.powerup.pickup_size))
    }
}

impl PoolSlot for Powerup {
    fn is_active(&self) -> bool {
        self.active
    }
}

/// Things that happened during the last update. They have
/// no effect on the gameplay and only feed the effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    BrickDestroyed { center: Vec2 },
    BallLost { pos: Vec2 },
    LifeLost { lives_left: u32 },
    PowerupCollected(PowerupKind),
}

/// The whole game session. Everything the game mutates lives here.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub cfg: GameCfg,
    pub state: AppState,
    pub score: u32,
    pub waiting_for_launch: bool,
    pub paddle: Paddle,
    pub balls: Pool<Ball, BALLS_MAX>,
    pub bricks: [[Brick; BRICKS_PER_LINE]; LINES_OF_BRICKS],
    pub powerups: Pool<Powerup, POWERUPS_MAX>,
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameWorld {
    pub fn new(cfg: GameCfg, seed: u64) -> Self {
        let mut world = GameWorld {
            cfg,
            state: AppState::Title,
            score: 0,
            waiting_for_launch: true,
            paddle: Paddle::new(&cfg),
            balls: Pool::new(),
            bricks: [[Brick::default(); BRICKS_PER_LINE]; LINES_OF_BRICKS],
            powerups: Pool::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        world.init_game();

        world
    }

    /// Puts every entity into its starting configuration.
    pub fn init_game(&mut self) {
        let cfg = self.cfg;

        self.paddle = Paddle::new(&cfg);
        self.reset_balls();

        let cell = vec2(BRICK_CELL_WIDTH, cfg.brick.height);
        let size = cell - vec2(cfg.brick.width_padding, cfg.brick.height_padding);
        for (y, line) in self.bricks.iter_mut().enumerate() {
            for (x, brick) in line.iter_mut().enumerate() {
                let pos = vec2(
                    x as f32 * cell.x + cfg.brick.left_margin,
                    y as f32 * cell.y + cfg.brick.top_offset,
                );
                *brick = Brick {
                    rect: Aabb::from_pos_size(pos, size),
                    active: true,
                };
            }
        }

        self.powerups.clear();
        self.events.clear();
        self.score = 0;
        self.waiting_for_launch = true;
    }

    /// Clears all balls and stages a resting primary ball above the paddle.
    pub fn reset_balls(&mut self) {
        self.balls.clear();
        self.balls[0] = Ball {
            pos: self.paddle.rest_point(&self.cfg),
            vel: Vec2::ZERO,
            radius: self.cfg.ball.radius,
            active: false,
        };
    }

    pub fn update(&mut self, input: &InputModel, dt: f32) {
        self.events.clear();

        match self.state {
            AppState::Title if input.confirmation_detected => {
                self.init_game();
                self.set_state(AppState::Active { paused: false });
            }
            AppState::Active { paused } => {
                let paused = paused ^ input.pause_requested;
                if input.pause_requested {
                    self.set_state(AppState::Active { paused });
                }

                if !paused {
                    self.step(input, dt);
                }
            }
            AppState::GameOver | AppState::Win if input.confirmation_detected => {
                self.set_state(AppState::Title);
            }
            _ => (),
        }
    }

    pub(crate) fn set_state(&mut self, state: AppState) {
        if self.state == state {
            return;
        }

        info!("{:?} -> {:?} (score: {})", self.state, state, self.score);
        self.state = state;
    }

    pub fn active_bricks(&self) -> usize {
        self.bricks
            .iter()
            .flatten()
            .filter(|brick| brick.active)
            .count()
    }
}
