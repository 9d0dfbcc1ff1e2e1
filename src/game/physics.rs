use glam::vec2;
use lib_game::{AppState, InputModel};
use log::info;
use rand::Rng;

use super::world::*;

impl GameWorld {
    /// One frame of gameplay. Movement is in units per frame,
    /// only the expand timer consumes `dt`.
    pub(crate) fn step(&mut self, input: &InputModel, dt: f32) {
        self.move_paddle(input, dt);
        self.stage_launch(input);
        for idx in 0..BALLS_MAX {
            self.update_ball(idx);
        }
        self.check_lives();
        self.update_powerups();

        if self.active_bricks() == 0 {
            self.set_state(AppState::Win);
        }
    }

    fn move_paddle(&mut self, input: &InputModel, dt: f32) {
        let paddle = &mut self.paddle;
        if input.left_movement_down {
            paddle.pos.x -= paddle.speed;
        }
        if input.right_movement_down {
            paddle.pos.x += paddle.speed;
        }
        paddle.clamp_to_screen();

        if !paddle.expanded {
            return;
        }

        paddle.expand_timer -= dt;
        if paddle.expand_timer <= 0.0 {
            paddle.expanded = false;
            paddle.size.x = self.cfg.paddle.width;
            info!("Paddle back to normal");
        }
    }

    fn stage_launch(&mut self, input: &InputModel) {
        if self.balls[0].active {
            return;
        }

        self.balls[0].pos = self.paddle.rest_point(&self.cfg);
        if !input.launch_requested {
            return;
        }

        let speed = self.cfg.ball.launch_speed;
        let dir_x = if self.rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let ball = &mut self.balls[0];
        ball.active = true;
        ball.radius = self.cfg.ball.radius;
        ball.vel = vec2(dir_x * speed, -speed);
        self.waiting_for_launch = false;
    }

    fn update_ball(&mut self, idx: usize) {
        let mut ball = self.balls[idx];
        if !ball.active {
            return;
        }

        ball.pos += ball.vel;

        if ball.pos.x - ball.radius <= 0.0 || ball.pos.x + ball.radius >= SCREEN_WIDTH {
            ball.vel.x *= -1.0;
        }
        if ball.pos.y - ball.radius <= 0.0 {
            ball.vel.y *= -1.0;
        }

        if ball.circle().overlaps_aabb(self.paddle.rect()) {
            let hit_pos = (ball.pos.x - self.paddle.center_x()) / (self.paddle.size.x / 2.0);
            ball.vel.y *= -1.0;
            ball.vel.x = self.cfg.ball.steer_factor * hit_pos;
        }

        if ball.pos.y - ball.radius > SCREEN_HEIGHT {
            ball.deactivate();
            self.balls[idx] = ball;
            self.events.push(GameEvent::BallLost { pos: ball.pos });
            return;
        }

        // Every brick the ball touches breaks, each one flipping vy.
        for y in 0..LINES_OF_BRICKS {
            for x in 0..BRICKS_PER_LINE {
                let brick = self.bricks[y][x];
                if brick.active && ball.circle().overlaps_aabb(brick.rect) {
                    self.break_brick(y, x);
                    ball.vel.y *= -1.0;
                }
            }
        }

        self.balls[idx] = ball;
    }

    fn break_brick(&mut self, y: usize, x: usize) {
        let brick = &mut self.bricks[y][x];
        brick.active = false;
        let rect = brick.rect;

        self.score += self.cfg.brick.score;
        self.events.push(GameEvent::BrickDestroyed {
            center: rect.center(),
        });

        if self.rng.random_range(1..=100u32) <= self.cfg.powerup.drop_chance {
            let pos = rect.min + vec2(BRICK_CELL_WIDTH / 2.0, self.cfg.brick.height / 2.0);
            self.spawn_powerup(pos);
        }
    }

    fn check_lives(&mut self) {
        if self.waiting_for_launch || self.balls.active_count() > 0 {
            return;
        }

        self.paddle.lives = self.paddle.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost {
            lives_left: self.paddle.lives,
        });

        if self.paddle.lives == 0 {
            self.set_state(AppState::GameOver);
            return;
        }

        info!("Ball lost, lives left: {}", self.paddle.lives);
        self.reset_balls();
        self.waiting_for_launch = true;
    }

    fn update_powerups(&mut self) {
        for idx in 0..POWERUPS_MAX {
            let mut powerup = self.powerups[idx];
            if !powerup.active {
                continue;
            }

            powerup.pos += powerup.vel;

            if powerup.pickup_box(&self.cfg).overlaps(self.paddle.rect()) {
                powerup.active = false;
                self.powerups[idx] = powerup;
                self.collect_powerup(powerup.kind);
                continue;
            }

            if powerup.pos.y > SCREEN_HEIGHT {
                powerup.active = false;
            }

            self.powerups[idx] = powerup;
        }
    }
}
