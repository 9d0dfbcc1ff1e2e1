use lib_game::{AppState, BurstKind, DrawList, TextAlign};
use macroquad::prelude::*;

use super::powerup::PowerupKind;
use super::world::*;

const BACKGROUND_TOP: [u8; 3] = [40, 40, 90];
const BACKGROUND_BOTTOM: [u8; 3] = [130, 130, 220];
const BACKGROUND_STRIPE: usize = 4;
const TITLE_COLOR: Color = Color::from_rgba(255, 180, 60, 255);
const RAYWHITE: Color = Color::from_rgba(245, 245, 245, 255);
const VERSION_STRING: &str = "version 1";
const RETURN_HINT: &str = "PRESS [ENTER] TO RETURN TO TITLE";

static INSTRUCTIONS: [&str; 8] = [
    "Press SPACE or ENTER to start",
    "Move paddle: LEFT / RIGHT arrow keys",
    "Launch ball: SPACE",
    "Pause/Resume: P",
    "Clear all bricks to win!",
    "",
    "Powerups:",
    "   E = Expand Paddle,   + = Extra Life,   Three Balls = Multi-ball",
];

impl GameWorld {
    /// Exports the current screen into `draw`. Also turns the
    /// pending events into particle bursts, consuming them.
    pub fn render_export(&mut self, draw: &mut DrawList) {
        draw_background(draw);

        match self.state {
            AppState::Title => draw_title(draw),
            AppState::Active { paused } => self.draw_playfield(draw, paused),
            AppState::GameOver => draw_game_over(draw, self.score),
            AppState::Win => draw_win(draw, self.score),
        }

        for event in self.events.drain(..) {
            match event {
                GameEvent::BrickDestroyed { center } => {
                    draw.burst(center.x, center.y, BurstKind::Brick)
                }
                GameEvent::BallLost { pos } => draw.burst(pos.x, SCREEN_HEIGHT, BurstKind::Ball),
                GameEvent::LifeLost { .. } | GameEvent::PowerupCollected(_) => (),
            }
        }
    }

    fn draw_playfield(&self, draw: &mut DrawList, paused: bool) {
        let paddle = &self.paddle;
        let paddle_color = if paddle.expanded { YELLOW } else { DARKBLUE };
        draw.rect(
            paddle.pos.x,
            paddle.pos.y,
            paddle.size.x,
            paddle.size.y,
            paddle_color,
        );

        for idx in 0..paddle.lives {
            draw.rect(
                20.0 + 44.0 * idx as f32,
                SCREEN_HEIGHT - 30.0,
                36.0,
                11.0,
                LIGHTGRAY,
            );
        }

        for ball in self.balls.iter_active() {
            draw.circle(ball.pos.x, ball.pos.y, ball.radius, MAROON);
        }

        for (y, line) in self.bricks.iter().enumerate() {
            for (x, brick) in line.iter().enumerate() {
                if !brick.active {
                    continue;
                }

                let color = if (x + y) % 2 == 1 { GRAY } else { ORANGE };
                let size = brick.rect.size();
                draw.rect(brick.rect.min.x, brick.rect.min.y, size.x, size.y, color);
            }
        }

        for powerup in self.powerups.iter_active() {
            draw_powerup_icon(draw, powerup.kind, powerup.pos.x, powerup.pos.y);
        }

        draw.text(
            format!("SCORE: {:04}", self.score),
            SCREEN_WIDTH - 170.0,
            20.0,
            28.0,
            YELLOW,
            TextAlign::Left,
        );

        if paused {
            draw.text(
                "GAME PAUSED",
                SCREEN_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0 - 48.0,
                48.0,
                GRAY,
                TextAlign::Center,
            );
        }
    }
}

fn draw_background(draw: &mut DrawList) {
    for y in (0..SCREEN_HEIGHT as usize).step_by(BACKGROUND_STRIPE) {
        let t = y as f32 / SCREEN_HEIGHT;
        let [r, g, b] =
            std::array::from_fn(|i| lerp_channel(BACKGROUND_TOP[i], BACKGROUND_BOTTOM[i], t));
        let color = Color::from_rgba(r, g, b, 255);

        draw.rect(
            0.0,
            y as f32,
            SCREEN_WIDTH,
            BACKGROUND_STRIPE as f32,
            color,
        );
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 * (1.0 - t) + to as f32 * t) as u8
}

fn draw_title(draw: &mut DrawList) {
    draw.text(
        "Arkanoid",
        SCREEN_WIDTH / 2.0,
        120.0,
        110.0,
        TITLE_COLOR,
        TextAlign::Center,
    );

    draw.text(
        VERSION_STRING,
        SCREEN_WIDTH - 24.0,
        SCREEN_HEIGHT - 44.0,
        28.0,
        LIGHTGRAY,
        TextAlign::Right,
    );

    for (idx, line) in INSTRUCTIONS.iter().enumerate() {
        draw.text(
            *line,
            SCREEN_WIDTH / 2.0,
            290.0 + 32.0 * idx as f32,
            26.0,
            RAYWHITE,
            TextAlign::Center,
        );
    }
}

fn draw_game_over(draw: &mut DrawList, score: u32) {
    let center_x = SCREEN_WIDTH / 2.0;
    let center_y = SCREEN_HEIGHT / 2.0;

    draw.text("GAME OVER", center_x, center_y - 80.0, 56.0, RED, TextAlign::Center);
    draw.text(
        format!("FINAL SCORE: {score}"),
        center_x,
        center_y,
        32.0,
        MAROON,
        TextAlign::Center,
    );
    draw.text(RETURN_HINT, center_x, center_y + 72.0, 26.0, DARKGRAY, TextAlign::Center);
}

fn draw_win(draw: &mut DrawList, score: u32) {
    let center_x = SCREEN_WIDTH / 2.0;
    let center_y = SCREEN_HEIGHT / 2.0;

    draw.text("VICTORY!", center_x, center_y - 96.0, 64.0, DARKGREEN, TextAlign::Center);
    draw.text(
        format!("FINAL SCORE: {score}"),
        center_x,
        center_y,
        34.0,
        MAROON,
        TextAlign::Center,
    );
    draw.text(
        "YOU CLEARED ALL THE BRICKS!",
        center_x,
        center_y + 48.0,
        28.0,
        ORANGE,
        TextAlign::Center,
    );
    draw.text(RETURN_HINT, center_x, center_y + 96.0, 26.0, DARKGRAY, TextAlign::Center);
}

fn draw_powerup_icon(draw: &mut DrawList, kind: PowerupKind, x: f32, y: f32) {
    match kind {
        PowerupKind::None => (),
        PowerupKind::Expand => {
            draw.rect(x - 12.0, y - 7.0, 24.0, 14.0, YELLOW);
            draw.rect_lines(x - 12.0, y - 7.0, 24.0, 14.0, 1.0, BLACK);
            draw.text("E", x - 6.0, y - 7.0, 16.0, BLACK, TextAlign::Left);
        }
        PowerupKind::ExtraLife => {
            draw.circle(x, y, 12.0, RED);
            draw.text("+", x - 6.0, y - 12.0, 22.0, WHITE, TextAlign::Left);
        }
        PowerupKind::MultiBall => {
            draw.circle(x - 7.0, y, 7.0, MAROON);
            draw.circle(x + 7.0, y, 7.0, MAROON);
            draw.circle(x, y, 7.0, MAROON);
        }
    }
}

#[cfg(test)]
mod tests {
    use lib_game::{DrawCmd, InputModel};

    use super::*;
    use crate::game::GameCfg;

    fn texts(draw: &DrawList) -> Vec<&str> {
        draw.cmds()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_title_screen() {
        let mut world = GameWorld::new(GameCfg::default(), 0);
        let mut draw = DrawList::new();
        world.render_export(&mut draw);

        let texts = texts(&draw);
        assert_eq!(texts[0], "Arkanoid");
        assert!(texts.contains(&"version 1"));
        assert!(texts.contains(&"Launch ball: SPACE"));
    }

    #[test]
    fn test_background_gradient() {
        let mut draw = DrawList::new();
        draw_background(&mut draw);

        assert_eq!(draw.cmds().len(), 180);
        assert_eq!(
            draw.cmds()[0],
            DrawCmd::Rect {
                x: 0.0,
                y: 0.0,
                w: SCREEN_WIDTH,
                h: 4.0,
                color: Color::from_rgba(40, 40, 90, 255),
            }
        );
    }

    #[test]
    fn test_playfield_score_and_staged_ball() {
        let mut world = GameWorld::new(GameCfg::default(), 0);
        world.update(
            &InputModel {
                confirmation_detected: true,
                ..Default::default()
            },
            1.0 / 60.0,
        );
        world.score = 300;

        let mut draw = DrawList::new();
        world.render_export(&mut draw);

        assert!(texts(&draw).contains(&"SCORE: 0300"));
        // The resting ball is not drawn.
        let circles = draw
            .cmds()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Circle { .. }))
            .count();
        assert_eq!(circles, 0);
    }

    #[test]
    fn test_events_become_bursts_once() {
        let mut world = GameWorld::new(GameCfg::default(), 0);
        world.events.push(GameEvent::BrickDestroyed {
            center: glam::vec2(49.0, 84.0),
        });

        let mut draw = DrawList::new();
        world.render_export(&mut draw);
        assert!(draw.cmds().contains(&DrawCmd::Burst {
            x: 49.0,
            y: 84.0,
            kind: BurstKind::Brick,
        }));

        draw.clear();
        world.render_export(&mut draw);
        assert!(!draw
            .cmds()
            .iter()
            .any(|cmd| matches!(cmd, DrawCmd::Burst { .. })));
    }
}
