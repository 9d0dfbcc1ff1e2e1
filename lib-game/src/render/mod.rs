mod draw_list;

use macroquad::prelude::*;
use macroquad_particles::{self as particles, BlendMode, ColorCurve, EmitterConfig};
use quad_dbg::dump;

pub use draw_list::*;

const BRICK_BURST_PARTICLES: usize = 30;
const BALL_BURST_PARTICLES: usize = 10;

fn brick_explosion() -> particles::EmitterConfig {
    particles::EmitterConfig {
        one_shot: true,
        emitting: false,
        lifetime: 0.3,
        lifetime_randomness: 0.7,
        explosiveness: 0.99,
        amount: BRICK_BURST_PARTICLES as u32,
        initial_direction_spread: 2.0 * std::f32::consts::PI,
        initial_velocity: 200.0,
        size: 3.0,
        gravity: vec2(0.0, 1000.0),
        blend_mode: BlendMode::Alpha,
        emission_shape: particles::EmissionShape::Rect {
            width: 84.0,
            height: 28.0,
        },
        colors_curve: ColorCurve {
            start: ORANGE,
            mid: ORANGE,
            end: BLANK,
        },
        ..Default::default()
    }
}

fn ball_explosion() -> particles::EmitterConfig {
    particles::EmitterConfig {
        one_shot: true,
        emitting: false,
        lifetime: 1.0,
        lifetime_randomness: 0.7,
        explosiveness: 0.99,
        amount: BALL_BURST_PARTICLES as u32,
        initial_direction_spread: 2.0 * std::f32::consts::PI,
        initial_velocity: 100.0,
        size: 12.0,
        gravity: vec2(0.0, -1000.0),
        blend_mode: BlendMode::Alpha,
        emission_shape: particles::EmissionShape::Sphere { radius: 24.0 },
        initial_angular_velocity: 5.0,
        angular_accel: 0.0,
        angular_damping: 0.01,
        colors_curve: ColorCurve {
            start: MAROON,
            mid: Color {
                r: 1.0,
                g: 0.0,
                b: 0.0,
                a: 0.0,
            },
            end: BLANK,
        },
        ..Default::default()
    }
}

/// Render executes a [DrawList] against macroquad. The list
/// is drawn with a camera that maps the fixed logical screen onto
/// the window, keeping its aspect ratio.
pub struct Render {
    view_size: Vec2,
    camera: Camera2D,
    brick_emit: particles::Emitter,
    ball_emit: particles::Emitter,
}

impl Render {
    pub fn new(view_width: f32, view_height: f32) -> Self {
        Self {
            view_size: vec2(view_width, view_height),
            camera: Camera2D::default(),
            brick_emit: particles::Emitter::new(EmitterConfig {
                texture: None,
                ..brick_explosion()
            }),
            ball_emit: particles::Emitter::new(EmitterConfig {
                texture: None,
                ..ball_explosion()
            }),
        }
    }

    pub fn render(&mut self, draw: &DrawList) {
        self.update_camera();
        clear_background(BLACK);
        set_camera(&self.camera);

        dump!("Draw calls: {}", draw.cmds().len());
        for cmd in draw.cmds() {
            self.execute(cmd);
        }

        self.brick_emit.draw(Vec2::ZERO);
        self.ball_emit.draw(Vec2::ZERO);
    }

    fn execute(&mut self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::Rect { x, y, w, h, color } => draw_rectangle(*x, *y, *w, *h, *color),
            DrawCmd::RectLines {
                x,
                y,
                w,
                h,
                thickness,
                color,
            } => draw_rectangle_lines(*x, *y, *w, *h, *thickness, *color),
            DrawCmd::Circle {
                x,
                y,
                radius,
                color,
            } => draw_circle(*x, *y, *radius, *color),
            DrawCmd::Text {
                text,
                x,
                y,
                size,
                color,
                align,
            } => Self::draw_aligned_text(text, *x, *y, *size, *color, *align),
            DrawCmd::Burst { x, y, kind } => {
                let pos = vec2(*x, *y);
                match kind {
                    BurstKind::Brick => self.brick_emit.emit(pos, BRICK_BURST_PARTICLES),
                    BurstKind::Ball => self.ball_emit.emit(pos, BALL_BURST_PARTICLES),
                }
            }
        }
    }

    fn draw_aligned_text(text: &str, x: f32, y: f32, size: f32, color: Color, align: TextAlign) {
        let (font_size, font_scale, font_scale_aspect) = camera_font_scale(size);
        let dims = measure_text(text, None, font_size, font_scale);
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - dims.width / 2.0,
            TextAlign::Right => x - dims.width,
        };

        draw_text_ex(
            text,
            left,
            y + dims.offset_y,
            TextParams {
                font: None,
                font_size,
                font_scale,
                font_scale_aspect,
                rotation: 0.0,
                color,
            },
        );
    }

    fn update_camera(&mut self) {
        let view_aspect = self.view_size.x / self.view_size.y;
        let screen_aspect = screen_width() / screen_height();

        // Grow the visible rect along one axis, so the logical
        // screen stays centered and undistorted.
        let (w, h) = if screen_aspect > view_aspect {
            (self.view_size.y * screen_aspect, self.view_size.y)
        } else {
            (self.view_size.x, self.view_size.x / screen_aspect)
        };

        self.camera = Camera2D::from_display_rect(Rect {
            x: (self.view_size.x - w) / 2.0,
            y: (self.view_size.y - h) / 2.0,
            w,
            h,
        });
        self.camera.zoom.y *= -1.0;
    }
}
