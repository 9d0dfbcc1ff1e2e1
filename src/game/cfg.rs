use anyhow::{ensure, Context};
use log::warn;
use macroquad::prelude::load_string;

use super::world::{BALLS_MAX, SCREEN_WIDTH};

pub const DEFAULT_CFG_PATH: &str = "assets/gamecfg.ron";

/// Generates [GameCfg] out of a list of sections. Every field
/// gets a default value, which is also used for the fields a
/// config file leaves out.
macro_rules! game_cfg {
    (
        $( $section_name:ident : $section_ty:ident {
            $( $(#[$meta:meta])* $field_name:ident : $field_ty:ty = $default:expr ),+ $(,)?
        } ),*
        $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Default, serde::Deserialize, serde::Serialize)]
        #[serde(default)]
        pub struct GameCfg {
            $( pub $section_name : sections::$section_ty ),+
        }

        impl GameCfg {
            pub fn set_field(&mut self, section: &str, field: &str, val: &str) -> anyhow::Result<()> {
                let mut new_cfg = *self;
                match section {
                    $(stringify!($section_name) => match field {
                        $(stringify!($field_name) => new_cfg.$section_name.$field_name = ron::from_str(val)
                            .with_context(|| format!("parsing {val:?}"))?,)+
                        _ => anyhow::bail!("unknown field in section {section:?}: {field:?}"),
                    })+
                    _ => anyhow::bail!("unknown section: {section:?}"),
                };
                new_cfg.validate()?;

                *self = new_cfg;
                Ok(())
            }

            pub fn get_field(&self, section: &str, field: &str) -> anyhow::Result<String> {
                let val = match section {
                    $(stringify!($section_name) => match field {
                        $(stringify!($field_name) => ron::to_string(&self.$section_name.$field_name)?,)+
                        _ => anyhow::bail!("unknown field in section {section:?}: {field:?}"),
                    })+
                    _ => anyhow::bail!("unknown section: {section:?}"),
                };
                Ok(val)
            }
        }

        pub mod sections {
            $(
                #[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
                #[serde(default)]
                pub struct $section_ty {
                    $( $(#[$meta])* pub $field_name : $field_ty ),+
                }

                impl Default for $section_ty {
                    fn default() -> Self {
                        Self {
                            $( $field_name: $default ),+
                        }
                    }
                }
            )+
        }
    };
}

game_cfg! {
    paddle: PaddleCfg {
        width: f32 = 140.0,
        /// Width while the expand powerup is in effect.
        expanded_width: f32 = 210.0,
        height: f32 = 22.0,
        /// Units per frame.
        speed: f32 = 8.0,
        /// Distance from the paddle top to the bottom of the screen.
        bottom_offset: f32 = 50.0,
        max_lives: u32 = 3,
        /// Seconds.
        expand_duration: f32 = 10.0,
    },
    ball: BallCfg {
        radius: f32 = 12.0,
        launch_speed: f32 = 7.0,
        /// Horizontal speed after hitting the paddle's edge.
        steer_factor: f32 = 6.0,
        /// Gap between a resting ball and the paddle.
        rest_gap: f32 = 2.0,
        /// Multi-ball stops cloning once this many balls are in play.
        multi_ball_cap: usize = 3,
    },
    brick: BrickCfg {
        height: f32 = 38.0,
        top_offset: f32 = 70.0,
        left_margin: f32 = 7.0,
        width_padding: f32 = 12.0,
        height_padding: f32 = 10.0,
        /// Points per brick. Kept a multiple of 100.
        score: u32 = 100,
    },
    powerup: PowerupCfg {
        /// Percent.
        drop_chance: u32 = 22,
        fall_speed: f32 = 2.0,
        pickup_size: f32 = 28.0,
        expand_weight: u32 = 40,
        extra_life_weight: u32 = 30,
        multi_ball_weight: u32 = 30,
    },
}

impl GameCfg {
    pub fn from_ron(s: &str) -> anyhow::Result<Self> {
        let cfg: GameCfg = ron::from_str(s).context("parsing game config")?;
        cfg.validate()?;

        Ok(cfg)
    }

    /// Loads the config from `path`. A missing file is
    /// not an error: the defaults get used instead.
    pub async fn load(path: &str) -> anyhow::Result<Self> {
        let data = match load_string(path).await {
            Ok(x) => x,
            Err(e) => {
                warn!("No game config at {path:?} ({e}), using the defaults");
                return Ok(GameCfg::default());
            }
        };

        GameCfg::from_ron(&data).with_context(|| format!("loading {path:?}"))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.paddle.width > 0.0 && self.paddle.expanded_width > 0.0,
            "paddle width must be positive"
        );
        ensure!(
            self.paddle.width <= SCREEN_WIDTH && self.paddle.expanded_width <= SCREEN_WIDTH,
            "paddle must fit the screen"
        );
        ensure!(self.ball.radius > 0.0, "ball radius must be positive");
        ensure!(
            self.ball.multi_ball_cap <= BALLS_MAX,
            "multi_ball_cap can't exceed {BALLS_MAX}"
        );
        ensure!(self.powerup.drop_chance <= 100, "drop_chance is a percentage");
        ensure!(
            self.brick.score > 0 && self.brick.score % 100 == 0,
            "brick score must be a positive multiple of 100"
        );
        let total = self
            .powerup
            .total_weight()
            .context("powerup weights overflow")?;
        ensure!(total > 0, "at least one powerup weight must be non-zero");

        Ok(())
    }
}

impl sections::PowerupCfg {
    /// Sum of all weights, `None` on overflow.
    pub fn total_weight(&self) -> Option<u32> {
        self.expand_weight
            .checked_add(self.extra_life_weight)?
            .checked_add(self.multi_ball_weight)
    }
}
