use glam::{vec2, Vec2};
use log::{debug, info};
use rand::Rng;

use super::cfg::sections::PowerupCfg;
use super::world::{Ball, GameEvent, GameWorld, Powerup, BALLS_MAX};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PowerupKind {
    #[default]
    None,
    Expand,
    ExtraLife,
    MultiBall,
}

impl PowerupKind {
    /// Picks a kind with the odds set by the weights in `cfg`.
    pub fn roll(rng: &mut impl Rng, cfg: &PowerupCfg) -> Self {
        let Some(total) = cfg.total_weight().filter(|&x| x > 0) else {
            return PowerupKind::None;
        };
        let r = rng.random_range(0..total);

        if r < cfg.expand_weight {
            PowerupKind::Expand
        } else if r < cfg.expand_weight + cfg.extra_life_weight {
            PowerupKind::ExtraLife
        } else {
            PowerupKind::MultiBall
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "expand" => Some(PowerupKind::Expand),
            "life" => Some(PowerupKind::ExtraLife),
            "multi" => Some(PowerupKind::MultiBall),
            _ => None,
        }
    }

    pub fn apply(self, world: &mut GameWorld) {
        match self {
            PowerupKind::None => (),
            PowerupKind::Expand => {
                let paddle = &mut world.paddle;
                paddle.expanded = true;
                paddle.expand_timer = world.cfg.paddle.expand_duration;
                paddle.size.x = world.cfg.paddle.expanded_width;
                paddle.clamp_to_screen();
            }
            PowerupKind::ExtraLife => world.paddle.lives += 1,
            PowerupKind::MultiBall => split_balls(world),
        }
    }
}

/// Clones active balls into free slots until the cap is reached.
/// The scan also visits the fresh clones, so one ball turns into three.
fn split_balls(world: &mut GameWorld) {
    let cap = world.cfg.ball.multi_ball_cap;

    for idx in 0..BALLS_MAX {
        if world.balls.active_count() >= cap {
            break;
        }

        let ball = world.balls[idx];
        if !ball.active {
            continue;
        }

        let Some(free) = world.balls.free_slot() else {
            break;
        };
        let flip_y = if world.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        world.balls[free] = Ball {
            vel: vec2(-ball.vel.x, ball.vel.y * flip_y),
            ..ball
        };
    }
}

impl GameWorld {
    /// Spawns a powerup of a random kind. Does nothing when
    /// all powerup slots are taken.
    pub fn spawn_powerup(&mut self, pos: Vec2) -> Option<usize> {
        let kind = PowerupKind::roll(&mut self.rng, &self.cfg.powerup);
        self.put_powerup(pos, kind)
    }

    pub fn put_powerup(&mut self, pos: Vec2, kind: PowerupKind) -> Option<usize> {
        let res = self.powerups.insert(Powerup {
            pos,
            vel: vec2(0.0, self.cfg.powerup.fall_speed),
            kind,
            active: true,
        });

        if res.is_none() {
            debug!("No free powerup slot for {kind:?}");
        }

        res
    }

    pub(crate) fn collect_powerup(&mut self, kind: PowerupKind) {
        info!("Collected {kind:?}");
        kind.apply(self);
        self.events.push(GameEvent::PowerupCollected(kind));
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(PowerupKind::from_name("expand"), Some(PowerupKind::Expand));
        assert_eq!(PowerupKind::from_name("life"), Some(PowerupKind::ExtraLife));
        assert_eq!(PowerupKind::from_name("multi"), Some(PowerupKind::MultiBall));
        assert_eq!(PowerupKind::from_name("none"), None);
    }

    #[test]
    fn test_roll_single_weight() {
        let mut rng = Pcg32::seed_from_u64(7);
        let cfg = PowerupCfg {
            expand_weight: 0,
            extra_life_weight: 5,
            multi_ball_weight: 0,
            ..PowerupCfg::default()
        };

        for _ in 0..100 {
            assert_eq!(PowerupKind::roll(&mut rng, &cfg), PowerupKind::ExtraLife);
        }
    }
}
