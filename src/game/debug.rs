use anyhow::{bail, ensure, Context};
use glam::vec2;
use lib_game::{AppState, DebugCommand};
use log::info;

use super::powerup::PowerupKind;
use super::world::GameWorld;

/// Height above the paddle where `pu` drops its powerup.
const DEBUG_POWERUP_DROP: f32 = 100.0;

pub(crate) static DEBUG_COMMANDS: [DebugCommand<GameWorld>; 5] = [
    (
        "cfg",
        "read or write a config field. Usage: cfg [SECTION] [FIELD] [VALUE]?",
        cmd_cfg,
    ),
    ("win", "destroy all bricks", cmd_win),
    ("kill", "lose every ball in play", cmd_kill),
    (
        "pu",
        "drop a powerup above the paddle. Usage: pu [expand|life|multi]",
        cmd_powerup,
    ),
    ("lives", "set the life count. Usage: lives [N]", cmd_lives),
];

fn ensure_playing(world: &GameWorld) -> anyhow::Result<()> {
    ensure!(
        matches!(world.state, AppState::Active { .. }),
        "only available during a game"
    );
    Ok(())
}

/// Ball, brick score and powerup settings take effect right away.
/// The paddle and the brick layout pick up changes on the next game.
fn cmd_cfg(world: &mut GameWorld, args: &[&str]) -> anyhow::Result<()> {
    match args {
        [section, field] => {
            let val = world.cfg.get_field(section, field)?;
            info!("{section}.{field} = {val}");
        }
        [section, field, val] => {
            world.cfg.set_field(section, field, val)?;
            info!("{section}.{field} := {val}");
        }
        _ => bail!("expected 2 or 3 args, got {}", args.len()),
    }

    Ok(())
}

fn cmd_win(world: &mut GameWorld, _args: &[&str]) -> anyhow::Result<()> {
    ensure_playing(world)?;

    for brick in world.bricks.iter_mut().flatten() {
        brick.active = false;
    }

    Ok(())
}

fn cmd_kill(world: &mut GameWorld, _args: &[&str]) -> anyhow::Result<()> {
    ensure_playing(world)?;

    for ball in world.balls.iter_active_mut() {
        ball.deactivate();
    }
    world.waiting_for_launch = false;

    Ok(())
}

fn cmd_powerup(world: &mut GameWorld, args: &[&str]) -> anyhow::Result<()> {
    ensure_playing(world)?;

    let [name] = args else {
        bail!("expected 1 arg, got {}", args.len());
    };
    let kind = PowerupKind::from_name(name)
        .with_context(|| format!("unknown powerup {name:?}"))?;
    let pos = vec2(
        world.paddle.center_x(),
        world.paddle.pos.y - DEBUG_POWERUP_DROP,
    );
    world
        .put_powerup(pos, kind)
        .context("no free powerup slot")?;

    Ok(())
}

fn cmd_lives(world: &mut GameWorld, args: &[&str]) -> anyhow::Result<()> {
    ensure_playing(world)?;

    let [count] = args else {
        bail!("expected 1 arg, got {}", args.len());
    };
    let count: u32 = count
        .parse()
        .with_context(|| format!("parsing {count:?}"))?;
    ensure!(count > 0, "use kill to lose the game");

    world.paddle.lives = count;
    Ok(())
}
