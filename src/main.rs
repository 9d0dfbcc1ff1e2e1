use anyhow::anyhow;
#[cfg(target_family = "wasm")]
use arkanoid::game::DEFAULT_CFG_PATH;
use arkanoid::game::{GameCfg, GameWorld, SCREEN_HEIGHT, SCREEN_WIDTH};
use lib_game::{sys, App};
use log::{error, info, set_max_level, STATIC_MAX_LEVEL};
use macroquad::prelude::*;
use quad_dbg::ScreenCons;

#[cfg(not(target_family = "wasm"))]
mod cli;

fn window_conf() -> Conf {
    Conf {
        window_title: "Arkanoid".to_owned(),
        high_dpi: true,
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: true,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        sys::panic_screen(&format!("Driver panicked:\n{}", info));
        hook(info);
    }));

    if let Err(e) = run().await {
        error!("{e:?}");
        sys::panic_screen(&format!("Driver exited with error:\n{:?}", e));
    }
}

struct Launch {
    seed: u64,
    cfg_path: String,
}

#[cfg(not(target_family = "wasm"))]
fn launch_options() -> Launch {
    use clap::Parser;

    let args = cli::Args::parse();
    Launch {
        seed: args.seed.unwrap_or_else(clock_seed),
        cfg_path: args.cfg,
    }
}

#[cfg(target_family = "wasm")]
fn launch_options() -> Launch {
    Launch {
        seed: clock_seed(),
        cfg_path: DEFAULT_CFG_PATH.to_owned(),
    }
}

fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

async fn run() -> anyhow::Result<()> {
    set_max_level(STATIC_MAX_LEVEL);
    ScreenCons::init_log().map_err(|e| anyhow!("failed to init logger: {e}"))?;

    let launch = launch_options();
    let cfg = GameCfg::load(&launch.cfg_path).await?;

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));
    info!("RNG seed: {}", launch.seed);

    let mut game = GameWorld::new(cfg, launch.seed);
    let app = App::new(&window_conf(), SCREEN_WIDTH, SCREEN_HEIGHT);
    app.run(&mut game).await;

    Ok(())
}
