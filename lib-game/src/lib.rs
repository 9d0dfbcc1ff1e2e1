mod dbg;
mod input;
mod render;

pub mod sys;

pub use input::*;
pub use render::*;

use dbg::DebugStuff;
use log::{info, warn};
use macroquad::prelude::*;
use quad_dbg::{ScreenDump, dump};

const GAME_TICKRATE: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Title,
    Active {
        paused: bool,
    },
    GameOver,
    Win,
}

/// A console command: its name, a one-line description and the payload.
/// Failures are reported into the log.
pub type DebugCommand<G> = (
    &'static str,
    &'static str,
    fn(&mut G, &[&str]) -> anyhow::Result<()>,
);

/// The trait containing all callbacks for the game,
/// that is run inside the App. The game owns its state,
/// including the [AppState].
///
/// The application loop is structured as follows:
/// 1. Input capture
/// 2. Console handling
/// 3. Game::update (skipped while the console prompt is open)
/// 4. Game::render_export
/// 5. Drawing of the exported [DrawList] and the debug overlays
pub trait Game: Sized + 'static {
    /// Return the debug commands of this game. These commands
    /// will be added to the App's command registry.
    fn debug_commands(&self) -> &[DebugCommand<Self>];

    fn state(&self) -> AppState;

    /// Advance the game by one frame. `dt` is the real time
    /// the last frame took.
    fn update(&mut self, input: &InputModel, dt: f32);

    /// Export the game for rendering. The list arrives empty.
    fn render_export(&mut self, draw: &mut DrawList);

    /// Put game specific values into the `dump!` overlay.
    fn debug_dump(&self) {}
}

/// The app runs all the boilerplate code to make the game tick.
/// The following features are provided:
/// * Fullscreen toggling
/// * Debug console with the game's commands
/// * Lag reporting
/// * Drawing of the `dump!` macro and of the on-screen log
pub struct App {
    fullscreen: bool,
    old_size: (u32, u32),
    show_debug: bool,

    render: Render,
    draw: DrawList,
}

impl App {
    pub fn new(conf: &Conf, view_width: f32, view_height: f32) -> Self {
        Self {
            fullscreen: conf.fullscreen,
            old_size: (conf.window_width as u32, conf.window_height as u32),
            show_debug: false,

            render: Render::new(view_width, view_height),
            draw: DrawList::new(),
        }
    }

    /// Just runs the game. This method will run forever as
    /// it provides the application loop.
    pub async fn run<G: Game>(mut self, game: &mut G) {
        let mut debug = DebugStuff::<G>::new(game.debug_commands().iter().copied());

        sys::done_loading();

        info!("Done loading");
        info!("lib-game version: {}", env!("CARGO_PKG_VERSION"));

        loop {
            ScreenDump::new_frame();

            let input = InputModel::capture();
            let real_dt = get_frame_time();
            Self::report_lag(real_dt);
            self.fullscreen_toggles(&input);
            if input.console_toggle_requested {
                self.show_debug = !self.show_debug;
            }

            let console_busy = debug.should_pause();
            debug.input(game);
            if !console_busy {
                game.update(&input, real_dt);
            }

            self.draw.clear();
            game.render_export(&mut self.draw);
            self.render.render(&self.draw);

            self.debug_info(game);
            debug.draw(self.show_debug);
            next_frame().await
        }
    }

    fn fullscreen_toggles(&mut self, input: &InputModel) {
        if !input.fullscreen_toggle_requested {
            return;
        }

        // NOTE: macroquad does not update window config when it goes fullscreen
        set_fullscreen(!self.fullscreen);

        if self.fullscreen {
            miniquad::window::set_window_size(self.old_size.0, self.old_size.1);
        }

        self.fullscreen = !self.fullscreen;
    }

    fn report_lag(real_dt: f32) {
        if real_dt >= 2.0 * GAME_TICKRATE {
            warn!("LAG by {:.2}ms", (real_dt - GAME_TICKRATE) * 1000.0);
        }
    }

    fn debug_info<G: Game>(&self, game: &G) {
        dump!("FPS: {:?}", get_fps());
        dump!("game state: {:?}", game.state());
        game.debug_dump();
    }
}
