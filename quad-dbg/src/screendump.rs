use std::fmt;
use std::sync::{LazyLock, Mutex, PoisonError};

use macroquad::prelude::*;

use crate::screentext::*;

const DUMP_LINES: usize = 64;

static GLOBAL_DUMP: LazyLock<Mutex<ScreenText>> =
    LazyLock::new(|| Mutex::new(ScreenText::new(DUMP_LINES)));

/// Values watched during the current frame. Filled with [crate::dump!]
/// and wiped at the start of every frame.
pub struct ScreenDump;

impl ScreenDump {
    fn scope<R>(scope: impl FnOnce(&mut ScreenText) -> R) -> R {
        let mut lock = GLOBAL_DUMP.lock().unwrap_or_else(PoisonError::into_inner);
        scope(&mut lock)
    }

    pub fn new_frame() {
        Self::scope(|text| text.wipe());
    }

    pub fn put_line(args: fmt::Arguments) {
        Self::scope(|text| {
            let line = text.push_line(WHITE, SCREENCON_DEFAULT_BACKGROUND, 0.0);
            let _ = fmt::write(line, args);
        })
    }

    /// Draws the dump in the right half of the window.
    pub fn draw() {
        let x = screen_width() / 2.0;

        Self::scope(|text| draw_lines(text.iter(), x, x));
    }
}

#[macro_export]
macro_rules! dump {
    ($($arg:tt)+) => {
        $crate::ScreenDump::put_line(std::format_args!($($arg)+))
    };
}
