use std::fmt::{self, Write};
use std::sync::{LazyLock, Mutex, PoisonError};

use log::{Level, Log, Metadata, Record, SetLoggerError};
use macroquad::miniquad::date;
use macroquad::prelude::*;

use crate::screentext::*;

const SCREENCON_LINES: usize = 256;
const SCREENCON_MSG_LIFE: f64 = 3.0;
const SCREENCON_RECENT_LINES: usize = 8;

struct ScreenConsoleImpl {
    pen_text_color: Color,
    pen_back_color: Color,
    text: ScreenText,
}

impl ScreenConsoleImpl {
    fn new() -> Self {
        ScreenConsoleImpl {
            pen_text_color: WHITE,
            pen_back_color: SCREENCON_DEFAULT_BACKGROUND,
            text: ScreenText::new(SCREENCON_LINES),
        }
    }

    fn next_line(&mut self) {
        self.text
            .push_line(self.pen_text_color, self.pen_back_color, date::now());
    }

    fn write_str_no_newline(&mut self, s: &str) {
        if self.text.last_mut().is_none() {
            self.next_line();
        }

        if let Some(line) = self.text.last_mut() {
            line.put(s);
        }
    }
}

impl fmt::Write for ScreenConsoleImpl {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut parts = s.split('\n');
        if let Some(first) = parts.next() {
            self.write_str_no_newline(first);
        }

        for part in parts {
            self.next_line();
            self.write_str_no_newline(part);
        }

        Ok(())
    }
}

static GLOBAL_CON: LazyLock<Mutex<ScreenConsoleImpl>> =
    LazyLock::new(|| Mutex::new(ScreenConsoleImpl::new()));

/// The on-screen log. Every log record becomes a line, colored
/// by its level. Fresh lines stay visible for a few seconds.
pub struct ScreenCons;

impl ScreenCons {
    fn scope<R>(scope: impl FnOnce(&mut ScreenConsoleImpl) -> R) -> R {
        let mut lock = GLOBAL_CON.lock().unwrap_or_else(PoisonError::into_inner);
        scope(&mut lock)
    }

    /// Draws the lines logged during the last few seconds.
    /// With `history` set, draws the latest screenful of lines instead.
    pub fn draw(history: bool) {
        let now = date::now();
        let width = screen_width() / 2.0;

        Self::scope(|con| {
            if history {
                let lines = con.text.iter().collect::<Vec<_>>();
                let skip = lines.len().saturating_sub(SCREENCON_LINES_ONSCREEN);
                draw_lines(lines.into_iter().skip(skip), 0.0, width);
                return;
            }

            let lines = con
                .text
                .iter()
                .filter(|line| now - line.spawn_time < SCREENCON_MSG_LIFE)
                .collect::<Vec<_>>();
            let skip = lines.len().saturating_sub(SCREENCON_RECENT_LINES);
            draw_lines(lines.into_iter().skip(skip), 0.0, width);
        })
    }

    pub fn put_event(msg: fmt::Arguments, level: Level) {
        let (text, back) = Self::log_level_cols(level);

        Self::scope(|con| {
            con.pen_text_color = text;
            con.pen_back_color = back;
            con.next_line();
            let _ = con.write_fmt(msg);
        })
    }

    fn log_level_cols(level: Level) -> (Color, Color) {
        let text_col = match level {
            Level::Error => RED,
            Level::Warn => YELLOW,
            Level::Info => GREEN,
            Level::Debug => WHITE,
            Level::Trace => GRAY,
        };

        (text_col, SCREENCON_DEFAULT_BACKGROUND)
    }

    pub fn init_log() -> Result<(), SetLoggerError> {
        static THIS: ScreenCons = ScreenCons;
        log::set_logger(&THIS)
    }
}

impl Log for ScreenCons {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let file = record.file().unwrap_or("???");
        let line = record.line().unwrap_or(0);

        Self::put_event(
            format_args!("{}:{} {}", file, line, record.args()),
            record.level(),
        );
    }

    fn flush(&self) { /* NOOP */
    }
}
