use std::fmt;

use macroquad::prelude::*;

pub(crate) const SCREENCON_CHARS_PER_LINE: usize = 255;
pub(crate) const SCREENCON_LINES_ONSCREEN: usize = 32;
pub(crate) const SCREENCON_DEFAULT_BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 0.6);

#[derive(Clone)]
pub(crate) struct Line {
    buf: String,
    pub(crate) color: Color,
    pub(crate) background: Color,
    pub(crate) spawn_time: f64,
}

impl Line {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(SCREENCON_CHARS_PER_LINE),
            color: BLANK,
            background: BLANK,
            spawn_time: 0.0,
        }
    }

    /// Appends `s`, cutting it at the line capacity.
    pub(crate) fn put(&mut self, s: &str) {
        let used = self.buf.len();
        if used >= SCREENCON_CHARS_PER_LINE {
            return;
        }
        let remaining = SCREENCON_CHARS_PER_LINE - used;

        let mut end = remaining.min(s.len());
        while !s.is_char_boundary(end) {
            end -= 1;
        }

        self.buf.push_str(&s[..end]);
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }
}

impl fmt::Write for Line {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put(s);
        Ok(())
    }
}

/// A ring of lines. Once full, every new line takes
/// the slot of the oldest one.
pub(crate) struct ScreenText {
    lines: Vec<Line>,
    head: usize,
    used: usize,
}

impl ScreenText {
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(capacity > 0);

        Self {
            lines: vec![Line::new(); capacity],
            head: 0,
            used: 0,
        }
    }

    pub(crate) fn push_line(&mut self, color: Color, background: Color, spawn_time: f64) -> &mut Line {
        let capacity = self.lines.len();
        let idx = self.head;

        self.head = (self.head + 1) % capacity;
        self.used = (self.used + 1).min(capacity);

        let line = &mut self.lines[idx];
        line.clear();
        line.color = color;
        line.background = background;
        line.spawn_time = spawn_time;

        line
    }

    /// The line written last, if any.
    pub(crate) fn last_mut(&mut self) -> Option<&mut Line> {
        if self.used == 0 {
            return None;
        }

        let capacity = self.lines.len();
        Some(&mut self.lines[(self.head + capacity - 1) % capacity])
    }

    pub(crate) fn wipe(&mut self) {
        self.head = 0;
        self.used = 0;
        self.lines.iter_mut().for_each(Line::clear);
    }

    /// Oldest line first.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Line> + '_ {
        let capacity = self.lines.len();
        let oldest = (self.head + capacity - self.used) % capacity;

        (0..self.used).map(move |i| &self.lines[(oldest + i) % capacity])
    }
}

/// Draws `lines` top to bottom, starting at the top edge of the window.
/// `x` is the left edge of the column.
pub(crate) fn draw_lines<'a>(lines: impl IntoIterator<Item = &'a Line>, x: f32, width: f32) {
    set_default_camera();
    let line_box = screen_height() / (SCREENCON_LINES_ONSCREEN as f32);
    let (font_size, font_scale, font_scale_aspect) = camera_font_scale(line_box);
    let dims = measure_text("A", None, font_size, font_scale);
    let spacing = (line_box - dims.height) / 2.0;

    for (idx, line) in lines.into_iter().take(SCREENCON_LINES_ONSCREEN).enumerate() {
        let y = idx as f32 * line_box;
        draw_rectangle(x, y, width, line_box, line.background);
        draw_text_ex(
            line.as_str(),
            x,
            y + line_box - spacing,
            TextParams {
                font: None,
                font_size,
                font_scale,
                font_scale_aspect,
                rotation: 0.0,
                color: line.color,
            },
        );
    }
}
