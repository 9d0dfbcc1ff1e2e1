use macroquad::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// The particle effect to play at a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstKind {
    Brick,
    Ball,
}

/// A single draw call. All coordinates are in the logical screen space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    RectLines {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        thickness: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    /// `y` is the top of the text. `x` is its left edge, middle or
    /// right edge depending on `align`.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        align: TextAlign,
    },
    Burst {
        x: f32,
        y: f32,
        kind: BurstKind,
    },
}

/// The draw calls of one frame, executed in order by [crate::Render].
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.cmds.push(DrawCmd::Rect { x, y, w, h, color });
    }

    pub fn rect_lines(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color) {
        self.cmds.push(DrawCmd::RectLines {
            x,
            y,
            w,
            h,
            thickness,
            color,
        });
    }

    pub fn circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.cmds.push(DrawCmd::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        align: TextAlign,
    ) {
        self.cmds.push(DrawCmd::Text {
            text: text.into(),
            x,
            y,
            size,
            color,
            align,
        });
    }

    pub fn burst(&mut self, x: f32, y: f32, kind: BurstKind) {
        self.cmds.push(DrawCmd::Burst { x, y, kind });
    }
}
