use glam::Vec2;

/// An axis-aligned rectangle. `min` is the top-left corner,
/// `max` is the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Builds a rectangle out of its top-left corner and its size.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Aabb {
        Aabb {
            min: pos,
            max: pos + size,
        }
    }

    /// Builds a rectangle of `size` centered at `center`.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Aabb {
        Aabb::from_pos_size(center - size / 2.0, size)
    }

    pub fn overlaps(self, other: Self) -> bool {
        (self.min.x <= other.max.x && self.max.x >= other.min.x)
            && (self.min.y <= other.max.y && self.max.y >= other.min.y)
    }

    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// The point of the rectangle closest to `point`.
    /// Points inside the rectangle map onto themselves.
    pub fn closest_point(self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    pub fn translate(self, offset: Vec2) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}
