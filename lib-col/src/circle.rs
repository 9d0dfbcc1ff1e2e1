use glam::Vec2;

use crate::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Circle {
        Circle { center, radius }
    }

    /// Circle-rectangle overlap. Touching counts as overlapping.
    pub fn overlaps_aabb(self, aabb: Aabb) -> bool {
        let closest = aabb.closest_point(self.center);

        closest.distance_squared(self.center) <= self.radius * self.radius
    }

    /// The smallest rectangle containing the circle.
    pub fn bounds(self) -> Aabb {
        Aabb::from_center_size(self.center, Vec2::splat(2.0 * self.radius))
    }
}
