//! Axis-aligned box collider.
//!
//! The box is laid out relative to the entity's
//! [`MapPosition`](super::mapposition::MapPosition) pivot by `offset`, so a
//! bottom-centered sprite uses `offset = (-w/2, -h)`.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Collider for a sprite pivoted at its bottom-center.
    pub fn bottom_centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, -height))
    }

    /// Collider for a sprite pivoted at its top-center.
    pub fn top_centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, 0.0))
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Negative sizes are normalized.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// (x, y, w, h) of the AABB, handy for debug drawing.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_centered_box_sits_on_pivot() {
        let c = BoxCollider::bottom_centered(40.0, 60.0);
        let (min, max) = c.aabb(Vector2::new(100.0, 300.0));
        assert_eq!(min, Vector2::new(80.0, 240.0));
        assert_eq!(max, Vector2::new(120.0, 300.0));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(10.0, 0.0)));
        assert!(a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(9.5, 9.5)));
    }

    #[test]
    fn negative_size_is_normalized() {
        let c = BoxCollider::new(-10.0, -10.0);
        let (min, max) = c.aabb(Vector2::new(0.0, 0.0));
        assert_eq!(min, Vector2::new(-10.0, -10.0));
        assert_eq!(max, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn contains_point_includes_edges() {
        let c = BoxCollider::top_centered(20.0, 20.0);
        let pos = Vector2::new(50.0, 50.0);
        assert!(c.contains_point(pos, Vector2::new(40.0, 50.0)));
        assert!(c.contains_point(pos, Vector2::new(60.0, 70.0)));
        assert!(!c.contains_point(pos, Vector2::new(61.0, 60.0)));
    }
}
