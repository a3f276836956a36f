//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity in game coordinates: origin at
//! the top-left of the render target, Y+ pointing down. Sprites and colliders
//! are laid out relative to this point.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

impl Default for MapPosition {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
