//! Kinematic body component.
//!
//! Stores a constant velocity integrated by the `movement` system. Only
//! particles use it; the scene's gameplay motion is scripted through tweens
//! and [`DropMotion`](super::collectible::DropMotion).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// Velocity in world units per second.
    pub velocity: Vector2,
    /// Velocity damping factor, applied as `velocity *= 1 - friction * dt`.
    pub friction: f32,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }
}
