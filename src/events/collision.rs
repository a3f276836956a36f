//! Collision event.
//!
//! The collision detector triggers a [`CollisionEvent`] for every pair of
//! overlapping colliders each frame. The collision observer routes it through
//! the [`CollisionRule`](crate::components::collision::CollisionRule)s.

use bevy_ecs::prelude::*;

/// Two entities whose colliders overlap. No ordering guarantees.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
