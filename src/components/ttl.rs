//! Time-to-live component.
//!
//! The `ttl_system` counts [`Ttl::remaining`] down by the scaled frame delta
//! and despawns the entity (and its children) when it reaches zero. Used for
//! bubbles, the floating catch text and labels that fade out before removal.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
