//! Attach an entity's position to another entity.
//!
//! The drop number label rides on its gloop this way; the label is also a
//! child of the gloop so it goes away with it.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Component)]
pub struct StuckTo {
    pub target: Entity,
    /// Offset from the target's position.
    pub offset: Vector2,
}

impl StuckTo {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            offset: Vector2::zero(),
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }
}
