use bevy_ecs::prelude::Component;

/// Rotation around the sprite/text origin, in degrees (clockwise).
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}
