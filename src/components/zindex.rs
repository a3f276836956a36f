//! Draw-order tiers.
//!
//! Every drawable entity carries a [`ZIndex`]. The game only uses the fixed
//! [`Layer`] tiers; the renderer sorts by the raw value (painter's algorithm).

use bevy_ecs::prelude::Component;

/// Fixed draw-order tiers shared by the whole scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background = 0,
    Foreground = 1,
    Player = 2,
    Collectible = 3,
    Ui = 4,
}

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl From<Layer> for ZIndex {
    fn from(layer: Layer) -> Self {
        ZIndex(layer as i32)
    }
}
