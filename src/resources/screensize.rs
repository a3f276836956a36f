//! Game render resolution.

use bevy_ecs::prelude::Resource;

/// Size of the render target in pixels; all game coordinates live in it.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}
