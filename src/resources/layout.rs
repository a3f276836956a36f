//! Scene geometry derived from the render size and the art.

use bevy_ecs::prelude::Resource;

/// How far above the bottom, in multiples of the ground height, drops spawn.
pub const SPAWN_HEIGHT_FACTOR: f32 = 2.5;

/// Fixed geometry of the play field, in game coordinates (Y+ down).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub width: f32,
    pub height: f32,
    /// Y of the ground line the player stands on.
    pub ground_y: f32,
    pub drop_width: f32,
    pub drop_height: f32,
}

impl SceneLayout {
    pub fn new(width: f32, height: f32, ground_height: f32, drop_width: f32, drop_height: f32) -> Self {
        Self {
            width,
            height,
            ground_y: height - ground_height,
            drop_width,
            drop_height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.width * 0.5
    }

    /// Height of the ground band below the ground line.
    pub fn ground_height(&self) -> f32 {
        self.height - self.ground_y
    }

    /// Y where new drops appear.
    pub fn spawn_y(&self) -> f32 {
        self.height - self.ground_height() * SPAWN_HEIGHT_FACTOR
    }

    /// Horizontal range drops may spawn in, two drop widths in from each edge.
    pub fn drop_range(&self) -> (f32, f32) {
        let margin = self.drop_width * 2.0;
        (margin, (self.width - margin).max(margin))
    }
}
