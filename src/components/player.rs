//! Player components.

use bevy_ecs::prelude::Component;

/// Marks the blob the user drags along the ground.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Keeps an entity's Y pinned to a fixed line whatever else moves it.
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundLock {
    pub y: f32,
}

/// Facing of a sprite that walks left and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Facing after moving from `from_x` to `to_x`.
    ///
    /// Moving left faces left; anything else (including standing still)
    /// faces right.
    pub fn towards(from_x: f32, to_x: f32) -> Self {
        if from_x > to_x {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    /// Horizontal sprite flip for this facing. The art faces right.
    pub fn flip_h(self) -> bool {
        self == Facing::Left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_follows_direction_of_travel() {
        assert_eq!(Facing::towards(200.0, 150.0), Facing::Left);
        assert_eq!(Facing::towards(150.0, 200.0), Facing::Right);
        assert_eq!(Facing::towards(150.0, 150.0), Facing::Right);
        assert!(Facing::Left.flip_h());
        assert!(!Facing::Right.flip_h());
    }
}
