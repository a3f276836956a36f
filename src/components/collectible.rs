//! Falling collectible components.
//!
//! A [`Collectible`] is one gloop drop. Its fall is driven by [`DropMotion`],
//! a small staged animation (appear, stretch, fall) that the
//! `drop_motion_system` advances every frame. Once the drop is caught or hits
//! the ground its state leaves [`CollectibleState::Falling`] and the motion is
//! removed, so contacts are routed at most once.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Seconds the drop takes to fade in before it starts stretching.
pub const APPEAR_SECONDS: f32 = 0.25;
/// Seconds the drop takes to stretch from its spawn scale to its fall scale.
pub const STRETCH_SECONDS: f32 = 1.0;
/// Seconds the drop takes to fall from the spawn line to the ground line.
pub const DROP_FALL_SECONDS: f32 = 1.0;
/// Scale the drop is spawned with.
pub const SPAWN_SCALE: Vector2 = Vector2 { x: 0.25, y: 1.0 };
/// Scale the drop reaches at the end of the stretch.
pub const FALL_SCALE: Vector2 = Vector2 { x: 1.0, y: 1.3 };
/// Scale applied when the drop splats on the ground.
pub const SPLAT_SCALE: Vector2 = Vector2 { x: 1.5, y: 0.5 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    Gloop,
}

impl CollectibleKind {
    /// Texture key of the sprite for this kind.
    pub fn tex_key(self) -> &'static str {
        match self {
            CollectibleKind::Gloop => "gloop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleState {
    Falling,
    Collected,
    Missed,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub state: CollectibleState,
    /// Remaining-drops number shown on the drop when it was spawned.
    pub number: u32,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, number: u32) -> Self {
        Self {
            kind,
            state: CollectibleState::Falling,
            number,
        }
    }

    pub fn is_falling(&self) -> bool {
        self.state == CollectibleState::Falling
    }

    /// Leave the falling state. Returns false if it already left it.
    pub fn resolve(&mut self, state: CollectibleState) -> bool {
        if !self.is_falling() {
            return false;
        }
        self.state = state;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropStage {
    Appear,
    Stretch,
    Fall,
    Landed,
}

/// Pose of a dropping collectible at a point of its motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropPose {
    pub y: f32,
    pub scale: Vector2,
    pub alpha: f32,
}

/// Staged drop animation from `start_y` down to `floor_y`.
#[derive(Component, Debug, Clone)]
pub struct DropMotion {
    pub start_y: f32,
    pub floor_y: f32,
    pub fall_seconds: f32,
    pub stage: DropStage,
    pub time_in_stage: f32,
}

impl DropMotion {
    pub fn new(start_y: f32, floor_y: f32) -> Self {
        Self {
            start_y,
            floor_y,
            fall_seconds: DROP_FALL_SECONDS,
            stage: DropStage::Appear,
            time_in_stage: 0.0,
        }
    }

    fn stage_duration(&self) -> Option<f32> {
        match self.stage {
            DropStage::Appear => Some(APPEAR_SECONDS),
            DropStage::Stretch => Some(STRETCH_SECONDS),
            DropStage::Fall => Some(self.fall_seconds),
            DropStage::Landed => None,
        }
    }

    fn next_stage(&self) -> DropStage {
        match self.stage {
            DropStage::Appear => DropStage::Stretch,
            DropStage::Stretch => DropStage::Fall,
            DropStage::Fall | DropStage::Landed => DropStage::Landed,
        }
    }

    /// Advance by `dt` seconds, carrying leftover time into later stages,
    /// and return the resulting pose.
    pub fn advance(&mut self, dt: f32) -> DropPose {
        self.time_in_stage += dt.max(0.0);
        while let Some(duration) = self.stage_duration() {
            if self.time_in_stage < duration {
                break;
            }
            self.time_in_stage -= duration;
            self.stage = self.next_stage();
        }
        self.pose()
    }

    pub fn pose(&self) -> DropPose {
        let progress = |duration: f32| {
            if duration <= 0.0 {
                1.0
            } else {
                (self.time_in_stage / duration).clamp(0.0, 1.0)
            }
        };
        match self.stage {
            DropStage::Appear => DropPose {
                y: self.start_y,
                scale: SPAWN_SCALE,
                alpha: progress(APPEAR_SECONDS),
            },
            DropStage::Stretch => {
                let t = progress(STRETCH_SECONDS);
                DropPose {
                    y: self.start_y,
                    scale: SPAWN_SCALE + (FALL_SCALE - SPAWN_SCALE) * t,
                    alpha: 1.0,
                }
            }
            DropStage::Fall => {
                let t = progress(self.fall_seconds);
                DropPose {
                    y: self.start_y + (self.floor_y - self.start_y) * t,
                    scale: FALL_SCALE,
                    alpha: 1.0,
                }
            }
            DropStage::Landed => DropPose {
                y: self.floor_y,
                scale: FALL_SCALE,
                alpha: 1.0,
            },
        }
    }
}
