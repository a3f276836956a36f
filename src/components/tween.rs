//! Tween components for animated interpolation.
//!
//! - [`TweenPosition`] animates [`MapPosition`](super::mapposition::MapPosition)
//! - [`TweenAlpha`] animates the alpha of [`Tint`](super::tint::Tint)
//!
//! See [`crate::systems::tween`] for the update systems.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Determines how a tween behaves when it reaches the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Play once and stop.
    Once,
    /// Restart from the beginning when finished.
    Loop,
    /// Reverse direction when reaching either end.
    PingPong,
}

/// Easing curves applied to the normalized tween time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
}

/// Playback state shared by every tween kind.
#[derive(Clone, Debug)]
pub struct TweenClock {
    pub duration: f32,
    pub easing: Easing,
    pub loop_mode: LoopMode,
    pub playing: bool,
    pub time: f32,
    pub forward: bool,
}

impl TweenClock {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
            forward: true,
        }
    }
}

/// Moves an entity's position from `from` to `to`.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    pub from: Vector2,
    pub to: Vector2,
    pub clock: TweenClock,
}

impl TweenPosition {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenPosition {
            from,
            to,
            clock: TweenClock::new(duration),
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.clock.easing = easing;
        self
    }
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.clock.loop_mode = loop_mode;
        self
    }
}

/// Fades the alpha of an entity's tint, 0.0 transparent to 1.0 opaque.
#[derive(Component, Clone, Debug)]
pub struct TweenAlpha {
    pub from: f32,
    pub to: f32,
    pub clock: TweenClock,
}

impl TweenAlpha {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenAlpha {
            from,
            to,
            clock: TweenClock::new(duration),
        }
    }
    pub fn fade_in(duration: f32) -> Self {
        Self::new(0.0, 1.0, duration)
    }
    pub fn fade_out(duration: f32) -> Self {
        Self::new(1.0, 0.0, duration)
    }
}
