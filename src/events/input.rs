//! Touch events.
//!
//! The primary mouse button (or first touch point) is polled into a
//! [`TouchEvent`] each time the pointer goes down, moves while down, goes up
//! or is cancelled. Positions are in game (render target) coordinates.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Moved,
    Up,
    /// The window lost focus while the pointer was down.
    Cancelled,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub pos: Vector2,
}
