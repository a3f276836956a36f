//! Timer expiration events.
//!
//! Triggered by `update_timers` every time a keyed
//! [`Timer`](crate::components::timer::Timer) fires.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity owning the timer.
    pub entity: Entity,
    /// The timer key.
    pub key: String,
}
