//! Tween animation systems.
//!
//! - [`tween_mapposition_system`] – animates [`MapPosition`]
//! - [`tween_alpha_system`] – animates the alpha of [`Tint`]
//!
//! Each tween carries a [`TweenClock`] (duration, easing, loop mode). Delta
//! time comes from [`WorldTime`]. Finished one-shot tweens remove themselves.

use crate::components::mapposition::MapPosition;
use crate::components::tint::Tint;
use crate::components::tween::{Easing, LoopMode, TweenAlpha, TweenClock, TweenPosition};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use raylib::math::Vector2;

/// Apply an easing function to a normalized time value, clamped to [0, 1].
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
    }
}

pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance the clock by `dt` and return the eased progress in [0, 1].
///
/// A zero (or negative) duration completes immediately.
pub(crate) fn advance(clock: &mut TweenClock, dt: f32) -> f32 {
    if clock.duration <= 0.0 {
        clock.playing = false;
        clock.time = 0.0;
        return ease(clock.easing, 1.0);
    }
    let dir = if clock.forward { 1.0 } else { -1.0 };
    clock.time += dt * dir;

    let finished_forward = clock.forward && clock.time >= clock.duration;
    let finished_backward = !clock.forward && clock.time <= 0.0;

    if finished_forward || finished_backward {
        match clock.loop_mode {
            LoopMode::Once => {
                clock.playing = false;
                clock.time = clock.time.clamp(0.0, clock.duration);
            }
            LoopMode::Loop => {
                clock.time = if finished_forward { 0.0 } else { clock.duration };
            }
            LoopMode::PingPong => {
                clock.forward = !clock.forward;
                clock.time = clock.time.clamp(0.0, clock.duration);
            }
        }
    }
    ease(clock.easing, clock.time / clock.duration)
}

pub fn tween_mapposition_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut MapPosition, &mut TweenPosition)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut mp, mut tw) in query.iter_mut() {
        let t = advance(&mut tw.clock, dt);
        mp.pos = lerp_v2(tw.from, tw.to, t);
        if !tw.clock.playing {
            commands.entity(entity).remove::<TweenPosition>();
        }
    }
}

pub fn tween_alpha_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Tint, &mut TweenAlpha)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut tint, mut tw) in query.iter_mut() {
        let t = advance(&mut tw.clock, dt);
        tint.set_alpha(lerp_f32(tw.from, tw.to, t));
        if !tw.clock.playing {
            commands.entity(entity).remove::<TweenAlpha>();
        }
    }
}
