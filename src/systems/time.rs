//! Frame time and keyed timers.
//!
//! [`update_world_time`] advances [`WorldTime`] once per frame;
//! [`update_timers`] ticks every [`Timers`] component and triggers a
//! [`TimerEvent`] per fire.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::timer::Timers;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds; `time_scale` is applied here.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Tick keyed timers. Fires are triggered in key order within an entity.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timers)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut timers) in query.iter_mut() {
        if timers.is_empty() {
            continue;
        }
        for key in timers.tick(dt) {
            debug!("timer '{}' fired on {:?}", key, entity);
            commands.trigger(TimerEvent { entity, key });
        }
    }
}
