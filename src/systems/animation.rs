//! Sprite animation playback.
//!
//! [`animation`] advances every [`Animation`] and copies the current frame
//! of its [`AnimationResource`](crate::resources::animationstore::AnimationResource)
//! into the entity's [`Sprite`]. When a finite animation ends the component is
//! removed and, if it asked for it, the frame shown before it started is put
//! back.

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::animation::{Animation, AnimationStep};
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

pub fn animation(
    mut query: Query<(Entity, &mut Animation, &mut Sprite)>,
    store: Res<AnimationStore>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut anim, mut sprite) in query.iter_mut() {
        let Some(resource) = store.get(&anim.animation_key) else {
            warn!(
                "Animation '{}' not in AnimationStore, removing it from {:?}",
                anim.animation_key, entity
            );
            commands.entity(entity).remove::<Animation>();
            continue;
        };
        if !anim.started && anim.restore && anim.saved_frame.is_none() {
            anim.saved_frame = Some(sprite.frame());
        }
        match anim.advance(time.delta, resource.frames.len(), resource.frame_time) {
            AnimationStep::Hold => {}
            AnimationStep::Frame(index) => {
                if sprite.tex_key != resource.tex_key {
                    sprite.tex_key = resource.tex_key.clone();
                }
                if let Some(frame) = resource.frames.get(index) {
                    sprite.apply_frame(frame, anim.resize);
                }
            }
            AnimationStep::Finished => {
                if let Some(saved) = anim.saved_frame.take() {
                    sprite.apply_frame(&saved, anim.resize);
                }
                commands.entity(entity).remove::<Animation>();
            }
        }
    }
}
