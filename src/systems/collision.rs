//! Collision detection and routing.
//!
//! [`collision_detector`] tests every pair of [`BoxCollider`]s and triggers a
//! [`CollisionEvent`] for each overlap. [`collision_observer`] looks up the
//! [`Group`]s of both entities and runs the callback of every matching
//! [`CollisionRule`] with a [`CollisionContext`].

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::collectible::Collectible;
use crate::components::collision::{CollisionCallback, CollisionContext, CollisionRule};
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::events::collision::CollisionEvent;
use crate::resources::gamestate::NextGameState;
use crate::resources::progress::LevelProgress;
use crate::resources::rng::GameRng;

pub fn collision_detector(query: Query<(Entity, &MapPosition, &BoxCollider)>, mut commands: Commands) {
    let mut combos = query.iter_combinations();
    while let Some([(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)]) =
        combos.fetch_next()
    {
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            commands.trigger(CollisionEvent {
                a: entity_a,
                b: entity_b,
            });
        }
    }
}

/// Parameters needed to build a [`CollisionContext`].
#[derive(SystemParam)]
pub struct CollisionRunnerContext<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub collectibles: Query<'w, 's, &'static mut Collectible>,
    pub positions: Query<'w, 's, &'static mut MapPosition>,
    pub scales: Query<'w, 's, &'static mut Scale>,
    pub sprites: Query<'w, 's, &'static Sprite>,
    pub progress: ResMut<'w, LevelProgress>,
    pub next_state: ResMut<'w, NextGameState>,
    pub rng: ResMut<'w, GameRng>,
    pub audio_cmds: MessageWriter<'w, AudioCmd>,
}

pub fn collision_observer(
    trigger: On<CollisionEvent>,
    groups: Query<&Group>,
    rules: Query<&CollisionRule>,
    mut ctx: CollisionRunnerContext,
) {
    let a = trigger.event().a;
    let b = trigger.event().b;
    let (Ok(group_a), Ok(group_b)) = (groups.get(a), groups.get(b)) else {
        return;
    };

    // collect first, callbacks need the world mutably
    let matches: Vec<(Entity, Entity, CollisionCallback)> = rules
        .iter()
        .filter_map(|rule| {
            rule.match_and_order(a, b, group_a.name(), group_b.name())
                .map(|(first, second)| (first, second, rule.callback))
        })
        .collect();

    for (first, second, callback) in matches {
        debug!("collision rule hit {:?} x {:?}", first, second);
        callback(
            first,
            second,
            &mut CollisionContext {
                commands: &mut ctx.commands,
                collectibles: &mut ctx.collectibles,
                positions: &mut ctx.positions,
                scales: &mut ctx.scales,
                sprites: &ctx.sprites,
                progress: &mut ctx.progress,
                next_state: &mut ctx.next_state,
                rng: &mut ctx.rng,
                audio_cmds: &mut ctx.audio_cmds,
            },
        );
    }
}
