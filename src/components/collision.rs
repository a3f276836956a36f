//! Collision rules.
//!
//! A [`CollisionRule`] entity pairs two [`Group`](super::group::Group) names
//! with a callback. When the collision observer sees two colliding entities
//! whose groups match a rule, it calls the callback with the entities ordered
//! as `(group_a, group_b)` and a [`CollisionContext`] for touching the world.

use bevy_ecs::prelude::*;

use crate::components::collectible::Collectible;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::resources::gamestate::NextGameState;
use crate::resources::progress::LevelProgress;
use crate::resources::rng::GameRng;

/// World access handed to collision callbacks.
pub struct CollisionContext<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub collectibles: &'a mut Query<'w, 's, &'static mut Collectible>,
    pub positions: &'a mut Query<'w, 's, &'static mut MapPosition>,
    pub scales: &'a mut Query<'w, 's, &'static mut Scale>,
    pub sprites: &'a Query<'w, 's, &'static Sprite>,
    pub progress: &'a mut ResMut<'w, LevelProgress>,
    pub next_state: &'a mut ResMut<'w, NextGameState>,
    pub rng: &'a mut ResMut<'w, GameRng>,
    pub audio_cmds: &'a mut MessageWriter<'w, AudioCmd>,
}

/// Callback run for a matching pair, entities ordered as the rule's groups.
pub type CollisionCallback =
    for<'a, 'w, 's> fn(a: Entity, b: Entity, ctx: &mut CollisionContext<'a, 'w, 's>);

#[derive(Component)]
pub struct CollisionRule {
    pub group_a: String,
    pub group_b: String,
    pub callback: CollisionCallback,
}

impl CollisionRule {
    pub fn new(
        group_a: impl Into<String>,
        group_b: impl Into<String>,
        callback: CollisionCallback,
    ) -> Self {
        Self {
            group_a: group_a.into(),
            group_b: group_b.into(),
            callback,
        }
    }

    /// If the rule matches the pair, return the entities ordered as
    /// `(group_a, group_b)`.
    pub fn match_and_order(
        &self,
        ent_a: Entity,
        ent_b: Entity,
        group_a: &str,
        group_b: &str,
    ) -> Option<(Entity, Entity)> {
        if self.group_a == group_a && self.group_b == group_b {
            Some((ent_a, ent_b))
        } else if self.group_a == group_b && self.group_b == group_a {
            Some((ent_b, ent_a))
        } else {
            None
        }
    }
}
