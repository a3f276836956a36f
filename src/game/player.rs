//! The blob.
//!
//! One player entity stands on the ground line, pivoted at its feet. It walks
//! while a level is played, dies on game over and is dragged left and right
//! by touch.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::{Animation, AnimationRepeat};
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Facing, GroundLock, Player};
use crate::components::sprite::{Anchor, Sprite};
use crate::components::tween::TweenPosition;
use crate::components::zindex::{Layer, ZIndex};
use crate::events::audio::AudioCmd;
use crate::game::assets::{ANIM_DIE, ANIM_WALK, ATLAS_BLOB, FX_MUMBLES, SceneArt};
use crate::resources::layout::SceneLayout;
use crate::resources::rng::GameRng;

pub const PLAYER_GROUP: &str = "player";
pub const WALK_KEY: &str = "walk";
pub const DIE_KEY: &str = "die";

/// Divisor turning the distance back to center into a move duration.
const RESET_SPEED: f32 = 1.5 * 2.0;

pub fn spawn_player(commands: &mut Commands, layout: &SceneLayout, art: &SceneArt) -> Entity {
    let frame = art.player_frame;
    commands
        .spawn((
            Player,
            Group(PLAYER_GROUP),
            MapPosition::new(layout.center_x(), layout.ground_y),
            GroundLock { y: layout.ground_y },
            Sprite::from_frame(ATLAS_BLOB, &frame, Anchor::BottomCenter),
            BoxCollider::bottom_centered(frame.w, frame.h),
            ZIndex::from(Layer::Player),
        ))
        .id()
}

fn looping(key: &str, animation_key: &str) -> Animation {
    Animation::new(key, animation_key)
        .with_repeat(AnimationRepeat::Forever)
        .with_resize(true)
        .with_restore(true)
}

/// Start walking unless already walking. Replaces the die animation.
pub fn walk(commands: &mut Commands, player: Entity, current: Option<&Animation>) {
    if Animation::should_start(current, WALK_KEY) {
        commands.entity(player).insert(looping(WALK_KEY, ANIM_WALK));
    }
}

/// Start the die animation unless already dying. Replaces the walk.
pub fn die(commands: &mut Commands, player: Entity, current: Option<&Animation>) {
    if Animation::should_start(current, DIE_KEY) {
        commands.entity(player).insert(looping(DIE_KEY, ANIM_DIE));
    }
}

/// One of the mumble sounds, picked at random.
pub fn mumble(rng: &mut GameRng) -> AudioCmd {
    let id = FX_MUMBLES[rng.0.usize(..FX_MUMBLES.len())];
    AudioCmd::PlayFx { id: id.into() }
}

/// Seconds the walk back to center takes over `distance` pixels.
pub fn reset_duration(distance: f32) -> f32 {
    distance.abs() / RESET_SPEED / 255.0
}

/// Walk the player back to the center of the ground line, facing the way it
/// goes.
pub fn move_to_center(
    commands: &mut Commands,
    player: Entity,
    from: Vector2,
    sprite: &mut Sprite,
    layout: &SceneLayout,
) {
    let to = Vector2::new(layout.center_x(), layout.ground_y);
    sprite.flip_h = Facing::towards(from.x, to.x).flip_h();
    commands
        .entity(player)
        .insert(TweenPosition::new(from, to, reset_duration(to.x - from.x)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_takes_longer_from_further_away() {
        assert_eq!(reset_duration(0.0), 0.0);
        assert!((reset_duration(765.0) - 1.0).abs() < 1e-6);
        assert_eq!(reset_duration(-300.0), reset_duration(300.0));
    }

    #[test]
    fn mumble_picks_one_of_three() {
        let mut rng = GameRng::new(Some(3));
        for _ in 0..20 {
            match mumble(&mut rng) {
                AudioCmd::PlayFx { id } => assert!(FX_MUMBLES.contains(&id.as_str())),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn walk_does_not_restart_a_running_walk() {
        let mut world = World::new();
        let player = world.spawn(Player).id();
        let running = looping(WALK_KEY, ANIM_WALK);
        {
            let mut commands = world.commands();
            walk(&mut commands, player, Some(&running));
        }
        world.flush();
        assert!(world.get::<Animation>(player).is_none());

        {
            let mut commands = world.commands();
            walk(&mut commands, player, None);
        }
        world.flush();
        assert_eq!(world.get::<Animation>(player).unwrap().key, WALK_KEY);

        let current = world.get::<Animation>(player).cloned();
        {
            let mut commands = world.commands();
            die(&mut commands, player, current.as_ref());
        }
        world.flush();
        assert_eq!(world.get::<Animation>(player).unwrap().key, DIE_KEY);
    }
}
