//! Per-frame gameplay systems and observers.
//!
//! - [`drop_motion_system`] moves, stretches and fades falling drops
//! - [`ground_lock_system`] keeps the player on the ground line
//! - [`fit_player_collider_system`] keeps the catch box on the current frame
//! - [`scene_timer_observer`] reacts to the scene's keyed timers
//! - [`touch_observer`] starts rounds and drags the player

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::collectible::{Collectible, DropMotion};
use crate::components::mapposition::MapPosition;
use crate::components::markers::{ChompLabel, SceneRoot};
use crate::components::player::{Facing, GroundLock, Player};
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::events::audio::AudioCmd;
use crate::events::input::{TouchEvent, TouchPhase};
use crate::events::timer::TimerEvent;
use crate::game::assets::SceneArt;
use crate::game::collectible::{FADE_OUT_KEY, POP_KEY, fade_out_chomp_label, spawn_gloop};
use crate::game::scene::{audio_on_cmds, bubbles_cmd};
use crate::game::{AUDIO_ON_KEY, BUBBLES_KEY, GLOOP_KEY, NEXT_LEVEL_KEY};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::DragState;
use crate::resources::layout::SceneLayout;
use crate::resources::progress::LevelProgress;
use crate::resources::rng::GameRng;
use crate::resources::worldtime::WorldTime;

pub fn drop_motion_system(
    time: Res<WorldTime>,
    mut query: Query<(&mut DropMotion, &mut MapPosition, &mut Scale, &mut Tint)>,
) {
    for (mut motion, mut position, mut scale, mut tint) in query.iter_mut() {
        let pose = motion.advance(time.delta);
        position.pos.y = pose.y;
        scale.scale = pose.scale;
        tint.set_alpha(pose.alpha);
    }
}

pub fn ground_lock_system(mut query: Query<(&GroundLock, &mut MapPosition)>) {
    for (lock, mut position) in query.iter_mut() {
        if position.pos.y != lock.y {
            position.pos.y = lock.y;
        }
    }
}

/// Walk and die frames may differ in size; the catch box follows the frame
/// the animation last applied.
pub fn fit_player_collider_system(
    mut query: Query<(&Sprite, &mut BoxCollider), (With<Player>, Changed<Sprite>)>,
) {
    for (sprite, mut collider) in query.iter_mut() {
        let fitted = BoxCollider::bottom_centered(sprite.width, sprite.height);
        if *collider != fitted {
            *collider = fitted;
        }
    }
}

/// Level and presentation timers on the scene root, plus the per-entity
/// timers of drops and catch labels.
#[allow(clippy::too_many_arguments)]
pub fn scene_timer_observer(
    trigger: On<TimerEvent>,
    mut commands: Commands,
    roots: Query<(), With<SceneRoot>>,
    drops: Query<(), With<Collectible>>,
    chomps: Query<&MapPosition, With<ChompLabel>>,
    mut progress: ResMut<LevelProgress>,
    mut next_state: ResMut<NextGameState>,
    mut rng: ResMut<GameRng>,
    layout: Res<SceneLayout>,
    art: Res<SceneArt>,
    config: Option<Res<GameConfig>>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let TimerEvent { entity, key } = trigger.event();
    let entity = *entity;

    if roots.contains(entity) {
        match key.as_str() {
            GLOOP_KEY => {
                spawn_gloop(&mut commands, &mut progress, &layout, &art, &mut rng);
            }
            NEXT_LEVEL_KEY => {
                progress.advance_level();
                next_state.set(GameStates::Spawning);
            }
            AUDIO_ON_KEY => {
                let volume = config.map_or(GameConfig::new().music_volume, |c| c.music_volume);
                for cmd in audio_on_cmds(volume) {
                    audio_cmd_writer.write(cmd);
                }
            }
            BUBBLES_KEY => {
                audio_cmd_writer.write(bubbles_cmd());
            }
            other => debug!("unhandled scene timer '{}'", other),
        }
        return;
    }

    if key == POP_KEY && drops.contains(entity) {
        commands.entity(entity).try_despawn();
    } else if key == FADE_OUT_KEY {
        if let Ok(position) = chomps.get(entity) {
            fade_out_chomp_label(&mut commands, entity, position.pos);
        }
    }
}

/// Taps start a round; while one is running, a press on the player drags it
/// along the ground.
pub fn touch_observer(
    trigger: On<TouchEvent>,
    state: Res<GameState>,
    progress: Res<LevelProgress>,
    layout: Res<SceneLayout>,
    mut next_state: ResMut<NextGameState>,
    mut drag: ResMut<DragState>,
    mut players: Query<(&mut MapPosition, &mut Sprite, &BoxCollider), With<Player>>,
) {
    let TouchEvent { phase, pos } = *trigger.event();
    match phase {
        TouchPhase::Down => {
            if !progress.in_progress {
                if state.get().accepts_start() {
                    info!("Tap, starting a new round");
                    next_state.set(GameStates::Spawning);
                }
            } else if let Ok((position, _, collider)) = players.single() {
                if collider.contains_point(position.pos, pos) {
                    drag.dragging = true;
                }
            }
        }
        TouchPhase::Moved => {
            if !drag.dragging {
                return;
            }
            let Ok((mut position, mut sprite, _)) = players.single_mut() else {
                return;
            };
            let to = Vector2::new(pos.x.clamp(0.0, layout.width), position.pos.y);
            let from = drag.last_position.unwrap_or(to);
            sprite.flip_h = Facing::towards(from.x, to.x).flip_h();
            position.pos = to;
            drag.last_position = Some(to);
        }
        TouchPhase::Up | TouchPhase::Cancelled => {
            drag.dragging = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::collectible::{DropStage, SPAWN_SCALE};
    use crate::components::sprite::Anchor;

    #[test]
    fn drops_follow_their_motion() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.125,
            ..Default::default()
        });
        let drop = world
            .spawn((
                DropMotion::new(100.0, 500.0),
                MapPosition::new(10.0, 100.0),
                Scale::new(SPAWN_SCALE.x, SPAWN_SCALE.y),
                Tint::with_alpha(0.0),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(drop_motion_system);
        schedule.run(&mut world);

        let tint = world.get::<Tint>(drop).unwrap();
        assert!((tint.alpha() - 0.5).abs() < 0.01);
        assert_eq!(world.get::<MapPosition>(drop).unwrap().pos.x, 10.0);

        world.resource_mut::<WorldTime>().delta = 2.0;
        schedule.run(&mut world);
        assert_eq!(world.get::<DropMotion>(drop).unwrap().stage, DropStage::Fall);
        assert!(world.get::<MapPosition>(drop).unwrap().pos.y > 100.0);
    }

    #[test]
    fn ground_lock_pins_y() {
        let mut world = World::new();
        let player = world
            .spawn((GroundLock { y: 800.0 }, MapPosition::new(300.0, 650.0)))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(ground_lock_system);
        schedule.run(&mut world);
        assert_eq!(world.get::<MapPosition>(player).unwrap().pos, Vector2::new(300.0, 800.0));
    }

    fn touch_world(in_progress: bool, state: GameStates) -> (World, Entity) {
        let mut world = World::new();
        let mut game_state = GameState::new();
        game_state.set(state);
        world.insert_resource(game_state);
        let mut progress = LevelProgress::default();
        if in_progress {
            progress.start_level();
        }
        world.insert_resource(progress);
        world.insert_resource(SceneLayout::new(1336.0, 1024.0, 200.0, 60.0, 80.0));
        world.insert_resource(NextGameState::new());
        world.insert_resource(DragState::default());
        let player = world
            .spawn((
                Player,
                MapPosition::new(668.0, 824.0),
                GroundLock { y: 824.0 },
                Sprite::whole("blob", 100.0, 100.0, Anchor::BottomCenter),
                BoxCollider::bottom_centered(100.0, 100.0),
            ))
            .id();
        world.add_observer(touch_observer);
        world.flush();
        (world, player)
    }

    fn touch(world: &mut World, phase: TouchPhase, x: f32, y: f32) {
        world.trigger(TouchEvent {
            phase,
            pos: Vector2::new(x, y),
        });
        world.flush();
    }

    #[test]
    fn dragging_the_player_moves_it_along_the_ground() {
        let (mut world, player) = touch_world(true, GameStates::Spawning);

        touch(&mut world, TouchPhase::Down, 668.0, 780.0);
        assert!(world.resource::<DragState>().dragging);

        touch(&mut world, TouchPhase::Moved, 700.0, 100.0);
        assert!(!world.get::<Sprite>(player).unwrap().flip_h);
        touch(&mut world, TouchPhase::Moved, 500.0, 100.0);
        assert_eq!(world.get::<MapPosition>(player).unwrap().pos, Vector2::new(500.0, 824.0));
        assert!(world.get::<Sprite>(player).unwrap().flip_h);
        assert_eq!(
            world.resource::<DragState>().last_position,
            Some(Vector2::new(500.0, 824.0))
        );

        touch(&mut world, TouchPhase::Moved, 2000.0, 100.0);
        assert_eq!(world.get::<MapPosition>(player).unwrap().pos.x, 1336.0);
        assert!(!world.get::<Sprite>(player).unwrap().flip_h);

        touch(&mut world, TouchPhase::Up, 2000.0, 100.0);
        assert!(!world.resource::<DragState>().dragging);
        touch(&mut world, TouchPhase::Moved, 100.0, 100.0);
        assert_eq!(world.get::<MapPosition>(player).unwrap().pos.x, 1336.0);
        assert!(!world.resource::<NextGameState>().is_pending(&GameStates::Spawning));
    }

    #[test]
    fn press_outside_the_player_does_not_drag() {
        let (mut world, player) = touch_world(true, GameStates::Spawning);

        touch(&mut world, TouchPhase::Down, 100.0, 100.0);
        assert!(!world.resource::<DragState>().dragging);
        touch(&mut world, TouchPhase::Moved, 300.0, 100.0);
        assert_eq!(world.get::<MapPosition>(player).unwrap().pos.x, 668.0);
    }

    #[test]
    fn cancel_ends_a_drag() {
        let (mut world, _) = touch_world(true, GameStates::Spawning);
        touch(&mut world, TouchPhase::Down, 668.0, 780.0);
        touch(&mut world, TouchPhase::Cancelled, 668.0, 780.0);
        assert!(!world.resource::<DragState>().dragging);
    }

    #[test]
    fn tap_starts_a_round_only_when_idle_or_over() {
        let (mut world, _) = touch_world(false, GameStates::Idle);
        touch(&mut world, TouchPhase::Down, 10.0, 10.0);
        assert!(world.resource::<NextGameState>().is_pending(&GameStates::Spawning));
        assert!(!world.resource::<DragState>().dragging);

        let (mut world, _) = touch_world(false, GameStates::Setup);
        touch(&mut world, TouchPhase::Down, 10.0, 10.0);
        assert!(!world.resource::<NextGameState>().is_pending(&GameStates::Spawning));
    }

    #[test]
    fn catch_box_follows_the_animated_frame() {
        let (mut world, player) = touch_world(true, GameStates::Spawning);
        let mut schedule = Schedule::default();
        schedule.add_systems(fit_player_collider_system);

        {
            let mut sprite = world.get_mut::<Sprite>(player).unwrap();
            sprite.width = 130.0;
            sprite.height = 90.0;
        }
        schedule.run(&mut world);

        assert_eq!(
            *world.get::<BoxCollider>(player).unwrap(),
            BoxCollider::bottom_centered(130.0, 90.0)
        );
    }
}
