//! The gloopdrop scene.
//!
//! Each [`GameStates`] value has an enter system here, registered in
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) under the
//! name returned by [`enter_hook`](crate::events::gamestate::enter_hook):
//!
//! - `setup` builds the scene once the assets are in
//! - `enter_idle` waits for a tap
//! - `enter_spawning` starts a level and its spawn timer
//! - `enter_cleared` waits a moment before the next level
//! - `enter_game_over` stops everything and clears the field
//! - `quit_game` stops the music
//!
//! Level timers live on the [`SceneRoot`] entity and are handled by
//! [`crate::systems::gameplay::scene_timer_observer`].

pub mod assets;
pub mod collectible;
pub mod flow;
pub mod player;
pub mod scene;

use bevy_ecs::prelude::*;
use log::info;

use crate::components::animation::Animation;
use crate::components::collectible::Collectible;
use crate::components::collision::CollisionRule;
use crate::components::mapposition::MapPosition;
use crate::components::markers::{MessageLabel, SceneRoot};
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::timer::{Timer, TimerRepeat, Timers};
use crate::events::audio::AudioCmd;
use crate::game::assets::{BUBBLES, MUSIC, SceneArt};
use crate::game::collectible::{COLLECTIBLE_GROUP, catch_drop, miss_drop, schedule_sweep};
use crate::game::player::PLAYER_GROUP;
use crate::game::scene::{GAME_OVER_MESSAGE, GROUND_GROUP, READY_MESSAGE, START_MESSAGE};
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::DragState;
use crate::resources::layout::SceneLayout;
use crate::resources::progress::{LEVEL_UP_DELAY, LevelProgress};
use crate::resources::rng::GameRng;

/// Repeating spawn timer of the current level.
pub const GLOOP_KEY: &str = "gloop";
/// Pause after a cleared level.
pub const NEXT_LEVEL_KEY: &str = "next_level";
/// Unmute and fade the music in.
pub const AUDIO_ON_KEY: &str = "audio_on";
/// Start the bubbling loop.
pub const BUBBLES_KEY: &str = "bubbles";

const AUDIO_ON_DELAY: f32 = 1.0;
const BUBBLES_DELAY: f32 = 1.5;

/// Build the scene from the loaded art and go idle.
pub fn setup(
    mut commands: Commands,
    layout: Res<SceneLayout>,
    art: Res<SceneArt>,
    mut next_state: ResMut<NextGameState>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    scene::spawn_scenery(&mut commands, &layout, &art);
    player::spawn_player(&mut commands, &layout, &art);
    flow::spawn_gloop_flow(&mut commands, &layout, &art);

    commands.spawn(CollisionRule::new(PLAYER_GROUP, COLLECTIBLE_GROUP, catch_drop));
    commands.spawn(CollisionRule::new(COLLECTIBLE_GROUP, GROUND_GROUP, miss_drop));

    let mut timers = Timers::new();
    timers.start(Timer::once(AUDIO_ON_KEY, AUDIO_ON_DELAY));
    timers.start(Timer::once(BUBBLES_KEY, BUBBLES_DELAY));
    commands.spawn((SceneRoot, timers));

    for cmd in scene::scene_audio_cmds() {
        audio_cmd_writer.write(cmd);
    }

    next_state.set(GameStates::Idle);
    info!("Scene set up, {}x{} ground at y={}", layout.width, layout.height, layout.ground_y);
}

fn player_height(players: &Query<&Sprite, With<Player>>) -> f32 {
    players.iter().next().map_or(0.0, |s| s.height)
}

/// Ask for a tap, unless a message (like game over) is already up.
pub fn enter_idle(
    mut commands: Commands,
    labels: Query<Entity, With<MessageLabel>>,
    players: Query<&Sprite, With<Player>>,
    layout: Res<SceneLayout>,
) {
    if !labels.is_empty() {
        return;
    }
    let at = scene::message_anchor(&layout, player_height(&players));
    scene::show_message(&mut commands, None::<Entity>, START_MESSAGE, at);
}

/// Start the current level (level 1 for a new round) and its spawn timer.
pub fn enter_spawning(
    mut commands: Commands,
    labels: Query<Entity, With<MessageLabel>>,
    players: Query<(Entity, Option<&Animation>), With<Player>>,
    mut roots: Query<&mut Timers, With<SceneRoot>>,
    mut progress: ResMut<LevelProgress>,
    mut rng: ResMut<GameRng>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    scene::hide_message(&mut commands, labels.iter());

    for (entity, current) in players.iter() {
        player::walk(&mut commands, entity, current);
    }
    audio_cmd_writer.write(player::mumble(&mut rng));

    progress.start_level();
    for mut timers in roots.iter_mut() {
        timers.start(Timer::new(
            GLOOP_KEY,
            progress.drop_speed,
            TimerRepeat::Times(progress.number_of_drops),
        ));
    }
    info!(
        "Level {} started: {} drops, one every {:.3}s",
        progress.level, progress.number_of_drops, progress.drop_speed
    );
}

/// Every drop caught: show "Get Ready!" and schedule the next level.
pub fn enter_cleared(
    mut commands: Commands,
    labels: Query<Entity, With<MessageLabel>>,
    players: Query<&Sprite, With<Player>>,
    mut roots: Query<&mut Timers, With<SceneRoot>>,
    layout: Res<SceneLayout>,
    progress: Res<LevelProgress>,
) {
    let at = scene::message_anchor(&layout, player_height(&players));
    scene::show_message(&mut commands, labels.iter(), READY_MESSAGE, at);
    for mut timers in roots.iter_mut() {
        timers.start(Timer::once(NEXT_LEVEL_KEY, LEVEL_UP_DELAY));
    }
    info!("Level {} cleared, score {}", progress.level, progress.score);
}

/// A drop hit the ground: stop the round, sweep the field, reset the player
/// and go back to idle.
#[allow(clippy::too_many_arguments)]
pub fn enter_game_over(
    mut commands: Commands,
    labels: Query<Entity, With<MessageLabel>>,
    mut players: Query<(Entity, &MapPosition, &mut Sprite, Option<&Animation>), With<Player>>,
    drops: Query<(Entity, &Collectible)>,
    mut roots: Query<&mut Timers, With<SceneRoot>>,
    layout: Res<SceneLayout>,
    mut progress: ResMut<LevelProgress>,
    mut next_state: ResMut<NextGameState>,
    mut drag: ResMut<DragState>,
) {
    let height = players.iter().next().map_or(0.0, |(_, _, s, _)| s.height);
    let at = scene::message_anchor(&layout, height);
    scene::show_message(&mut commands, labels.iter(), GAME_OVER_MESSAGE, at);

    progress.end_game();
    for mut timers in roots.iter_mut() {
        timers.cancel(GLOOP_KEY);
        timers.cancel(NEXT_LEVEL_KEY);
    }

    schedule_sweep(
        &mut commands,
        drops.iter().map(|(e, c)| (e, c.number)).collect(),
    );

    for (entity, position, mut sprite, current) in players.iter_mut() {
        player::die(&mut commands, entity, current);
        player::move_to_center(&mut commands, entity, position.pos, &mut sprite, &layout);
    }
    drag.dragging = false;

    next_state.set(GameStates::Idle);
    info!("Game over at level {} with score {}", progress.level, progress.score);
}

pub fn quit_game(mut audio_cmd_writer: MessageWriter<AudioCmd>) {
    info!("Quitting");
    for id in [MUSIC, BUBBLES] {
        audio_cmd_writer.write(AudioCmd::StopMusic { id: id.into() });
    }
}
