//! gloopdrop main entry point.
//!
//! A small arcade game: drag the blob along the ground and catch the gloop
//! drops before they splat. Built with:
//! - **raylib** for windowing, graphics, input and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Read the CLI and `config.ini`, open the window and the render target
//! 2. Load textures, atlases and fonts; a missing asset is fatal
//! 3. Insert resources, register the state enter systems and observers
//! 4. Enter `Setup`, which builds the scene and goes `Idle`
//! 5. Run the schedule every frame until the window closes or the game quits
//! 6. Stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use gloopdrop::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use gloopdrop::events::switchdebug::switch_debug_observer;
use gloopdrop::game;
use gloopdrop::game::assets::load_assets;
use gloopdrop::resources::audio::{setup_audio, shutdown_audio};
use gloopdrop::resources::debugmode::DebugMode;
use gloopdrop::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use gloopdrop::resources::gamestate::{GameState, GameStates, NextGameState};
use gloopdrop::resources::input::{DragState, InputState, PointerState};
use gloopdrop::resources::layout::SceneLayout;
use gloopdrop::resources::progress::LevelProgress;
use gloopdrop::resources::rendertarget::RenderTarget;
use gloopdrop::resources::rng::GameRng;
use gloopdrop::resources::screensize::ScreenSize;
use gloopdrop::resources::systemsstore::SystemsStore;
use gloopdrop::resources::windowsize::WindowSize;
use gloopdrop::resources::worldtime::WorldTime;
use gloopdrop::systems::animation::animation;
use gloopdrop::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use gloopdrop::systems::collision::{collision_detector, collision_observer};
use gloopdrop::systems::dynamictext_size::dynamictext_size_system;
use gloopdrop::systems::gameplay::{
    drop_motion_system, fit_player_collider_system, ground_lock_system, scene_timer_observer,
    touch_observer,
};
use gloopdrop::systems::gamestate::{check_pending_state, state_is_playing};
use gloopdrop::systems::input::update_input_state;
use gloopdrop::systems::movement::movement_system;
use gloopdrop::systems::particleemitter::particle_emitter_system;
use gloopdrop::systems::progressbinding::update_progress_binding_system;
use gloopdrop::systems::render::render_system;
use gloopdrop::systems::scroller::scroller_system;
use gloopdrop::systems::stuckto::stuck_to_entity_system;
use gloopdrop::systems::time::{update_timers, update_world_time};
use gloopdrop::systems::ttl::ttl_system;
use gloopdrop::systems::tween::{tween_alpha_system, tween_mapposition_system};

/// gloopdrop: catch the falling gloop
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Seed the random number generator for a reproducible run.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Start with the debug overlay on.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Config ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // --------------- Raylib window ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("gloopdrop");
    if config.vsync {
        builder.vsync();
    }
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled as an input action
    rl.set_exit_key(None);

    // --------------- Render target for fixed-resolution rendering ---------------
    let render_target = match RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height)
    {
        Ok(target) => target,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- Assets ---------------
    let assets = match load_assets(&mut rl, &thread) {
        Ok(assets) => assets,
        Err(e) => {
            error!("Asset loading failed: {}", e);
            std::process::exit(1);
        }
    };
    let layout = SceneLayout::new(
        config.render_width as f32,
        config.render_height as f32,
        assets.art.foreground.y,
        assets.art.gloop.x,
        assets.art.gloop.y,
    );

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    // ScreenSize is the game's internal render resolution
    world.insert_resource(ScreenSize {
        w: config.render_width as i32,
        h: config.render_height as i32,
    });
    // WindowSize is the actual window dimensions (updated each frame)
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(DragState::default());
    world.insert_resource(LevelProgress::default());
    world.insert_resource(GameRng::new(cli.seed));
    world.insert_resource(layout);
    world.insert_resource(assets.art);
    world.insert_resource(assets.textures);
    world.insert_resource(assets.animations);
    world.insert_non_send_resource(assets.fonts);
    world.insert_non_send_resource(render_target);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    // Init audio; the enter systems write AudioCmd messages, so it must go first
    setup_audio(&mut world);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn(Observer::new(observe_gamestate_change_event));

    // State enter systems, run by name from the game state observer
    let mut systems_store = SystemsStore::new();
    systems_store.insert("setup", world.register_system(game::setup));
    systems_store.insert("enter_idle", world.register_system(game::enter_idle));
    systems_store.insert("enter_spawning", world.register_system(game::enter_spawning));
    systems_store.insert("enter_cleared", world.register_system(game::enter_cleared));
    systems_store.insert("enter_game_over", world.register_system(game::enter_game_over));
    systems_store.insert("quit_game", world.register_system(game::quit_game));
    world.insert_resource(systems_store);

    world.flush();

    world.spawn(Observer::new(collision_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(scene_timer_observer));
    world.spawn(Observer::new(touch_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    // Set next GameState to Setup and enter it right away
    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // Then, pull audio thread messages and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain()
            .after(check_pending_state),
    );
    update.add_systems(update_timers.after(check_pending_state));
    update.add_systems(tween_mapposition_system);
    update.add_systems(tween_alpha_system);
    update.add_systems(drop_motion_system.run_if(state_is_playing).after(update_timers));
    update.add_systems(ground_lock_system.after(tween_mapposition_system));
    update.add_systems(scroller_system);
    update.add_systems(particle_emitter_system.after(scroller_system).before(movement_system)); // Before movement so particles move on spawn frame
    update.add_systems(movement_system);
    update.add_systems(ttl_system.after(movement_system));
    update.add_systems(
        collision_detector
            .after(drop_motion_system)
            .after(ground_lock_system),
    );
    update.add_systems(stuck_to_entity_system.after(collision_detector));
    update.add_systems(animation.after(collision_detector));
    update.add_systems(fit_player_collider_system.after(animation));
    update.add_systems(update_progress_binding_system.after(collision_detector));
    update.add_systems(dynamictext_size_system.after(update_progress_binding_system));
    update.add_systems(
        render_system
            .after(stuck_to_entity_system)
            .after(animation)
            .after(dynamictext_size_system)
            .after(fit_player_collider_system)
            .after(ttl_system),
    );

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        shutdown_audio(&mut world);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    info!("Entering main loop");
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
    shutdown_audio(&mut world);
}
