//! Engine tick integration tests for movement, TTL, collision, timers and
//! other systems.

use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::ScheduleSystem;
use raylib::prelude::Vector2;

use gloopdrop::components::boxcollider::BoxCollider;
use gloopdrop::components::collision::{CollisionContext, CollisionRule};
use gloopdrop::components::group::Group;
use gloopdrop::components::mapposition::MapPosition;
use gloopdrop::components::rigidbody::RigidBody;
use gloopdrop::components::stuckto::StuckTo;
use gloopdrop::components::timer::{Timer, TimerRepeat, Timers};
use gloopdrop::components::tint::Tint;
use gloopdrop::components::ttl::Ttl;
use gloopdrop::components::tween::{Easing, LoopMode, TweenAlpha, TweenPosition};
use gloopdrop::events::audio::AudioCmd;
use gloopdrop::events::collision::CollisionEvent;
use gloopdrop::events::timer::TimerEvent;
use gloopdrop::resources::gamestate::NextGameState;
use gloopdrop::resources::progress::LevelProgress;
use gloopdrop::resources::rng::GameRng;
use gloopdrop::resources::screensize::ScreenSize;
use gloopdrop::resources::worldtime::WorldTime;
use gloopdrop::systems::collision::{collision_detector, collision_observer};
use gloopdrop::systems::movement::movement_system;
use gloopdrop::systems::stuckto::stuck_to_entity_system;
use gloopdrop::systems::time::{update_timers, update_world_time};
use gloopdrop::systems::ttl::ttl_system;
use gloopdrop::systems::tween::{tween_alpha_system, tween_mapposition_system};

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(ScreenSize { w: 1336, h: 1024 });
    world.init_resource::<Messages<AudioCmd>>();
    world
}

fn tick<M>(world: &mut World, systems: impl IntoScheduleConfigs<ScheduleSystem, M>) {
    let mut schedule = Schedule::default();
    schedule.add_systems(systems);
    schedule.run(world);
}

// =============================================================================
// Movement and TTL
// =============================================================================

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world(0.0);
    let mut rb = RigidBody::new();
    rb.velocity = Vector2 { x: 10.0, y: -20.0 };

    let entity = world.spawn((MapPosition::new(0.0, 0.0), rb)).id();

    update_world_time(&mut world, 0.5);
    tick(&mut world, movement_system);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 5.0));
    assert!(approx_eq(pos.pos.y, -10.0));
}

#[test]
fn movement_applies_friction_after_moving() {
    let mut world = make_world(0.0);
    let mut rb = RigidBody::new().with_friction(0.5);
    rb.velocity = Vector2 { x: 0.0, y: -40.0 };

    let entity = world.spawn((MapPosition::new(0.0, 100.0), rb)).id();

    update_world_time(&mut world, 1.0);
    tick(&mut world, movement_system);

    assert!(approx_eq(world.get::<MapPosition>(entity).unwrap().pos.y, 60.0));
    assert!(approx_eq(world.get::<RigidBody>(entity).unwrap().velocity.y, -20.0));
}

#[test]
fn time_scale_zero_freezes_movement() {
    let mut world = make_world(0.0);
    world.resource_mut::<WorldTime>().time_scale = 0.0;
    let mut rb = RigidBody::new();
    rb.velocity = Vector2 { x: 10.0, y: 0.0 };
    let entity = world.spawn((MapPosition::new(0.0, 0.0), rb)).id();

    update_world_time(&mut world, 1.0);
    tick(&mut world, movement_system);

    assert!(approx_eq(world.get::<MapPosition>(entity).unwrap().pos.x, 0.0));
    assert_eq!(world.resource::<WorldTime>().frame_count, 1);
}

#[test]
fn ttl_decrements_and_despawns() {
    let mut world = make_world(0.6);
    let entity = world.spawn(Ttl::new(1.0)).id();

    tick(&mut world, ttl_system);
    assert!(approx_eq(world.get::<Ttl>(entity).unwrap().remaining, 0.4));

    tick(&mut world, ttl_system);
    assert!(world.get_entity(entity).is_err());
}

#[test]
fn ttl_despawns_children_too() {
    let mut world = make_world(1.0);
    let parent = world.spawn(Ttl::new(0.5)).id();
    let child = world.spawn(ChildOf(parent)).id();

    tick(&mut world, ttl_system);

    assert!(world.get_entity(parent).is_err());
    assert!(world.get_entity(child).is_err());
}

// =============================================================================
// Collision
// =============================================================================

fn mark_b_with_ttl(_a: Entity, b: Entity, ctx: &mut CollisionContext) {
    ctx.commands.entity(b).insert(Ttl::new(1.5));
}

fn collision_world() -> World {
    let mut world = make_world(0.0);
    world.insert_resource(LevelProgress::default());
    world.insert_resource(NextGameState::new());
    world.insert_resource(GameRng::new(Some(1)));
    world
}

#[test]
fn collision_pipeline_routes_to_rule_callback_in_rule_order() {
    let mut world = collision_world();

    let player = world
        .spawn((
            Group("player"),
            MapPosition::new(0.0, 0.0),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();
    let drop = world
        .spawn((
            Group("collectible"),
            MapPosition::new(5.0, 0.0),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();
    // groups listed the other way round than spawn order
    world.spawn(CollisionRule::new("player", "collectible", mark_b_with_ttl));

    let saw_collision = Arc::new(Mutex::new(false));
    let saw_collision_clone = saw_collision.clone();
    world.add_observer(move |_trigger: On<CollisionEvent>| {
        *saw_collision_clone.lock().unwrap() = true;
    });
    world.add_observer(collision_observer);
    world.flush();

    tick(&mut world, collision_detector);

    assert!(*saw_collision.lock().unwrap());
    assert!(world.get::<Ttl>(drop).is_some());
    assert!(world.get::<Ttl>(player).is_none());
}

#[test]
fn separated_colliders_do_not_collide() {
    let mut world = collision_world();
    world.spawn((
        Group("player"),
        MapPosition::new(0.0, 0.0),
        BoxCollider::new(10.0, 10.0),
    ));
    let drop = world
        .spawn((
            Group("collectible"),
            MapPosition::new(10.0, 0.0),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();
    world.spawn(CollisionRule::new("player", "collectible", mark_b_with_ttl));
    world.add_observer(collision_observer);
    world.flush();

    tick(&mut world, collision_detector);

    assert!(world.get::<Ttl>(drop).is_none());
}

#[test]
fn unmatched_groups_are_ignored() {
    let mut world = collision_world();
    let a = world
        .spawn((
            Group("player"),
            MapPosition::new(0.0, 0.0),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();
    let b = world
        .spawn((
            Group("ground"),
            MapPosition::new(0.0, 5.0),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();
    world.spawn(CollisionRule::new("player", "collectible", mark_b_with_ttl));
    world.add_observer(collision_observer);
    world.flush();

    tick(&mut world, collision_detector);

    assert!(world.get::<Ttl>(a).is_none());
    assert!(world.get::<Ttl>(b).is_none());
}

// =============================================================================
// StuckTo
// =============================================================================

#[test]
fn stuckto_applies_offset() {
    let mut world = make_world(0.0);
    let target = world.spawn(MapPosition::new(100.0, 200.0)).id();
    let follower = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            StuckTo::new(target).with_offset(Vector2 { x: 0.0, y: -2.0 }),
        ))
        .id();

    tick(&mut world, stuck_to_entity_system);

    let pos = world.get::<MapPosition>(follower).unwrap();
    assert!(approx_eq(pos.pos.x, 100.0));
    assert!(approx_eq(pos.pos.y, 198.0));
}

#[test]
fn stuckto_does_not_move_if_target_missing() {
    let mut world = make_world(0.0);
    let target = world.spawn(MapPosition::new(100.0, 200.0)).id();
    let follower = world
        .spawn((MapPosition::new(5.0, 5.0), StuckTo::new(target)))
        .id();
    world.despawn(target);

    tick(&mut world, stuck_to_entity_system);

    let pos = world.get::<MapPosition>(follower).unwrap();
    assert!(approx_eq(pos.pos.x, 5.0));
    assert!(approx_eq(pos.pos.y, 5.0));
}

// =============================================================================
// Tweens
// =============================================================================

#[test]
fn tween_position_interpolates_linearly() {
    let mut world = make_world(0.5);
    let tween = TweenPosition::new(
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 100.0, y: 200.0 },
        1.0,
    );
    let entity = world.spawn((MapPosition::new(0.0, 0.0), tween)).id();

    tick(&mut world, tween_mapposition_system);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 50.0));
    assert!(approx_eq(pos.pos.y, 100.0));
}

#[test]
fn finished_once_tween_is_removed_at_its_end() {
    let mut world = make_world(1.0);
    let tween = TweenPosition::new(
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 100.0, y: 0.0 },
        0.5,
    )
    .with_loop_mode(LoopMode::Once);
    let entity = world.spawn((MapPosition::new(0.0, 0.0), tween)).id();

    tick(&mut world, tween_mapposition_system);

    assert!(approx_eq(world.get::<MapPosition>(entity).unwrap().pos.x, 100.0));
    assert!(world.get::<TweenPosition>(entity).is_none());
}

#[test]
fn looping_tween_keeps_playing() {
    let mut world = make_world(0.6);
    let tween = TweenPosition::new(
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 100.0, y: 0.0 },
        0.5,
    )
    .with_loop_mode(LoopMode::Loop);
    let entity = world.spawn((MapPosition::new(0.0, 0.0), tween)).id();

    tick(&mut world, tween_mapposition_system);

    let tween = world.get::<TweenPosition>(entity).unwrap();
    assert!(tween.clock.playing);
    assert!(tween.clock.time < 0.5);
}

#[test]
fn eased_rise_and_fade_run_together() {
    let mut world = make_world(0.5);
    let entity = world
        .spawn((
            MapPosition::new(0.0, 100.0),
            TweenPosition::new(Vector2 { x: 0.0, y: 100.0 }, Vector2 { x: 0.0, y: 0.0 }, 1.0)
                .with_easing(Easing::QuadOut),
            Tint::with_alpha(1.0),
            TweenAlpha::fade_out(1.0),
        ))
        .id();

    tick(&mut world, (tween_mapposition_system, tween_alpha_system));

    // QuadOut is three quarters of the way at half time
    assert!(approx_eq(world.get::<MapPosition>(entity).unwrap().pos.y, 25.0));
    let alpha = world.get::<Tint>(entity).unwrap().alpha();
    assert!((alpha - 0.5).abs() < 0.01);
}

// =============================================================================
// Timers
// =============================================================================

fn record_timer_events(world: &mut World) -> Arc<Mutex<Vec<(Entity, String)>>> {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let fired_clone = fired.clone();
    world.add_observer(move |trigger: On<TimerEvent>| {
        let event = trigger.event();
        fired_clone
            .lock()
            .unwrap()
            .push((event.entity, event.key.clone()));
    });
    world.flush();
    fired
}

#[test]
fn timer_fires_event_with_entity_and_key() {
    let mut world = make_world(1.0);
    let entity = world.spawn(Timers::with(Timer::once("audio_on", 0.5))).id();
    let fired = record_timer_events(&mut world);

    tick(&mut world, update_timers);

    assert_eq!(*fired.lock().unwrap(), vec![(entity, "audio_on".to_string())]);
}

#[test]
fn repeating_timer_fires_exactly_n_times() {
    let mut world = make_world(0.3);
    world.spawn(Timers::with(Timer::new("gloop", 0.5, TimerRepeat::Times(4))));
    let fired = record_timer_events(&mut world);

    let mut schedule = Schedule::default();
    schedule.add_systems(update_timers);
    for _ in 0..20 {
        schedule.run(&mut world);
    }

    assert_eq!(fired.lock().unwrap().len(), 4);
}

#[test]
fn cancelled_timer_stops_firing() {
    let mut world = make_world(0.5);
    let entity = world
        .spawn(Timers::with(Timer::new("gloop", 0.5, TimerRepeat::Forever)))
        .id();
    let fired = record_timer_events(&mut world);

    let mut schedule = Schedule::default();
    schedule.add_systems(update_timers);
    schedule.run(&mut world);
    world.get_mut::<Timers>(entity).unwrap().cancel("gloop");
    schedule.run(&mut world);
    schedule.run(&mut world);

    assert_eq!(fired.lock().unwrap().len(), 1);
}
