//! Gloop drops.
//!
//! Spawning (with the serpentine x pattern and the number label), the two
//! collision outcomes and the clean-up after a game over.

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::{Color, Vector2};

use crate::components::boxcollider::BoxCollider;
use crate::components::collectible::{
    APPEAR_SECONDS, Collectible, CollectibleKind, CollectibleState, DropMotion, SPAWN_SCALE,
    SPLAT_SCALE,
};
use crate::components::collision::CollisionContext;
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::markers::ChompLabel;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::{Anchor, Sprite};
use crate::components::stuckto::StuckTo;
use crate::components::timer::{Timer, Timers};
use crate::components::tint::Tint;
use crate::components::ttl::Ttl;
use crate::components::tween::{Easing, TweenAlpha, TweenPosition};
use crate::components::zindex::{Layer, ZIndex};
use crate::events::audio::AudioCmd;
use crate::game::assets::{FONT_LABEL, FONT_TITLE, FX_COLLECT, FX_MISS, SceneArt};
use crate::resources::gamestate::GameStates;
use crate::resources::layout::SceneLayout;
use crate::resources::progress::{CatchOutcome, LevelProgress, modifier_range, serpentine_step};
use crate::resources::rng::GameRng;

pub const COLLECTIBLE_GROUP: &str = "collectible";

/// Timer key that removes a drop left over after a game over.
pub const POP_KEY: &str = "pop";
/// Timer key that starts the catch text fading out.
pub const FADE_OUT_KEY: &str = "fade_out";

/// Delay before the first leftover drop is removed.
const POP_DELAY: f32 = 1.0;
/// Extra delay for each following leftover drop.
const POP_STAGGER: f32 = 0.15;

const NUMBER_FONT_SIZE: f32 = 22.0;
/// Gap between the top of a drop and its number.
const NUMBER_GAP: f32 = 2.0;

const CHOMP_TEXT: &str = "gloop";
const CHOMP_FONT_SIZE: f32 = 22.0;
/// Max tilt of the catch text either way, radians.
const CHOMP_TILT: f32 = 0.15;
/// Catch text starts this far above the player's head.
const CHOMP_HEAD_GAP: f32 = 25.0;
const CHOMP_FADE_IN: f32 = 0.05;
const CHOMP_FADE_OUT: f32 = 0.45;
const CHOMP_RISE: f32 = 45.0;

/// Pick the x of the next drop and remember it for the one after.
pub fn next_drop_x(progress: &mut LevelProgress, layout: &SceneLayout, rng: &mut GameRng) -> f32 {
    let (min_x, max_x) = layout.drop_range();
    let random_x = rng.range_f32(min_x, max_x);
    let (low, high) = modifier_range(progress.level);
    let modifier = rng.range_f32(low, high);
    let x = serpentine_step(progress.prev_drop_location, random_x, modifier, min_x, max_x);
    progress.prev_drop_location = x;
    x
}

/// Spawn one falling drop with its number label. Returns the drop.
pub fn spawn_gloop(
    commands: &mut Commands,
    progress: &mut LevelProgress,
    layout: &SceneLayout,
    art: &SceneArt,
    rng: &mut GameRng,
) -> Entity {
    let x = next_drop_x(progress, layout, rng);
    let y = layout.spawn_y();
    let number = progress.take_drop_number();
    let kind = CollectibleKind::Gloop;

    let drop = commands
        .spawn((
            Collectible::new(kind, number),
            Group(COLLECTIBLE_GROUP),
            MapPosition::new(x, y),
            Sprite::whole(kind.tex_key(), art.gloop.x, art.gloop.y, Anchor::TopCenter),
            Scale::new(SPAWN_SCALE.x, SPAWN_SCALE.y),
            Tint::with_alpha(0.0),
            ZIndex::from(Layer::Collectible),
            BoxCollider::top_centered(art.gloop.x, art.gloop.y),
            DropMotion::new(y, layout.ground_y),
        ))
        .id();

    let offset = Vector2::new(0.0, -NUMBER_GAP);
    commands.spawn((
        ChildOf(drop),
        MapPosition::new(x + offset.x, y + offset.y),
        StuckTo::new(drop).with_offset(offset),
        DynamicText::new(number.to_string(), FONT_LABEL, NUMBER_FONT_SIZE, Color::YELLOW)
            .with_pivot(0.5, 1.0),
        Tint::with_alpha(0.0),
        TweenAlpha::fade_in(APPEAR_SECONDS),
        ZIndex::from(Layer::Collectible),
    ));

    debug!("gloop #{} spawned at x={:.1}", number, x);
    drop
}

/// Floating text shown over the player's head on a catch.
pub fn spawn_chomp_label(commands: &mut Commands, at: Vector2, rng: &mut GameRng) -> Entity {
    let tilt = rng.range_f32(-CHOMP_TILT, CHOMP_TILT);
    commands
        .spawn((
            ChompLabel,
            MapPosition::new(at.x, at.y),
            DynamicText::new(CHOMP_TEXT, FONT_TITLE, CHOMP_FONT_SIZE, Color::WHITE).with_pivot(0.5, 1.0),
            Rotation {
                degrees: tilt.to_degrees(),
            },
            Tint::with_alpha(0.0),
            TweenAlpha::fade_in(CHOMP_FADE_IN),
            Timers::with(Timer::once(FADE_OUT_KEY, CHOMP_FADE_IN)),
            ZIndex::from(Layer::Ui),
        ))
        .id()
}

/// Second half of the catch text: rise and fade, then go away.
pub fn fade_out_chomp_label(commands: &mut Commands, label: Entity, at: Vector2) {
    let to = Vector2::new(at.x, at.y - CHOMP_RISE);
    commands.entity(label).insert((
        TweenAlpha::fade_out(CHOMP_FADE_OUT),
        TweenPosition::new(at, to, CHOMP_FADE_OUT).with_easing(Easing::QuadOut),
        Ttl::new(CHOMP_FADE_OUT),
    ));
}

/// (`player`, `collectible`) contact.
pub fn catch_drop(player: Entity, drop: Entity, ctx: &mut CollisionContext) {
    if ctx.next_state.is_pending(&GameStates::GameOver) || !ctx.progress.in_progress {
        return;
    }
    let Ok(mut collectible) = ctx.collectibles.get_mut(drop) else {
        return;
    };
    if !collectible.resolve(CollectibleState::Collected) {
        return;
    }
    debug!("gloop #{} caught", collectible.number);

    ctx.audio_cmds.write(AudioCmd::PlayFx {
        id: FX_COLLECT.into(),
    });
    ctx.commands.entity(drop).try_despawn();

    if ctx.progress.record_catch() == CatchOutcome::LevelCleared {
        ctx.next_state.set(GameStates::Cleared);
    }

    if let (Ok(position), Ok(sprite)) = (ctx.positions.get(player), ctx.sprites.get(player)) {
        let head = Vector2::new(position.pos.x, position.pos.y - sprite.height - CHOMP_HEAD_GAP);
        spawn_chomp_label(&mut *ctx.commands, head, &mut **ctx.rng);
    }
}

/// (`collectible`, `ground`) contact.
pub fn miss_drop(drop: Entity, _ground: Entity, ctx: &mut CollisionContext) {
    let Ok(mut collectible) = ctx.collectibles.get_mut(drop) else {
        return;
    };
    if !collectible.resolve(CollectibleState::Missed) {
        return;
    }
    debug!("gloop #{} missed", collectible.number);

    ctx.audio_cmds.write(AudioCmd::PlayFx { id: FX_MISS.into() });
    ctx.commands.entity(drop).remove::<DropMotion>();

    let height = ctx.sprites.get(drop).map_or(0.0, |s| s.height);
    if let Ok(mut scale) = ctx.scales.get_mut(drop) {
        let drop_height = height * scale.scale.y;
        scale.scale = SPLAT_SCALE;
        if let Ok(mut position) = ctx.positions.get_mut(drop) {
            position.pos.y += drop_height / 1.5;
        }
    }

    ctx.next_state.set(GameStates::GameOver);
}

/// Freeze the leftover drops and remove them one after another, highest
/// number first. `drops` holds each drop and its number.
pub fn schedule_sweep(commands: &mut Commands, mut drops: Vec<(Entity, u32)>) {
    drops.sort_by(|a, b| b.1.cmp(&a.1));
    for (i, (drop, _)) in drops.into_iter().enumerate() {
        commands
            .entity(drop)
            .remove::<(DropMotion, BoxCollider)>()
            .insert(Timers::with(Timer::once(POP_KEY, pop_delay(i))));
    }
}

/// Delay before the `index`-th leftover drop is removed.
pub fn pop_delay(index: usize) -> f32 {
    POP_DELAY + POP_STAGGER * index as f32
}
