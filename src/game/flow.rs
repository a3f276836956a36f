//! Gloop flow: the river of goo along the bottom of the screen.
//!
//! A strip of `flow_1` tiles scrolls left forever just under the ground and
//! each tile bubbles from its top edge.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::particleemitter::{EmitterShape, ParticleEmitter, TtlSpec};
use crate::components::rigidbody::RigidBody;
use crate::components::scroller::ScrollingTile;
use crate::components::sprite::{Anchor, Sprite};
use crate::components::zindex::{Layer, ZIndex};
use crate::game::assets::{SceneArt, TEX_BUBBLE, TEX_FLOW};
use crate::resources::layout::SceneLayout;

/// Tiles side by side in the strip.
pub const FLOW_BLOCKS: u32 = 3;
/// Seconds for a tile to travel one tile width.
pub const FLOW_CYCLE_SECONDS: f32 = 30.0;
/// How far the strip's bottom edge hangs below the bottom of the screen.
pub const FLOW_DROP: f32 = 60.0;

/// Top-left x and y of tile `index`.
pub fn tile_origin(index: u32, layout: &SceneLayout, flow_size: Vector2) -> Vector2 {
    Vector2::new(
        index as f32 * flow_size.x,
        layout.height + FLOW_DROP - flow_size.y,
    )
}

/// Spawn the bubble template and the scrolling tiles. Returns the tiles.
pub fn spawn_gloop_flow(commands: &mut Commands, layout: &SceneLayout, art: &SceneArt) -> Vec<Entity> {
    // no MapPosition: never drawn itself, only cloned
    let bubble = commands
        .spawn((
            Sprite::whole(TEX_BUBBLE, art.bubble.x, art.bubble.y, Anchor::TopCenter),
            ZIndex::from(Layer::Foreground),
            RigidBody::new(),
        ))
        .id();

    (0..FLOW_BLOCKS)
        .map(|i| {
            let origin = tile_origin(i, layout, art.flow);
            commands
                .spawn((
                    MapPosition::new(origin.x, origin.y),
                    Sprite::whole(TEX_FLOW, art.flow.x, art.flow.y, Anchor::TopLeft),
                    ZIndex::from(Layer::Foreground),
                    ScrollingTile::new(origin.x, art.flow.x, FLOW_CYCLE_SECONDS),
                    ParticleEmitter {
                        templates: vec![bubble],
                        shape: EmitterShape::Rect {
                            width: art.flow.x,
                            height: art.flow.y * 0.25,
                        },
                        offset: Vector2::new(art.flow.x * 0.5, art.flow.y * 0.25),
                        emissions_per_second: 4.0,
                        arc_degrees: (-15.0, 15.0),
                        speed_range: (20.0, 60.0),
                        ttl: TtlSpec::Range { min: 0.5, max: 1.5 },
                        ..Default::default()
                    },
                ))
                .id()
        })
        .collect()
}
