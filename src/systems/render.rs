//! Rendering.
//!
//! The world is drawn at the fixed game resolution into the
//! [`RenderTarget`], then scaled into the window with letterboxing.
//! Sprites and texts are merged and sorted by [`ZIndex`] (painter's
//! algorithm, sprites before texts on ties). [`Scale`], [`Rotation`] and
//! [`Tint`] are optional on both.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::{Layer, ZIndex};
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::gamestate::GameState;
use crate::resources::progress::LevelProgress;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::systems::dynamictext_size::{TEXT_SPACING, measure_text};

enum Drawable {
    Sprite {
        sprite: Sprite,
        pos: Vector2,
        scale: Vector2,
        rotation: f32,
        tint: Color,
    },
    Text {
        text: DynamicText,
        pos: Vector2,
        rotation: f32,
        color: Color,
    },
}

/// Sprite frame in the texture; a negative size flips it.
fn source_rect(sprite: &Sprite) -> Rectangle {
    Rectangle {
        x: sprite.offset.x,
        y: sprite.offset.y,
        width: if sprite.flip_h { -sprite.width } else { sprite.width },
        height: if sprite.flip_v { -sprite.height } else { sprite.height },
    }
}

fn collect_drawables(world: &mut World) -> Vec<(ZIndex, Drawable)> {
    let mut out = Vec::new();

    let mut sprites = world.query::<(
        &Sprite,
        &MapPosition,
        &ZIndex,
        Option<&Scale>,
        Option<&Rotation>,
        Option<&Tint>,
    )>();
    for (sprite, pos, z, scale, rotation, tint) in sprites.iter(world) {
        out.push((
            *z,
            Drawable::Sprite {
                sprite: sprite.clone(),
                pos: pos.pos,
                scale: scale.map_or(Vector2::one(), |s| s.scale),
                rotation: rotation.map_or(0.0, |r| r.degrees),
                tint: tint.map_or(Color::WHITE, |t| t.color),
            },
        ));
    }

    let mut texts = world.query::<(
        &DynamicText,
        &MapPosition,
        Option<&ZIndex>,
        Option<&Rotation>,
        Option<&Tint>,
    )>();
    for (text, pos, z, rotation, tint) in texts.iter(world) {
        out.push((
            z.copied().unwrap_or(ZIndex::from(Layer::Ui)),
            Drawable::Text {
                text: text.clone(),
                pos: pos.pos,
                rotation: rotation.map_or(0.0, |r| r.degrees),
                color: tint.map_or(text.color, |t| t.multiply(text.color)),
            },
        ));
    }

    // stable: sprites stay ahead of texts within a layer
    out.sort_by_key(|(z, _)| *z);
    out
}

fn draw_world<D: RaylibDraw>(world: &mut World, d: &mut D) {
    let drawables = collect_drawables(world);
    let textures = world.resource::<TextureStore>();
    let fonts = world.non_send_resource::<FontStore>();

    for (_, drawable) in drawables.iter() {
        match drawable {
            Drawable::Sprite {
                sprite,
                pos,
                scale,
                rotation,
                tint,
            } => {
                let Some(tex) = textures.get(&sprite.tex_key) else {
                    continue;
                };
                let dest = Rectangle {
                    x: pos.x,
                    y: pos.y,
                    width: sprite.width * scale.x,
                    height: sprite.height * scale.y,
                };
                let origin = Vector2 {
                    x: sprite.origin.x * scale.x,
                    y: sprite.origin.y * scale.y,
                };
                d.draw_texture_pro(tex, source_rect(sprite), dest, origin, *rotation, *tint);
            }
            Drawable::Text {
                text,
                pos,
                rotation,
                color,
            } => {
                let Some(font) = fonts.get(&text.font) else {
                    continue;
                };
                let box_size = text.size();
                let lines: Vec<&str> = text.text.split('\n').collect();
                let line_height = box_size.y / lines.len().max(1) as f32;
                // each line is aligned inside the box by the horizontal pivot
                for (i, line) in lines.iter().enumerate() {
                    let line_width = measure_text(font, line, text.font_size).map_or(0.0, |s| s.x);
                    let origin = Vector2 {
                        x: line_width * text.pivot.x,
                        y: box_size.y * text.pivot.y - i as f32 * line_height,
                    };
                    d.draw_text_pro(
                        font,
                        line,
                        *pos,
                        origin,
                        *rotation,
                        text.font_size,
                        TEXT_SPACING,
                        *color,
                    );
                }
            }
        }
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }
        let mut positions = world.query::<&MapPosition>();
        for position in positions.iter(world) {
            let (x, y) = (position.pos.x as i32, position.pos.y as i32);
            d.draw_line(x - 5, y, x + 5, y, Color::GREEN);
            d.draw_line(x, y - 5, x, y + 5, Color::GREEN);
        }
    }
}

fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let fps = d.get_fps();
    d.draw_text(
        &format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
        10,
        10,
        10,
        Color::WHITE,
    );
    let entity_count = world.query::<Entity>().iter(world).count();
    d.draw_text(&format!("Entities: {}", entity_count), 10, 30, 10, Color::WHITE);
    if let Some(state) = world.get_resource::<GameState>() {
        d.draw_text(&format!("State: {:?}", state.get()), 10, 50, 10, Color::WHITE);
    }
    if let Some(p) = world.get_resource::<LevelProgress>() {
        let text = format!(
            "Level {} | score {} | drops {}/{} | next #{} | speed {:.3}s | in progress: {}",
            p.level,
            p.score,
            p.drops_collected,
            p.drops_expected,
            p.number_of_drops,
            p.drop_speed,
            p.in_progress
        );
        d.draw_text(&text, 10, 70, 10, Color::WHITE);
    }
}

/// Draw one frame. Runs as an exclusive system at the end of the schedule.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(th) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };
    let Some(mut target) = world.remove_non_send_resource::<RenderTarget>() else {
        world.insert_non_send_resource(th);
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut t = rl.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(Color::BLACK);
        draw_world(world, &mut t);
    }

    let window = *world.resource::<WindowSize>();
    {
        let mut d = rl.begin_drawing(&th);
        d.clear_background(Color::BLACK);
        let dest = window.calculate_letterbox(target.game_width, target.game_height);
        d.draw_texture_pro(
            target.texture.texture(),
            target.source_rect(),
            dest,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(target);
    world.insert_non_send_resource(th);
    world.insert_non_send_resource(rl);
}
