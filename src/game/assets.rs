//! Startup asset loading.
//!
//! Everything the scene draws or plays is listed here. Textures, fonts and
//! atlases are loaded synchronously before the first frame; any failure is
//! an [`AssetError`] and stops the game. Sounds go to the audio thread as
//! [`AudioCmd`]s and only log on failure.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::*;

use crate::events::audio::AudioCmd;
use crate::resources::animationstore::AnimationStore;
use crate::resources::atlas::{AssetError, FrameRect, TextureAtlas};
use crate::resources::fontstore::FontStore;
use crate::resources::texturestore::TextureStore;

pub const TEX_BACKGROUND: &str = "background_1";
pub const TEX_FOREGROUND: &str = "foreground_1";
pub const TEX_BANNER: &str = "banner";
pub const TEX_FLOW: &str = "flow_1";
pub const TEX_BUBBLE: &str = "bubble";
pub const TEX_GLOOP: &str = "gloop";
pub const ATLAS_BLOB: &str = "blob";

pub const FONT_TITLE: &str = "nosifer";
pub const FONT_LABEL: &str = "avenir";

pub const ANIM_WALK: &str = "blob_walk";
pub const ANIM_DIE: &str = "blob_die";
/// Seconds per frame of the blob animations.
pub const BLOB_FRAME_TIME: f32 = 0.25;

pub const MUSIC: &str = "music";
pub const BUBBLES: &str = "bubbles";
pub const FX_COLLECT: &str = "collect";
pub const FX_MISS: &str = "miss";
pub const FX_MUMBLES: [&str; 3] = ["blob_mumble-1", "blob_mumble-2", "blob_mumble-3"];

const TEXTURES: [&str; 6] = [TEX_BACKGROUND, TEX_FOREGROUND, TEX_BANNER, TEX_FLOW, TEX_BUBBLE, TEX_GLOOP];
const FONTS: [(&str, &str); 2] = [
    (FONT_TITLE, "./assets/fonts/Nosifer-Regular.ttf"),
    (FONT_LABEL, "./assets/fonts/AvenirNext-DemiBold.ttf"),
];
/// Glyph size fonts are rasterized at; labels scale from it.
const FONT_BASE_SIZE: i32 = 64;

/// Sizes of the art the scene is laid out from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneArt {
    pub background: Vector2,
    pub foreground: Vector2,
    pub banner: Vector2,
    pub flow: Vector2,
    pub bubble: Vector2,
    pub gloop: Vector2,
    /// First walk frame, the blob's resting look.
    pub player_frame: FrameRect,
}

/// Stores filled by [`load_assets`].
pub struct LoadedAssets {
    pub textures: TextureStore,
    pub fonts: FontStore,
    pub animations: AnimationStore,
    pub art: SceneArt,
}

fn load_texture(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    textures: &mut TextureStore,
    key: &str,
    path: &Path,
) -> Result<Vector2, AssetError> {
    let path_str = path.to_string_lossy();
    let texture = rl
        .load_texture(th, &path_str)
        .map_err(|e| AssetError::Texture {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let size = Vector2::new(texture.width as f32, texture.height as f32);
    textures.insert(key, texture);
    Ok(size)
}

fn size_of(textures: &TextureStore, key: &str) -> Result<Vector2, AssetError> {
    textures
        .size(key)
        .map(|(w, h)| Vector2::new(w, h))
        .ok_or_else(|| AssetError::Texture {
            path: Path::new(key).to_path_buf(),
            reason: "not loaded".into(),
        })
}

/// Load every texture, atlas and font, and cut the blob animations.
pub fn load_assets(rl: &mut RaylibHandle, th: &RaylibThread) -> Result<LoadedAssets, AssetError> {
    let mut textures = TextureStore::new();
    for key in TEXTURES {
        let path = format!("./assets/textures/{}.png", key);
        load_texture(rl, th, &mut textures, key, Path::new(&path))?;
    }

    let blob = TextureAtlas::load(ATLAS_BLOB, format!("./assets/atlases/{}.json", ATLAS_BLOB))?;
    let sheet = format!("./assets/atlases/{}.png", ATLAS_BLOB);
    load_texture(rl, th, &mut textures, ATLAS_BLOB, Path::new(&sheet))?;
    info!("Atlas '{}' loaded with {} frames", ATLAS_BLOB, blob.len());

    let mut animations = AnimationStore::new();
    animations.insert_from_atlas(ANIM_WALK, &blob, "blob-walk_", 0, 2, BLOB_FRAME_TIME)?;
    animations.insert_from_atlas(ANIM_DIE, &blob, "blob-die_", 0, 0, BLOB_FRAME_TIME)?;
    let player_frame = blob.frame("blob-walk_0")?;

    let mut fonts = FontStore::new();
    for (key, path) in FONTS {
        let font = rl
            .load_font_ex(th, path, FONT_BASE_SIZE, None)
            .map_err(|e| AssetError::Font {
                path: Path::new(path).to_path_buf(),
                reason: e.to_string(),
            })?;
        fonts.add(key, font);
    }

    let art = SceneArt {
        background: size_of(&textures, TEX_BACKGROUND)?,
        foreground: size_of(&textures, TEX_FOREGROUND)?,
        banner: size_of(&textures, TEX_BANNER)?,
        flow: size_of(&textures, TEX_FLOW)?,
        bubble: size_of(&textures, TEX_BUBBLE)?,
        gloop: size_of(&textures, TEX_GLOOP)?,
        player_frame,
    };

    Ok(LoadedAssets {
        textures,
        fonts,
        animations,
        art,
    })
}

/// Commands that load the music and sound effects on the audio thread.
pub fn audio_load_cmds() -> Vec<AudioCmd> {
    let mut cmds = vec![
        AudioCmd::LoadMusic {
            id: MUSIC.into(),
            path: "./assets/audio/music.mp3".into(),
        },
        AudioCmd::LoadMusic {
            id: BUBBLES.into(),
            path: "./assets/audio/bubbles.mp3".into(),
        },
        AudioCmd::LoadFx {
            id: FX_COLLECT.into(),
            path: "./assets/audio/collect.wav".into(),
        },
        AudioCmd::LoadFx {
            id: FX_MISS.into(),
            path: "./assets/audio/miss.wav".into(),
        },
    ];
    cmds.extend(FX_MUMBLES.iter().map(|id| AudioCmd::LoadFx {
        id: (*id).into(),
        path: format!("./assets/audio/{}.wav", id),
    }));
    cmds
}
