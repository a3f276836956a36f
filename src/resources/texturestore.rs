//! Loaded textures by key.
//!
//! Standalone images use their file stem ("background_1"); atlas sheets use
//! the atlas name ("blob").

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    /// Size of a loaded texture, in pixels.
    pub fn size(&self, key: impl AsRef<str>) -> Option<(f32, f32)> {
        self.get(key).map(|t| (t.width as f32, t.height as f32))
    }
}
