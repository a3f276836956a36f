//! Animation resource registry.
//!
//! Frame sequences are cut out of an atlas once at startup and stored by key;
//! [`Animation`](crate::components::animation::Animation) components refer to
//! them by that key.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::sprite::SpriteFrame;
use crate::resources::atlas::{AssetError, TextureAtlas};

#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable frame sequence of one animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: String,
    pub frames: Vec<SpriteFrame>,
    /// Seconds each frame stays on screen.
    pub frame_time: f32,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    /// Register `prefix{start}..=prefix{stop}` of `atlas` under `key`.
    pub fn insert_from_atlas(
        &mut self,
        key: impl Into<String>,
        atlas: &TextureAtlas,
        prefix: &str,
        start: u32,
        stop: u32,
        frame_time: f32,
    ) -> Result<(), AssetError> {
        let frames = atlas
            .frames(prefix, start, stop)?
            .iter()
            .map(SpriteFrame::from)
            .collect();
        self.insert(
            key,
            AnimationResource {
                tex_key: atlas.name.clone(),
                frames,
                frame_time,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn animation_from_atlas_keeps_frame_order() {
        let atlas = TextureAtlas::from_json(
            "blob",
            r#"{"frames":{"w_0":{"x":0,"y":0,"w":10,"h":10},"w_1":{"x":10,"y":0,"w":12,"h":10}}}"#,
            Path::new("blob.json"),
        )
        .unwrap();
        let mut store = AnimationStore::new();
        store
            .insert_from_atlas("blob_walk", &atlas, "w_", 0, 1, 0.25)
            .unwrap();
        let anim = store.get("blob_walk").unwrap();
        assert_eq!(anim.tex_key, "blob");
        assert_eq!(anim.frames.len(), 2);
        assert_eq!(anim.frames[1].width, 12.0);
        assert!(store.insert_from_atlas("x", &atlas, "w_", 0, 2, 0.25).is_err());
    }
}
