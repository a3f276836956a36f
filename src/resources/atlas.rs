//! Texture atlases.
//!
//! An atlas is a packed sheet (`assets/atlases/<name>.png`) plus a JSON
//! manifest (`<name>.json`) mapping frame names to rectangles:
//!
//! ```json
//! { "frames": { "blob-walk_0": { "x": 0, "y": 0, "w": 120, "h": 110 } } }
//! ```
//!
//! Frame sequences are pulled by name prefix and an inclusive index range,
//! e.g. `frames("blob-walk_", 0, 2)` yields `blob-walk_0..blob-walk_2`.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

/// Fatal problems with startup assets.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read '{path}': {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Invalid atlas manifest '{path}': {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error("Atlas '{atlas}' has no frame named '{frame}'")]
    MissingFrame { atlas: String, frame: String },

    #[error("Failed to load texture '{path}': {reason}")]
    Texture { path: PathBuf, reason: String },

    #[error("Failed to load font '{path}': {reason}")]
    Font { path: PathBuf, reason: String },
}

/// Source rectangle of one frame inside the sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    frames: FxHashMap<String, FrameRect>,
}

#[derive(Debug, Clone)]
pub struct TextureAtlas {
    pub name: String,
    frames: FxHashMap<String, FrameRect>,
}

impl TextureAtlas {
    /// Parse a manifest. `path` is only used for error messages.
    pub fn from_json(name: impl Into<String>, json: &str, path: &Path) -> Result<Self, AssetError> {
        let manifest: Manifest =
            serde_json::from_str(json).map_err(|e| AssetError::Manifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            name: name.into(),
            frames: manifest.frames,
        })
    }

    pub fn load(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| AssetError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(name, &json, path)
    }

    pub fn frame(&self, name: &str) -> Result<FrameRect, AssetError> {
        self.frames
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::MissingFrame {
                atlas: self.name.clone(),
                frame: name.to_string(),
            })
    }

    /// Frames `prefix{start}..=prefix{stop}` in order.
    pub fn frames(&self, prefix: &str, start: u32, stop: u32) -> Result<Vec<FrameRect>, AssetError> {
        (start..=stop)
            .map(|i| self.frame(&format!("{prefix}{i}")))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOB: &str = r#"{
        "frames": {
            "blob-walk_0": { "x": 0, "y": 0, "w": 120, "h": 110 },
            "blob-walk_1": { "x": 120, "y": 0, "w": 120, "h": 112 },
            "blob-walk_2": { "x": 240, "y": 0, "w": 120, "h": 108 },
            "blob-die_0": { "x": 360, "y": 0, "w": 130, "h": 90 }
        }
    }"#;

    fn blob() -> TextureAtlas {
        TextureAtlas::from_json("blob", BLOB, Path::new("blob.json")).unwrap()
    }

    #[test]
    fn frame_range_resolves_in_order() {
        let frames = blob().frames("blob-walk_", 0, 2).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].x, 0.0);
        assert_eq!(frames[1].x, 120.0);
        assert_eq!(frames[2].x, 240.0);
    }

    #[test]
    fn single_frame_range() {
        let frames = blob().frames("blob-die_", 0, 0).unwrap();
        assert_eq!(frames, vec![FrameRect { x: 360.0, y: 0.0, w: 130.0, h: 90.0 }]);
    }

    #[test]
    fn missing_frame_is_an_error() {
        let err = blob().frames("blob-walk_", 0, 3).unwrap_err();
        match err {
            AssetError::MissingFrame { atlas, frame } => {
                assert_eq!(atlas, "blob");
                assert_eq!(frame, "blob-walk_3");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let err = TextureAtlas::from_json("blob", "{ \"frames\": 3 }", Path::new("blob.json"));
        assert!(matches!(err, Err(AssetError::Manifest { .. })));
    }
}
