//! Sprite component.
//!
//! A [`Sprite`] selects a rectangle (`offset`, `width`, `height`) out of a
//! texture in [`TextureStore`](crate::resources::texturestore::TextureStore).
//! For atlas textures the rectangle is one frame of the sheet. `origin` is the
//! pivot in pixels, relative to the frame's top-left, that lands on the
//! entity's [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::resources::atlas::FrameRect;

#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
    pub flip_v: bool,
}

/// Normalized pivot positions used by the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    BottomCenter,
}

impl Anchor {
    fn origin(self, width: f32, height: f32) -> Vector2 {
        match self {
            Anchor::TopLeft => Vector2::zero(),
            Anchor::TopCenter => Vector2 {
                x: width * 0.5,
                y: 0.0,
            },
            Anchor::BottomCenter => Vector2 {
                x: width * 0.5,
                y: height,
            },
        }
    }
}

impl Sprite {
    /// Sprite showing a whole standalone texture.
    pub fn whole(tex_key: impl Into<String>, width: f32, height: f32, anchor: Anchor) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
            origin: anchor.origin(width, height),
            flip_h: false,
            flip_v: false,
        }
    }

    /// Sprite showing one frame of an atlas sheet.
    pub fn from_frame(tex_key: impl Into<String>, frame: &FrameRect, anchor: Anchor) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: frame.w,
            height: frame.h,
            offset: Vector2 {
                x: frame.x,
                y: frame.y,
            },
            origin: anchor.origin(frame.w, frame.h),
            flip_h: false,
            flip_v: false,
        }
    }

    /// Current frame as a [`SpriteFrame`] snapshot.
    pub fn frame(&self) -> SpriteFrame {
        SpriteFrame {
            offset: self.offset,
            width: self.width,
            height: self.height,
        }
    }

    /// Show `frame`. When `resize` is set the sprite takes the frame's size
    /// and the origin is scaled so the pivot keeps its relative place.
    pub fn apply_frame(&mut self, frame: &SpriteFrame, resize: bool) {
        self.offset = frame.offset;
        if resize && self.width > 0.0 && self.height > 0.0 {
            self.origin.x *= frame.width / self.width;
            self.origin.y *= frame.height / self.height;
            self.width = frame.width;
            self.height = frame.height;
        }
    }
}

/// Source rectangle of a sprite, used to swap and restore animation frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteFrame {
    pub offset: Vector2,
    pub width: f32,
    pub height: f32,
}

impl From<&FrameRect> for SpriteFrame {
    fn from(rect: &FrameRect) -> Self {
        Self {
            offset: Vector2 {
                x: rect.x,
                y: rect.y,
            },
            width: rect.w,
            height: rect.h,
        }
    }
}
