//! Fixed-resolution framebuffer.
//!
//! Everything is drawn into this texture at the game resolution; the render
//! system then scales it into the window (see
//! [`WindowSize::calculate_letterbox`](super::windowsize::WindowSize::calculate_letterbox)).
//! Non-send: GPU handles stay on the main thread.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum RenderFilter {
    /// Sharp pixels, no blur.
    Nearest,
    /// Smooth scaling; suits the painted art of this game.
    #[default]
    Bilinear,
}

pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
    pub filter: RenderFilter,
}

impl RenderTarget {
    pub fn new(rl: &mut RaylibHandle, th: &RaylibThread, width: u32, height: u32) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;
        let mut target = Self {
            texture,
            game_width: width,
            game_height: height,
            filter: RenderFilter::default(),
        };
        target.apply_filter();
        Ok(target)
    }

    fn apply_filter(&mut self) {
        let filter_value = match self.filter {
            RenderFilter::Nearest => TextureFilter::TEXTURE_FILTER_POINT as i32,
            RenderFilter::Bilinear => TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
        };
        unsafe {
            ffi::SetTextureFilter(self.texture.texture, filter_value);
        }
    }

    /// Source rectangle for blitting the texture. The height is negative
    /// because render textures are stored upside down.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}
