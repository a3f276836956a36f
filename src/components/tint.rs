//! Color tint component for rendering sprites and text.
//!
//! - For sprites the tint replaces `Color::WHITE` in draw calls.
//! - For text it multiplies the [`DynamicText`](super::dynamictext::DynamicText) color.
//!
//! Fades only touch the alpha channel, see [`Tint::set_alpha`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// White tint with the given opacity (0.0..=1.0).
    pub fn with_alpha(alpha: f32) -> Self {
        let mut tint = Self::default();
        tint.set_alpha(alpha);
        tint
    }

    pub fn alpha(&self) -> f32 {
        self.color.a as f32 / 255.0
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.color.a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    /// Multiply this tint with another color (component-wise).
    pub fn multiply(&self, other: Color) -> Color {
        Color::new(
            ((self.color.r as u16 * other.r as u16) / 255) as u8,
            ((self.color.g as u16 * other.g as u16) / 255) as u8,
            ((self.color.b as u16 * other.b as u16) / 255) as u8,
            ((self.color.a as u16 * other.a as u16) / 255) as u8,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}
