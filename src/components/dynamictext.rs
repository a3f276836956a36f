use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Text drawn at the entity's [`MapPosition`](super::mapposition::MapPosition).
///
/// `pivot` is normalized over the measured text box: (0, 0) puts the top-left
/// corner on the position, (0.5, 1.0) the bottom-center, (1.0, 1.0) the
/// bottom-right. `size` is cached by `dynamictext_size_system`.
#[derive(Component, Clone, Debug)]
pub struct DynamicText {
    pub text: String,
    pub font: String,
    pub font_size: f32,
    pub color: Color,
    pub pivot: Vector2,
    size: Vector2,
}

impl DynamicText {
    pub fn new(text: impl Into<String>, font: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            font_size,
            color,
            pivot: Vector2::zero(),
            size: Vector2::zero(),
        }
    }

    pub fn with_pivot(mut self, x: f32, y: f32) -> Self {
        self.pivot = Vector2 { x, y };
        self
    }

    /// Replace the text. Leaves change detection alone when nothing changed.
    pub fn set_text(&mut self, text: impl AsRef<str>) -> bool {
        if self.text == text.as_ref() {
            return false;
        }
        self.text = text.as_ref().to_string();
        true
    }

    pub fn size(&self) -> Vector2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vector2) {
        self.size = size;
    }

    /// Offset from the position to the top-left corner of the text box.
    pub fn origin(&self) -> Vector2 {
        Vector2 {
            x: self.size.x * self.pivot.x,
            y: self.size.y * self.pivot.y,
        }
    }
}
