//! DynamicText size caching system.
//!
//! Measures [`DynamicText`] components when they are added or changed so the
//! renderer can place them by pivot without calling `MeasureTextEx` per frame.

use bevy_ecs::change_detection::DetectChangesMut;
use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::math::Vector2;
use raylib::prelude::Font;

use log::warn;

use crate::components::dynamictext::DynamicText;
use crate::resources::fontstore::FontStore;

/// Spacing between glyphs used for every text in the game.
pub const TEXT_SPACING: f32 = 1.0;

/// Size of `text` drawn with `font` at `font_size`. `None` if the text holds
/// a NUL byte.
pub(crate) fn measure_text(font: &Font, text: &str, font_size: f32) -> Option<Vector2> {
    let c_text = std::ffi::CString::new(text.as_bytes()).ok()?;
    let measured = unsafe { ffi::MeasureTextEx(**font, c_text.as_ptr(), font_size, TEXT_SPACING) };
    Some(Vector2::new(measured.x, measured.y))
}

/// Recalculate the cached size of every added or changed [`DynamicText`].
///
/// The size is written with `bypass_change_detection` so the text is not
/// measured again next frame.
pub fn dynamictext_size_system(
    mut query: Query<&mut DynamicText, Changed<DynamicText>>,
    fonts: NonSend<FontStore>,
) {
    for mut text in query.iter_mut() {
        let Some(font) = fonts.get(&text.font) else {
            warn!("Font '{}' not found in FontStore, text size will be zero", text.font);
            continue;
        };
        let Some(size) = measure_text(font, &text.text, text.font_size) else {
            warn!("Text '{}' contains a NUL byte, skipping measure", text.text.escape_debug());
            continue;
        };
        text.bypass_change_detection().set_size(size);
    }
}
