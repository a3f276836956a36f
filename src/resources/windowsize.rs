//! Window size resource.
//!
//! The OS window may be any size; the game renders at a fixed resolution and
//! is scaled into the window keeping its aspect ratio, with black bars on
//! the leftover sides.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

/// Current window size in pixels, refreshed every frame.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Where the game image lands in the window.
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w.max(1) as f32;
        let window_h = self.h.max(1) as f32;

        if window_w / window_h > game_w / game_h {
            // wider than the game: bars left and right
            let scaled_w = game_w * (window_h / game_h);
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            let scaled_h = game_h * (window_w / game_w);
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }

    /// Map a window position (mouse, touch) into game coordinates, clamped
    /// to the game area.
    pub fn window_to_game_pos(&self, window_pos: Vector2, game_width: u32, game_height: u32) -> Vector2 {
        let letterbox = self.calculate_letterbox(game_width, game_height);
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        Vector2 {
            x: ((window_pos.x - letterbox.x) * game_w / letterbox.width).clamp(0.0, game_w),
            y: ((window_pos.y - letterbox.y) * game_h / letterbox.height).clamp(0.0, game_h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_window_gets_side_bars() {
        let w = WindowSize { w: 2000, h: 1000 };
        let r = w.calculate_letterbox(1000, 1000);
        assert_eq!(r.x, 500.0);
        assert_eq!(r.width, 1000.0);
        assert_eq!(r.height, 1000.0);
    }

    #[test]
    fn window_pos_maps_through_letterbox() {
        let w = WindowSize { w: 2000, h: 1000 };
        let p = w.window_to_game_pos(Vector2 { x: 1000.0, y: 500.0 }, 500, 500);
        assert_eq!(p, Vector2 { x: 250.0, y: 250.0 });
        let p = w.window_to_game_pos(Vector2 { x: 10.0, y: 500.0 }, 500, 500);
        assert_eq!(p.x, 0.0);
    }
}
