//! Per-frame input resources.
//!
//! [`InputState`] keeps the few keys the game listens to. [`PointerState`]
//! turns the polled primary pointer (left mouse button or first touch) into
//! touch phases. [`DragState`] remembers whether the player is being dragged.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::input::TouchPhase;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    /// Store this frame's reading.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Toggles the debug overlay.
    pub mode_debug: BoolState,
    /// Leaves the game.
    pub action_back: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
        }
    }
}

/// Primary pointer tracking between frames.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub down: bool,
    pub last_pos: Vector2,
}

impl PointerState {
    /// Classify this frame's pointer reading against the previous frame and
    /// remember it. Returns the touch phase to report, if any.
    pub fn classify(&mut self, down: bool, focused: bool, pos: Vector2) -> Option<TouchPhase> {
        let phase = match (self.down, down && focused) {
            (false, true) => Some(TouchPhase::Down),
            (true, true) if pos != self.last_pos => Some(TouchPhase::Moved),
            (true, true) => None,
            (true, false) if !focused => Some(TouchPhase::Cancelled),
            (true, false) => Some(TouchPhase::Up),
            (false, false) => None,
        };
        self.down = down && focused;
        self.last_pos = pos;
        phase
    }
}

/// Player drag in progress.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DragState {
    pub dragging: bool,
    /// Last pointer position seen while dragging. Kept across drags.
    pub last_position: Option<Vector2>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[test]
    fn boolstate_edges() {
        let mut b = BoolState::bound_to(KeyboardKey::KEY_F11);
        b.update(true);
        assert!(b.just_pressed && b.active);
        b.update(true);
        assert!(!b.just_pressed && b.active);
        b.update(false);
        assert!(b.just_released && !b.active);
    }

    #[test]
    fn pointer_down_move_up() {
        let mut p = PointerState::default();
        assert_eq!(p.classify(false, true, at(0.0, 0.0)), None);
        assert_eq!(p.classify(true, true, at(10.0, 10.0)), Some(TouchPhase::Down));
        assert_eq!(p.classify(true, true, at(10.0, 10.0)), None);
        assert_eq!(p.classify(true, true, at(20.0, 10.0)), Some(TouchPhase::Moved));
        assert_eq!(p.classify(false, true, at(20.0, 10.0)), Some(TouchPhase::Up));
        assert_eq!(p.classify(false, true, at(20.0, 10.0)), None);
    }

    #[test]
    fn focus_loss_cancels() {
        let mut p = PointerState::default();
        p.classify(true, true, at(10.0, 10.0));
        assert_eq!(p.classify(true, false, at(10.0, 10.0)), Some(TouchPhase::Cancelled));
        // no new Down until focus comes back
        assert_eq!(p.classify(true, false, at(10.0, 10.0)), None);
        assert_eq!(p.classify(true, true, at(10.0, 10.0)), Some(TouchPhase::Down));
    }

    #[test]
    fn default_bindings() {
        let input = InputState::default();
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert_eq!(input.action_back.key_binding, KeyboardKey::KEY_ESCAPE);
    }
}
