//! Input polling.
//!
//! [`update_input_state`] reads the keyboard and the primary pointer from
//! Raylib once per frame. Keys update [`InputState`]; F11 triggers
//! [`SwitchDebugEvent`] and Escape asks to quit. Pointer changes become
//! [`TouchEvent`]s in game coordinates.
use bevy_ecs::prelude::*;
use raylib::prelude::{MouseButton, RaylibHandle, Vector2};

use crate::events::input::TouchEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::{InputState, PointerState};
use crate::resources::screensize::ScreenSize;
use crate::resources::windowsize::WindowSize;

pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut pointer: ResMut<PointerState>,
    mut next_state: ResMut<NextGameState>,
    screen: Res<ScreenSize>,
    window: Res<WindowSize>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    let debug_key = input.mode_debug.key_binding;
    input.mode_debug.update(rl.is_key_down(debug_key));
    let back_key = input.action_back.key_binding;
    input.action_back.update(rl.is_key_down(back_key));

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.action_back.just_pressed {
        next_state.set(GameStates::Quitting);
    }

    let touching = rl.get_touch_point_count() > 0;
    let down = touching || rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    let window_pos: Vector2 = if touching {
        rl.get_touch_position(0)
    } else {
        rl.get_mouse_position()
    };
    let pos = window.window_to_game_pos(window_pos, screen.w as u32, screen.h as u32);

    if let Some(phase) = pointer.classify(down, rl.is_window_focused(), pos) {
        commands.trigger(TouchEvent { phase, pos });
    }
}
