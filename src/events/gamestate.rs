//! Game state transition event and observer.
//!
//! Systems request a change of [`GameStates`] through [`NextGameState`];
//! `check_pending_state` then triggers a [`GameStateChangedEvent`] and the
//! observer here applies it to [`GameState`] and runs the enter system
//! registered for the new state in [`SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Apply the pending transition in [`NextGameState`], if any.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// If [`NextGameState`] holds [`Pending`], the new value is copied into
/// [`GameState`], the request is cleared and the enter system for the new
/// state is queued. Requests for the state already current are dropped.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            next_game_state.reset();
            if *game_state.get() == new_state {
                debug!("Already in {:?}, ignoring transition", new_state);
                return;
            }
            info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
            game_state.set(new_state.clone());
            match systems_store {
                Some(store) => on_state_enter(&new_state, &mut commands, &store),
                None => warn!("SystemsStore missing, no enter hook for {:?}", new_state),
            }
        }
        Unchanged => debug!("No state change pending."),
    }
}

/// Hook key in [`SystemsStore`] run when entering `state`.
pub fn enter_hook(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Setup => Some("setup"),
        GameStates::Idle => Some("enter_idle"),
        GameStates::Spawning => Some("enter_spawning"),
        GameStates::Cleared => Some("enter_cleared"),
        GameStates::GameOver => Some("enter_game_over"),
        GameStates::Quitting => Some("quit_game"),
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(hook) = enter_hook(state) else {
        debug!("Entered {:?}, no hook", state);
        return;
    };
    match systems_store.get(hook) {
        Some(id) => commands.run_system(*id),
        None => warn!("Enter system '{}' not found in SystemsStore", hook),
    }
}
