use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use bevy_ecs::prelude::*;

/// Trigger a [`GameStateChangedEvent`] when a transition has been requested.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

/// Run condition: drops are falling (a level is being played or wrapping up).
pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Spawning | GameStates::Cleared)
}
