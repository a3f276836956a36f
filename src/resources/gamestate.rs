//! High-level game state resources.
//!
//! [`GameState`] is the authoritative current state; [`NextGameState`] holds
//! a transition requested by a system. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// Loading and building the scene.
    Setup,
    /// Waiting for a tap to start.
    Idle,
    /// Drops are being spawned for the current level.
    Spawning,
    /// Every drop of the level was caught; the next level is coming.
    Cleared,
    /// A drop hit the ground.
    GameOver,
    Quitting,
}

impl GameStates {
    /// Whether a tap starts a new round from this state.
    pub fn accepts_start(&self) -> bool {
        matches!(self, GameStates::Idle | GameStates::GameOver)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Set the state without running hooks. Prefer [`NextGameState`].
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition. A later request in the same frame wins.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }

    pub fn is_pending(&self, state: &GameStates) -> bool {
        matches!(&self.next, NextGameStates::Pending(s) if s == state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_request_wins() {
        let mut next = NextGameState::new();
        next.set(GameStates::Cleared);
        next.set(GameStates::GameOver);
        assert!(next.is_pending(&GameStates::GameOver));
        next.reset();
        assert_eq!(next.get(), &NextGameStates::Unchanged);
    }

    #[test]
    fn only_idle_and_game_over_accept_start() {
        assert!(GameStates::Idle.accepts_start());
        assert!(GameStates::GameOver.accepts_start());
        assert!(!GameStates::Spawning.accepts_start());
        assert!(!GameStates::Cleared.accepts_start());
        assert!(!GameStates::Setup.accepts_start());
    }
}
