//! Marker components for scene entities looked up by role.

use bevy_ecs::prelude::Component;

/// The message label ("Tap to start game", "Get Ready!", ...).
///
/// Removed when the label starts fading out, so a new message never finds
/// the old one.
#[derive(Component, Debug, Clone, Copy)]
pub struct MessageLabel;

/// Scene root that owns the level timers.
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneRoot;

/// Floating "gloop" text spawned on a catch.
#[derive(Component, Debug, Clone, Copy)]
pub struct ChompLabel;
