//! Debug overlay toggle.
//!
//! While this resource is present the renderer draws colliders, pivots and
//! a diagnostics panel. Toggled with F11 or started on with `--debug`.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
