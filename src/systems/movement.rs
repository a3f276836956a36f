use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate velocities into positions, then apply friction.
pub fn movement_system(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    for (mut position, mut rigidbody) in query.iter_mut() {
        let delta = rigidbody.velocity * time.delta;
        position.pos = position.pos + delta;
        if rigidbody.friction > 0.0 {
            let damping = (1.0 - rigidbody.friction * time.delta).max(0.0);
            rigidbody.velocity = rigidbody.velocity * damping;
        }
    }
}
