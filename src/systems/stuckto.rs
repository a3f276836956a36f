//! Keep attached entities on their targets.
//!
//! Each frame an entity with [`StuckTo`] is moved to its target's
//! [`MapPosition`] plus the offset. Targets that are gone are skipped; the
//! follower is expected to go away with them (usually as a child).

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::stuckto::StuckTo;

pub fn stuck_to_entity_system(
    mut followers: Query<(&StuckTo, &mut MapPosition)>,
    targets: Query<&MapPosition, Without<StuckTo>>,
) {
    for (stuck_to, mut follower_pos) in followers.iter_mut() {
        if let Ok(target_pos) = targets.get(stuck_to.target) {
            follower_pos.pos = target_pos.pos + stuck_to.offset;
        }
    }
}
