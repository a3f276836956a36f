//! Scrolling tile system.
//!
//! Moves every [`ScrollingTile`] left along its cycle. The tile's
//! [`MapPosition`] x is recomputed from the cycle each frame so the strip
//! never drifts.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::scroller::ScrollingTile;
use crate::resources::worldtime::WorldTime;

pub fn scroller_system(time: Res<WorldTime>, mut query: Query<(&mut ScrollingTile, &mut MapPosition)>) {
    for (mut tile, mut position) in query.iter_mut() {
        tile.advance(time.delta);
        position.pos.x = tile.x();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_returns_to_start_after_a_cycle() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 7.5,
            ..Default::default()
        });
        let e = world
            .spawn((ScrollingTile::new(300.0, 600.0, 30.0), MapPosition::new(300.0, 900.0)))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(scroller_system);

        schedule.run(&mut world);
        assert_eq!(world.get::<MapPosition>(e).map(|p| p.pos.x), Some(150.0));
        for _ in 0..3 {
            schedule.run(&mut world);
        }
        assert_eq!(world.get::<MapPosition>(e).map(|p| p.pos.x), Some(300.0));
        assert_eq!(world.get::<MapPosition>(e).map(|p| p.pos.y), Some(900.0));
    }
}
