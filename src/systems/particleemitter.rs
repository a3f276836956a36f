//! Particle emitter system.
//!
//! Emitters accumulate time and, every `1 / emissions_per_second` seconds,
//! clone random template entities at the emitter position with a random
//! direction, speed and TTL. A large frame delta emits several times.
//!
//! Angles: 0° points up (negative Y), increasing clockwise.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::particleemitter::{EmitterShape, ParticleEmitter, TtlSpec};
use crate::components::rigidbody::RigidBody;
use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Runs before `movement_system` so particles move on their spawn frame.
pub fn particle_emitter_system(
    mut emitter_query: Query<(&MapPosition, &mut ParticleEmitter)>,
    rigidbody_query: Query<&RigidBody>,
    time: Res<WorldTime>,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }

    for (owner_pos, mut emitter) in emitter_query.iter_mut() {
        if !emitter.can_emit() {
            continue;
        }
        let period = 1.0 / emitter.emissions_per_second;
        emitter.time_since_emit += dt;

        while emitter.time_since_emit >= period && !emitter.budget.exhausted() {
            emit_particles(&mut commands, owner_pos, &emitter, &rigidbody_query, &mut rng);
            emitter.time_since_emit -= period;
            emitter.budget.consume();
        }
    }
}

/// Random f32 in `[min, max]`; a degenerate range returns `min`.
#[inline]
fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

/// Unit direction for an angle in degrees, 0° up and clockwise.
pub(crate) fn direction(angle_deg: f32) -> Vector2 {
    let theta = angle_deg.to_radians();
    Vector2 {
        x: theta.sin(),
        y: -theta.cos(),
    }
}

fn emit_particles(
    commands: &mut Commands,
    owner_pos: &MapPosition,
    emitter: &ParticleEmitter,
    rigidbody_query: &Query<&RigidBody>,
    rng: &mut Rng,
) {
    let base_pos = owner_pos.pos + emitter.offset;

    for _ in 0..emitter.particles_per_emission {
        let template = emitter.templates[rng.usize(0..emitter.templates.len())];
        if commands.get_entity(template).is_err() {
            continue;
        }

        let spawn_pos = match emitter.shape {
            EmitterShape::Point => base_pos,
            EmitterShape::Rect { width, height } => Vector2 {
                x: base_pos.x + random_f32_range(rng, -width / 2.0, width / 2.0),
                y: base_pos.y + random_f32_range(rng, -height / 2.0, height / 2.0),
            },
        };

        let (arc_min, arc_max) = emitter.arc_degrees;
        let (speed_min, speed_max) = emitter.speed_range;
        let velocity = direction(random_f32_range(rng, arc_min, arc_max))
            * random_f32_range(rng, speed_min, speed_max);

        let ttl_value = match emitter.ttl {
            TtlSpec::None => None,
            TtlSpec::Fixed(v) => Some(v),
            TtlSpec::Range { min, max } => Some(random_f32_range(rng, min, max)),
        };

        // keep the template's friction, override the velocity
        let mut rb = rigidbody_query.get(template).ok().cloned().unwrap_or_default();
        rb.velocity = velocity;

        commands
            .entity(template)
            .clone_and_spawn()
            .insert((MapPosition::new(spawn_pos.x, spawn_pos.y), rb))
            .insert_if(Ttl::new(ttl_value.unwrap_or(0.0)), || ttl_value.is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::particleemitter::EmissionBudget;

    #[test]
    fn zero_degrees_points_up() {
        let d = direction(0.0);
        assert!(d.x.abs() < 1e-6);
        assert!((d.y + 1.0).abs() < 1e-6);
        let right = direction(90.0);
        assert!((right.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn emits_clones_at_rate_until_budget_runs_out() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 1.0,
            ..Default::default()
        });
        let template = world.spawn(RigidBody::new().with_friction(0.5)).id();
        world.spawn((
            MapPosition::new(100.0, 200.0),
            ParticleEmitter {
                templates: vec![template],
                emissions_per_second: 2.0,
                budget: EmissionBudget::Remaining(3),
                ttl: TtlSpec::Fixed(1.5),
                ..Default::default()
            },
        ));
        let mut schedule = Schedule::default();
        schedule.add_systems(particle_emitter_system);
        schedule.run(&mut world);
        schedule.run(&mut world);

        let mut q = world.query::<(&MapPosition, &RigidBody, &Ttl)>();
        let clones: Vec<_> = q.iter(&world).collect();
        assert_eq!(clones.len(), 3);
        for (pos, rb, ttl) in clones {
            assert_eq!(pos.pos, Vector2 { x: 100.0, y: 200.0 });
            assert_eq!(rb.friction, 0.5);
            assert_eq!(ttl.remaining, 1.5);
        }
    }
}
