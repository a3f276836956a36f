//! Particle emitter component.
//!
//! A [`ParticleEmitter`] clones template entities (sprite + optional
//! [`RigidBody`](super::rigidbody::RigidBody) settings) at a fixed rate from a
//! point or rectangle, giving each clone a random direction inside an arc,
//! a random speed and an optional TTL. Templates carry no
//! [`MapPosition`](super::mapposition::MapPosition), so they are never drawn
//! themselves.
//!
//! Angles: 0° points up, increasing clockwise (Y+ is down).

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Default)]
pub enum EmitterShape {
    #[default]
    Point,
    /// Random positions within a rectangle centered on the emitter.
    Rect { width: f32, height: f32 },
}

#[derive(Debug, Clone, Default)]
pub enum TtlSpec {
    #[default]
    None,
    Fixed(f32),
    Range { min: f32, max: f32 },
}

/// Number of emissions an emitter performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionBudget {
    Unlimited,
    Remaining(u32),
}

impl EmissionBudget {
    pub fn exhausted(&self) -> bool {
        matches!(self, EmissionBudget::Remaining(0))
    }

    pub fn consume(&mut self) {
        if let EmissionBudget::Remaining(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct ParticleEmitter {
    /// Template entities to clone. Must be non-empty to emit.
    pub templates: Vec<Entity>,
    pub shape: EmitterShape,
    /// Offset from the owner's position.
    pub offset: Vector2,
    pub particles_per_emission: u32,
    /// Emissions per second. If <= 0, no emissions occur.
    pub emissions_per_second: f32,
    pub budget: EmissionBudget,
    /// Direction arc in degrees, (min, max).
    pub arc_degrees: (f32, f32),
    /// Speed range, (min, max).
    pub speed_range: (f32, f32),
    pub ttl: TtlSpec,
    pub time_since_emit: f32,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self {
            templates: Vec::new(),
            shape: EmitterShape::Point,
            offset: Vector2 { x: 0.0, y: 0.0 },
            particles_per_emission: 1,
            emissions_per_second: 10.0,
            budget: EmissionBudget::Unlimited,
            arc_degrees: (0.0, 360.0),
            speed_range: (50.0, 100.0),
            ttl: TtlSpec::None,
            time_since_emit: 0.0,
        }
    }
}

impl ParticleEmitter {
    pub fn can_emit(&self) -> bool {
        !self.templates.is_empty() && !self.budget.exhausted() && self.emissions_per_second > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_emitter_has_nothing_to_clone() {
        let e = ParticleEmitter::default();
        assert!(e.templates.is_empty());
        assert!(!e.can_emit());
    }

    #[test]
    fn budget_runs_out() {
        let mut b = EmissionBudget::Remaining(2);
        b.consume();
        assert!(!b.exhausted());
        b.consume();
        assert!(b.exhausted());
        b.consume();
        assert_eq!(b, EmissionBudget::Remaining(0));
    }

    #[test]
    fn unlimited_budget_never_runs_out() {
        let mut b = EmissionBudget::Unlimited;
        for _ in 0..1000 {
            b.consume();
        }
        assert!(!b.exhausted());
    }
}
