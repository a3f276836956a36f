//! Shared random number generator.
//!
//! Seeded from `--seed` for reproducible runs, otherwise from entropy.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub Rng);

impl GameRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => GameRng(Rng::with_seed(seed)),
            None => GameRng(Rng::new()),
        }
    }

    /// Uniform f32 in `[min, max]`; returns `min` for an empty range.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        let span = max - min;
        if span < f32::EPSILON {
            return min;
        }
        min + self.0.f32() * span
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GameRng::new(Some(7));
        let mut b = GameRng::new(Some(7));
        for _ in 0..10 {
            assert_eq!(a.range_f32(0.0, 100.0), b.range_f32(0.0, 100.0));
        }
    }

    #[test]
    fn range_stays_inside() {
        let mut r = GameRng::new(Some(1));
        for _ in 0..1000 {
            let v = r.range_f32(50.0, 60.0);
            assert!((50.0..=60.0).contains(&v));
        }
        assert_eq!(r.range_f32(5.0, 5.0), 5.0);
    }
}
