//! Endlessly scrolling tile.
//!
//! A strip of `n` tiles side by side appears to scroll forever when every tile
//! moves one tile width to the left over `cycle_seconds` and then jumps back
//! by one width. [`ScrollingTile`] stores where a tile started and how far
//! into its cycle it is; `scroller_system` applies [`ScrollingTile::offset`].

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone)]
pub struct ScrollingTile {
    pub start_x: f32,
    pub width: f32,
    pub cycle_seconds: f32,
    pub elapsed: f32,
}

impl ScrollingTile {
    pub fn new(start_x: f32, width: f32, cycle_seconds: f32) -> Self {
        Self {
            start_x,
            width,
            cycle_seconds,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if self.cycle_seconds <= 0.0 {
            return;
        }
        self.elapsed = (self.elapsed + dt).rem_euclid(self.cycle_seconds);
    }

    /// Leftward displacement in `[0, width)`.
    pub fn offset(&self) -> f32 {
        if self.cycle_seconds <= 0.0 {
            return 0.0;
        }
        (self.elapsed / self.cycle_seconds * self.width).min(self.width)
    }

    pub fn x(&self) -> f32 {
        self.start_x - self.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn tile_moves_left_by_its_width_over_a_cycle() {
        let mut t = ScrollingTile::new(300.0, 300.0, 30.0);
        t.advance(15.0);
        assert!(approx_eq(t.offset(), 150.0));
        assert!(approx_eq(t.x(), 150.0));
    }

    #[test]
    fn tile_jumps_back_after_a_full_cycle() {
        let mut t = ScrollingTile::new(0.0, 300.0, 30.0);
        t.advance(29.0);
        assert!(t.offset() > 280.0);
        t.advance(2.0);
        assert!(approx_eq(t.offset(), 20.0));
    }

    #[test]
    fn offset_stays_within_one_width() {
        let mut t = ScrollingTile::new(0.0, 128.0, 3.0);
        for _ in 0..1000 {
            t.advance(0.017);
            let o = t.offset();
            assert!((0.0..128.0).contains(&o) || approx_eq(o, 128.0));
        }
    }
}
