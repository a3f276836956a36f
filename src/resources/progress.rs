//! Level bookkeeping.
//!
//! [`LevelProgress`] holds everything that drives a round: level, score, how
//! many drops the level has and how many were caught, the spawn interval and
//! the last drop's x used by the serpentine pattern. The rules are plain
//! functions so they can be tested without a world.

use bevy_ecs::prelude::Resource;

/// Shortest spawn interval in seconds.
pub const MIN_DROP_SPEED: f32 = 0.12;
/// Longest spawn interval in seconds.
pub const MAX_DROP_SPEED: f32 = 1.0;
/// Upper bound of the serpentine step.
pub const MODIFIER_CAP: f32 = 400.0;
/// Pause between a cleared level and the next one.
pub const LEVEL_UP_DELAY: f32 = 2.25;

/// Number of drops in `level`.
pub fn drops_for_level(level: u32) -> u32 {
    match level {
        0..=5 => level.max(1) * 10,
        6 => 75,
        7 => 100,
        _ => 150,
    }
}

/// Spawn interval for `level` with `drops` drops, clamped to
/// `[MIN_DROP_SPEED, MAX_DROP_SPEED]`.
pub fn drop_speed_for(level: u32, drops: u32) -> f32 {
    let level = level.max(1) as f32;
    let drops = drops.max(1) as f32;
    (1.0 / (level + level / drops)).clamp(MIN_DROP_SPEED, MAX_DROP_SPEED)
}

/// Range of the random serpentine step for `level`, `(low, high)`.
pub fn modifier_range(level: u32) -> (f32, f32) {
    let level = level.max(1) as f32;
    let low = 50.0 + level;
    let high = (60.0 * level).max(low);
    (low, high)
}

/// One step of the serpentine pattern.
///
/// `prev` is the previous drop x (0.0 = none yet), `random_x` a uniform pick
/// in `[min_x, max_x]` and `modifier` a pick from [`modifier_range`]. The drop
/// moves from `prev` towards the side `random_x` falls on, by `modifier`
/// (capped at [`MODIFIER_CAP`]), and is clamped to `[min_x, max_x]`.
pub fn serpentine_step(prev: f32, random_x: f32, modifier: f32, min_x: f32, max_x: f32) -> f32 {
    let modifier = modifier.min(MODIFIER_CAP);
    let prev = if prev == 0.0 { random_x } else { prev };
    let x = if prev < random_x {
        prev + modifier
    } else {
        prev - modifier
    };
    x.clamp(min_x, max_x.max(min_x))
}

/// Result of recording a catch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    /// Counted; more drops to go.
    Counted,
    /// Counted and it was the last one.
    LevelCleared,
    /// Every expected drop was already counted.
    Ignored,
}

#[derive(Resource, Debug, Clone)]
pub struct LevelProgress {
    pub level: u32,
    pub score: u32,
    /// Number shown on the next drop; counts down while spawning.
    pub number_of_drops: u32,
    pub drops_expected: u32,
    pub drops_collected: u32,
    /// Spawn interval in seconds.
    pub drop_speed: f32,
    /// Previous drop x, 0.0 when none yet. Carried across levels and rounds.
    pub prev_drop_location: f32,
    pub in_progress: bool,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self {
            level: 1,
            score: 0,
            number_of_drops: 0,
            drops_expected: 0,
            drops_collected: 0,
            drop_speed: MAX_DROP_SPEED,
            prev_drop_location: 0.0,
            in_progress: false,
        }
    }
}

impl LevelProgress {
    /// Set up the current level. A new round (not in progress) starts over
    /// at level 1 with no score.
    pub fn start_level(&mut self) {
        if !self.in_progress {
            self.score = 0;
            self.level = 1;
        }
        self.number_of_drops = drops_for_level(self.level);
        self.drops_collected = 0;
        self.drops_expected = self.number_of_drops;
        self.drop_speed = drop_speed_for(self.level, self.number_of_drops);
        self.in_progress = true;
    }

    /// Number for the drop being spawned, then count down.
    pub fn take_drop_number(&mut self) -> u32 {
        let number = self.number_of_drops;
        self.number_of_drops = self.number_of_drops.saturating_sub(1);
        number
    }

    pub fn record_catch(&mut self) -> CatchOutcome {
        if self.drops_collected >= self.drops_expected {
            return CatchOutcome::Ignored;
        }
        self.drops_collected += 1;
        self.score += self.level;
        if self.is_cleared() {
            CatchOutcome::LevelCleared
        } else {
            CatchOutcome::Counted
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.drops_expected > 0 && self.drops_collected == self.drops_expected
    }

    pub fn advance_level(&mut self) {
        self.level += 1;
    }

    pub fn end_game(&mut self) {
        self.in_progress = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_table() {
        for level in 1..=5 {
            assert_eq!(drops_for_level(level), level * 10);
        }
        assert_eq!(drops_for_level(3), 30);
        assert_eq!(drops_for_level(6), 75);
        assert_eq!(drops_for_level(7), 100);
        assert_eq!(drops_for_level(8), 150);
        assert_eq!(drops_for_level(9), 150);
        assert_eq!(drops_for_level(1000), 150);
    }

    #[test]
    fn drop_speed_is_always_clamped() {
        for level in 1..200 {
            let s = drop_speed_for(level, drops_for_level(level));
            assert!((MIN_DROP_SPEED..=MAX_DROP_SPEED).contains(&s), "level {level}: {s}");
        }
        assert!((drop_speed_for(1, 10) - 1.0 / 1.1).abs() < 1e-6);
        assert_eq!(drop_speed_for(50, 150), MIN_DROP_SPEED);
    }

    #[test]
    fn first_level_catches_add_ten_and_clear() {
        let mut p = LevelProgress::default();
        p.start_level();
        assert_eq!(p.drops_expected, 10);
        for _ in 0..9 {
            assert_eq!(p.record_catch(), CatchOutcome::Counted);
        }
        assert_eq!(p.record_catch(), CatchOutcome::LevelCleared);
        assert_eq!(p.score, 10);
        assert_eq!(p.record_catch(), CatchOutcome::Ignored);
        assert!(p.drops_collected <= p.drops_expected);
        p.advance_level();
        p.start_level();
        assert_eq!(p.level, 2);
        assert_eq!(p.score, 10);
        assert_eq!(p.drops_expected, 20);
        assert_eq!(p.drops_collected, 0);
    }

    #[test]
    fn new_round_resets_score_and_level() {
        let mut p = LevelProgress::default();
        p.start_level();
        p.advance_level();
        p.start_level();
        p.record_catch();
        p.end_game();
        p.prev_drop_location = 123.0;
        p.start_level();
        assert_eq!(p.level, 1);
        assert_eq!(p.score, 0);
        assert_eq!(p.drops_collected, 0);
        assert!(p.in_progress);
        assert_eq!(p.prev_drop_location, 123.0);
    }

    #[test]
    fn drop_numbers_count_down() {
        let mut p = LevelProgress::default();
        p.start_level();
        assert_eq!(p.take_drop_number(), 10);
        assert_eq!(p.take_drop_number(), 9);
        assert_eq!(p.number_of_drops, 8);
    }

    #[test]
    fn serpentine_moves_towards_random_side() {
        assert_eq!(serpentine_step(300.0, 500.0, 60.0, 100.0, 900.0), 360.0);
        assert_eq!(serpentine_step(300.0, 200.0, 60.0, 100.0, 900.0), 240.0);
        // first drop starts from the random pick, which is not below itself
        assert_eq!(serpentine_step(0.0, 400.0, 60.0, 100.0, 900.0), 340.0);
    }

    #[test]
    fn serpentine_clamps_and_caps() {
        assert_eq!(serpentine_step(150.0, 120.0, 200.0, 100.0, 900.0), 100.0);
        assert_eq!(serpentine_step(850.0, 880.0, 200.0, 100.0, 900.0), 900.0);
        assert_eq!(serpentine_step(100.0, 800.0, 1000.0, 0.0, 2000.0), 500.0);
    }

    #[test]
    fn modifier_range_grows_with_level() {
        assert_eq!(modifier_range(1), (51.0, 60.0));
        assert_eq!(modifier_range(3), (53.0, 180.0));
    }
}
