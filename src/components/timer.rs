//! Keyed timers.
//!
//! An entity can run several timers at once, each under its own key. Every
//! time a timer's duration elapses the `update_timers` system triggers a
//! [`TimerEvent`](crate::events::timer::TimerEvent) carrying the entity and
//! the key. Starting a key that is already running is ignored and cancelling
//! a key drops it before its next fire.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

/// How many times a timer fires before it is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRepeat {
    Once,
    Times(u32),
    Forever,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub key: String,
    pub duration: f32,
    pub elapsed: f32,
    pub repeat: TimerRepeat,
    pub fired: u32,
}

impl Timer {
    pub fn new(key: impl Into<String>, duration: f32, repeat: TimerRepeat) -> Self {
        Timer {
            key: key.into(),
            duration,
            elapsed: 0.0,
            repeat,
            fired: 0,
        }
    }

    pub fn once(key: impl Into<String>, duration: f32) -> Self {
        Self::new(key, duration, TimerRepeat::Once)
    }

    fn is_done(&self) -> bool {
        match self.repeat {
            TimerRepeat::Once => self.fired >= 1,
            TimerRepeat::Times(n) => self.fired >= n,
            TimerRepeat::Forever => false,
        }
    }

    /// Advance by `dt` and return how many times the timer fired.
    ///
    /// A zero duration fires once per tick at most.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.is_done() {
            return 0;
        }
        self.elapsed += dt.max(0.0);
        let mut fires = 0;
        if self.duration <= 0.0 {
            self.elapsed = 0.0;
            self.fired += 1;
            return 1;
        }
        while self.elapsed >= self.duration && !self.is_done() {
            self.elapsed -= self.duration;
            self.fired += 1;
            fires += 1;
        }
        fires
    }
}

/// Set of keyed timers on one entity.
#[derive(Component, Debug, Clone, Default)]
pub struct Timers {
    pub timers: SmallVec<[Timer; 4]>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set holding a single timer.
    pub fn with(timer: Timer) -> Self {
        let mut timers = Self::new();
        timers.start(timer);
        timers
    }

    /// Start `timer` unless one with the same key is running.
    ///
    /// Returns whether it was started.
    pub fn start(&mut self, timer: Timer) -> bool {
        if self.is_running(&timer.key) {
            return false;
        }
        self.timers.push(timer);
        true
    }

    /// Drop the timer under `key`. Returns whether one was running.
    pub fn cancel(&mut self, key: &str) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.key != key);
        before != self.timers.len()
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.timers.iter().any(|t| t.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance every timer and collect the keys that fired, in order.
    /// Finished timers are dropped.
    pub fn tick(&mut self, dt: f32) -> SmallVec<[String; 2]> {
        let mut fired = SmallVec::new();
        for timer in self.timers.iter_mut() {
            for _ in 0..timer.tick(dt) {
                fired.push(timer.key.clone());
            }
        }
        self.timers.retain(|t| !t.is_done());
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_fires_a_single_time() {
        let mut timers = Timers::with(Timer::once("pop", 1.0));
        assert!(timers.tick(0.5).is_empty());
        assert_eq!(timers.tick(0.6).as_slice(), ["pop".to_string()]);
        assert!(timers.is_empty());
        assert!(timers.tick(5.0).is_empty());
    }

    #[test]
    fn times_fires_exactly_n_times() {
        let mut timers = Timers::with(Timer::new("gloop", 0.5, TimerRepeat::Times(3)));
        let mut count = 0;
        for _ in 0..20 {
            count += timers.tick(0.25).len();
        }
        assert_eq!(count, 3);
        assert!(!timers.is_running("gloop"));
    }

    #[test]
    fn large_delta_catches_up_but_respects_count() {
        let mut timers = Timers::with(Timer::new("gloop", 0.1, TimerRepeat::Times(4)));
        assert_eq!(timers.tick(1.0).len(), 4);
    }

    #[test]
    fn starting_a_running_key_is_ignored() {
        let mut timers = Timers::new();
        assert!(timers.start(Timer::once("gloop", 1.0)));
        assert!(!timers.start(Timer::once("gloop", 0.1)));
        assert_eq!(timers.timers.len(), 1);
        assert_eq!(timers.timers[0].duration, 1.0);
    }

    #[test]
    fn cancel_stops_future_fires() {
        let mut timers = Timers::with(Timer::new("gloop", 0.5, TimerRepeat::Forever));
        assert_eq!(timers.tick(0.5).len(), 1);
        assert!(timers.cancel("gloop"));
        assert!(timers.tick(2.0).is_empty());
        assert!(!timers.cancel("gloop"));
    }

    #[test]
    fn independent_keys_fire_independently() {
        let mut timers = Timers::new();
        timers.start(Timer::once("audio_on", 1.0));
        timers.start(Timer::once("bubbles", 1.5));
        assert_eq!(timers.tick(1.0).as_slice(), ["audio_on".to_string()]);
        assert_eq!(timers.tick(0.5).as_slice(), ["bubbles".to_string()]);
    }
}
