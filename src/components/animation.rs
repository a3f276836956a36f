//! Keyed sprite animation.
//!
//! An [`Animation`] plays the frames of an
//! [`AnimationResource`](crate::resources::animationstore::AnimationResource)
//! on the entity's [`Sprite`](super::sprite::Sprite). The `key` names the
//! running action ("walk", "die"); starting a key that is already running is
//! a no-op, see [`Animation::should_start`].

use bevy_ecs::prelude::Component;

use crate::components::sprite::SpriteFrame;

/// How many times the frame sequence plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationRepeat {
    Forever,
    Times(u32),
}

impl AnimationRepeat {
    /// Map the conventional repeat count: 0 = forever, n = n times.
    pub fn from_count(count: u32) -> Self {
        if count == 0 {
            AnimationRepeat::Forever
        } else {
            AnimationRepeat::Times(count)
        }
    }
}

#[derive(Debug, Clone, Component)]
pub struct Animation {
    /// Action key, one running animation per key.
    pub key: String,
    /// Key in the animation store.
    pub animation_key: String,
    pub repeat: AnimationRepeat,
    /// Resize the sprite to each frame.
    pub resize: bool,
    /// Put the frame shown before the animation back when it ends.
    pub restore: bool,
    pub frame_index: usize,
    pub elapsed_time: f32,
    pub loops_done: u32,
    /// Whether the first frame was applied yet.
    pub started: bool,
    /// Frame captured on start when `restore` is set.
    pub saved_frame: Option<SpriteFrame>,
}

/// What happened to an animation during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// Nothing visible changed.
    Hold,
    /// Show the frame at this index.
    Frame(usize),
    /// The last repetition ended.
    Finished,
}

impl Animation {
    pub fn new(key: impl Into<String>, animation_key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            animation_key: animation_key.into(),
            repeat: AnimationRepeat::Forever,
            resize: false,
            restore: false,
            frame_index: 0,
            elapsed_time: 0.0,
            loops_done: 0,
            started: false,
            saved_frame: None,
        }
    }

    pub fn with_repeat(mut self, repeat: AnimationRepeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_resize(mut self, resize: bool) -> Self {
        self.resize = resize;
        self
    }

    pub fn with_restore(mut self, restore: bool) -> Self {
        self.restore = restore;
        self
    }

    /// Whether an animation under `key` should start given the one currently
    /// running on the entity, if any.
    pub fn should_start(current: Option<&Animation>, key: &str) -> bool {
        current.map_or(true, |running| running.key != key)
    }

    /// Advance by `dt` given the sequence length and per-frame time.
    pub fn advance(&mut self, dt: f32, frame_count: usize, frame_time: f32) -> AnimationStep {
        if frame_count == 0 {
            return AnimationStep::Finished;
        }
        if !self.started {
            self.started = true;
            return AnimationStep::Frame(self.frame_index);
        }
        if frame_time <= 0.0 {
            return AnimationStep::Hold;
        }
        self.elapsed_time += dt;
        let mut changed = false;
        while self.elapsed_time >= frame_time {
            self.elapsed_time -= frame_time;
            self.frame_index += 1;
            changed = true;
            if self.frame_index >= frame_count {
                self.loops_done += 1;
                if let AnimationRepeat::Times(n) = self.repeat {
                    if self.loops_done >= n {
                        self.frame_index = frame_count - 1;
                        return AnimationStep::Finished;
                    }
                }
                self.frame_index = 0;
            }
        }
        if changed {
            AnimationStep::Frame(self.frame_index)
        } else {
            AnimationStep::Hold
        }
    }
}
