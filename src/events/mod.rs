//! Events and messages.
//!
//! Observed events (`commands.trigger`) carry immediate reactions: state
//! changes, collisions, touches, timer fires. Audio uses buffered messages
//! because it crosses into the audio thread.

pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod input;
pub mod switchdebug;
pub mod timer;
