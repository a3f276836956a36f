//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance keyed sprite animations
//! - [`audio`] – bridge with the audio thread (poll/update message queues)
//! - [`collision`] – overlap checks, event emission and rule routing
//! - [`dynamictext_size`] – measure texts for pivot alignment
//! - [`gameplay`] – drop motion, ground lock, scene timers and touch handling
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`particleemitter`] – clone particle templates from emitters
//! - [`progressbinding`] – refresh texts bound to level progress
//! - [`render`] – draw world and debug overlays using Raylib
//! - [`scroller`] – move endlessly scrolling tiles
//! - [`stuckto`] – keep followers on their targets
//! - [`time`] – update simulation time and delta, process timers
//! - [`ttl`] – despawn entities whose time ran out
//! - [`tween`] – animate position and alpha over time

pub mod animation;
pub mod audio;
pub mod collision;
pub mod dynamictext_size;
pub mod gameplay;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod particleemitter;
pub mod progressbinding;
pub mod render;
pub mod scroller;
pub mod stuckto;
pub mod time;
pub mod ttl;
pub mod tween;
