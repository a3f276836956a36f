//! ECS components.
//!
//! Engine-level pieces (position, sprite, collider, tweens, timers, text)
//! plus the game entities' own data ([`player`], [`collectible`]).

pub mod animation;
pub mod boxcollider;
pub mod collectible;
pub mod collision;
pub mod dynamictext;
pub mod group;
pub mod mapposition;
pub mod markers;
pub mod particleemitter;
pub mod player;
pub mod progressbinding;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod scroller;
pub mod sprite;
pub mod stuckto;
pub mod timer;
pub mod tint;
pub mod ttl;
pub mod tween;
pub mod zindex;
