//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – frame sequences for sprite animations, keyed by name
//! - `atlas` – texture atlas manifests and the asset error type
//! - `audio` – bridge and channels for the background audio thread
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI backed window, render and audio settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – keys, pointer tracking and drag state
//! - `layout` – scene geometry (ground line, spawn height, drop range)
//! - `progress` – level, score and drop bookkeeping
//! - `rng` – the game's random number generator
//! - `systemsstore` – registry of state enter systems by name
//! - `texturestore` / `fontstore` – loaded GPU assets
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod atlas;
pub mod audio;
pub mod debugmode;
pub mod fontstore;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod layout;
pub mod progress;
pub mod rendertarget;
pub mod rng;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod windowsize;
pub mod worldtime;
