//! Bridge between the ECS world and the background audio thread.
//!
//! [`setup_audio`] spawns the thread and inserts the [`AudioBridge`] plus the
//! `Messages<AudioCmd>` / `Messages<AudioMessage>` mailboxes.
//! [`shutdown_audio`] stops and joins it.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::warn;

/// Channels to and from the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// ECS -> audio thread.
    pub tx_cmd: Sender<AudioCmd>,
    /// Audio thread -> ECS.
    pub rx_msg: Receiver<AudioMessage>,
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the audio thread and register the bridge resources.
///
/// If the thread cannot be spawned the mailboxes are still inserted so the
/// game runs silently.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    match std::thread::Builder::new()
        .name("audio".into())
        .spawn(move || audio_thread(rx_cmd, tx_msg))
    {
        Ok(handle) => {
            world.insert_resource(AudioBridge {
                tx_cmd,
                rx_msg,
                handle,
            });
        }
        Err(e) => warn!("Could not spawn the audio thread, running without sound: {}", e),
    }
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Ask the audio thread to stop and wait for it.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if bridge.handle.join().is_err() {
            warn!("Audio thread panicked during shutdown");
        }
    }
}
