//! Messages exchanged with the audio thread.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    VolumeMusic { id: String, vol: f32 },
    /// Ramp a track's volume to `to` over `duration` seconds.
    FadeMusic { id: String, to: f32, duration: f32 },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    /// Device-wide volume applied on top of every track and effect.
    MasterVolume { vol: f32 },
    Shutdown,
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    MusicFinished { id: String },
    MusicVolumeChanged { id: String, vol: f32 },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
}
