//! Audio thread and the systems that bridge it with the ECS world.
//!
//! - [`audio_thread`] owns the Raylib audio device and every `Music`/`Sound`
//!   handle, and reacts to [`AudioCmd`] messages.
//! - [`forward_audio_cmds`] sends the frame's commands down the channel.
//! - [`poll_audio_messages`] drains the thread's replies into
//!   `Messages<AudioMessage>`.
//! - [`update_bevy_audio_cmds`] / [`update_bevy_audio_messages`] advance the
//!   mailboxes once per frame.
//!
//! Raylib audio calls stay on one thread; the game talks to it through
//! crossbeam channels only.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

const PUMP_INTERVAL: Duration = Duration::from_millis(10);

pub fn poll_audio_messages(bridge: Option<Res<AudioBridge>>, mut writer: MessageWriter<AudioMessage>) {
    if let Some(bridge) = bridge {
        writer.write_batch(bridge.rx_msg.try_iter());
    }
}

/// Log what the audio thread reports. Load failures are not fatal.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } | AudioMessage::FxLoadFailed { id, error } => {
                warn!("Audio '{}' failed to load: {}", id, error)
            }
            other => debug!("audio: {:?}", other),
        }
    }
}

pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward this frame's [`AudioCmd`]s to the audio thread.
pub fn forward_audio_cmds(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<AudioCmd>) {
    let Some(bridge) = bridge else {
        // no thread: drop the commands
        reader.clear();
        return;
    };
    for cmd in reader.read() {
        // the receiver is gone only during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// A volume ramp on one music track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl Fade {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds. Returns the volume to apply and whether the
    /// ramp has reached its target.
    pub fn advance(&mut self, dt: f32) -> (f32, bool) {
        self.elapsed += dt;
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return (self.to, true);
        }
        let t = self.elapsed / self.duration;
        (self.from + (self.to - self.from) * t, false)
    }
}

/// Entry point of the audio thread. Returns on [`AudioCmd::Shutdown`] or when
/// the command channel closes.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device, sound disabled: {}", e);
            // keep draining so senders never block on a full channel
            for cmd in rx_cmd.iter() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    break;
                }
            }
            return;
        }
    };
    info!("Audio thread starting");

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut volumes: FxHashMap<String, f32> = FxHashMap::default();
    let mut fades: FxHashMap<String, Fade> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut last_tick = Instant::now();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("music loaded id='{}' path='{}'", id, path);
                        musics.insert(id.clone(), music);
                        volumes.insert(id.clone(), 1.0);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: format!("{} ({})", e, path),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("music play id='{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    } else {
                        warn!("music play failed id='{}': not loaded", id);
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                        fades.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::VolumeMusic { id, vol } => {
                    if let Some(music) = musics.get(&id) {
                        let vol = vol.clamp(0.0, 1.0);
                        music.set_volume(vol);
                        volumes.insert(id.clone(), vol);
                        fades.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicVolumeChanged { id, vol });
                    }
                }
                AudioCmd::FadeMusic { id, to, duration } => {
                    if musics.contains_key(&id) {
                        let from = volumes.get(&id).copied().unwrap_or(1.0);
                        debug!("music fade id='{}' {} -> {} over {}s", id, from, to, duration);
                        fades.insert(id, Fade::new(from, to.clamp(0.0, 1.0), duration));
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: format!("{} ({})", e, path),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => match sounds.get(&id) {
                    Some(sound) => sound.play(),
                    None => warn!("fx play failed id='{}': not loaded", id),
                },
                AudioCmd::MasterVolume { vol } => {
                    debug!("master volume {}", vol);
                    audio.set_master_volume(vol.clamp(0.0, 1.0));
                }
                AudioCmd::Shutdown => {
                    info!("Audio shutdown requested");
                    break 'run;
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_tick).as_secs_f32();
        last_tick = now;

        let mut done: Vec<String> = Vec::new();
        for (id, fade) in fades.iter_mut() {
            let (vol, finished) = fade.advance(dt);
            if let Some(music) = musics.get(id) {
                music.set_volume(vol);
            }
            volumes.insert(id.clone(), vol);
            if finished {
                done.push(id.clone());
            }
        }
        for id in done {
            fades.remove(&id);
            let vol = volumes.get(&id).copied().unwrap_or(1.0);
            let _ = tx_evt.send(AudioMessage::MusicVolumeChanged { id, vol });
        }

        // update_stream() must be called regularly while a track plays
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else if music.get_time_played() >= music.get_time_length() - 0.01 {
                    ended.push(id.clone());
                }
            }
        }
        for id in ended {
            if looped.contains(&id) {
                if let Some(music) = musics.get(&id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                playing.remove(&id);
                let _ = tx_evt.send(AudioMessage::MusicFinished { id });
            }
        }

        std::thread::sleep(PUMP_INTERVAL);
    }

    // handles must drop before the device
    musics.clear();
    sounds.clear();
    info!("Audio thread exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_ramps_linearly_and_finishes() {
        let mut fade = Fade::new(0.0, 0.75, 2.0);
        let (v, done) = fade.advance(1.0);
        assert!((v - 0.375).abs() < 1e-6);
        assert!(!done);
        let (v, done) = fade.advance(1.5);
        assert_eq!(v, 0.75);
        assert!(done);
    }

    #[test]
    fn zero_duration_fade_jumps() {
        let mut fade = Fade::new(1.0, 0.2, 0.0);
        assert_eq!(fade.advance(0.0), (0.2, true));
    }

    #[test]
    fn commands_are_dropped_without_a_bridge() {
        let mut world = World::new();
        world.insert_resource(Messages::<AudioCmd>::default());
        world.write_message(AudioCmd::PlayFx { id: "collect".into() });
        let mut schedule = Schedule::default();
        schedule.add_systems(forward_audio_cmds);
        schedule.run(&mut world);
    }
}
