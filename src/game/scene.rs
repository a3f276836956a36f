//! Static scenery, the score and level labels and the message label.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::markers::MessageLabel;
use crate::components::progressbinding::{ProgressBinding, ProgressField};
use crate::components::sprite::{Anchor, Sprite};
use crate::components::tint::Tint;
use crate::components::ttl::Ttl;
use crate::components::tween::TweenAlpha;
use crate::components::zindex::{Layer, ZIndex};
use crate::events::audio::AudioCmd;
use crate::game::assets::{
    BUBBLES, FONT_TITLE, MUSIC, SceneArt, TEX_BACKGROUND, TEX_BANNER, TEX_FOREGROUND,
    audio_load_cmds,
};
use crate::resources::layout::SceneLayout;

pub const GROUND_GROUP: &str = "ground";

pub const START_MESSAGE: &str = "Tap to start game";
pub const READY_MESSAGE: &str = "Get Ready!";
pub const GAME_OVER_MESSAGE: &str = "Game Over\nTap to try again";

const MESSAGE_COLOR: Color = Color {
    r: 251,
    g: 155,
    b: 24,
    a: 255,
};
const MESSAGE_FONT_SIZE: f32 = 45.0;
const MESSAGE_FADE: f32 = 0.25;
/// Gap between the player's head and the bottom of the message.
const MESSAGE_GAP: f32 = 100.0;

const HUD_FONT_SIZE: f32 = 35.0;
const HUD_INSET_X: f32 = 50.0;
const HUD_Y: f32 = 100.0;
const BANNER_TOP: f32 = 20.0;

/// Background, ground, banner and the two bound labels.
pub fn spawn_scenery(commands: &mut Commands, layout: &SceneLayout, art: &SceneArt) {
    commands.spawn((
        MapPosition::new(0.0, layout.height - art.background.y),
        Sprite::whole(TEX_BACKGROUND, art.background.x, art.background.y, Anchor::TopLeft),
        ZIndex::from(Layer::Background),
    ));

    commands.spawn((
        Group(GROUND_GROUP),
        MapPosition::new(0.0, layout.ground_y),
        Sprite::whole(TEX_FOREGROUND, art.foreground.x, art.foreground.y, Anchor::TopLeft),
        BoxCollider::new(layout.width.max(art.foreground.x), layout.ground_height()),
        ZIndex::from(Layer::Foreground),
    ));

    commands.spawn((
        MapPosition::new(layout.center_x(), BANNER_TOP),
        Sprite::whole(TEX_BANNER, art.banner.x, art.banner.y, Anchor::TopCenter),
        ZIndex::from(Layer::Foreground),
    ));

    commands.spawn((
        MapPosition::new(layout.width - HUD_INSET_X, HUD_Y),
        DynamicText::new("Score: 0", FONT_TITLE, HUD_FONT_SIZE, Color::YELLOW).with_pivot(1.0, 0.5),
        ProgressBinding::new(ProgressField::Score).with_format("Score: {}"),
        ZIndex::from(Layer::Ui),
    ));
    commands.spawn((
        MapPosition::new(HUD_INSET_X, HUD_Y),
        DynamicText::new("Level: 1", FONT_TITLE, HUD_FONT_SIZE, Color::YELLOW).with_pivot(0.0, 0.5),
        ProgressBinding::new(ProgressField::Level).with_format("Level: {}"),
        ZIndex::from(Layer::Ui),
    ));
}

/// Music and effects load, music starts silent, device muted until the
/// scene settles.
pub fn scene_audio_cmds() -> Vec<AudioCmd> {
    let mut cmds = audio_load_cmds();
    cmds.push(AudioCmd::VolumeMusic {
        id: MUSIC.into(),
        vol: 0.0,
    });
    cmds.push(AudioCmd::PlayMusic {
        id: MUSIC.into(),
        looped: true,
    });
    cmds.push(AudioCmd::MasterVolume { vol: 0.0 });
    cmds
}

/// Fade the audio in once the scene is up.
pub fn audio_on_cmds(music_volume: f32) -> [AudioCmd; 2] {
    [
        AudioCmd::MasterVolume { vol: 1.0 },
        AudioCmd::FadeMusic {
            id: MUSIC.into(),
            to: music_volume,
            duration: 2.0,
        },
    ]
}

pub fn bubbles_cmd() -> AudioCmd {
    AudioCmd::PlayMusic {
        id: BUBBLES.into(),
        looped: true,
    }
}

/// Bottom-center of the message label, above the player's head.
pub fn message_anchor(layout: &SceneLayout, player_height: f32) -> Vector2 {
    Vector2::new(layout.center_x(), layout.ground_y - player_height - MESSAGE_GAP)
}

/// Fade out and drop every current message label.
pub fn hide_message(commands: &mut Commands, labels: impl IntoIterator<Item = Entity>) {
    for label in labels {
        commands
            .entity(label)
            .remove::<MessageLabel>()
            .insert((TweenAlpha::fade_out(MESSAGE_FADE), Ttl::new(MESSAGE_FADE)));
    }
}

/// Replace any current message with `text`, fading in.
pub fn show_message(
    commands: &mut Commands,
    current: impl IntoIterator<Item = Entity>,
    text: &str,
    at: Vector2,
) -> Entity {
    hide_message(commands, current);
    commands
        .spawn((
            MessageLabel,
            MapPosition::new(at.x, at.y),
            DynamicText::new(text, FONT_TITLE, MESSAGE_FONT_SIZE, MESSAGE_COLOR).with_pivot(0.5, 1.0),
            Tint::with_alpha(0.0),
            TweenAlpha::fade_in(MESSAGE_FADE),
            ZIndex::from(Layer::Ui),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_replaces_old_one() {
        let mut world = World::new();
        let at = Vector2::new(10.0, 20.0);
        let first = {
            let mut commands = world.commands();
            show_message(&mut commands, Vec::new(), START_MESSAGE, at)
        };
        world.flush();
        let second = {
            let mut commands = world.commands();
            show_message(&mut commands, vec![first], READY_MESSAGE, at)
        };
        world.flush();

        assert!(world.get::<MessageLabel>(first).is_none());
        assert!(world.get::<Ttl>(first).is_some());
        assert!(world.get::<MessageLabel>(second).is_some());
        assert_eq!(world.get::<DynamicText>(second).unwrap().text, READY_MESSAGE);
        assert_eq!(world.get::<Tint>(second).unwrap().alpha(), 0.0);
    }

    #[test]
    fn music_starts_silent_and_muted() {
        let cmds = scene_audio_cmds();
        let play = cmds
            .iter()
            .position(|c| matches!(c, AudioCmd::PlayMusic { id, .. } if id == MUSIC))
            .unwrap();
        let silence = cmds
            .iter()
            .position(|c| matches!(c, AudioCmd::VolumeMusic { vol, .. } if *vol == 0.0))
            .unwrap();
        assert!(silence < play);
        assert!(matches!(cmds.last(), Some(AudioCmd::MasterVolume { vol }) if *vol == 0.0));
    }

    #[test]
    fn message_sits_above_the_player() {
        let layout = SceneLayout::new(1336.0, 1024.0, 200.0, 60.0, 80.0);
        assert_eq!(message_anchor(&layout, 110.0), Vector2::new(668.0, 614.0));
    }
}
