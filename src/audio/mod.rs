//! Audio module - one-shot sound cues.

use bevy::prelude::*;
use bevy_kira_audio::prelude::{Audio, AudioControl};

use crate::core::{GameState, JumpPickup};

/// Audio plugin - plays pickup chimes.
///
/// Missing sound assets just log a load error and stay silent.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            play_pickup_sound.run_if(in_state(GameState::InGame)),
        );
    }
}

/// Play a chime whenever a pickup is collected.
fn play_pickup_sound(
    mut pickups: EventReader<JumpPickup>,
    asset_server: Res<AssetServer>,
    audio: Res<Audio>,
) {
    for _ in pickups.read() {
        audio.play(asset_server.load("sounds/pickup.ogg"));
    }
}
