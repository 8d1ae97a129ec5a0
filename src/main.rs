//! Jumper - Entry Point
//!
//! A first-person wall-running platformer prototype.
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around
//! - Space: Jump / air jump / wall jump
//! - Shift: Sprint
//! - Ctrl: Dash
//! - Q (hold): Charge a landing, release to slam
//! - R: Restart the run
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_kira_audio::prelude::AudioPlugin as KiraAudioPlugin;
use bevy_rapier3d::prelude::*;

/// Fixed simulation rate for the locomotion tick.
const PHYSICS_HZ: f64 = 64.0;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Jumper".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics, stepped on the fixed schedule so locomotion is deterministic
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .insert_resource(TimestepMode::Fixed {
            dt: 1.0 / PHYSICS_HZ as f32,
            substeps: 1,
        })
        .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))

        // Kira audio (one-shot sound cues)
        .add_plugins(KiraAudioPlugin)

        // Our game plugin
        .add_plugins(jumper::JumperPlugin)

        .run();
}
