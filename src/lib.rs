//! Jumper - a first-person wall-running platformer prototype in Bevy.
//!
//! Run through the course, chain wall-runs for score, and nail the
//! landing-charge timing minigame.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, fundamental systems
//! - **Config**: Tuning values and the RON tuning file loader
//! - **Player**: Input, wall sensing, locomotion, landing charge, camera
//! - **Score**: Style score that rewards wall-running
//! - **Session**: Run timer, start/finish bookkeeping, respawns
//! - **World**: Test course, trigger zones, jump collectibles
//! - **Ui**: HUD bars and text, start/finish overlays
//! - **Audio**: One-shot pickup sounds

pub mod audio;
pub mod config;
pub mod core;
pub mod player;
pub mod score;
pub mod session;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct JumperPlugin;

impl Plugin for JumperPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Tuning resources and file loading
            .add_plugins(config::ConfigPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Score accrual
            .add_plugins(score::ScorePlugin)

            // Run lifecycle
            .add_plugins(session::SessionPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Audio cues
            .add_plugins(audio::GameAudioPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
