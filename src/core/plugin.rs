//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, Paused)
/// - Global events (RunStarted, RespawnRequested, etc.)
/// - Pause handling, including freezing the physics pipeline
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<RunStarted>()
            .add_event::<RunFinished>()
            .add_event::<RespawnRequested>()
            .add_event::<RunRestarted>()
            .add_event::<JumpPickup>()
            .add_event::<LandingJudged>()

            // Pause/unpause with Escape key
            .add_systems(
                Update,
                handle_pause_input
                    .run_if(in_state(GameState::InGame).or(in_state(GameState::Paused))),
            )
            .add_systems(OnEnter(GameState::Paused), freeze_physics)
            .add_systems(OnExit(GameState::Paused), unfreeze_physics);
    }
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            GameState::InGame => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InGame),
            _ => {}
        }
    }
}

/// Stop the physics pipeline while paused so bodies hold still.
fn freeze_physics(mut config_query: Query<&mut RapierConfiguration>) {
    let Ok(mut config) = config_query.get_single_mut() else {
        return;
    };
    config.physics_pipeline_active = false;
}

/// Resume the physics pipeline when unpausing.
fn unfreeze_physics(mut config_query: Query<&mut RapierConfiguration>) {
    let Ok(mut config) = config_query.get_single_mut() else {
        return;
    };
    config.physics_pipeline_active = true;
}
