//! Player plugin - input, sensing, locomotion, and landing systems.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use bevy_rapier3d::plugin::PhysicsSet;

use crate::core::GameState;

use super::input::{self, PlayerInput};
use super::{landing, movement, sensor};

/// Set containing the whole fixed-tick locomotion chain.
///
/// Observers that must see this tick's decisions (score accrual) order
/// themselves after this set.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

/// Player plugin - handles player input, movement, and camera.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(OnEnter(GameState::InGame), grab_cursor)
            .add_systems(OnExit(GameState::InGame), release_cursor)
            .add_systems(
                Update,
                input::gather_input.run_if(in_state(GameState::InGame)),
            )
            .add_systems(
                FixedUpdate,
                (
                    movement::apply_look,
                    // The sensor runs before anything consumes its output
                    sensor::update_wall_sensor,
                    movement::update_locomotion,
                    movement::handle_jump,
                    movement::handle_dash,
                    landing::update_landing_charge,
                )
                    .chain()
                    .in_set(LocomotionSet)
                    .run_if(in_state(GameState::InGame))
                    .before(PhysicsSet::SyncBackend),
            )
            .add_systems(
                FixedUpdate,
                input::clear_input_edges
                    .after(LocomotionSet)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}

/// Grab and hide cursor when entering gameplay.
fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release cursor when leaving gameplay.
fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}
