//! Input gathering - translates device state into a per-tick input snapshot.
//!
//! Buttons are sampled every render frame but consumed on the fixed tick, so
//! edge flags latch until the tick that handles them clears them. This keeps
//! presses from being dropped when no fixed tick runs in a frame, and from
//! double-firing when several do.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

/// Input snapshot consumed by the locomotion systems.
#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    /// Strafe (x) and forward (y) axes, each in [-1, 1]
    pub movement: Vec2,
    /// Mouse delta accumulated since the last fixed tick
    pub look: Vec2,
    /// Sprint key held
    pub sprint: bool,
    /// Jump key edge
    pub jump_pressed: bool,
    /// Dash key edge
    pub dash_pressed: bool,
    /// Charge key held
    pub charge_held: bool,
    /// Charge key edges
    pub charge_pressed: bool,
    pub charge_released: bool,
}

/// Sample keyboard and mouse into the input snapshot. Runs every frame.
pub(super) fn gather_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut input: ResMut<PlayerInput>,
) {
    let mut axes = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        axes.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        axes.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        axes.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        axes.x -= 1.0;
    }

    // Normalize to prevent faster diagonal movement
    input.movement = axes.normalize_or_zero();

    for event in mouse_motion.read() {
        input.look += event.delta;
    }

    input.sprint = keyboard.pressed(KeyCode::ShiftLeft);
    input.charge_held = keyboard.pressed(KeyCode::KeyQ);

    input.jump_pressed |= keyboard.just_pressed(KeyCode::Space);
    input.dash_pressed |= keyboard.just_pressed(KeyCode::ControlLeft);
    input.charge_pressed |= keyboard.just_pressed(KeyCode::KeyQ);
    input.charge_released |= keyboard.just_released(KeyCode::KeyQ);
}

/// Drop consumed edges at the end of a fixed tick.
pub(super) fn clear_input_edges(mut input: ResMut<PlayerInput>) {
    input.jump_pressed = false;
    input.dash_pressed = false;
    input.charge_pressed = false;
    input.charge_released = false;
}
